use super::summary::DashboardReport;
use super::views::DashboardInsights;

pub(crate) fn generate_insights(report: &DashboardReport) -> DashboardInsights {
    let forecast_weeks = report.weekly_cash_flow.len();
    let projected_net_total: f64 = report
        .weekly_cash_flow
        .iter()
        .map(|week| week.net_cash_flow)
        .sum();
    let negative_weeks = report
        .weekly_cash_flow
        .iter()
        .filter(|week| week.net_cash_flow < 0.0)
        .count();

    let average_processing_days = if report.claims.is_empty() {
        None
    } else {
        let total: f64 = report.claims.iter().map(|claim| claim.processing_days).sum();
        Some(total / report.claims.len() as f64)
    };

    let high_risk_share = if report.payer_risk.is_empty() {
        0.0
    } else {
        report.high_risk.len() as f32 / report.payer_risk.len() as f32
    };

    let mut observations = Vec::new();

    if forecast_weeks > 0 {
        observations.push(format!(
            "Projected net cash flow totals ${projected_net_total:.2} across {forecast_weeks} forecast week(s)"
        ));
    }

    if negative_weeks > 0 {
        observations.push(format!(
            "{negative_weeks} forecast week(s) project negative net cash flow"
        ));
    }

    if let Some(average) = average_processing_days {
        observations.push(format!(
            "Average claim processing time is {average:.1} days across {} claim(s)",
            report.claims.len()
        ));
    }

    if !report.high_risk.is_empty() {
        observations.push(format!(
            "{} payer(s) carry a High risk category and may delay payments",
            report.high_risk.len()
        ));
    }

    if report.date_range_ignored {
        observations
            .push("Date filter was ignored: both endpoints are required".to_string());
    }

    if observations.is_empty() {
        observations.push("No activity in the loaded datasets".to_string());
    }

    DashboardInsights {
        projected_net_total,
        negative_weeks,
        forecast_weeks,
        average_processing_days,
        high_risk_share,
        observations,
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::aggregate::WeeklyCashFlow;
    use super::super::super::filter::ClaimFilter;
    use super::*;
    use crate::dashboard::domain::{ClaimRecord, ClaimStatus, PayerRiskRecord, RiskCategory};
    use chrono::NaiveDate;

    fn report_with_weeks(weeks: Vec<WeeklyCashFlow>) -> DashboardReport {
        DashboardReport {
            filter: ClaimFilter::default(),
            date_range_ignored: false,
            total_claims: 0,
            claims: Vec::new(),
            payer_risk: Vec::new(),
            weekly_cash_flow: weeks,
            high_risk: Vec::new(),
        }
    }

    #[test]
    fn flags_negative_weeks_and_totals() {
        let week = |d, net| WeeklyCashFlow {
            week_start: NaiveDate::from_ymd_opt(2025, 1, d).expect("valid week"),
            net_cash_flow: net,
            adjusted_inflows: 0.0,
        };
        let report = report_with_weeks(vec![week(6, 1500.0), week(13, -400.0)]);

        let insights = report.insights();
        assert_eq!(insights.forecast_weeks, 2);
        assert_eq!(insights.negative_weeks, 1);
        assert_eq!(insights.projected_net_total, 1100.0);
        assert!(insights
            .observations
            .iter()
            .any(|note| note.contains("negative net cash flow")));
    }

    #[test]
    fn reports_high_risk_share() {
        let mut report = report_with_weeks(Vec::new());
        report.payer_risk = vec![
            PayerRiskRecord {
                payer: "Aetna".to_string(),
                risk_score: 20.0,
                risk_category: RiskCategory::Low,
            },
            PayerRiskRecord {
                payer: "Cigna".to_string(),
                risk_score: 88.0,
                risk_category: RiskCategory::High,
            },
        ];
        report.high_risk = vec![report.payer_risk[1].clone()];

        let insights = report.insights();
        assert_eq!(insights.high_risk_share, 0.5);
        assert!(insights
            .observations
            .iter()
            .any(|note| note.contains("High risk category")));
    }

    #[test]
    fn averages_processing_time_over_filtered_claims() {
        let mut report = report_with_weeks(Vec::new());
        report.claims = vec![
            ClaimRecord {
                payer: "Aetna".to_string(),
                submission_date: NaiveDate::from_ymd_opt(2025, 1, 5).expect("valid date"),
                status: ClaimStatus::Paid,
                processing_days: 10.0,
            },
            ClaimRecord {
                payer: "Cigna".to_string(),
                submission_date: NaiveDate::from_ymd_opt(2025, 1, 8).expect("valid date"),
                status: ClaimStatus::Pending,
                processing_days: 20.0,
            },
        ];
        report.total_claims = 2;

        let insights = report.insights();
        assert_eq!(insights.average_processing_days, Some(15.0));
    }

    #[test]
    fn empty_datasets_still_produce_an_observation() {
        let report = report_with_weeks(Vec::new());
        let insights = report.insights();

        assert_eq!(insights.average_processing_days, None);
        assert_eq!(insights.observations.len(), 1);
    }
}
