use super::super::aggregate::{aggregate_weekly, WeeklyCashFlow};
use super::super::alerts::{high_risk_payers, AlertLevel};
use super::super::domain::{ClaimRecord, ClaimStatus, PayerRiskRecord};
use super::super::filter::{filter_claims, ClaimFilter, FilterSelection};
use super::views::{
    AppliedFilterView, DashboardInsights, DashboardSummary, HighRiskPayerView,
    ProcessingSummaryEntry, RiskAlertView, StatusCountEntry,
};
use crate::datasets::DashboardData;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// One full render pass over the three tables: filter the claims, aggregate
/// the cash flow, evaluate the risk alerts. The source tables are read-only;
/// everything here is a derived copy discarded with the pass.
#[derive(Debug)]
pub struct DashboardReport {
    pub filter: ClaimFilter,
    pub date_range_ignored: bool,
    pub total_claims: usize,
    pub claims: Vec<ClaimRecord>,
    pub payer_risk: Vec<PayerRiskRecord>,
    pub weekly_cash_flow: Vec<WeeklyCashFlow>,
    pub high_risk: Vec<PayerRiskRecord>,
}

impl DashboardReport {
    pub fn build(data: &DashboardData, selection: FilterSelection) -> Self {
        let resolved = selection.resolve();
        let claims = filter_claims(&data.claims, &resolved.filter);
        let weekly_cash_flow = aggregate_weekly(&data.cash_flow);
        let high_risk = high_risk_payers(&data.payer_risk);

        Self {
            filter: resolved.filter,
            date_range_ignored: resolved.date_range_ignored,
            total_claims: data.claims.len(),
            claims,
            payer_risk: data.payer_risk.clone(),
            weekly_cash_flow,
            high_risk,
        }
    }

    pub fn alert_level(&self) -> AlertLevel {
        AlertLevel::for_matches(self.high_risk.len())
    }

    pub fn summary(&self) -> DashboardSummary {
        let mut status_counts: HashMap<ClaimStatus, usize> = HashMap::new();
        for claim in &self.claims {
            *status_counts.entry(claim.status).or_default() += 1;
        }

        let status_distribution = ClaimStatus::ordered()
            .into_iter()
            .filter_map(|status| {
                status_counts.get(&status).map(|count| StatusCountEntry {
                    status,
                    status_label: status.label(),
                    count: *count,
                })
            })
            .collect();

        let mut processing_by_payer: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
        for claim in &self.claims {
            processing_by_payer
                .entry(claim.payer.as_str())
                .or_default()
                .push(claim.processing_days);
        }

        let processing_times = processing_by_payer
            .into_iter()
            .map(|(payer, days)| processing_summary(payer, days))
            .collect();

        let distinct_payers = self
            .claims
            .iter()
            .map(|claim| claim.payer.as_str())
            .collect::<BTreeSet<_>>()
            .len();

        let level = self.alert_level();
        let alert = RiskAlertView {
            level,
            level_label: level.label(),
            payers: self
                .high_risk
                .iter()
                .map(|row| HighRiskPayerView {
                    payer: row.payer.clone(),
                    risk_score: row.risk_score,
                })
                .collect(),
        };

        DashboardSummary {
            filter: AppliedFilterView {
                payers: self.filter.payers.clone(),
                date_range: self.filter.date_range,
                date_range_applied: self.filter.date_range.is_some(),
            },
            total_claims: self.total_claims,
            filtered_claims: self.claims.len(),
            distinct_payers,
            status_distribution,
            processing_times,
            weekly_cash_flow: self.weekly_cash_flow.clone(),
            alert,
        }
    }

    pub fn insights(&self) -> DashboardInsights {
        super::generate_insights(self)
    }
}

fn processing_summary(payer: &str, mut days: Vec<f64>) -> ProcessingSummaryEntry {
    days.sort_by(f64::total_cmp);

    let quartile = |fraction: f64| -> f64 {
        let position = fraction * (days.len() - 1) as f64;
        let below = position.floor() as usize;
        let above = position.ceil() as usize;
        if below == above {
            days[below]
        } else {
            days[below] + (days[above] - days[below]) * (position - below as f64)
        }
    };

    ProcessingSummaryEntry {
        payer: payer.to_string(),
        claims: days.len(),
        minimum: days[0],
        lower_quartile: quartile(0.25),
        median: quartile(0.5),
        upper_quartile: quartile(0.75),
        maximum: days[days.len() - 1],
    }
}
