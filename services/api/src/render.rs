use crate::infra::parse_date;
use chrono::NaiveDate;
use clap::Args;
use clarity_revenue::config::AppConfig;
use clarity_revenue::dashboard::{DashboardReport, FilterSelection};
use clarity_revenue::datasets::load_dir;
use clarity_revenue::error::AppError;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct DashboardReportArgs {
    /// Directory holding the three CSV datasets (defaults to APP_DATA_DIR)
    #[arg(long)]
    pub(crate) data_dir: Option<PathBuf>,
    /// Restrict the claims table to these payers (repeatable)
    #[arg(long = "payer")]
    pub(crate) payers: Vec<String>,
    /// Start of the submission date window (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) start_date: Option<NaiveDate>,
    /// End of the submission date window (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) end_date: Option<NaiveDate>,
    /// Include the filtered claim rows in the output
    #[arg(long)]
    pub(crate) list_claims: bool,
}

pub(crate) fn run_dashboard_report(args: DashboardReportArgs) -> Result<(), AppError> {
    let DashboardReportArgs {
        data_dir,
        payers,
        start_date,
        end_date,
        list_claims,
    } = args;

    let data_dir = match data_dir {
        Some(dir) => dir,
        None => AppConfig::load()?.data.dir,
    };

    let data = load_dir(&data_dir)?;
    let report = DashboardReport::build(
        &data,
        FilterSelection {
            payers,
            start_date,
            end_date,
        },
    );

    render_dashboard_report(&report, &data_dir, list_claims);
    Ok(())
}

fn render_dashboard_report(report: &DashboardReport, data_dir: &std::path::Path, list_claims: bool) {
    let summary = report.summary();
    let insights = report.insights();

    println!("Clarity revenue dashboard");
    println!("Datasets: {}", data_dir.display());
    println!(
        "Claims: {} total, {} after filters",
        summary.total_claims, summary.filtered_claims
    );
    if report.date_range_ignored {
        println!("Note: date filter ignored (both endpoints are required)");
    }

    println!("\nClaim status distribution");
    if summary.status_distribution.is_empty() {
        println!("- no claims match the current filters");
    }
    for entry in &summary.status_distribution {
        println!("- {}: {}", entry.status_label, entry.count);
    }

    println!("\nProcessing time by payer");
    if summary.processing_times.is_empty() {
        println!("- no claims match the current filters");
    }
    for entry in &summary.processing_times {
        println!(
            "- {}: median {:.1} days (min {:.1}, max {:.1}, {} claim{})",
            entry.payer,
            entry.median,
            entry.minimum,
            entry.maximum,
            entry.claims,
            if entry.claims == 1 { "" } else { "s" }
        );
    }

    println!("\nWeekly cash flow forecast");
    for week in &summary.weekly_cash_flow {
        println!(
            "- {}: net ${:.2}, inflows ${:.2}",
            week.week_start, week.net_cash_flow, week.adjusted_inflows
        );
    }

    println!("\nHigh-risk payers: {}", summary.alert.level_label);
    for payer in &summary.alert.payers {
        println!("- {} (risk score {:.1})", payer.payer, payer.risk_score);
    }

    println!("\nInsights");
    for note in &insights.observations {
        println!("- {}", note);
    }

    if list_claims {
        println!("\nClaims");
        for claim in &report.claims {
            println!(
                "- {} | {} | {} | {:.1} days",
                claim.submission_date,
                claim.payer,
                claim.status.label(),
                claim.processing_days
            );
        }
    }
}
