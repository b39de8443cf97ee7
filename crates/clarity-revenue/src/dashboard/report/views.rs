use super::super::aggregate::WeeklyCashFlow;
use super::super::alerts::AlertLevel;
use super::super::domain::ClaimStatus;
use super::super::filter::DateRange;
use serde::Serialize;

/// Echo of the selections actually applied to the claims table, including
/// whether a half-filled date picker was dropped.
#[derive(Debug, Clone, Serialize)]
pub struct AppliedFilterView {
    pub payers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
    pub date_range_applied: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusCountEntry {
    pub status: ClaimStatus,
    pub status_label: &'static str,
    pub count: usize,
}

/// Five-number summary of processing time for one payer, the data behind
/// the box plot panel.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessingSummaryEntry {
    pub payer: String,
    pub claims: usize,
    pub minimum: f64,
    pub lower_quartile: f64,
    pub median: f64,
    pub upper_quartile: f64,
    pub maximum: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct HighRiskPayerView {
    pub payer: String,
    pub risk_score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskAlertView {
    pub level: AlertLevel,
    pub level_label: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub payers: Vec<HighRiskPayerView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub filter: AppliedFilterView,
    pub total_claims: usize,
    pub filtered_claims: usize,
    pub distinct_payers: usize,
    pub status_distribution: Vec<StatusCountEntry>,
    pub processing_times: Vec<ProcessingSummaryEntry>,
    pub weekly_cash_flow: Vec<WeeklyCashFlow>,
    pub alert: RiskAlertView,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardInsights {
    pub projected_net_total: f64,
    pub negative_weeks: usize,
    pub forecast_weeks: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_processing_days: Option<f64>,
    pub high_risk_share: f32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub observations: Vec<String>,
}
