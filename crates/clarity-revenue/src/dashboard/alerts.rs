use super::domain::{PayerRiskRecord, RiskCategory};
use serde::Serialize;

/// Binary state of the high-risk panel: the dashboard shows a success note
/// when no payer is flagged and a warning table otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    AllClear,
    Warning,
}

impl AlertLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::AllClear => "All Clear",
            Self::Warning => "Warning",
        }
    }

    pub fn for_matches(count: usize) -> Self {
        if count == 0 {
            Self::AllClear
        } else {
            Self::Warning
        }
    }
}

/// Selects payers whose risk category is High. An empty result is a normal
/// outcome, not an error.
pub fn high_risk_payers(rows: &[PayerRiskRecord]) -> Vec<PayerRiskRecord> {
    rows.iter()
        .filter(|row| row.risk_category == RiskCategory::High)
        .cloned()
        .collect()
}
