use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Lifecycle of a submitted claim as reported by payer exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    Paid,
    Pending,
    Denied,
    Appealed,
}

impl ClaimStatus {
    pub const fn ordered() -> [Self; 4] {
        [Self::Paid, Self::Pending, Self::Denied, Self::Appealed]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Pending => "Pending",
            Self::Denied => "Denied",
            Self::Appealed => "Appealed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "paid" => Some(Self::Paid),
            "pending" => Some(Self::Pending),
            "denied" => Some(Self::Denied),
            "appealed" => Some(Self::Appealed),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for ClaimStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        ClaimStatus::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown claim status '{}'", raw)))
    }
}

/// Coarse classification of a payer's likelihood of delayed or denied payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    Low,
    Medium,
    High,
}

impl RiskCategory {
    pub const fn ordered() -> [Self; 3] {
        [Self::Low, Self::Medium, Self::High]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Accepts "Moderate" as an alias for Medium, as older exports use it.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" | "moderate" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for RiskCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        RiskCategory::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown risk category '{}'", raw)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClaimRecord {
    pub payer: String,
    pub submission_date: NaiveDate,
    pub status: ClaimStatus,
    pub processing_days: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayerRiskRecord {
    pub payer: String,
    pub risk_score: f64,
    pub risk_category: RiskCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CashFlowRecord {
    pub week_start: NaiveDate,
    pub net_cash_flow: f64,
    pub adjusted_inflows: f64,
}
