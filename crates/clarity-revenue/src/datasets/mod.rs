mod cash_flow;
mod claims;
mod payer_risk;

pub use cash_flow::{load_cash_flow, load_cash_flow_from_path};
pub use claims::{load_claims, load_claims_from_path};
pub use payer_risk::{load_payer_risk, load_payer_risk_from_path};

use crate::dashboard::domain::{CashFlowRecord, ClaimRecord, PayerRiskRecord};
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs::File;
use std::path::{Path, PathBuf};

/// The three flat files the dashboard renders from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    Claims,
    PayerRisk,
    CashFlow,
}

impl DatasetKind {
    pub const fn ordered() -> [Self; 3] {
        [Self::Claims, Self::PayerRisk, Self::CashFlow]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Claims => "claim tracking",
            Self::PayerRisk => "payer risk",
            Self::CashFlow => "cash flow",
        }
    }

    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Claims => "real_time_claim_tracking.csv",
            Self::PayerRisk => "payer_risk_analysis.csv",
            Self::CashFlow => "real_time_cash_flow.csv",
        }
    }

    pub fn path_in(self, dir: &Path) -> PathBuf {
        dir.join(self.file_name())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("{} dataset not found at {}", .kind.label(), .path.display())]
    Missing { kind: DatasetKind, path: PathBuf },
    #[error("failed to read {} dataset: {source}", .kind.label())]
    Io {
        kind: DatasetKind,
        #[source]
        source: std::io::Error,
    },
    #[error("{} dataset is missing required column '{column}'", .kind.label())]
    Schema {
        kind: DatasetKind,
        column: &'static str,
    },
    #[error("{} dataset contains malformed rows: {source}", .kind.label())]
    Parse {
        kind: DatasetKind,
        #[source]
        source: csv::Error,
    },
}

impl DatasetError {
    pub fn kind(&self) -> DatasetKind {
        match self {
            DatasetError::Missing { kind, .. }
            | DatasetError::Io { kind, .. }
            | DatasetError::Schema { kind, .. }
            | DatasetError::Parse { kind, .. } => *kind,
        }
    }
}

/// All three tables, loaded fresh for one render pass.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub claims: Vec<ClaimRecord>,
    pub payer_risk: Vec<PayerRiskRecord>,
    pub cash_flow: Vec<CashFlowRecord>,
}

pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<DashboardData, DatasetError> {
    let dir = dir.as_ref();
    Ok(DashboardData {
        claims: load_claims_from_path(DatasetKind::Claims.path_in(dir))?,
        payer_risk: load_payer_risk_from_path(DatasetKind::PayerRisk.path_in(dir))?,
        cash_flow: load_cash_flow_from_path(DatasetKind::CashFlow.path_in(dir))?,
    })
}

pub(crate) fn open_dataset(kind: DatasetKind, path: &Path) -> Result<File, DatasetError> {
    File::open(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => DatasetError::Missing {
            kind,
            path: path.to_path_buf(),
        },
        _ => DatasetError::Io { kind, source },
    })
}

pub(crate) fn ensure_columns(
    kind: DatasetKind,
    headers: &csv::StringRecord,
    required: &[&'static str],
) -> Result<(), DatasetError> {
    for column in required {
        if !headers.iter().any(|header| header == *column) {
            return Err(DatasetError::Schema { kind, column });
        }
    }
    Ok(())
}

pub(crate) fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive());
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

pub(crate) fn date_from_string<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid date '{}'", raw.trim())))
}
