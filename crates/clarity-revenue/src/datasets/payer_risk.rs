use super::{ensure_columns, open_dataset, DatasetError, DatasetKind};
use crate::dashboard::domain::{PayerRiskRecord, RiskCategory};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

const REQUIRED_COLUMNS: [&str; 3] = ["Payer", "Risk Score", "Risk Category"];

#[derive(Debug, Deserialize)]
struct PayerRiskRow {
    #[serde(rename = "Payer")]
    payer: String,
    #[serde(rename = "Risk Score")]
    risk_score: f64,
    #[serde(rename = "Risk Category")]
    risk_category: RiskCategory,
}

pub fn load_payer_risk<R: Read>(reader: R) -> Result<Vec<PayerRiskRecord>, DatasetError> {
    let kind = DatasetKind::PayerRisk;
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|source| DatasetError::Parse { kind, source })?
        .clone();
    ensure_columns(kind, &headers, &REQUIRED_COLUMNS)?;

    let mut records = Vec::new();
    for row in csv_reader.deserialize::<PayerRiskRow>() {
        let row = row.map_err(|source| DatasetError::Parse { kind, source })?;
        records.push(PayerRiskRecord {
            payer: row.payer,
            risk_score: row.risk_score,
            risk_category: row.risk_category,
        });
    }

    Ok(records)
}

pub fn load_payer_risk_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<PayerRiskRecord>, DatasetError> {
    let path = path.as_ref();
    let file = open_dataset(DatasetKind::PayerRisk, path)?;
    load_payer_risk(file)
}
