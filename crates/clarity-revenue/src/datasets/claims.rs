use super::{date_from_string, ensure_columns, open_dataset, DatasetError, DatasetKind};
use crate::dashboard::domain::{ClaimRecord, ClaimStatus};
use chrono::NaiveDate;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

const REQUIRED_COLUMNS: [&str; 4] = [
    "Payer",
    "Submission Date",
    "Status",
    "Processing Time (Days)",
];

#[derive(Debug, Deserialize)]
struct ClaimRow {
    #[serde(rename = "Payer")]
    payer: String,
    #[serde(rename = "Submission Date", deserialize_with = "date_from_string")]
    submission_date: NaiveDate,
    #[serde(rename = "Status")]
    status: ClaimStatus,
    #[serde(rename = "Processing Time (Days)")]
    processing_days: f64,
}

pub fn load_claims<R: Read>(reader: R) -> Result<Vec<ClaimRecord>, DatasetError> {
    let kind = DatasetKind::Claims;
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|source| DatasetError::Parse { kind, source })?
        .clone();
    ensure_columns(kind, &headers, &REQUIRED_COLUMNS)?;

    let mut records = Vec::new();
    for row in csv_reader.deserialize::<ClaimRow>() {
        let row = row.map_err(|source| DatasetError::Parse { kind, source })?;
        records.push(ClaimRecord {
            payer: row.payer,
            submission_date: row.submission_date,
            status: row.status,
            processing_days: row.processing_days,
        });
    }

    Ok(records)
}

pub fn load_claims_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ClaimRecord>, DatasetError> {
    let path = path.as_ref();
    let file = open_dataset(DatasetKind::Claims, path)?;
    load_claims(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn loads_rows_in_source_order() {
        let csv = "Payer,Submission Date,Status,Processing Time (Days)\n\
Aetna,2025-01-05,Paid,12\n\
Cigna,2025-02-10,Pending,30.5\n";
        let records = load_claims(Cursor::new(csv)).expect("claims load");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].payer, "Aetna");
        assert_eq!(records[0].status, ClaimStatus::Paid);
        assert_eq!(records[1].processing_days, 30.5);
        assert_eq!(
            records[1].submission_date,
            NaiveDate::from_ymd_opt(2025, 2, 10).expect("valid date")
        );
    }

    #[test]
    fn missing_status_column_is_a_schema_error() {
        let csv = "Payer,Submission Date,Processing Time (Days)\nAetna,2025-01-05,12\n";
        let error = load_claims(Cursor::new(csv)).expect_err("schema error");

        match error {
            DatasetError::Schema { kind, column } => {
                assert_eq!(kind, DatasetKind::Claims);
                assert_eq!(column, "Status");
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_date_is_a_parse_error() {
        let csv = "Payer,Submission Date,Status,Processing Time (Days)\n\
Aetna,last Tuesday,Paid,12\n";
        let error = load_claims(Cursor::new(csv)).expect_err("parse error");
        assert!(matches!(error, DatasetError::Parse { .. }));
    }

    #[test]
    fn unknown_status_value_is_a_parse_error() {
        let csv = "Payer,Submission Date,Status,Processing Time (Days)\n\
Aetna,2025-01-05,Misplaced,12\n";
        let error = load_claims(Cursor::new(csv)).expect_err("parse error");
        assert!(matches!(error, DatasetError::Parse { .. }));
    }
}
