use super::{date_from_string, ensure_columns, open_dataset, DatasetError, DatasetKind};
use crate::dashboard::domain::CashFlowRecord;
use chrono::NaiveDate;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

const REQUIRED_COLUMNS: [&str; 3] = [
    "Week Start",
    "Final Adjusted Net Cash Flow ($)",
    "Adjusted Inflows ($)",
];

#[derive(Debug, Deserialize)]
struct CashFlowRow {
    #[serde(rename = "Week Start", deserialize_with = "date_from_string")]
    week_start: NaiveDate,
    #[serde(rename = "Final Adjusted Net Cash Flow ($)")]
    net_cash_flow: f64,
    #[serde(rename = "Adjusted Inflows ($)")]
    adjusted_inflows: f64,
}

pub fn load_cash_flow<R: Read>(reader: R) -> Result<Vec<CashFlowRecord>, DatasetError> {
    let kind = DatasetKind::CashFlow;
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|source| DatasetError::Parse { kind, source })?
        .clone();
    ensure_columns(kind, &headers, &REQUIRED_COLUMNS)?;

    let mut records = Vec::new();
    for row in csv_reader.deserialize::<CashFlowRow>() {
        let row = row.map_err(|source| DatasetError::Parse { kind, source })?;
        records.push(CashFlowRecord {
            week_start: row.week_start,
            net_cash_flow: row.net_cash_flow,
            adjusted_inflows: row.adjusted_inflows,
        });
    }

    Ok(records)
}

pub fn load_cash_flow_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<CashFlowRecord>, DatasetError> {
    let path = path.as_ref();
    let file = open_dataset(DatasetKind::CashFlow, path)?;
    load_cash_flow(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn loads_weeks_including_duplicates() {
        let csv = "Week Start,Final Adjusted Net Cash Flow ($),Adjusted Inflows ($)\n\
2025-01-06,1200.50,4100.00\n\
2025-01-06,-300.25,900.75\n\
2025-01-13,2250.00,5000.00\n";
        let records = load_cash_flow(Cursor::new(csv)).expect("cash flow loads");

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].week_start, records[1].week_start);
        assert_eq!(records[1].net_cash_flow, -300.25);
    }

    #[test]
    fn missing_inflows_column_is_a_schema_error() {
        let csv = "Week Start,Final Adjusted Net Cash Flow ($)\n2025-01-06,1200.50\n";
        let error = load_cash_flow(Cursor::new(csv)).expect_err("schema error");

        match error {
            DatasetError::Schema { column, .. } => assert_eq!(column, "Adjusted Inflows ($)"),
            other => panic!("expected schema error, got {other:?}"),
        }
    }
}
