use super::domain::CashFlowRecord;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// One aggregated forecast row per distinct week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyCashFlow {
    pub week_start: NaiveDate,
    pub net_cash_flow: f64,
    pub adjusted_inflows: f64,
}

/// Groups cash-flow rows by exact week start and sums the numeric columns,
/// one output row per distinct week, ascending by week.
pub fn aggregate_weekly(rows: &[CashFlowRecord]) -> Vec<WeeklyCashFlow> {
    let mut weeks: BTreeMap<NaiveDate, WeeklyCashFlow> = BTreeMap::new();

    for row in rows {
        let entry = weeks.entry(row.week_start).or_insert_with(|| WeeklyCashFlow {
            week_start: row.week_start,
            net_cash_flow: 0.0,
            adjusted_inflows: 0.0,
        });
        entry.net_cash_flow += row.net_cash_flow;
        entry.adjusted_inflows += row.adjusted_inflows;
    }

    weeks.into_values().collect()
}
