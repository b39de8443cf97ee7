pub mod aggregate;
pub mod alerts;
pub mod domain;
pub mod filter;
pub mod report;

pub use aggregate::{aggregate_weekly, WeeklyCashFlow};
pub use alerts::{high_risk_payers, AlertLevel};
pub use filter::{filter_claims, ClaimFilter, DateRange, FilterSelection, ResolvedFilter};
pub use report::DashboardReport;
