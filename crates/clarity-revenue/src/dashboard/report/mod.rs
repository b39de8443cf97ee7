mod charts;
mod insights;
mod summary;
pub mod views;

pub use charts::{dashboard_charts, ChartKind, ChartSource, ChartSpec};
pub use summary::DashboardReport;

pub(crate) use insights::generate_insights;
