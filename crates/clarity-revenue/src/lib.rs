pub mod config;
pub mod dashboard;
pub mod datasets;
pub mod error;
pub mod telemetry;
