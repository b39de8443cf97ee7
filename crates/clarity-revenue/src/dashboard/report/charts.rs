use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
    Box,
}

/// Which table a chart draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartSource {
    Claims,
    PayerRisk,
    CashFlow,
    WeeklyCashFlow,
}

/// A chart parameterized by column names, consumed verbatim by the charting
/// front-end. This crate never renders; it only binds columns to panels.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub source: ChartSource,
    pub title: &'static str,
    pub x: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_label: Option<&'static str>,
    pub markers: bool,
}

/// The five fixed panels of the dashboard.
pub fn dashboard_charts() -> Vec<ChartSpec> {
    vec![
        ChartSpec {
            kind: ChartKind::Bar,
            source: ChartSource::PayerRisk,
            title: "Payer Risk Scores",
            x: "Payer",
            y: Some("Risk Score"),
            color: Some("Risk Category"),
            y_label: Some("Average Risk Level"),
            markers: false,
        },
        ChartSpec {
            kind: ChartKind::Line,
            source: ChartSource::CashFlow,
            title: "Projected Cash Flow Over 12 Weeks",
            x: "Week Start",
            y: Some("Final Adjusted Net Cash Flow ($)"),
            color: None,
            y_label: None,
            markers: true,
        },
        ChartSpec {
            kind: ChartKind::Pie,
            source: ChartSource::Claims,
            title: "Claim Status Distribution",
            x: "Status",
            y: None,
            color: None,
            y_label: None,
            markers: false,
        },
        ChartSpec {
            kind: ChartKind::Box,
            source: ChartSource::Claims,
            title: "Payment Processing Time by Payer",
            x: "Payer",
            y: Some("Processing Time (Days)"),
            color: None,
            y_label: None,
            markers: false,
        },
        ChartSpec {
            kind: ChartKind::Line,
            source: ChartSource::WeeklyCashFlow,
            title: "Projected Inflows by Insurance Group",
            x: "Week Start",
            y: Some("Adjusted Inflows ($)"),
            color: None,
            y_label: None,
            markers: false,
        },
    ]
}
