use crate::infra::{deserialize_optional_date, AppState, DashboardContext};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::NaiveDate;
use clarity_revenue::dashboard::domain::{ClaimRecord, PayerRiskRecord};
use clarity_revenue::dashboard::report::views::{DashboardInsights, DashboardSummary};
use clarity_revenue::dashboard::report::{dashboard_charts, ChartSpec};
use clarity_revenue::dashboard::{DashboardReport, FilterSelection};
use clarity_revenue::datasets::load_dir;
use clarity_revenue::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Deserialize)]
pub(crate) struct DashboardReportRequest {
    #[serde(default)]
    pub(crate) payers: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) end_date: Option<NaiveDate>,
    #[serde(default)]
    pub(crate) include_rows: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct DashboardReportResponse {
    pub(crate) summary: DashboardSummary,
    pub(crate) insights: DashboardInsights,
    pub(crate) charts: Vec<ChartSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) claims: Option<Vec<ClaimRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) payer_risk: Option<Vec<PayerRiskRecord>>,
}

pub(crate) fn dashboard_router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/dashboard/report", post(dashboard_report_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn dashboard_report_endpoint(
    Extension(context): Extension<DashboardContext>,
    Json(payload): Json<DashboardReportRequest>,
) -> Result<Json<DashboardReportResponse>, AppError> {
    let DashboardReportRequest {
        payers,
        start_date,
        end_date,
        include_rows,
    } = payload;

    let data = load_dir(&context.data.dir)?;
    let report = DashboardReport::build(
        &data,
        FilterSelection {
            payers,
            start_date,
            end_date,
        },
    );

    let summary = report.summary();
    let insights = report.insights();
    let (claims, payer_risk) = if include_rows {
        (Some(report.claims), Some(report.payer_risk))
    } else {
        (None, None)
    };

    Ok(Json(DashboardReportResponse {
        summary,
        insights,
        charts: dashboard_charts(),
        claims,
        payer_risk,
    }))
}
