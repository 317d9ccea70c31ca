//! Report API endpoints
//!
//! The single-metric GET endpoints compute, persist and return a fresh
//! report row on every call.

use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    error::AppResult,
    models::report::{GenerateReports, PeriodQuery, Report, ReportQuery},
};

use super::ValidatedJson;

/// List the most recent persisted reports
#[utoipa::path(
    get,
    path = "/api/reports",
    tag = "reports",
    params(ReportQuery),
    responses(
        (status = 200, description = "Report list, newest first", body = Vec<Report>)
    )
)]
pub async fn list_reports(
    State(state): State<crate::AppState>,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<Vec<Report>>> {
    let reports = state.services.reports.list(&query).await?;
    Ok(Json(reports))
}

/// Generate a revenue report for the given period
#[utoipa::path(
    get,
    path = "/api/reports/revenue",
    tag = "reports",
    params(PeriodQuery),
    responses(
        (status = 200, description = "Revenue report", body = Report)
    )
)]
pub async fn revenue_report(
    State(state): State<crate::AppState>,
    Query(query): Query<PeriodQuery>,
) -> AppResult<Json<Report>> {
    let report = state
        .services
        .reports
        .revenue(query.period.unwrap_or_default())
        .await?;
    Ok(Json(report))
}

/// Generate a bookings-count report for the given period
#[utoipa::path(
    get,
    path = "/api/reports/bookings",
    tag = "reports",
    params(PeriodQuery),
    responses(
        (status = 200, description = "Bookings report", body = Report)
    )
)]
pub async fn bookings_report(
    State(state): State<crate::AppState>,
    Query(query): Query<PeriodQuery>,
) -> AppResult<Json<Report>> {
    let report = state
        .services
        .reports
        .bookings(query.period.unwrap_or_default())
        .await?;
    Ok(Json(report))
}

/// Generate an equipment-utilization report
#[utoipa::path(
    get,
    path = "/api/reports/equipment-utilization",
    tag = "reports",
    params(PeriodQuery),
    responses(
        (status = 200, description = "Equipment utilization report", body = Report)
    )
)]
pub async fn equipment_utilization_report(
    State(state): State<crate::AppState>,
    Query(query): Query<PeriodQuery>,
) -> AppResult<Json<Report>> {
    let report = state
        .services
        .reports
        .equipment_utilization(query.period.unwrap_or_default())
        .await?;
    Ok(Json(report))
}

/// Generate all three metrics for one period
#[utoipa::path(
    post,
    path = "/api/reports/generate",
    tag = "reports",
    request_body = GenerateReports,
    responses(
        (status = 200, description = "Generated reports", body = Vec<Report>)
    )
)]
pub async fn generate_reports(
    State(state): State<crate::AppState>,
    ValidatedJson(body): ValidatedJson<GenerateReports>,
) -> AppResult<Json<Vec<Report>>> {
    let reports = state
        .services
        .reports
        .generate_all(body.period.unwrap_or_default())
        .await?;
    Ok(Json(reports))
}
