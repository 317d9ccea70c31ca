//! Health check endpoint

use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Liveness report with the database probe result
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    /// "connected" or "disconnected"
    pub database: String,
    /// Seconds since the process started
    pub uptime: f64,
    pub port: u16,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service health", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<crate::AppState>) -> Json<HealthResponse> {
    let database = match sqlx::query("SELECT 1")
        .execute(&state.services.repository.pool)
        .await
    {
        Ok(_) => "connected",
        Err(e) => {
            tracing::warn!(error = %e, "database probe failed");
            "disconnected"
        }
    };

    Json(HealthResponse {
        status: "OK".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        database: database.to_string(),
        uptime: state.started_at.elapsed().as_secs_f64(),
        port: state.port,
    })
}
