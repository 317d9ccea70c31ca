//! Activity log API endpoints

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::activity::{ActivityDetailView, ActivityQuery, ActivityView, CreateActivity},
};

use super::ValidatedJson;

/// Most recent activity entries for the dashboard feed
#[utoipa::path(
    get,
    path = "/api/activities",
    tag = "activities",
    params(ActivityQuery),
    responses(
        (status = 200, description = "Activity feed, newest first", body = Vec<ActivityView>)
    )
)]
pub async fn list_activities(
    State(state): State<crate::AppState>,
    Query(query): Query<ActivityQuery>,
) -> AppResult<Json<Vec<ActivityView>>> {
    let activities = state.services.activities.list(query.limit).await?;
    Ok(Json(activities))
}

/// Get one activity with its full context
#[utoipa::path(
    get,
    path = "/api/activities/{id}",
    tag = "activities",
    params(("id" = Uuid, Path, description = "Activity id")),
    responses(
        (status = 200, description = "Activity details", body = ActivityDetailView),
        (status = 404, description = "Activity not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_activity(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ActivityDetailView>> {
    let activity = state.services.activities.get(id).await?;
    Ok(Json(activity))
}

/// Append an activity entry
///
/// When the body omits ipAddress or userAgent they are filled from the
/// connection peer address and the User-Agent header.
#[utoipa::path(
    post,
    path = "/api/activities",
    tag = "activities",
    request_body = CreateActivity,
    responses(
        (status = 201, description = "Activity recorded", body = ActivityView),
        (status = 400, description = "Validation failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_activity(
    State(state): State<crate::AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    ValidatedJson(data): ValidatedJson<CreateActivity>,
) -> AppResult<(StatusCode, Json<ActivityView>)> {
    let fallback_ip = Some(addr.ip().to_string());
    let fallback_user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    let activity = state
        .services
        .activities
        .create(data, fallback_ip, fallback_user_agent)
        .await?;
    Ok((StatusCode::CREATED, Json(activity)))
}
