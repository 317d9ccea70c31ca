//! Activities repository
//!
//! Append-only activity log: rows are never updated or deleted.

use sqlx::types::Json;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::activity::{Activity, CreateActivity},
};

#[derive(Clone)]
pub struct ActivitiesRepository {
    pool: Pool<Postgres>,
}

impl ActivitiesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Most recent activities first
    pub async fn list(&self, limit: i64) -> AppResult<Vec<Activity>> {
        let rows = sqlx::query_as::<_, Activity>(
            "SELECT * FROM activities ORDER BY timestamp DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get an activity by id
    pub async fn get(&self, id: Uuid) -> AppResult<Activity> {
        sqlx::query_as::<_, Activity>("SELECT * FROM activities WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Activity not found".to_string()))
    }

    /// Append an activity record
    pub async fn create(
        &self,
        data: CreateActivity,
        fallback_ip: Option<String>,
        fallback_user_agent: Option<String>,
    ) -> AppResult<Activity> {
        let row = sqlx::query_as::<_, Activity>(
            r#"
            INSERT INTO activities (action, user_name, details, ip_address, user_agent)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&data.action)
        .bind(&data.user)
        .bind(Json(data.details.unwrap_or_default()))
        .bind(data.ip_address.or(fallback_ip))
        .bind(data.user_agent.or(fallback_user_agent))
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}
