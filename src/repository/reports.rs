//! Reports repository
//!
//! Insert-only: the application never updates or deletes report rows.

use sqlx::types::Json;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::report::{NewReport, Report, ReportQuery},
};

/// GET /api/reports returns at most this many rows, newest first
const LIST_LIMIT: i64 = 50;

#[derive(Clone)]
pub struct ReportsRepository {
    pool: Pool<Postgres>,
}

impl ReportsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List the most recent reports, optionally filtered by type and period
    pub async fn list(&self, query: &ReportQuery) -> AppResult<Vec<Report>> {
        let rows = match (query.report_type, query.period) {
            (Some(report_type), Some(period)) => {
                sqlx::query_as::<_, Report>(
                    r#"SELECT * FROM reports WHERE "type" = $1 AND period = $2
                       ORDER BY date DESC LIMIT $3"#,
                )
                .bind(report_type)
                .bind(period)
                .bind(LIST_LIMIT)
                .fetch_all(&self.pool)
                .await?
            }
            (Some(report_type), None) => {
                sqlx::query_as::<_, Report>(
                    r#"SELECT * FROM reports WHERE "type" = $1 ORDER BY date DESC LIMIT $2"#,
                )
                .bind(report_type)
                .bind(LIST_LIMIT)
                .fetch_all(&self.pool)
                .await?
            }
            (None, Some(period)) => {
                sqlx::query_as::<_, Report>(
                    "SELECT * FROM reports WHERE period = $1 ORDER BY date DESC LIMIT $2",
                )
                .bind(period)
                .bind(LIST_LIMIT)
                .fetch_all(&self.pool)
                .await?
            }
            (None, None) => {
                sqlx::query_as::<_, Report>(
                    "SELECT * FROM reports ORDER BY date DESC LIMIT $1",
                )
                .bind(LIST_LIMIT)
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(rows)
    }

    /// Insert a freshly computed report row
    pub async fn insert(&self, report: NewReport) -> AppResult<Report> {
        let row = sqlx::query_as::<_, Report>(
            r#"
            INSERT INTO reports ("type", period, date, value, metadata)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(report.report_type)
        .bind(report.period)
        .bind(report.date)
        .bind(report.value)
        .bind(Json(report.metadata))
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}
