//! Report model and related types
//!
//! Each generation call inserts a fresh row; repeated calls for the same
//! period produce duplicate rows on purpose (historical audit trail).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::types::Json;
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::enums::{ReportPeriod, ReportType};

/// Persisted report row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: Uuid,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub report_type: ReportType,
    pub period: ReportPeriod,
    /// End of the aggregation window
    pub date: DateTime<Utc>,
    pub value: f64,
    /// Supporting counts, specific to each report type
    #[schema(value_type = Object)]
    pub metadata: Json<serde_json::Map<String, Value>>,
    pub created_at: DateTime<Utc>,
}

/// Report row ready to be inserted
#[derive(Debug, Clone)]
pub struct NewReport {
    pub report_type: ReportType,
    pub period: ReportPeriod,
    pub date: DateTime<Utc>,
    pub value: f64,
    pub metadata: serde_json::Map<String, Value>,
}

/// Filters for GET /api/reports
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ReportQuery {
    #[serde(rename = "type")]
    pub report_type: Option<ReportType>,
    pub period: Option<ReportPeriod>,
}

/// Query for the single-metric report endpoints
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct PeriodQuery {
    pub period: Option<ReportPeriod>,
}

/// Body for POST /api/reports/generate
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct GenerateReports {
    pub period: Option<ReportPeriod>,
}
