//! Activity log model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::types::Json;
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Persisted activity record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: Uuid,
    pub action: String,
    #[serde(rename = "user")]
    #[sqlx(rename = "user_name")]
    pub user: String,
    pub timestamp: DateTime<Utc>,
    #[schema(value_type = Object)]
    pub details: Json<serde_json::Map<String, Value>>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Create activity request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateActivity {
    #[validate(length(min = 1, message = "action is required"))]
    pub action: String,
    #[validate(length(min = 1, message = "user is required"))]
    pub user: String,
    pub details: Option<serde_json::Map<String, Value>>,
    /// Peer address is captured from the connection when absent
    pub ip_address: Option<String>,
    /// Request header is captured when absent
    pub user_agent: Option<String>,
}

/// Compact list entry with a humanized timestamp
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActivityView {
    pub id: Uuid,
    pub action: String,
    pub user: String,
    /// "N minutes/hours/days ago"
    pub time: String,
    pub timestamp: DateTime<Utc>,
}

/// Detail view including the free-form context
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDetailView {
    pub id: Uuid,
    pub action: String,
    pub user: String,
    pub time: String,
    pub timestamp: DateTime<Utc>,
    #[schema(value_type = Object)]
    pub details: Json<serde_json::Map<String, Value>>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

/// Query for GET /api/activities
#[derive(Debug, Deserialize, IntoParams)]
pub struct ActivityQuery {
    /// Number of most recent entries to return
    pub limit: Option<i64>,
}

impl Activity {
    pub fn into_view(self, now: DateTime<Utc>) -> ActivityView {
        ActivityView {
            id: self.id,
            action: self.action,
            user: self.user,
            time: time_ago(self.timestamp, now),
            timestamp: self.timestamp,
        }
    }

    pub fn into_detail_view(self, now: DateTime<Utc>) -> ActivityDetailView {
        ActivityDetailView {
            id: self.id,
            action: self.action,
            user: self.user,
            time: time_ago(self.timestamp, now),
            timestamp: self.timestamp,
            details: self.details,
            ip_address: self.ip_address,
            user_agent: self.user_agent,
        }
    }
}

/// Humanize an elapsed interval as days, hours or minutes
pub fn time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(timestamp);
    let days = elapsed.num_days();
    let hours = elapsed.num_hours() % 24;
    let minutes = elapsed.num_minutes() % 60;

    if days > 0 {
        format!("{} day{} ago", days, if days > 1 { "s" } else { "" })
    } else if hours > 0 {
        format!("{} hour{} ago", hours, if hours > 1 { "s" } else { "" })
    } else {
        let minutes = minutes.max(0);
        format!("{} minute{} ago", minutes, if minutes != 1 { "s" } else { "" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn time_ago_minutes() {
        let now = Utc::now();
        assert_eq!(time_ago(now - Duration::minutes(5), now), "5 minutes ago");
        assert_eq!(time_ago(now - Duration::minutes(1), now), "1 minute ago");
        assert_eq!(time_ago(now, now), "0 minutes ago");
    }

    #[test]
    fn time_ago_hours_and_days() {
        let now = Utc::now();
        assert_eq!(time_ago(now - Duration::hours(3), now), "3 hours ago");
        assert_eq!(time_ago(now - Duration::hours(1), now), "1 hour ago");
        assert_eq!(time_ago(now - Duration::days(2), now), "2 days ago");
        assert_eq!(time_ago(now - Duration::days(1), now), "1 day ago");
    }

    #[test]
    fn view_serializes_user_field_name() {
        let activity = Activity {
            id: Uuid::new_v4(),
            action: "Product created".to_string(),
            user: "admin".to_string(),
            timestamp: Utc::now(),
            details: Json(serde_json::Map::new()),
            ip_address: None,
            user_agent: None,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(activity.into_view(Utc::now())).unwrap();
        assert_eq!(json["user"], "admin");
        assert!(json["time"].as_str().unwrap().ends_with("ago"));
    }
}
