//! Activity log service

use chrono::Utc;

use crate::{
    error::AppResult,
    models::activity::{ActivityDetailView, ActivityView, CreateActivity},
    repository::Repository,
};

const DEFAULT_LIMIT: i64 = 10;

#[derive(Clone)]
pub struct ActivitiesService {
    repository: Repository,
}

impl ActivitiesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Most recent activities, humanized for the dashboard
    pub async fn list(&self, limit: Option<i64>) -> AppResult<Vec<ActivityView>> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT).max(1);
        let now = Utc::now();
        let activities = self.repository.activities.list(limit).await?;
        Ok(activities
            .into_iter()
            .map(|activity| activity.into_view(now))
            .collect())
    }

    pub async fn get(&self, id: uuid::Uuid) -> AppResult<ActivityDetailView> {
        let activity = self.repository.activities.get(id).await?;
        Ok(activity.into_detail_view(Utc::now()))
    }

    /// Append an activity; the caller supplies the request-derived fallbacks
    /// for ipAddress and userAgent.
    pub async fn create(
        &self,
        data: CreateActivity,
        fallback_ip: Option<String>,
        fallback_user_agent: Option<String>,
    ) -> AppResult<ActivityView> {
        let activity = self
            .repository
            .activities
            .create(data, fallback_ip, fallback_user_agent)
            .await?;
        Ok(activity.into_view(Utc::now()))
    }
}
