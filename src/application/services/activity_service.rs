use std::sync::Arc;
use tracing::{error, instrument};
use uuid::Uuid;

use crate::application::dtos::activity_dto::ActivityDto;
use crate::common::errors::Result;
use crate::domain::entities::activity::{Activity, ActivityKind};
use crate::domain::repositories::activity_repository::ActivityRepository;

/// Application service for the activity feed. Recording is best-effort:
/// a failed append is logged and swallowed so it can never fail the
/// operation that triggered it.
pub struct ActivityService {
    activity_repository: Arc<dyn ActivityRepository>,
    default_page_size: usize,
}

impl ActivityService {
    pub fn new(activity_repository: Arc<dyn ActivityRepository>, default_page_size: usize) -> Self {
        Self {
            activity_repository,
            default_page_size,
        }
    }

    pub async fn record(
        &self,
        kind: ActivityKind,
        actor_id: Uuid,
        item_id: Option<Uuid>,
        description: impl Into<String>,
    ) {
        let activity = Activity::new(kind, actor_id, item_id, description.into());
        if let Err(err) = self.activity_repository.append(activity).await {
            error!("Failed to record {} activity for {}: {}", kind, actor_id, err);
        }
    }

    #[instrument(skip(self))]
    pub async fn recent(
        &self,
        caller_id: Uuid,
        limit: Option<usize>,
        offset: Option<usize>,
    ) -> Result<Vec<ActivityDto>> {
        let limit = limit.unwrap_or(self.default_page_size);
        let entries = self
            .activity_repository
            .list_recent(caller_id, limit, offset.unwrap_or(0))
            .await?;
        Ok(entries.into_iter().map(ActivityDto::from).collect())
    }
}
