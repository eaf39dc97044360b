use async_trait::async_trait;
use uuid::Uuid;

use crate::common::errors::Result;
use crate::domain::entities::activity::Activity;

/// Repository contract for the activity feed (primary port). Append-only.
#[async_trait]
pub trait ActivityRepository: Send + Sync + 'static {
    async fn append(&self, activity: Activity) -> Result<Activity>;

    /// Entries recorded by one actor, newest first
    async fn list_recent(&self, actor_id: Uuid, limit: usize, offset: usize) -> Result<Vec<Activity>>;
}
