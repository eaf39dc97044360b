use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::activity::{Activity, ActivityKind};

/// Query parameters for the activity feed
#[derive(Debug, Default, Deserialize)]
pub struct ActivityQueryDto {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

/// DTO for activity feed entries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityDto {
    pub id: Uuid,
    pub kind: ActivityKind,
    pub actor_id: Uuid,
    pub item_id: Option<Uuid>,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

impl From<Activity> for ActivityDto {
    fn from(activity: Activity) -> Self {
        Self {
            id: activity.id,
            kind: activity.kind,
            actor_id: activity.actor_id,
            item_id: activity.item_id,
            description: activity.description,
            timestamp: activity.occurred_at,
        }
    }
}
