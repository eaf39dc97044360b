use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What kind of action an activity entry records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Upload,
    Edit,
    Star,
    Delete,
    Restore,
    Share,
    Comment,
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityKind::Upload => write!(f, "upload"),
            ActivityKind::Edit => write!(f, "edit"),
            ActivityKind::Star => write!(f, "star"),
            ActivityKind::Delete => write!(f, "delete"),
            ActivityKind::Restore => write!(f, "restore"),
            ActivityKind::Share => write!(f, "share"),
            ActivityKind::Comment => write!(f, "comment"),
        }
    }
}

/// Append-only record of a user action, shown in the activity feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: Uuid,
    pub kind: ActivityKind,
    pub actor_id: Uuid,
    /// Item the action touched; None once the item has been purged
    pub item_id: Option<Uuid>,
    pub description: String,
    pub occurred_at: DateTime<Utc>,
}

impl Activity {
    pub fn new(kind: ActivityKind, actor_id: Uuid, item_id: Option<Uuid>, description: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            actor_id,
            item_id,
            description,
            occurred_at: Utc::now(),
        }
    }
}
