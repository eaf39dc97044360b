use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Access level a share grants on one item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SharePermission {
    Viewer,
    Commenter,
    Editor,
}

#[derive(Debug, Error)]
pub enum ShareError {
    #[error("Invalid permission level: {0}")]
    InvalidPermission(String),
}

impl SharePermission {
    pub fn allows_comment(&self) -> bool {
        matches!(self, SharePermission::Commenter | SharePermission::Editor)
    }

    pub fn allows_edit(&self) -> bool {
        matches!(self, SharePermission::Editor)
    }
}

impl std::fmt::Display for SharePermission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SharePermission::Viewer => write!(f, "viewer"),
            SharePermission::Commenter => write!(f, "commenter"),
            SharePermission::Editor => write!(f, "editor"),
        }
    }
}

impl TryFrom<&str> for SharePermission {
    type Error = ShareError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "viewer" => Ok(SharePermission::Viewer),
            "commenter" => Ok(SharePermission::Commenter),
            "editor" => Ok(SharePermission::Editor),
            _ => Err(ShareError::InvalidPermission(s.to_string())),
        }
    }
}

/// One grant of access: (item, grantee) with a permission level.
/// Re-granting to the same grantee updates the row instead of duplicating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Share {
    pub id: Uuid,
    pub item_id: Uuid,
    pub grantee_id: Uuid,
    pub permission: SharePermission,
    pub granted_by: Uuid,
    pub granted_at: DateTime<Utc>,
}

impl Share {
    pub fn new(item_id: Uuid, grantee_id: Uuid, permission: SharePermission, granted_by: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            item_id,
            grantee_id,
            permission,
            granted_by,
            granted_at: Utc::now(),
        }
    }

    /// New version with a different permission level, keeping identity and
    /// grant history. Last write wins; no escalation ordering is enforced.
    pub fn with_permission(mut self, permission: SharePermission) -> Self {
        self.permission = permission;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_parsing_is_case_insensitive() {
        assert_eq!(SharePermission::try_from("viewer").unwrap(), SharePermission::Viewer);
        assert_eq!(SharePermission::try_from("EDITOR").unwrap(), SharePermission::Editor);
        assert!(SharePermission::try_from("owner").is_err());
    }

    #[test]
    fn permission_levels_compose() {
        assert!(!SharePermission::Viewer.allows_comment());
        assert!(SharePermission::Commenter.allows_comment());
        assert!(!SharePermission::Commenter.allows_edit());
        assert!(SharePermission::Editor.allows_edit());
        assert!(SharePermission::Editor.allows_comment());
    }

    #[test]
    fn regrant_keeps_identity() {
        let share = Share::new(Uuid::new_v4(), Uuid::new_v4(), SharePermission::Viewer, Uuid::new_v4());
        let updated = share.clone().with_permission(SharePermission::Editor);
        assert_eq!(updated.id, share.id);
        assert_eq!(updated.granted_at, share.granted_at);
        assert_eq!(updated.permission, SharePermission::Editor);
    }
}
