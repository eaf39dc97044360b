use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::domain::entities::share::{Share, SharePermission};

/// DTO for share creation requests
#[derive(Debug, Deserialize)]
pub struct CreateShareDto {
    pub item_id: Uuid,
    /// Grantee email, resolved through the identity collaborator
    pub email: String,
    pub permission: SharePermission,
}

/// DTO for share responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareDto {
    pub id: Uuid,
    pub item_id: Uuid,
    pub grantee_id: Uuid,
    pub permission: SharePermission,
    pub granted_by: Uuid,
    pub granted_at: DateTime<Utc>,
}

impl From<Share> for ShareDto {
    fn from(share: Share) -> Self {
        Self {
            id: share.id,
            item_id: share.item_id,
            grantee_id: share.grantee_id,
            permission: share.permission,
            granted_by: share.granted_by,
            granted_at: share.granted_at,
        }
    }
}

/// One entry of the "people with access" listing: the share joined with
/// the grantee's display data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GranteeDto {
    pub share_id: Uuid,
    pub account_id: Uuid,
    pub name: String,
    pub email: String,
    pub permission: SharePermission,
}

impl GranteeDto {
    pub fn from_share(share: &Share, account: &Account) -> Self {
        Self {
            share_id: share.id,
            account_id: account.id,
            name: account.name.clone(),
            email: account.email.clone(),
            permission: share.permission,
        }
    }
}
