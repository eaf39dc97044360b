use std::sync::Arc;
use uuid::Uuid;

use crate::common::errors::{DomainError, Result};
use crate::domain::entities::item::Item;
use crate::domain::repositories::share_repository::ShareRepository;
use crate::domain::services::access_policy::{self, AccessRole};

/// Evaluates the caller's role on an item by joining ownership with the
/// share ledger. Every mutating service consults this before touching
/// state; the policy itself lives in `domain::services::access_policy`.
pub struct AccessControl {
    share_repository: Arc<dyn ShareRepository>,
}

impl AccessControl {
    pub fn new(share_repository: Arc<dyn ShareRepository>) -> Self {
        Self { share_repository }
    }

    pub async fn role(&self, item: &Item, caller_id: Uuid) -> Result<Option<AccessRole>> {
        if item.owner_id() == caller_id {
            return Ok(Some(AccessRole::Owner));
        }

        let shares = self.share_repository.list_for_item(item.id()).await?;
        Ok(access_policy::role_for(item, caller_id, &shares))
    }

    /// Any role suffices: listing, path resolution, download
    pub async fn ensure_read(&self, item: &Item, caller_id: Uuid) -> Result<AccessRole> {
        self.role(item, caller_id).await?.ok_or_else(|| {
            DomainError::access_denied("Item", "No access to this item").with_id(item.id().to_string())
        })
    }

    /// Commenter level or better
    pub async fn ensure_comment(&self, item: &Item, caller_id: Uuid) -> Result<AccessRole> {
        let role = self.ensure_read(item, caller_id).await?;
        if !role.allows_comment() {
            return Err(DomainError::access_denied("Item", "Commenting requires commenter access")
                .with_id(item.id().to_string()));
        }
        Ok(role)
    }

    /// Editor level or better: rename, upload into a shared folder
    pub async fn ensure_edit(&self, item: &Item, caller_id: Uuid) -> Result<AccessRole> {
        let role = self.ensure_read(item, caller_id).await?;
        if !role.allows_edit() {
            return Err(DomainError::access_denied("Item", "Editing requires editor access")
                .with_id(item.id().to_string()));
        }
        Ok(role)
    }

    /// Owner only: trash, restore, purge, share, revoke, move, star
    pub async fn ensure_manage(&self, item: &Item, caller_id: Uuid) -> Result<AccessRole> {
        let role = self.ensure_read(item, caller_id).await?;
        if !role.allows_manage() {
            return Err(DomainError::access_denied("Item", "Only the owner may do this")
                .with_id(item.id().to_string()));
        }
        Ok(role)
    }
}
