use std::sync::Arc;

use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::application::dtos::item_dto::ItemDto;
use crate::application::dtos::share_dto::{CreateShareDto, GranteeDto, ShareDto};
use crate::application::ports::outbound::AccountResolver;
use crate::application::services::access_control::AccessControl;
use crate::application::services::activity_service::ActivityService;
use crate::common::errors::{DomainError, Result};
use crate::domain::entities::activity::ActivityKind;
use crate::domain::entities::share::Share;
use crate::domain::repositories::item_repository::ItemRepository;
use crate::domain::repositories::share_repository::ShareRepository;

/// Application service for the share ledger. A share covers exactly the
/// granted item; folder shares do not extend to descendants.
pub struct ShareService {
    item_repository: Arc<dyn ItemRepository>,
    share_repository: Arc<dyn ShareRepository>,
    account_resolver: Arc<dyn AccountResolver>,
    access: Arc<AccessControl>,
    activity: Arc<ActivityService>,
}

impl ShareService {
    pub fn new(
        item_repository: Arc<dyn ItemRepository>,
        share_repository: Arc<dyn ShareRepository>,
        account_resolver: Arc<dyn AccountResolver>,
        access: Arc<AccessControl>,
        activity: Arc<ActivityService>,
    ) -> Self {
        Self {
            item_repository,
            share_repository,
            account_resolver,
            access,
            activity,
        }
    }

    /// Grants or updates access for one grantee. Re-sharing overwrites
    /// the prior permission level; last write wins.
    #[instrument(skip(self))]
    pub async fn share(&self, caller_id: Uuid, dto: CreateShareDto) -> Result<ShareDto> {
        let item = self.item_repository.get(dto.item_id).await?;
        self.access.ensure_manage(&item, caller_id).await?;

        let grantee = self
            .account_resolver
            .resolve_email(&dto.email)
            .await?
            .ok_or_else(|| DomainError::unknown_grantee(dto.email.clone()))?;

        let share = Share::new(dto.item_id, grantee.id, dto.permission, caller_id);
        let share = self.share_repository.upsert(share).await?;

        info!(
            "Shared {} ({}) with {} as {}",
            item.name(),
            item.id(),
            grantee.email,
            share.permission
        );
        self.activity
            .record(
                ActivityKind::Share,
                caller_id,
                Some(item.id()),
                format!("Shared {} with {}", item.name(), grantee.email),
            )
            .await;

        Ok(ShareDto::from(share))
    }

    /// Removes a grantee's access; revoking a share that does not exist
    /// is a no-op, not an error.
    #[instrument(skip(self))]
    pub async fn revoke(&self, caller_id: Uuid, item_id: Uuid, grantee_id: Uuid) -> Result<()> {
        let item = self.item_repository.get(item_id).await?;
        self.access.ensure_manage(&item, caller_id).await?;

        self.share_repository.revoke(item_id, grantee_id).await?;
        debug!("Revoked access of {} on {}", grantee_id, item_id);
        Ok(())
    }

    /// "People with access" for one item, joined with account display data
    #[instrument(skip(self))]
    pub async fn list_grantees(&self, caller_id: Uuid, item_id: Uuid) -> Result<Vec<GranteeDto>> {
        let item = self.item_repository.get(item_id).await?;
        self.access.ensure_read(&item, caller_id).await?;

        let shares = self.share_repository.list_for_item(item_id).await?;
        let mut grantees = Vec::with_capacity(shares.len());
        for share in &shares {
            // A grantee the resolver no longer knows is skipped rather
            // than failing the whole listing
            if let Some(account) = self.account_resolver.get(share.grantee_id).await? {
                grantees.push(GranteeDto::from_share(share, &account));
            }
        }

        Ok(grantees)
    }

    /// Items shared with the caller that are neither trashed nor purged,
    /// most recently modified first
    #[instrument(skip(self))]
    pub async fn list_shared_with_me(&self, caller_id: Uuid) -> Result<Vec<ItemDto>> {
        let shares = self.share_repository.list_for_grantee(caller_id).await?;
        let ids: Vec<Uuid> = shares.iter().map(|share| share.item_id).collect();

        let mut items: Vec<_> = self
            .item_repository
            .list_by_ids(&ids)
            .await?
            .into_iter()
            .filter(|item| !item.trashed())
            .collect();
        items.sort_by(|a, b| b.modified().cmp(&a.modified()).then(a.id().cmp(&b.id())));

        Ok(items.into_iter().map(ItemDto::from).collect())
    }
}
