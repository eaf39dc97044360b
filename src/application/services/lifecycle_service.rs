use std::sync::Arc;

use tracing::{debug, error, info, instrument};
use uuid::Uuid;

use crate::application::dtos::item_dto::ItemDto;
use crate::application::dtos::trash_dto::{EmptyTrashReportDto, PurgeFailureDto};
use crate::application::ports::outbound::BlobStorage;
use crate::application::services::access_control::AccessControl;
use crate::application::services::activity_service::ActivityService;
use crate::common::errors::Result;
use crate::domain::entities::activity::ActivityKind;
use crate::domain::entities::item::Item;
use crate::domain::repositories::comment_repository::CommentRepository;
use crate::domain::repositories::item_repository::ItemRepository;
use crate::domain::repositories::share_repository::ShareRepository;

/// Application service for the item lifecycle: Active -> Trashed ->
/// Purged, with restore as the only reverse transition.
///
/// Trashing never cascades to children; purging cascades shares,
/// comments and blob content but leaves children in place with a
/// dangling parent reference (surfaced later as `BrokenChain`).
pub struct LifecycleService {
    item_repository: Arc<dyn ItemRepository>,
    share_repository: Arc<dyn ShareRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    blob_storage: Arc<dyn BlobStorage>,
    access: Arc<AccessControl>,
    activity: Arc<ActivityService>,
}

impl LifecycleService {
    pub fn new(
        item_repository: Arc<dyn ItemRepository>,
        share_repository: Arc<dyn ShareRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        blob_storage: Arc<dyn BlobStorage>,
        access: Arc<AccessControl>,
        activity: Arc<ActivityService>,
    ) -> Self {
        Self {
            item_repository,
            share_repository,
            comment_repository,
            blob_storage,
            access,
            activity,
        }
    }

    #[instrument(skip(self))]
    pub async fn trash(&self, caller_id: Uuid, item_id: Uuid) -> Result<ItemDto> {
        let item = self.item_repository.get(item_id).await?;
        self.access.ensure_manage(&item, caller_id).await?;

        let trashed = self.item_repository.trash(item_id).await?;
        info!("Moved {} ({}) to trash", trashed.name(), item_id);
        self.activity
            .record(
                ActivityKind::Delete,
                caller_id,
                Some(item_id),
                format!("Moved {} to trash", trashed.name()),
            )
            .await;

        Ok(ItemDto::from(trashed))
    }

    #[instrument(skip(self))]
    pub async fn restore(&self, caller_id: Uuid, item_id: Uuid) -> Result<ItemDto> {
        let item = self.item_repository.get(item_id).await?;
        self.access.ensure_manage(&item, caller_id).await?;

        let restored = self.item_repository.restore(item_id).await?;
        info!("Restored {} ({}) from trash", restored.name(), item_id);
        self.activity
            .record(
                ActivityKind::Restore,
                caller_id,
                Some(item_id),
                format!("Restored {}", restored.name()),
            )
            .await;

        Ok(ItemDto::from(restored))
    }

    /// Permanent delete, allowed from Active ("delete forever") as well
    /// as from Trashed
    #[instrument(skip(self))]
    pub async fn purge(&self, caller_id: Uuid, item_id: Uuid) -> Result<()> {
        let item = self.item_repository.get(item_id).await?;
        self.access.ensure_manage(&item, caller_id).await?;

        let name = item.name().to_string();
        self.purge_record(&item).await?;

        info!("Permanently deleted {} ({})", name, item_id);
        self.activity
            .record(
                ActivityKind::Delete,
                caller_id,
                None,
                format!("Permanently deleted {}", name),
            )
            .await;

        Ok(())
    }

    /// Cascade order matters: dependent records go first, the item row
    /// last, so a failed cascade leaves the item in trash to be retried
    /// instead of leaking orphaned shares or comments.
    async fn purge_record(&self, item: &Item) -> Result<()> {
        if item.is_file() {
            self.comment_repository.remove_for_file(item.id()).await?;
            self.blob_storage.delete(item.id()).await?;
        }
        self.share_repository.remove_for_item(item.id()).await?;
        self.item_repository.remove(item.id()).await?;
        Ok(())
    }

    /// Purges every trashed item the caller owns. Per-item atomicity: a
    /// failure is recorded and the batch moves on. Re-invoking on an
    /// empty trash is a no-op.
    #[instrument(skip(self))]
    pub async fn empty_trash(&self, caller_id: Uuid) -> Result<EmptyTrashReportDto> {
        let trashed = self.item_repository.list_trashed(caller_id).await?;
        debug!("Emptying trash for {}: {} items", caller_id, trashed.len());

        let mut report = EmptyTrashReportDto {
            purged: Vec::new(),
            failed: Vec::new(),
        };

        for item in trashed {
            match self.purge_record(&item).await {
                Ok(()) => report.purged.push(item.id()),
                Err(err) => {
                    error!("Failed to purge {} ({}): {}", item.name(), item.id(), err);
                    report.failed.push(PurgeFailureDto {
                        id: item.id(),
                        name: item.name().to_string(),
                        error: err.to_string(),
                    });
                }
            }
        }

        info!(
            "Emptied trash for {}: {} purged, {} failed",
            caller_id,
            report.purged.len(),
            report.failed.len()
        );
        self.activity
            .record(
                ActivityKind::Delete,
                caller_id,
                None,
                format!("Emptied trash ({} items)", report.purged.len()),
            )
            .await;

        Ok(report)
    }
}
