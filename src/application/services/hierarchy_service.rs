use std::sync::Arc;

use bytes::Bytes;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::application::dtos::item_dto::{CreateFolderDto, ItemDto, PathSegmentDto};
use crate::application::ports::outbound::BlobStorage;
use crate::application::services::access_control::AccessControl;
use crate::application::services::activity_service::ActivityService;
use crate::common::errors::{DomainError, Result};
use crate::domain::entities::activity::ActivityKind;
use crate::domain::entities::item::Item;
use crate::domain::repositories::item_repository::ItemRepository;

/// Application service for the folder tree: creation, upload, moves,
/// path resolution and listings.
pub struct HierarchyService {
    item_repository: Arc<dyn ItemRepository>,
    blob_storage: Arc<dyn BlobStorage>,
    access: Arc<AccessControl>,
    activity: Arc<ActivityService>,
}

impl HierarchyService {
    pub fn new(
        item_repository: Arc<dyn ItemRepository>,
        blob_storage: Arc<dyn BlobStorage>,
        access: Arc<AccessControl>,
        activity: Arc<ActivityService>,
    ) -> Self {
        Self {
            item_repository,
            blob_storage,
            access,
            activity,
        }
    }

    /// Callers may create inside a folder they own or hold editor access
    /// on; the parent itself must be a live (non-trashed) folder, which
    /// the repository re-checks under its own lock.
    async fn ensure_can_create_in(&self, parent_id: Option<Uuid>, caller_id: Uuid) -> Result<()> {
        let Some(parent_id) = parent_id else {
            return Ok(());
        };

        let parent = self.item_repository.get(parent_id).await.map_err(|err| {
            match err.kind {
                crate::common::errors::ErrorKind::NotFound => {
                    DomainError::invalid_parent(format!("Parent folder not found: {}", parent_id))
                }
                _ => err,
            }
        })?;

        if !parent.is_folder() || parent.trashed() {
            return Err(DomainError::invalid_parent(format!(
                "Parent {} is not an active folder",
                parent_id
            )));
        }

        self.access.ensure_edit(&parent, caller_id).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn create_folder(&self, caller_id: Uuid, dto: CreateFolderDto) -> Result<ItemDto> {
        self.ensure_can_create_in(dto.parent_id, caller_id).await?;

        let folder = Item::new_folder(dto.name, dto.parent_id, caller_id)
            .map_err(|e| DomainError::validation_error("Item", e.to_string()))?;
        let folder = self.item_repository.insert(folder).await?;

        info!("Created folder {} ({})", folder.name(), folder.id());
        self.activity
            .record(
                ActivityKind::Upload,
                caller_id,
                Some(folder.id()),
                format!("Created folder {}", folder.name()),
            )
            .await;

        Ok(ItemDto::from(folder))
    }

    #[instrument(skip(self, content))]
    pub async fn upload_file(
        &self,
        caller_id: Uuid,
        name: String,
        parent_id: Option<Uuid>,
        mime_type: Option<String>,
        content: Bytes,
    ) -> Result<ItemDto> {
        self.ensure_can_create_in(parent_id, caller_id).await?;

        let mime_type = mime_type
            .unwrap_or_else(|| mime_guess::from_path(&name).first_or_octet_stream().to_string());
        let size_bytes = content.len() as u64;

        let file = Item::new_file(name, parent_id, caller_id, mime_type, size_bytes, None)
            .map_err(|e| DomainError::validation_error("Item", e.to_string()))?;
        let file = self.item_repository.insert(file).await?;
        self.blob_storage.put(file.id(), content).await?;

        info!("Uploaded file {} ({}, {} bytes)", file.name(), file.id(), size_bytes);
        self.activity
            .record(
                ActivityKind::Upload,
                caller_id,
                Some(file.id()),
                format!("Uploaded {}", file.name()),
            )
            .await;

        Ok(ItemDto::from(file))
    }

    /// Returns a file's metadata and content, stamping `last_opened`
    #[instrument(skip(self))]
    pub async fn open_file(&self, caller_id: Uuid, file_id: Uuid) -> Result<(ItemDto, Bytes)> {
        let item = self.item_repository.get(file_id).await?;
        self.access.ensure_read(&item, caller_id).await?;

        if !item.is_file() {
            return Err(DomainError::unsupported_target(
                "Item",
                "Folders have no content to download",
            )
            .with_id(file_id.to_string()));
        }

        let item = self.item_repository.mark_opened(file_id).await?;
        let content = self.blob_storage.get(file_id).await?;

        debug!("Opened file {} ({} bytes)", file_id, content.len());
        Ok((ItemDto::from(item), content))
    }

    #[instrument(skip(self))]
    pub async fn move_item(
        &self,
        caller_id: Uuid,
        item_id: Uuid,
        new_parent_id: Option<Uuid>,
    ) -> Result<ItemDto> {
        let item = self.item_repository.get(item_id).await?;
        self.access.ensure_manage(&item, caller_id).await?;

        if let Some(parent_id) = new_parent_id {
            let parent = self.item_repository.get(parent_id).await?;
            self.access.ensure_edit(&parent, caller_id).await?;
        }

        let moved = self.item_repository.move_item(item_id, new_parent_id).await?;
        debug!("Moved item {} under {:?}", item_id, new_parent_id);
        Ok(ItemDto::from(moved))
    }

    /// Breadcrumb for an item: its ancestor folders, root first
    #[instrument(skip(self))]
    pub async fn resolve_path(&self, caller_id: Uuid, item_id: Uuid) -> Result<Vec<PathSegmentDto>> {
        let item = self.item_repository.get(item_id).await?;
        self.access.ensure_read(&item, caller_id).await?;

        let ancestors = self.item_repository.resolve_path(item_id).await?;
        Ok(ancestors.into_iter().map(PathSegmentDto::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn list_children(
        &self,
        caller_id: Uuid,
        parent_id: Option<Uuid>,
        include_trashed: bool,
    ) -> Result<Vec<ItemDto>> {
        let owner_scope = match parent_id {
            // Root listings are per-account; a folder's contents are
            // listed whole once the caller can read the folder.
            None => Some(caller_id),
            Some(parent_id) => {
                let parent = self.item_repository.get(parent_id).await?;
                self.access.ensure_read(&parent, caller_id).await?;
                None
            }
        };

        let children = self
            .item_repository
            .list_children(owner_scope, parent_id, include_trashed)
            .await?;
        Ok(children.into_iter().map(ItemDto::from).collect())
    }
}
