use std::sync::Arc;

use crate::application::services::{
    AccessControl, ActivityService, AttributeService, CommentService, HierarchyService,
    LifecycleService, ShareService, StorageService, ViewService,
};
use crate::common::config::AppConfig;
use crate::infrastructure::repositories::{
    MemoryActivityRepository, MemoryCommentRepository, MemoryItemRepository, MemoryShareRepository,
};
use crate::infrastructure::services::{DirectoryAccountResolver, MemoryBlobStore};

/// Shared application state handed to every handler. Services are wired
/// once at startup; cloning the state clones `Arc`s only.
#[derive(Clone)]
pub struct AppState {
    pub hierarchy_service: Arc<HierarchyService>,
    pub lifecycle_service: Arc<LifecycleService>,
    pub attribute_service: Arc<AttributeService>,
    pub share_service: Arc<ShareService>,
    pub comment_service: Arc<CommentService>,
    pub view_service: Arc<ViewService>,
    pub storage_service: Arc<StorageService>,
    pub activity_service: Arc<ActivityService>,
    pub directory: Arc<DirectoryAccountResolver>,
    pub config: AppConfig,
}

impl AppState {
    /// Assembles the full dependency graph over in-memory adapters
    pub fn assemble(config: AppConfig) -> Self {
        let item_repository = Arc::new(MemoryItemRepository::new());
        let share_repository = Arc::new(MemoryShareRepository::new());
        let comment_repository = Arc::new(MemoryCommentRepository::new());
        let activity_repository = Arc::new(MemoryActivityRepository::new());
        let blob_storage = Arc::new(MemoryBlobStore::new());
        let directory = Arc::new(DirectoryAccountResolver::new());

        let access = Arc::new(AccessControl::new(share_repository.clone()));
        let activity_service = Arc::new(ActivityService::new(
            activity_repository,
            config.views.activity_page_size,
        ));

        let hierarchy_service = Arc::new(HierarchyService::new(
            item_repository.clone(),
            blob_storage.clone(),
            access.clone(),
            activity_service.clone(),
        ));
        let lifecycle_service = Arc::new(LifecycleService::new(
            item_repository.clone(),
            share_repository.clone(),
            comment_repository.clone(),
            blob_storage,
            access.clone(),
            activity_service.clone(),
        ));
        let attribute_service = Arc::new(AttributeService::new(
            item_repository.clone(),
            access.clone(),
            activity_service.clone(),
        ));
        let share_service = Arc::new(ShareService::new(
            item_repository.clone(),
            share_repository.clone(),
            directory.clone(),
            access.clone(),
            activity_service.clone(),
        ));
        let comment_service = Arc::new(CommentService::new(
            item_repository.clone(),
            comment_repository,
            directory.clone(),
            access,
            activity_service.clone(),
        ));
        let view_service = Arc::new(ViewService::new(
            item_repository.clone(),
            share_repository,
            config.views.recent_limit,
        ));
        let storage_service = Arc::new(StorageService::new(
            item_repository,
            config.storage.quota_total_bytes,
        ));

        Self {
            hierarchy_service,
            lifecycle_service,
            attribute_service,
            share_service,
            comment_service,
            view_service,
            storage_service,
            activity_service,
            directory,
            config,
        }
    }
}
