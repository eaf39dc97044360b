pub mod application;
pub mod common;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub use application::services::{
    AccessControl, ActivityService, AttributeService, CommentService, HierarchyService,
    LifecycleService, ShareService, StorageService, ViewService,
};
pub use common::config::AppConfig;
pub use common::di::AppState;
pub use common::errors::{DomainError, ErrorKind};
pub use infrastructure::repositories::{
    MemoryActivityRepository, MemoryCommentRepository, MemoryItemRepository, MemoryShareRepository,
};
pub use infrastructure::services::{DirectoryAccountResolver, MemoryBlobStore};
pub use interfaces::api::routes::create_api_routes;
