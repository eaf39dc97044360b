pub mod access_control;
pub mod activity_service;
pub mod attribute_service;
pub mod comment_service;
pub mod hierarchy_service;
pub mod lifecycle_service;
pub mod share_service;
pub mod storage_service;
pub mod view_service;

#[cfg(test)]
mod lifecycle_service_test;

pub use access_control::AccessControl;
pub use activity_service::ActivityService;
pub use attribute_service::AttributeService;
pub use comment_service::CommentService;
pub use hierarchy_service::HierarchyService;
pub use lifecycle_service::LifecycleService;
pub use share_service::ShareService;
pub use storage_service::StorageService;
pub use view_service::ViewService;
