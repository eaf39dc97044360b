pub mod memory_activity_repository;
pub mod memory_comment_repository;
pub mod memory_item_repository;
pub mod memory_share_repository;

pub use memory_activity_repository::MemoryActivityRepository;
pub use memory_comment_repository::MemoryCommentRepository;
pub use memory_item_repository::MemoryItemRepository;
pub use memory_share_repository::MemoryShareRepository;
