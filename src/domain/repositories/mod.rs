pub mod activity_repository;
pub mod comment_repository;
pub mod item_repository;
pub mod share_repository;
