pub mod account_dto;
pub mod activity_dto;
pub mod comment_dto;
pub mod item_dto;
pub mod share_dto;
pub mod storage_dto;
pub mod trash_dto;
pub mod view_dto;
