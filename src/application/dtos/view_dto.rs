use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::item_dto::ItemDto;

/// Query parameters for the drive listing endpoint
#[derive(Debug, Default, Deserialize)]
pub struct DriveQueryDto {
    /// One of "drive", "recent", "starred", "shared", "trash";
    /// defaults to "drive"
    pub view: Option<String>,
    /// Folder browsed in the My Drive view (None = root)
    pub folder_id: Option<Uuid>,
    /// Case-insensitive substring filter on names
    pub search: Option<String>,
}

/// Drive listing response, split into folders and files the way the grid
/// renders them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriveListingDto {
    pub folders: Vec<ItemDto>,
    pub files: Vec<ItemDto>,
}

impl DriveListingDto {
    pub fn from_items(items: Vec<ItemDto>) -> Self {
        let (folders, files) = items.into_iter().partition(|item| item.kind == "folder");
        Self { folders, files }
    }
}
