use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::item::{Item, ItemKind};

/// DTO for folder creation requests
#[derive(Debug, Deserialize)]
pub struct CreateFolderDto {
    /// Name of the folder to create
    pub name: String,

    /// Parent folder ID (None for root level)
    pub parent_id: Option<Uuid>,
}

/// DTO for item update requests (PATCH semantics: absent fields are left
/// alone; `parent_id: null` explicitly moves to root)
#[derive(Debug, Default, Deserialize)]
pub struct UpdateItemDto {
    pub name: Option<String>,

    #[serde(default, with = "optional_field")]
    pub parent_id: Option<Option<Uuid>>,
}

/// Distinguishes "field absent" from "field set to null" for PATCH bodies
mod optional_field {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}

/// DTO for item responses, flattening the folder/file union the way the
/// web client expects it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDto {
    pub id: Uuid,
    pub name: String,
    /// "folder" or "file"
    pub kind: String,
    pub parent_id: Option<Uuid>,
    pub owner_id: Uuid,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    pub starred: bool,
    pub trashed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_opened: Option<DateTime<Utc>>,
}

impl From<Item> for ItemDto {
    fn from(item: Item) -> Self {
        let (kind, mime_type, size_bytes, thumbnail_ref, last_opened) = match item.kind() {
            ItemKind::Folder => ("folder".to_string(), None, None, None, None),
            ItemKind::File {
                mime_type,
                size_bytes,
                thumbnail_ref,
                last_opened,
            } => (
                "file".to_string(),
                Some(mime_type.clone()),
                Some(*size_bytes),
                thumbnail_ref.clone(),
                *last_opened,
            ),
        };

        Self {
            id: item.id(),
            name: item.name().to_string(),
            kind,
            parent_id: item.parent_id(),
            owner_id: item.owner_id(),
            created: item.created(),
            modified: item.modified(),
            starred: item.starred(),
            trashed: item.trashed(),
            mime_type,
            size_bytes,
            thumbnail_ref,
            last_opened,
        }
    }
}

/// One breadcrumb segment of a resolved path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathSegmentDto {
    pub id: Uuid,
    pub name: String,
}

impl From<Item> for PathSegmentDto {
    fn from(item: Item) -> Self {
        Self {
            id: item.id(),
            name: item.name().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_body_distinguishes_absent_from_null_parent() {
        let absent: UpdateItemDto = serde_json::from_str(r#"{"name":"x"}"#).unwrap();
        assert!(absent.parent_id.is_none());

        let to_root: UpdateItemDto = serde_json::from_str(r#"{"parent_id":null}"#).unwrap();
        assert_eq!(to_root.parent_id, Some(None));

        let id = Uuid::new_v4();
        let to_folder: UpdateItemDto =
            serde_json::from_str(&format!(r#"{{"parent_id":"{}"}}"#, id)).unwrap();
        assert_eq!(to_folder.parent_id, Some(Some(id)));
    }

    #[test]
    fn folder_dto_omits_file_fields() {
        let folder = Item::new_folder("Docs".to_string(), None, Uuid::new_v4()).unwrap();
        let dto = ItemDto::from(folder);
        assert_eq!(dto.kind, "folder");
        assert!(dto.mime_type.is_none());
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("mime_type").is_none());
    }
}
