use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Error in the creation or manipulation of items
#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error("Invalid item name: {0:?}")]
    InvalidName(String),
}

/// Result type for item entity operations
pub type ItemResult<T> = Result<T, ItemError>;

/// Kind-specific data. A folder carries nothing beyond the common fields;
/// a file carries its content metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemKind {
    Folder,
    File {
        /// Content type as reported or guessed at upload
        mime_type: String,
        /// Content length in bytes
        size_bytes: u64,
        /// Opaque reference into the blob storage backend
        thumbnail_ref: Option<String>,
        /// Last time the content was downloaded or previewed
        last_opened: Option<DateTime<Utc>>,
    },
}

/// A folder or file: the unit of hierarchy, trashing, starring and sharing.
///
/// Items never mutate in place; every change goes through a `with_*`
/// constructor that stamps `modified`, so invariants hold wherever the
/// value travels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, shared namespace across folders and files
    id: Uuid,

    /// Display name
    name: String,

    /// Owning account
    owner_id: Uuid,

    /// Parent folder (None = root level)
    parent_id: Option<Uuid>,

    /// Creation timestamp
    created: DateTime<Utc>,

    /// Last mutation timestamp
    modified: DateTime<Utc>,

    /// User-toggled star flag
    starred: bool,

    /// Soft-delete flag; true means "in trash", not yet purged
    trashed: bool,

    #[serde(flatten)]
    kind: ItemKind,
}

fn validate_name(name: &str) -> ItemResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed.contains('/') || trimmed.contains('\\') {
        return Err(ItemError::InvalidName(name.to_string()));
    }
    Ok(trimmed.to_string())
}

impl Item {
    /// Creates a new folder at the given parent
    pub fn new_folder(name: String, parent_id: Option<Uuid>, owner_id: Uuid) -> ItemResult<Self> {
        let name = validate_name(&name)?;
        let now = Utc::now();

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            owner_id,
            parent_id,
            created: now,
            modified: now,
            starred: false,
            trashed: false,
            kind: ItemKind::Folder,
        })
    }

    /// Creates a new file record; content bytes live in the blob backend
    pub fn new_file(
        name: String,
        parent_id: Option<Uuid>,
        owner_id: Uuid,
        mime_type: String,
        size_bytes: u64,
        thumbnail_ref: Option<String>,
    ) -> ItemResult<Self> {
        let name = validate_name(&name)?;
        let now = Utc::now();

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            owner_id,
            parent_id,
            created: now,
            modified: now,
            starred: false,
            trashed: false,
            kind: ItemKind::File {
                mime_type,
                size_bytes,
                thumbnail_ref,
                last_opened: None,
            },
        })
    }

    // Getters

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn owner_id(&self) -> Uuid {
        self.owner_id
    }

    pub fn parent_id(&self) -> Option<Uuid> {
        self.parent_id
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    pub fn modified(&self) -> DateTime<Utc> {
        self.modified
    }

    pub fn starred(&self) -> bool {
        self.starred
    }

    pub fn trashed(&self) -> bool {
        self.trashed
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    pub fn is_folder(&self) -> bool {
        matches!(self.kind, ItemKind::Folder)
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, ItemKind::File { .. })
    }

    pub fn mime_type(&self) -> Option<&str> {
        match &self.kind {
            ItemKind::Folder => None,
            ItemKind::File { mime_type, .. } => Some(mime_type),
        }
    }

    pub fn size_bytes(&self) -> u64 {
        match &self.kind {
            ItemKind::Folder => 0,
            ItemKind::File { size_bytes, .. } => *size_bytes,
        }
    }

    pub fn thumbnail_ref(&self) -> Option<&str> {
        match &self.kind {
            ItemKind::Folder => None,
            ItemKind::File { thumbnail_ref, .. } => thumbnail_ref.as_deref(),
        }
    }

    pub fn last_opened(&self) -> Option<DateTime<Utc>> {
        match &self.kind {
            ItemKind::Folder => None,
            ItemKind::File { last_opened, .. } => *last_opened,
        }
    }

    // Mutation constructors

    /// New version with an updated name
    pub fn with_name(&self, new_name: String) -> ItemResult<Self> {
        let name = validate_name(&new_name)?;

        Ok(Self {
            name,
            modified: Utc::now(),
            ..self.clone()
        })
    }

    /// New version under a different parent
    pub fn with_parent(&self, parent_id: Option<Uuid>) -> Self {
        Self {
            parent_id,
            modified: Utc::now(),
            ..self.clone()
        }
    }

    /// New version with the star flag flipped. Each call flips; two calls
    /// return to the original value.
    pub fn with_star_toggled(&self) -> Self {
        Self {
            starred: !self.starred,
            modified: Utc::now(),
            ..self.clone()
        }
    }

    /// New version with the trash flag set
    pub fn with_trashed(&self, trashed: bool) -> Self {
        Self {
            trashed,
            modified: Utc::now(),
            ..self.clone()
        }
    }

    /// New version with `last_opened` stamped to now. Does not touch
    /// `modified`, so opening a file never reorders the Starred or Trash
    /// views. No-op on folders.
    pub fn with_opened_now(&self) -> Self {
        let kind = match &self.kind {
            ItemKind::Folder => ItemKind::Folder,
            ItemKind::File {
                mime_type,
                size_bytes,
                thumbnail_ref,
                ..
            } => ItemKind::File {
                mime_type: mime_type.clone(),
                size_bytes: *size_bytes,
                thumbnail_ref: thumbnail_ref.clone(),
                last_opened: Some(Utc::now()),
            },
        };

        Self {
            kind,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folder_creation_with_valid_name() {
        let folder = Item::new_folder("Work".to_string(), None, Uuid::new_v4());
        assert!(folder.is_ok());
        let folder = folder.unwrap();
        assert!(folder.is_folder());
        assert!(!folder.trashed());
        assert!(!folder.starred());
    }

    #[test]
    fn name_trimming_to_empty_is_rejected() {
        let owner = Uuid::new_v4();
        assert!(Item::new_folder("   ".to_string(), None, owner).is_err());
        assert!(Item::new_folder("a/b".to_string(), None, owner).is_err());
    }

    #[test]
    fn rename_keeps_id_and_updates_modified() {
        let file = Item::new_file(
            "old.txt".to_string(),
            None,
            Uuid::new_v4(),
            "text/plain".to_string(),
            42,
            None,
        )
        .unwrap();

        let renamed = file.with_name("new.txt".to_string()).unwrap();
        assert_eq!(renamed.id(), file.id());
        assert_eq!(renamed.name(), "new.txt");
        assert!(renamed.modified() >= file.modified());

        match file.with_name("  ".to_string()) {
            Err(ItemError::InvalidName(_)) => (),
            _ => panic!("Expected InvalidName error"),
        }
    }

    #[test]
    fn star_toggle_is_an_involution() {
        let folder = Item::new_folder("Docs".to_string(), None, Uuid::new_v4()).unwrap();
        let once = folder.with_star_toggled();
        let twice = once.with_star_toggled();
        assert!(once.starred());
        assert_eq!(twice.starred(), folder.starred());
    }

    #[test]
    fn opening_a_file_leaves_modified_untouched() {
        let file = Item::new_file(
            "report.pdf".to_string(),
            None,
            Uuid::new_v4(),
            "application/pdf".to_string(),
            1000,
            None,
        )
        .unwrap();

        let opened = file.with_opened_now();
        assert!(opened.last_opened().is_some());
        assert_eq!(opened.modified(), file.modified());
    }
}
