use async_trait::async_trait;
use uuid::Uuid;

use crate::common::errors::Result;
use crate::domain::entities::item::Item;

/// Repository contract for the canonical item set (primary port).
///
/// Every mutation is one named operation so the store can apply it
/// atomically; callers never edit fields in place. Operations on the same
/// item serialize inside the implementation.
#[async_trait]
pub trait ItemRepository: Send + Sync + 'static {
    /// Inserts a new item, validating its parent reference. Fails with
    /// `InvalidParent` when the parent is missing, is a file, or is trashed.
    async fn insert(&self, item: Item) -> Result<Item>;

    /// Fetches an item by id
    async fn get(&self, id: Uuid) -> Result<Item>;

    /// Lists the direct children of a folder (None = root level),
    /// optionally restricted to one owner and optionally including
    /// trashed entries. Root listings are always owner-scoped by callers;
    /// a folder's contents are listed whole.
    async fn list_children(
        &self,
        owner_id: Option<Uuid>,
        parent_id: Option<Uuid>,
        include_trashed: bool,
    ) -> Result<Vec<Item>>;

    /// Walks `parent_id` links and returns the ancestor folders, root
    /// first. Fails with `BrokenChain` when a referenced parent no longer
    /// exists (dangling reference left by a folder purge).
    async fn resolve_path(&self, id: Uuid) -> Result<Vec<Item>>;

    /// Reparents an item. Fails with `CycleDetected` when the destination
    /// is the item itself or one of its descendants, and `InvalidParent`
    /// when the destination is not a usable folder.
    async fn move_item(&self, id: Uuid, new_parent_id: Option<Uuid>) -> Result<Item>;

    /// Renames an item; empty names are rejected with `InvalidInput`
    async fn rename(&self, id: Uuid, new_name: String) -> Result<Item>;

    /// Flips the star flag
    async fn toggle_star(&self, id: Uuid) -> Result<Item>;

    /// Active -> Trashed
    async fn trash(&self, id: Uuid) -> Result<Item>;

    /// Trashed -> Active; fails with `NotTrashed` on an active item
    async fn restore(&self, id: Uuid) -> Result<Item>;

    /// Stamps `last_opened` on a file; `UnsupportedTarget` on a folder
    async fn mark_opened(&self, id: Uuid) -> Result<Item>;

    /// Removes the record permanently and returns it. Children are left in
    /// place with a dangling `parent_id`.
    async fn remove(&self, id: Uuid) -> Result<Item>;

    /// All trashed items owned by `owner_id`
    async fn list_trashed(&self, owner_id: Uuid) -> Result<Vec<Item>>;

    /// Fetches the subset of `ids` that still exist, in input order
    async fn list_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Item>>;

    /// Consistent point-in-time copy of the whole item set, for the view
    /// projector and storage accounting
    async fn snapshot(&self) -> Result<Vec<Item>>;
}
