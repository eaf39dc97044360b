use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::common::errors::{DomainError, Result};
use crate::domain::entities::item::Item;
use crate::domain::repositories::item_repository::ItemRepository;

/// Canonical item store held in memory.
///
/// One map guarded by one `RwLock`: every named mutation is a single
/// read-modify-write under the write guard, so same-item operations
/// serialize and a reader never observes a half-applied entity. Snapshots
/// clone under the read guard, giving the projector a consistent
/// point-in-time copy.
pub struct MemoryItemRepository {
    items: RwLock<HashMap<Uuid, Item>>,
}

impl MemoryItemRepository {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(HashMap::new()),
        }
    }

    /// Parent must resolve to a live folder. Callers hold the lock.
    fn check_parent(items: &HashMap<Uuid, Item>, parent_id: Uuid) -> Result<()> {
        match items.get(&parent_id) {
            None => Err(DomainError::invalid_parent(format!(
                "Parent folder not found: {}",
                parent_id
            ))),
            Some(parent) if !parent.is_folder() => Err(DomainError::invalid_parent(format!(
                "Parent {} is a file",
                parent_id
            ))),
            Some(parent) if parent.trashed() => Err(DomainError::invalid_parent(format!(
                "Parent folder {} is in the trash",
                parent_id
            ))),
            Some(_) => Ok(()),
        }
    }

    /// True when `candidate` is `item_id` or one of its descendants,
    /// walking ancestor links from `candidate` upwards. A broken link
    /// terminates the walk; a dangling subtree cannot contain a live
    /// ancestor chain back to `item_id`.
    fn is_self_or_descendant(items: &HashMap<Uuid, Item>, item_id: Uuid, candidate: Uuid) -> bool {
        let mut current = Some(candidate);
        let mut visited = HashSet::new();

        while let Some(id) = current {
            if id == item_id {
                return true;
            }
            if !visited.insert(id) {
                break;
            }
            current = items.get(&id).and_then(|item| item.parent_id());
        }

        false
    }
}

impl Default for MemoryItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemRepository for MemoryItemRepository {
    async fn insert(&self, item: Item) -> Result<Item> {
        let mut items = self.items.write().await;

        if let Some(parent_id) = item.parent_id() {
            Self::check_parent(&items, parent_id)?;
        }

        items.insert(item.id(), item.clone());
        Ok(item)
    }

    async fn get(&self, id: Uuid) -> Result<Item> {
        let items = self.items.read().await;
        items
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("Item", id.to_string()))
    }

    async fn list_children(
        &self,
        owner_id: Option<Uuid>,
        parent_id: Option<Uuid>,
        include_trashed: bool,
    ) -> Result<Vec<Item>> {
        let items = self.items.read().await;
        let mut children: Vec<Item> = items
            .values()
            .filter(|item| item.parent_id() == parent_id)
            .filter(|item| owner_id.is_none_or(|owner| item.owner_id() == owner))
            .filter(|item| include_trashed || !item.trashed())
            .cloned()
            .collect();
        children.sort_by(|a, b| a.id().cmp(&b.id()));
        Ok(children)
    }

    async fn resolve_path(&self, id: Uuid) -> Result<Vec<Item>> {
        let items = self.items.read().await;

        let item = items
            .get(&id)
            .ok_or_else(|| DomainError::not_found("Item", id.to_string()))?;

        let mut ancestors = Vec::new();
        let mut visited = HashSet::new();
        let mut current = item.parent_id();

        while let Some(parent_id) = current {
            // Invariants keep the tree acyclic; the guard is a defensive
            // check so a corrupted map cannot loop the walk
            if !visited.insert(parent_id) {
                return Err(DomainError::internal_error(
                    "Item",
                    format!("Ancestor cycle detected at {}", parent_id),
                ));
            }

            let parent = items
                .get(&parent_id)
                .ok_or_else(|| DomainError::broken_chain(parent_id.to_string()))?;
            ancestors.push(parent.clone());
            current = parent.parent_id();
        }

        ancestors.reverse();
        Ok(ancestors)
    }

    async fn move_item(&self, id: Uuid, new_parent_id: Option<Uuid>) -> Result<Item> {
        let mut items = self.items.write().await;

        if !items.contains_key(&id) {
            return Err(DomainError::not_found("Item", id.to_string()));
        }

        if let Some(parent_id) = new_parent_id {
            Self::check_parent(&items, parent_id)?;
            if Self::is_self_or_descendant(&items, id, parent_id) {
                return Err(DomainError::cycle_detected(id.to_string()));
            }
        }

        let moved = items[&id].with_parent(new_parent_id);
        items.insert(id, moved.clone());
        Ok(moved)
    }

    async fn rename(&self, id: Uuid, new_name: String) -> Result<Item> {
        let mut items = self.items.write().await;

        let item = items
            .get(&id)
            .ok_or_else(|| DomainError::not_found("Item", id.to_string()))?;
        let renamed = item
            .with_name(new_name)
            .map_err(|e| DomainError::validation_error("Item", e.to_string()))?;

        items.insert(id, renamed.clone());
        Ok(renamed)
    }

    async fn toggle_star(&self, id: Uuid) -> Result<Item> {
        let mut items = self.items.write().await;

        let item = items
            .get(&id)
            .ok_or_else(|| DomainError::not_found("Item", id.to_string()))?;
        let toggled = item.with_star_toggled();

        items.insert(id, toggled.clone());
        Ok(toggled)
    }

    async fn trash(&self, id: Uuid) -> Result<Item> {
        let mut items = self.items.write().await;

        let item = items
            .get(&id)
            .ok_or_else(|| DomainError::not_found("Item", id.to_string()))?;
        let trashed = item.with_trashed(true);

        items.insert(id, trashed.clone());
        Ok(trashed)
    }

    async fn restore(&self, id: Uuid) -> Result<Item> {
        let mut items = self.items.write().await;

        let item = items
            .get(&id)
            .ok_or_else(|| DomainError::not_found("Item", id.to_string()))?;
        if !item.trashed() {
            return Err(DomainError::not_trashed(id.to_string()));
        }
        let restored = item.with_trashed(false);

        items.insert(id, restored.clone());
        Ok(restored)
    }

    async fn mark_opened(&self, id: Uuid) -> Result<Item> {
        let mut items = self.items.write().await;

        let item = items
            .get(&id)
            .ok_or_else(|| DomainError::not_found("Item", id.to_string()))?;
        if !item.is_file() {
            return Err(
                DomainError::unsupported_target("Item", "Folders cannot be opened")
                    .with_id(id.to_string()),
            );
        }
        let opened = item.with_opened_now();

        items.insert(id, opened.clone());
        Ok(opened)
    }

    async fn remove(&self, id: Uuid) -> Result<Item> {
        let mut items = self.items.write().await;
        items
            .remove(&id)
            .ok_or_else(|| DomainError::not_found("Item", id.to_string()))
    }

    async fn list_trashed(&self, owner_id: Uuid) -> Result<Vec<Item>> {
        let items = self.items.read().await;
        let mut trashed: Vec<Item> = items
            .values()
            .filter(|item| item.owner_id() == owner_id && item.trashed())
            .cloned()
            .collect();
        trashed.sort_by(|a, b| a.id().cmp(&b.id()));
        Ok(trashed)
    }

    async fn list_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Item>> {
        let items = self.items.read().await;
        Ok(ids.iter().filter_map(|id| items.get(id).cloned()).collect())
    }

    async fn snapshot(&self) -> Result<Vec<Item>> {
        let items = self.items.read().await;
        Ok(items.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::errors::ErrorKind;

    async fn folder(repo: &MemoryItemRepository, name: &str, parent: Option<Uuid>, owner: Uuid) -> Item {
        repo.insert(Item::new_folder(name.to_string(), parent, owner).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn insert_rejects_trashed_or_file_parents() {
        let repo = MemoryItemRepository::new();
        let owner = Uuid::new_v4();

        let parent = folder(&repo, "parent", None, owner).await;
        repo.trash(parent.id()).await.unwrap();

        let child = Item::new_folder("child".to_string(), Some(parent.id()), owner).unwrap();
        let err = repo.insert(child).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidParent);

        let file = repo
            .insert(
                Item::new_file("f.txt".to_string(), None, owner, "text/plain".to_string(), 1, None)
                    .unwrap(),
            )
            .await
            .unwrap();
        let under_file = Item::new_folder("x".to_string(), Some(file.id()), owner).unwrap();
        let err = repo.insert(under_file).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidParent);
    }

    #[tokio::test]
    async fn move_into_own_descendant_is_rejected() {
        let repo = MemoryItemRepository::new();
        let owner = Uuid::new_v4();

        let a = folder(&repo, "a", None, owner).await;
        let b = folder(&repo, "b", Some(a.id()), owner).await;
        let c = folder(&repo, "c", Some(b.id()), owner).await;

        let err = repo.move_item(a.id(), Some(c.id())).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::CycleDetected);

        let err = repo.move_item(a.id(), Some(a.id())).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::CycleDetected);

        // Sibling moves stay legal, and the tree stays acyclic afterwards
        repo.move_item(c.id(), Some(a.id())).await.unwrap();
        let path = repo.resolve_path(c.id()).await.unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path[0].id(), a.id());
    }

    #[tokio::test]
    async fn resolve_path_reports_broken_chain_after_parent_purge() {
        let repo = MemoryItemRepository::new();
        let owner = Uuid::new_v4();

        let parent = folder(&repo, "parent", None, owner).await;
        let child = folder(&repo, "child", Some(parent.id()), owner).await;

        repo.remove(parent.id()).await.unwrap();
        let err = repo.resolve_path(child.id()).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::BrokenChain);
    }

    #[tokio::test]
    async fn restore_requires_trashed_state() {
        let repo = MemoryItemRepository::new();
        let owner = Uuid::new_v4();

        let item = folder(&repo, "active", None, owner).await;
        let err = repo.restore(item.id()).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotTrashed);

        repo.trash(item.id()).await.unwrap();
        let restored = repo.restore(item.id()).await.unwrap();
        assert!(!restored.trashed());
    }

    #[tokio::test]
    async fn remove_twice_reports_not_found() {
        let repo = MemoryItemRepository::new();
        let owner = Uuid::new_v4();

        let item = folder(&repo, "gone", None, owner).await;
        repo.remove(item.id()).await.unwrap();
        let err = repo.remove(item.id()).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn root_listing_is_owner_scoped_and_folder_listing_is_not() {
        let repo = MemoryItemRepository::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        let shared = folder(&repo, "shared", None, alice).await;
        folder(&repo, "mine", None, bob).await;
        // Editor upload: Bob's file living inside Alice's folder
        repo.insert(
            Item::new_file("note.txt".to_string(), Some(shared.id()), bob, "text/plain".to_string(), 1, None)
                .unwrap(),
        )
        .await
        .unwrap();

        let alice_root = repo.list_children(Some(alice), None, false).await.unwrap();
        assert_eq!(alice_root.len(), 1);

        let contents = repo.list_children(None, Some(shared.id()), false).await.unwrap();
        assert_eq!(contents.len(), 1);
        assert_eq!(contents[0].owner_id(), bob);
    }
}
