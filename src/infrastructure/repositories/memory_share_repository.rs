use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::common::errors::Result;
use crate::domain::entities::share::Share;
use crate::domain::repositories::share_repository::ShareRepository;

/// Share ledger held in memory, keyed by (item, grantee) so the
/// one-row-per-grantee invariant is structural.
pub struct MemoryShareRepository {
    shares: RwLock<HashMap<(Uuid, Uuid), Share>>,
}

impl MemoryShareRepository {
    pub fn new() -> Self {
        Self {
            shares: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryShareRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ShareRepository for MemoryShareRepository {
    async fn upsert(&self, share: Share) -> Result<Share> {
        let mut shares = self.shares.write().await;
        let key = (share.item_id, share.grantee_id);

        let stored = match shares.get(&key) {
            // Keep the original row's identity and grant history; only
            // the level changes. Last write wins.
            Some(existing) => existing.clone().with_permission(share.permission),
            None => share,
        };

        shares.insert(key, stored.clone());
        Ok(stored)
    }

    async fn find(&self, item_id: Uuid, grantee_id: Uuid) -> Result<Option<Share>> {
        let shares = self.shares.read().await;
        Ok(shares.get(&(item_id, grantee_id)).cloned())
    }

    async fn list_for_item(&self, item_id: Uuid) -> Result<Vec<Share>> {
        let shares = self.shares.read().await;
        let mut rows: Vec<Share> = shares
            .values()
            .filter(|share| share.item_id == item_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.granted_at.cmp(&b.granted_at).then(a.id.cmp(&b.id)));
        Ok(rows)
    }

    async fn list_for_grantee(&self, grantee_id: Uuid) -> Result<Vec<Share>> {
        let shares = self.shares.read().await;
        let mut rows: Vec<Share> = shares
            .values()
            .filter(|share| share.grantee_id == grantee_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.granted_at.cmp(&b.granted_at).then(a.id.cmp(&b.id)));
        Ok(rows)
    }

    async fn revoke(&self, item_id: Uuid, grantee_id: Uuid) -> Result<()> {
        let mut shares = self.shares.write().await;
        shares.remove(&(item_id, grantee_id));
        Ok(())
    }

    async fn remove_for_item(&self, item_id: Uuid) -> Result<()> {
        let mut shares = self.shares.write().await;
        shares.retain(|_, share| share.item_id != item_id);
        Ok(())
    }

    async fn snapshot(&self) -> Result<Vec<Share>> {
        let shares = self.shares.read().await;
        Ok(shares.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::share::SharePermission;

    #[tokio::test]
    async fn regrant_updates_instead_of_duplicating() {
        let repo = MemoryShareRepository::new();
        let (item, grantee, owner) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());

        let first = repo
            .upsert(Share::new(item, grantee, SharePermission::Viewer, owner))
            .await
            .unwrap();
        let second = repo
            .upsert(Share::new(item, grantee, SharePermission::Editor, owner))
            .await
            .unwrap();

        assert_eq!(second.id, first.id);
        assert_eq!(second.permission, SharePermission::Editor);
        assert_eq!(repo.list_for_item(item).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn revoking_a_missing_share_is_a_no_op() {
        let repo = MemoryShareRepository::new();
        assert!(repo.revoke(Uuid::new_v4(), Uuid::new_v4()).await.is_ok());
    }
}
