use async_trait::async_trait;
use uuid::Uuid;

use crate::common::errors::Result;
use crate::domain::entities::share::Share;

/// Repository contract for the share ledger (primary port).
/// One row per (item, grantee); granting again updates the existing row.
#[async_trait]
pub trait ShareRepository: Send + Sync + 'static {
    /// Inserts the share, or updates the permission of an existing row for
    /// the same (item, grantee). Returns the stored row.
    async fn upsert(&self, share: Share) -> Result<Share>;

    /// Looks up the row for (item, grantee)
    async fn find(&self, item_id: Uuid, grantee_id: Uuid) -> Result<Option<Share>>;

    /// All rows for one item ("people with access")
    async fn list_for_item(&self, item_id: Uuid) -> Result<Vec<Share>>;

    /// All rows granted to one account
    async fn list_for_grantee(&self, grantee_id: Uuid) -> Result<Vec<Share>>;

    /// Removes the row for (item, grantee); a missing row is a no-op, not
    /// an error
    async fn revoke(&self, item_id: Uuid, grantee_id: Uuid) -> Result<()>;

    /// Drops every row referencing an item (purge cascade)
    async fn remove_for_item(&self, item_id: Uuid) -> Result<()>;

    /// Consistent point-in-time copy of the ledger
    async fn snapshot(&self) -> Result<Vec<Share>>;
}
