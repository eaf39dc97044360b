use async_trait::async_trait;
use bytes::Bytes;
use uuid::Uuid;

use crate::common::errors::Result;
use crate::domain::entities::account::Account;

/// Secondary port to the identity collaborator. The engine only resolves
/// grantee identifiers and labels comment authors; credentials and
/// sessions never cross this boundary.
#[async_trait]
pub trait AccountResolver: Send + Sync + 'static {
    /// Maps an email address to an account, if one exists
    async fn resolve_email(&self, email: &str) -> Result<Option<Account>>;

    /// Fetches an account by id
    async fn get(&self, id: Uuid) -> Result<Option<Account>>;
}

/// Secondary port to the binary storage backend. The engine stores only
/// metadata (`size_bytes`, `mime_type`, thumbnail references); actual
/// bytes, upload progress and download delivery live behind this port.
/// Blobs are keyed by the owning file's id.
#[async_trait]
pub trait BlobStorage: Send + Sync + 'static {
    async fn put(&self, key: Uuid, content: Bytes) -> Result<()>;

    /// Fails with `NotFound` when no blob exists under `key`
    async fn get(&self, key: Uuid) -> Result<Bytes>;

    /// Removing a missing blob is a no-op
    async fn delete(&self, key: Uuid) -> Result<()>;
}
