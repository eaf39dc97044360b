use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::application::ports::outbound::BlobStorage;
use crate::common::errors::{DomainError, Result};

/// In-memory adapter for the binary storage collaborator. `Bytes` makes
/// reads cheap clones of the stored buffer.
pub struct MemoryBlobStore {
    blobs: RwLock<HashMap<Uuid, Bytes>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self {
            blobs: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryBlobStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlobStorage for MemoryBlobStore {
    async fn put(&self, key: Uuid, content: Bytes) -> Result<()> {
        let mut blobs = self.blobs.write().await;
        blobs.insert(key, content);
        Ok(())
    }

    async fn get(&self, key: Uuid) -> Result<Bytes> {
        let blobs = self.blobs.read().await;
        blobs
            .get(&key)
            .cloned()
            .ok_or_else(|| DomainError::not_found("Blob", key.to_string()))
    }

    async fn delete(&self, key: Uuid) -> Result<()> {
        let mut blobs = self.blobs.write().await;
        blobs.remove(&key);
        Ok(())
    }
}
