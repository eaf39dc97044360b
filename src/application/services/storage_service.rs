use std::sync::Arc;

use tracing::instrument;
use uuid::Uuid;

use crate::application::dtos::storage_dto::{StorageBreakdownDto, StorageUsageDto};
use crate::common::errors::Result;
use crate::domain::repositories::item_repository::ItemRepository;

/// Application service for the storage gauge. Sums the caller's
/// non-trashed file sizes and buckets them by content type; purely
/// informational, quota is never enforced here.
pub struct StorageService {
    item_repository: Arc<dyn ItemRepository>,
    quota_total_bytes: u64,
}

impl StorageService {
    pub fn new(item_repository: Arc<dyn ItemRepository>, quota_total_bytes: u64) -> Self {
        Self {
            item_repository,
            quota_total_bytes,
        }
    }

    #[instrument(skip(self))]
    pub async fn usage(&self, caller_id: Uuid) -> Result<StorageUsageDto> {
        let items = self.item_repository.snapshot().await?;

        let mut breakdown = StorageBreakdownDto::default();
        let mut used = 0u64;

        for item in items
            .iter()
            .filter(|item| item.owner_id() == caller_id && item.is_file() && !item.trashed())
        {
            let size = item.size_bytes();
            used += size;

            let mime = item.mime_type().unwrap_or("");
            if mime.contains("document")
                || mime.contains("pdf")
                || mime.contains("word")
                || mime.contains("sheet")
            {
                breakdown.documents += size;
            } else if mime.contains("image") {
                breakdown.images += size;
            } else if mime.contains("video") {
                breakdown.videos += size;
            } else {
                breakdown.other += size;
            }
        }

        Ok(StorageUsageDto {
            used,
            total: self.quota_total_bytes,
            breakdown,
        })
    }
}
