use serde::{Deserialize, Serialize};

/// Per-category byte totals for the storage gauge
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageBreakdownDto {
    pub documents: u64,
    pub images: u64,
    pub videos: u64,
    pub other: u64,
}

/// Storage usage summary for one account. Display-only; the quota is
/// never enforced by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageUsageDto {
    pub used: u64,
    pub total: u64,
    pub breakdown: StorageBreakdownDto,
}
