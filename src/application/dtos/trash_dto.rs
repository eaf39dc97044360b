use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One item that could not be purged during an empty-trash batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurgeFailureDto {
    pub id: Uuid,
    pub name: String,
    pub error: String,
}

/// Outcome of an empty-trash run. The batch never aborts on a single
/// failure; everything purgeable is purged and the rest is reported here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmptyTrashReportDto {
    pub purged: Vec<Uuid>,
    pub failed: Vec<PurgeFailureDto>,
}

impl EmptyTrashReportDto {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}
