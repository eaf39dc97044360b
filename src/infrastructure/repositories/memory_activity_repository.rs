use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::common::errors::Result;
use crate::domain::entities::activity::Activity;
use crate::domain::repositories::activity_repository::ActivityRepository;

/// Append-only activity feed held in memory
pub struct MemoryActivityRepository {
    entries: RwLock<Vec<Activity>>,
}

impl MemoryActivityRepository {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryActivityRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActivityRepository for MemoryActivityRepository {
    async fn append(&self, activity: Activity) -> Result<Activity> {
        let mut entries = self.entries.write().await;
        entries.push(activity.clone());
        Ok(activity)
    }

    async fn list_recent(&self, actor_id: Uuid, limit: usize, offset: usize) -> Result<Vec<Activity>> {
        let entries = self.entries.read().await;
        Ok(entries
            .iter()
            .rev()
            .filter(|entry| entry.actor_id == actor_id)
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::activity::ActivityKind;

    #[tokio::test]
    async fn feed_pages_newest_first() {
        let repo = MemoryActivityRepository::new();
        let actor = Uuid::new_v4();

        for i in 0..5 {
            repo.append(Activity::new(
                ActivityKind::Edit,
                actor,
                None,
                format!("edit {}", i),
            ))
            .await
            .unwrap();
        }

        let page = repo.list_recent(actor, 2, 1).await.unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].description, "edit 3");
        assert_eq!(page[1].description, "edit 2");
    }
}
