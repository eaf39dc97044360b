use std::sync::Arc;

use tracing::{debug, instrument};
use uuid::Uuid;

use crate::application::dtos::item_dto::ItemDto;
use crate::application::services::access_control::AccessControl;
use crate::application::services::activity_service::ActivityService;
use crate::common::errors::Result;
use crate::domain::entities::activity::ActivityKind;
use crate::domain::repositories::item_repository::ItemRepository;

/// Application service for item attribute mutations: rename and star.
pub struct AttributeService {
    item_repository: Arc<dyn ItemRepository>,
    access: Arc<AccessControl>,
    activity: Arc<ActivityService>,
}

impl AttributeService {
    pub fn new(
        item_repository: Arc<dyn ItemRepository>,
        access: Arc<AccessControl>,
        activity: Arc<ActivityService>,
    ) -> Self {
        Self {
            item_repository,
            access,
            activity,
        }
    }

    #[instrument(skip(self))]
    pub async fn rename(&self, caller_id: Uuid, item_id: Uuid, new_name: String) -> Result<ItemDto> {
        let item = self.item_repository.get(item_id).await?;
        self.access.ensure_edit(&item, caller_id).await?;

        let renamed = self.item_repository.rename(item_id, new_name).await?;
        debug!("Renamed {} to {}", item_id, renamed.name());
        self.activity
            .record(
                ActivityKind::Edit,
                caller_id,
                Some(item_id),
                format!("Renamed to {}", renamed.name()),
            )
            .await;

        Ok(ItemDto::from(renamed))
    }

    /// Flips the star flag. Each call flips; there is deliberately no
    /// "set starred" operation, so two calls restore the original value.
    #[instrument(skip(self))]
    pub async fn toggle_star(&self, caller_id: Uuid, item_id: Uuid) -> Result<ItemDto> {
        let item = self.item_repository.get(item_id).await?;
        self.access.ensure_manage(&item, caller_id).await?;

        let toggled = self.item_repository.toggle_star(item_id).await?;
        let action = if toggled.starred() { "Starred" } else { "Unstarred" };
        debug!("{} {}", action, item_id);
        self.activity
            .record(
                ActivityKind::Star,
                caller_id,
                Some(item_id),
                format!("{} {}", action, toggled.name()),
            )
            .await;

        Ok(ItemDto::from(toggled))
    }
}
