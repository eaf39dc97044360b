use std::sync::Arc;

use tracing::instrument;
use uuid::Uuid;

use crate::application::dtos::item_dto::ItemDto;
use crate::application::dtos::view_dto::{DriveListingDto, DriveQueryDto};
use crate::common::errors::{DomainError, Result};
use crate::domain::entities::item::Item;
use crate::domain::entities::share::Share;
use crate::domain::repositories::item_repository::ItemRepository;
use crate::domain::repositories::share_repository::ShareRepository;

/// The five derived views over the canonical item set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveView {
    MyDrive,
    Recent,
    Starred,
    Shared,
    Trash,
}

impl TryFrom<&str> for DriveView {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self> {
        match s {
            "drive" => Ok(DriveView::MyDrive),
            "recent" => Ok(DriveView::Recent),
            "starred" => Ok(DriveView::Starred),
            "shared" => Ok(DriveView::Shared),
            "trash" => Ok(DriveView::Trash),
            _ => Err(DomainError::validation_error(
                "View",
                format!("Unknown view: {}", s),
            )),
        }
    }
}

/// Inputs of one projection
#[derive(Debug, Clone)]
pub struct ViewQuery {
    pub view: DriveView,
    /// Folder browsed in the My Drive view (None = root)
    pub current_folder: Option<Uuid>,
    /// Case-insensitive substring filter on names; empty or whitespace
    /// passes everything through
    pub search: Option<String>,
    pub caller_id: Uuid,
    /// Result cap for the Recent view
    pub recent_limit: usize,
}

fn by_modified_desc(a: &Item, b: &Item) -> std::cmp::Ordering {
    b.modified().cmp(&a.modified()).then(a.id().cmp(&b.id()))
}

fn matches_search(item: &Item, search: &Option<String>) -> bool {
    match search {
        Some(text) if !text.trim().is_empty() => {
            item.name().to_lowercase().contains(&text.trim().to_lowercase())
        }
        _ => true,
    }
}

/// Projects one view from a consistent snapshot of the item set and the
/// share ledger. Pure: identical inputs produce identical, fully ordered
/// outputs (ties always break by id); nothing here mutates state.
pub fn project(items: &[Item], shares: &[Share], query: &ViewQuery) -> Vec<Item> {
    let mut selected: Vec<Item> = match query.view {
        DriveView::MyDrive => {
            let mut rows: Vec<Item> = items
                .iter()
                .filter(|item| {
                    !item.trashed()
                        && item.owner_id() == query.caller_id
                        && item.parent_id() == query.current_folder
                })
                .cloned()
                .collect();
            rows.sort_by(|a, b| {
                a.name()
                    .to_lowercase()
                    .cmp(&b.name().to_lowercase())
                    .then(a.id().cmp(&b.id()))
            });
            rows
        }
        DriveView::Recent => {
            let mut rows: Vec<Item> = items
                .iter()
                .filter(|item| {
                    !item.trashed()
                        && item.owner_id() == query.caller_id
                        && item.last_opened().is_some()
                })
                .cloned()
                .collect();
            rows.sort_by(|a, b| {
                b.last_opened()
                    .cmp(&a.last_opened())
                    .then(a.id().cmp(&b.id()))
            });
            rows.truncate(query.recent_limit);
            rows
        }
        DriveView::Starred => {
            let mut rows: Vec<Item> = items
                .iter()
                .filter(|item| {
                    !item.trashed() && item.owner_id() == query.caller_id && item.starred()
                })
                .cloned()
                .collect();
            rows.sort_by(by_modified_desc);
            rows
        }
        DriveView::Shared => {
            let mut rows: Vec<Item> = items
                .iter()
                .filter(|item| {
                    !item.trashed()
                        && shares.iter().any(|share| {
                            share.item_id == item.id() && share.grantee_id == query.caller_id
                        })
                })
                .cloned()
                .collect();
            rows.sort_by(by_modified_desc);
            rows
        }
        DriveView::Trash => {
            let mut rows: Vec<Item> = items
                .iter()
                .filter(|item| item.trashed() && item.owner_id() == query.caller_id)
                .cloned()
                .collect();
            rows.sort_by(by_modified_desc);
            rows
        }
    };

    selected.retain(|item| matches_search(item, &query.search));
    selected
}

/// Application service wrapping the pure projector with repository
/// snapshots. Never takes locks beyond the snapshot reads, never writes.
pub struct ViewService {
    item_repository: Arc<dyn ItemRepository>,
    share_repository: Arc<dyn ShareRepository>,
    recent_limit: usize,
}

impl ViewService {
    pub fn new(
        item_repository: Arc<dyn ItemRepository>,
        share_repository: Arc<dyn ShareRepository>,
        recent_limit: usize,
    ) -> Self {
        Self {
            item_repository,
            share_repository,
            recent_limit,
        }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, caller_id: Uuid, query: DriveQueryDto) -> Result<DriveListingDto> {
        let view = DriveView::try_from(query.view.as_deref().unwrap_or("drive"))?;

        let items = self.item_repository.snapshot().await?;
        let shares = self.share_repository.snapshot().await?;

        let projected = project(
            &items,
            &shares,
            &ViewQuery {
                view,
                current_folder: query.folder_id,
                search: query.search,
                caller_id,
                recent_limit: self.recent_limit,
            },
        );

        Ok(DriveListingDto::from_items(
            projected.into_iter().map(ItemDto::from).collect(),
        ))
    }
}
