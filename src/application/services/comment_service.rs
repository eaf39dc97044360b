use std::sync::Arc;

use tracing::{debug, instrument};
use uuid::Uuid;

use crate::application::dtos::comment_dto::{CommentDto, CreateCommentDto};
use crate::application::ports::outbound::AccountResolver;
use crate::application::services::access_control::AccessControl;
use crate::application::services::activity_service::ActivityService;
use crate::common::errors::{DomainError, Result};
use crate::domain::entities::activity::ActivityKind;
use crate::domain::entities::comment::Comment;
use crate::domain::repositories::comment_repository::CommentRepository;
use crate::domain::repositories::item_repository::ItemRepository;

/// Application service for comment threads. Comments attach to files
/// only and the thread is append-only.
pub struct CommentService {
    item_repository: Arc<dyn ItemRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    account_resolver: Arc<dyn AccountResolver>,
    access: Arc<AccessControl>,
    activity: Arc<ActivityService>,
}

impl CommentService {
    pub fn new(
        item_repository: Arc<dyn ItemRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        account_resolver: Arc<dyn AccountResolver>,
        access: Arc<AccessControl>,
        activity: Arc<ActivityService>,
    ) -> Self {
        Self {
            item_repository,
            comment_repository,
            account_resolver,
            access,
            activity,
        }
    }

    #[instrument(skip(self))]
    pub async fn add_comment(&self, caller_id: Uuid, dto: CreateCommentDto) -> Result<CommentDto> {
        let item = self.item_repository.get(dto.file_id).await?;
        if !item.is_file() {
            return Err(DomainError::unsupported_target("Comment", "Comments are not supported on folders")
                .with_id(dto.file_id.to_string()));
        }
        self.access.ensure_comment(&item, caller_id).await?;

        let author_name = self
            .account_resolver
            .get(caller_id)
            .await?
            .map(|account| account.name)
            .unwrap_or_else(|| "Unknown".to_string());

        let comment = Comment::new(dto.file_id, caller_id, author_name, dto.text)
            .map_err(|e| DomainError::validation_error("Comment", e.to_string()))?;
        let comment = self.comment_repository.append(comment).await?;

        debug!("Comment {} added on file {}", comment.id, dto.file_id);
        self.activity
            .record(
                ActivityKind::Comment,
                caller_id,
                Some(item.id()),
                format!("Commented on {}", item.name()),
            )
            .await;

        Ok(CommentDto::from(comment))
    }

    /// The thread for one file, oldest first
    #[instrument(skip(self))]
    pub async fn list_comments(&self, caller_id: Uuid, file_id: Uuid) -> Result<Vec<CommentDto>> {
        let item = self.item_repository.get(file_id).await?;
        self.access.ensure_read(&item, caller_id).await?;

        let comments = self.comment_repository.list_for_file(file_id).await?;
        Ok(comments.into_iter().map(CommentDto::from).collect())
    }
}
