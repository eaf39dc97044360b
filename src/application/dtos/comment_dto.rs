use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::comment::Comment;

/// DTO for comment creation requests
#[derive(Debug, Deserialize)]
pub struct CreateCommentDto {
    pub file_id: Uuid,
    pub text: String,
}

/// DTO for comment responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentDto {
    pub id: Uuid,
    pub file_id: Uuid,
    pub author_id: Uuid,
    pub author_name: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            file_id: comment.file_id,
            author_id: comment.author_id,
            author_name: comment.author_name,
            text: comment.text,
            timestamp: comment.created_at,
        }
    }
}
