use async_trait::async_trait;
use uuid::Uuid;

use crate::common::errors::Result;
use crate::domain::entities::comment::Comment;

/// Repository contract for comment threads (primary port). Append-only.
#[async_trait]
pub trait CommentRepository: Send + Sync + 'static {
    /// Appends a comment, assigning its insertion sequence
    async fn append(&self, comment: Comment) -> Result<Comment>;

    /// The thread for one file, creation time ascending
    async fn list_for_file(&self, file_id: Uuid) -> Result<Vec<Comment>>;

    /// Drops every comment referencing a file (purge cascade)
    async fn remove_for_file(&self, file_id: Uuid) -> Result<()>;
}
