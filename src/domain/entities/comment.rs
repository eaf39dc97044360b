use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CommentError {
    #[error("Comment text cannot be empty")]
    EmptyText,
}

/// A comment on a file. Append-only; the thread orders by creation time
/// ascending, with `seq` breaking ties between comments created in the
/// same instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub file_id: Uuid,
    pub author_id: Uuid,
    pub author_name: String,
    pub text: String,
    /// Server-observed creation time, never client-supplied
    pub created_at: DateTime<Utc>,
    /// Insertion sequence assigned by the store
    pub seq: u64,
}

impl Comment {
    pub fn new(
        file_id: Uuid,
        author_id: Uuid,
        author_name: String,
        text: String,
    ) -> Result<Self, CommentError> {
        let text = text.trim().to_string();
        if text.is_empty() {
            return Err(CommentError::EmptyText);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            file_id,
            author_id,
            author_name,
            text,
            created_at: Utc::now(),
            seq: 0,
        })
    }

    pub fn with_seq(mut self, seq: u64) -> Self {
        self.seq = seq;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_text_is_rejected() {
        let result = Comment::new(Uuid::new_v4(), Uuid::new_v4(), "Jane".to_string(), "  \n ".to_string());
        assert!(matches!(result, Err(CommentError::EmptyText)));
    }

    #[test]
    fn text_is_trimmed() {
        let comment = Comment::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "Jane".to_string(),
            "  looks good  ".to_string(),
        )
        .unwrap();
        assert_eq!(comment.text, "looks good");
    }
}
