use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::common::errors::Result;
use crate::domain::entities::comment::Comment;
use crate::domain::repositories::comment_repository::CommentRepository;

struct CommentState {
    threads: HashMap<Uuid, Vec<Comment>>,
    next_seq: u64,
}

/// Comment threads held in memory, keyed by file. The insertion sequence
/// is assigned under the write guard so same-instant comments keep a
/// stable order.
pub struct MemoryCommentRepository {
    state: RwLock<CommentState>,
}

impl MemoryCommentRepository {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(CommentState {
                threads: HashMap::new(),
                next_seq: 0,
            }),
        }
    }
}

impl Default for MemoryCommentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommentRepository for MemoryCommentRepository {
    async fn append(&self, comment: Comment) -> Result<Comment> {
        let mut state = self.state.write().await;

        let seq = state.next_seq;
        state.next_seq += 1;
        let comment = comment.with_seq(seq);

        state
            .threads
            .entry(comment.file_id)
            .or_default()
            .push(comment.clone());
        Ok(comment)
    }

    async fn list_for_file(&self, file_id: Uuid) -> Result<Vec<Comment>> {
        let state = self.state.read().await;
        let mut thread = state.threads.get(&file_id).cloned().unwrap_or_default();
        thread.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.seq.cmp(&b.seq)));
        Ok(thread)
    }

    async fn remove_for_file(&self, file_id: Uuid) -> Result<()> {
        let mut state = self.state.write().await;
        state.threads.remove(&file_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn thread_orders_by_creation_then_sequence() {
        let repo = MemoryCommentRepository::new();
        let file_id = Uuid::new_v4();
        let author = Uuid::new_v4();

        for text in ["first", "second", "third"] {
            repo.append(
                Comment::new(file_id, author, "Jane".to_string(), text.to_string()).unwrap(),
            )
            .await
            .unwrap();
        }

        let thread = repo.list_for_file(file_id).await.unwrap();
        let texts: Vec<&str> = thread.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn remove_clears_the_thread() {
        let repo = MemoryCommentRepository::new();
        let file_id = Uuid::new_v4();

        repo.append(Comment::new(file_id, Uuid::new_v4(), "J".to_string(), "hi".to_string()).unwrap())
            .await
            .unwrap();
        repo.remove_for_file(file_id).await.unwrap();
        assert!(repo.list_for_file(file_id).await.unwrap().is_empty());
    }
}
