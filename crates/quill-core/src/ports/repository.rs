use async_trait::async_trait;

use crate::domain::{Post, PostDraft, PostId};
use crate::error::RepoError;

/// Result of a delete. Removing an absent id is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deletion {
    Removed,
    Absent,
}

/// Post repository - the ordered, id-keyed collection of posts.
///
/// Enumeration order is most-recently-created first. Updates never move a
/// post; only creation and deletion change positions.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts in store order.
    async fn list(&self) -> Result<Vec<Post>, RepoError>;

    /// Find a post by id.
    async fn get(&self, id: &PostId) -> Result<Post, RepoError>;

    /// Insert a new post at the front, assigning a fresh id.
    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError>;

    /// Replace title and content of an existing post, keeping its position.
    async fn update(&self, id: &PostId, draft: PostDraft) -> Result<Post, RepoError>;

    /// Remove a post if present.
    async fn delete(&self, id: &PostId) -> Result<Deletion, RepoError>;

    /// Number of stored posts.
    async fn count(&self) -> Result<usize, RepoError> {
        Ok(self.list().await?.len())
    }
}
