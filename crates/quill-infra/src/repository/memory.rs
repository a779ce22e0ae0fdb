//! In-memory post store - the only backend; contents die with the process.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use quill_core::domain::{Post, PostDraft, PostId};
use quill_core::error::RepoError;
use quill_core::ports::{Deletion, IdSource, PostRepository};

use crate::ids::SequentialIdSource;

/// Posts by id plus the display order, newest first.
#[derive(Default)]
struct PostTable {
    order: VecDeque<PostId>,
    posts: HashMap<PostId, Post>,
}

impl PostTable {
    fn ordered(&self) -> Vec<Post> {
        self.order
            .iter()
            .filter_map(|id| self.posts.get(id))
            .cloned()
            .collect()
    }
}

/// In-memory post repository guarded by a single async RwLock.
///
/// Every mutation, id assignment included, runs under the write guard, so
/// concurrent requests cannot interleave their read-modify-write steps.
/// Readers clone under the read guard and never see a half-applied change.
pub struct InMemoryPostRepository {
    table: RwLock<PostTable>,
    ids: Arc<dyn IdSource>,
}

impl InMemoryPostRepository {
    pub fn new(ids: Arc<dyn IdSource>) -> Self {
        Self {
            table: RwLock::new(PostTable::default()),
            ids,
        }
    }

    /// Build a store and create `seed` in order, so the last one lists first.
    pub async fn seeded(ids: Arc<dyn IdSource>, seed: Vec<PostDraft>) -> Self {
        let repo = Self::new(ids);
        {
            let mut table = repo.table.write().await;
            for draft in seed {
                repo.insert(&mut table, draft);
            }
        }
        repo
    }

    fn insert(&self, table: &mut PostTable, draft: PostDraft) -> Post {
        let post = Post::new(self.ids.next_id(), draft, Utc::now());
        table.order.push_front(post.id.clone());
        table.posts.insert(post.id.clone(), post.clone());
        post
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new(Arc::new(SequentialIdSource::new()))
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        let table = self.table.read().await;
        Ok(table.ordered())
    }

    async fn get(&self, id: &PostId) -> Result<Post, RepoError> {
        let table = self.table.read().await;
        table
            .posts
            .get(id)
            .cloned()
            .ok_or_else(|| RepoError::NotFound(id.clone()))
    }

    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;
        let post = self.insert(&mut table, draft);
        tracing::debug!(post_id = %post.id, "Post stored");
        Ok(post)
    }

    async fn update(&self, id: &PostId, draft: PostDraft) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;
        let post = table
            .posts
            .get_mut(id)
            .ok_or_else(|| RepoError::NotFound(id.clone()))?;
        post.revise(draft, Utc::now());
        Ok(post.clone())
    }

    async fn delete(&self, id: &PostId) -> Result<Deletion, RepoError> {
        let mut table = self.table.write().await;
        if table.posts.remove(id).is_none() {
            return Ok(Deletion::Absent);
        }
        table.order.retain(|entry| entry != id);
        Ok(Deletion::Removed)
    }

    async fn count(&self) -> Result<usize, RepoError> {
        Ok(self.table.read().await.posts.len())
    }
}
