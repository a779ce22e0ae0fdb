//! Gated post service - the one place mutations meet the admin gate.

use std::sync::Arc;

use crate::access::{AccessGate, Authorization};
use crate::domain::{Post, PostDraft, PostId};
use crate::error::DomainError;
use crate::ports::{Deletion, PostRepository};

/// Wraps a [`PostRepository`] with an [`AccessGate`].
///
/// Reads go straight to the repository. Mutations are checked against the
/// gate first and never reach the repository when denied.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
    gate: AccessGate,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>, gate: AccessGate) -> Self {
        Self { repo, gate }
    }

    /// Flag handed to presentation so it can show admin controls.
    pub fn is_admin(&self) -> bool {
        self.gate.is_admin_enabled()
    }

    /// Gate check for pages that lead to a mutation (new/edit forms).
    pub fn authorize_mutation(&self) -> Result<(), DomainError> {
        match self.gate.authorize_mutation() {
            Authorization::Allowed => Ok(()),
            Authorization::Denied => Err(DomainError::Denied),
        }
    }

    pub async fn list(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.repo.list().await?)
    }

    pub async fn get(&self, id: &PostId) -> Result<Post, DomainError> {
        Ok(self.repo.get(id).await?)
    }

    pub async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.repo.count().await?)
    }

    pub async fn create(&self, draft: PostDraft) -> Result<Post, DomainError> {
        self.authorize_mutation()?;
        Ok(self.repo.create(draft).await?)
    }

    pub async fn update(&self, id: &PostId, draft: PostDraft) -> Result<Post, DomainError> {
        self.authorize_mutation()?;
        Ok(self.repo.update(id, draft).await?)
    }

    pub async fn delete(&self, id: &PostId) -> Result<Deletion, DomainError> {
        self.authorize_mutation()?;
        Ok(self.repo.delete(id).await?)
    }
}
