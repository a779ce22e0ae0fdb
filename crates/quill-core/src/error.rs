//! Domain-level error types.

use thiserror::Error;

use crate::domain::PostId;

/// Domain errors - outcomes the request layer turns into redirects or pages.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Post not found: {id}")]
    NotFound { id: PostId },

    /// Mutation attempted while admin mode is off.
    #[error("Mutation denied: admin mode is disabled")]
    Denied,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Post not found: {0}")]
    NotFound(PostId),

    #[error("Storage backend failed: {0}")]
    Backend(String),
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(id) => DomainError::NotFound { id },
            RepoError::Backend(msg) => DomainError::Internal(msg),
        }
    }
}
