//! Identifier source port.

use crate::domain::PostId;

/// Hands out post identifiers.
///
/// Implementations must never return the same id twice within a process,
/// including ids of posts that were since deleted.
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> PostId;
}
