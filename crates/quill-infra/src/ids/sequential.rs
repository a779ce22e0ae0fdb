//! Monotonic counter ids: "1", "2", "3", ...

use std::sync::atomic::{AtomicU64, Ordering};

use quill_core::domain::PostId;
use quill_core::ports::IdSource;

/// Counter-backed id source. Ids are never reused, even after deletion.
pub struct SequentialIdSource {
    next: AtomicU64,
}

impl SequentialIdSource {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialIdSource {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SequentialIdSource {
    fn next_id(&self) -> PostId {
        PostId::new(self.next.fetch_add(1, Ordering::Relaxed).to_string())
    }
}
