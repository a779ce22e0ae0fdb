//! Post id sources - sequential counter and random UUIDs.

mod random;
mod sequential;

use std::str::FromStr;
use std::sync::Arc;

use quill_core::ports::IdSource;

pub use random::RandomIdSource;
pub use sequential::SequentialIdSource;

/// Which id source the server wires into the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    #[default]
    Sequential,
    Uuid,
}

impl IdStrategy {
    pub fn build(self) -> Arc<dyn IdSource> {
        match self {
            IdStrategy::Sequential => Arc::new(SequentialIdSource::new()),
            IdStrategy::Uuid => Arc::new(RandomIdSource),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown id strategy '{0}', expected 'sequential' or 'uuid'")]
pub struct UnknownIdStrategy(pub String);

impl FromStr for IdStrategy {
    type Err = UnknownIdStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sequential" | "counter" => Ok(IdStrategy::Sequential),
            "uuid" => Ok(IdStrategy::Uuid),
            other => Err(UnknownIdStrategy(other.to_string())),
        }
    }
}
