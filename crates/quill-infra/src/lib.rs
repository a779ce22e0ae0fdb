//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`:
//! the in-memory post store and the post id sources.

pub mod ids;
pub mod repository;

pub use ids::{IdStrategy, RandomIdSource, SequentialIdSource};
pub use repository::InMemoryPostRepository;
