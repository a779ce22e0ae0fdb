//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod id_source;
mod repository;

pub use id_source::IdSource;
pub use repository::{Deletion, PostRepository};
