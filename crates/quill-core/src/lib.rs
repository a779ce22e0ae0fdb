//! # Quill Core
//!
//! The domain layer of Quill.
//! This crate contains the post model, the admin gate and the gated post
//! service, with zero infrastructure dependencies.

pub mod access;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use access::{AccessGate, Authorization};
pub use error::{DomainError, RepoError};
pub use service::PostService;
