//! # Quill Shared
//!
//! Request and response types used by the HTTP surface: the post form body,
//! the read-only JSON views, and RFC 7807 error bodies.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
