//! Error mapping - recoverable outcomes become redirects, faults become RFC 7807.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use quill_core::DomainError;
use quill_core::domain::PostId;
use quill_shared::ErrorResponse;

use crate::handlers::{LISTING_PATH, see_other};

/// Application-level error type.
///
/// `NotFound` and `Denied` both send the caller back to the listing and are
/// indistinguishable from the outside.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Post not found: {0}")]
    NotFound(PostId),

    #[error("Admin mode is disabled")]
    Denied,

    /// JSON endpoints answer a missing post with a 404 body instead of a redirect.
    #[error("Not found: {detail}")]
    ApiNotFound { detail: String, instance: String },

    /// Body of an allowed mutation could not be read as a form.
    #[error("Invalid form body: {0}")]
    InvalidForm(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) | AppError::Denied => StatusCode::SEE_OTHER,
            AppError::ApiNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::InvalidForm(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound(id) => {
                tracing::debug!(post_id = %id, "Post not found, redirecting to listing");
                see_other(LISTING_PATH)
            }
            AppError::Denied => {
                tracing::warn!("Admin-only request while admin mode is off, redirecting");
                see_other(LISTING_PATH)
            }
            AppError::ApiNotFound { detail, instance } => HttpResponse::NotFound()
                .json(ErrorResponse::not_found(detail.clone()).with_instance(instance.clone())),
            AppError::InvalidForm(detail) => {
                tracing::warn!(error = %detail, "Rejected post form");
                HttpResponse::BadRequest()
                    .json(ErrorResponse::new(400, "Bad Request").with_detail(detail.clone()))
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                HttpResponse::InternalServerError().json(ErrorResponse::internal_error())
            }
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { id } => AppError::NotFound(id),
            DomainError::Denied => AppError::Denied,
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
