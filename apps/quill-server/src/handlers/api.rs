//! Read-only JSON view of the post store. Never gated, never mutating.

use actix_web::{HttpRequest, HttpResponse, web};
use quill_core::DomainError;
use quill_core::domain::PostId;
use quill_shared::dto::PostResponse;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts: Vec<PostResponse> = state
        .posts
        .list()
        .await?
        .into_iter()
        .map(PostResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/{id}
pub async fn get_post(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = PostId::from(path.into_inner());

    let post = state.posts.get(&id).await.map_err(|err| match err {
        DomainError::NotFound { id } => AppError::ApiNotFound {
            detail: format!("Post {id} does not exist"),
            instance: req.path().to_string(),
        },
        other => other.into(),
    })?;

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}
