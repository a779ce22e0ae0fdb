//! Admin gate extractor for pages that lead to a mutation.

use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use std::future::{Ready, ready};

use crate::middleware::error::AppError;
use crate::state::AppState;

/// Proof that the admin gate allowed this request.
///
/// Use it on the new/edit form pages and, as the first argument, on every
/// mutating handler:
/// ```ignore
/// async fn create_post(_admin: AdminAccess, form: web::Form<PostForm>) -> ... { ... }
/// ```
/// Extractors run in argument order, so a denied request fails here with
/// [`AppError::Denied`] and is redirected before the form body is parsed.
/// The decision itself comes from `PostService::authorize_mutation`.
#[derive(Debug, Clone, Copy)]
pub struct AdminAccess;

impl FromRequest for AdminAccess {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = match req.app_data::<web::Data<AppState>>() {
            Some(state) => state,
            None => {
                tracing::error!("AppState not found in app data");
                return ready(Err(AppError::Internal(
                    "Server configuration error".to_string(),
                )));
            }
        };

        ready(
            state
                .posts
                .authorize_mutation()
                .map(|()| AdminAccess)
                .map_err(AppError::from),
        )
    }
}
