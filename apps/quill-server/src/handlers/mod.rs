//! HTTP handlers and route configuration.

mod api;
mod health;
mod posts;

use actix_web::{HttpResponse, http::header, web};

use crate::middleware::error::AppError;

/// Largest accepted post form body, matching a typical urlencoded default.
pub const FORM_LIMIT: usize = 100 * 1024;

/// Where recoverable failures and most mutations land.
pub const LISTING_PATH: &str = "/";

/// 303 redirect, so a browser follows a form POST with a GET.
pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::FormConfig::default()
            .limit(FORM_LIMIT)
            .error_handler(|err, _req| AppError::InvalidForm(err.to_string()).into()),
    );

    cfg
        // Pages
        .route(LISTING_PATH, web::get().to(posts::index))
        .route("/posts/new", web::get().to(posts::new_post_form))
        .route("/posts", web::post().to(posts::create_post))
        .route("/posts/{id}", web::get().to(posts::show_post))
        .route("/posts/{id}/edit", web::get().to(posts::edit_post_form))
        .route("/posts/{id}/update", web::post().to(posts::update_post))
        .route("/posts/{id}/delete", web::post().to(posts::delete_post))
        // Read-only JSON
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health::health_check))
                .route("/posts", web::get().to(api::list_posts))
                .route("/posts/{id}", web::get().to(api::get_post)),
        );
}
