//! Post pages and admin form handlers.
//!
//! Reads always pass. Mutations go through the gated [`PostService`]; a denied
//! or missing-post outcome surfaces as [`AppError`] and redirects to `/`.
//! Mutating handlers take [`AdminAccess`] as their first argument so a denied
//! request is redirected before its body is read.
//!
//! [`PostService`]: quill_core::PostService
//! [`AppError`]: crate::middleware::error::AppError

use actix_web::{HttpResponse, web};
use quill_core::domain::PostId;
use quill_core::ports::Deletion;
use quill_shared::dto::PostForm;

use super::{LISTING_PATH, see_other};
use crate::middleware::admin::AdminAccess;
use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::views::{
    EditPostTemplate, IndexTemplate, NewPostTemplate, PostTemplate, PostView, render_page,
};

/// GET /
pub async fn index(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;

    render_page(IndexTemplate {
        page_title: "Quill".to_string(),
        is_admin: state.posts.is_admin(),
        posts: posts.iter().map(PostView::from).collect(),
    })
}

/// GET /posts/new
pub async fn new_post_form(
    state: web::Data<AppState>,
    _admin: AdminAccess,
) -> AppResult<HttpResponse> {
    render_page(NewPostTemplate {
        page_title: "New Post".to_string(),
        is_admin: state.posts.is_admin(),
    })
}

/// POST /posts
pub async fn create_post(
    _admin: AdminAccess,
    state: web::Data<AppState>,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let post = state.posts.create(form.into_inner().into()).await?;
    tracing::info!(post_id = %post.id, "Post created");

    Ok(see_other(LISTING_PATH))
}

/// GET /posts/{id}
pub async fn show_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = PostId::from(path.into_inner());
    let post = state.posts.get(&id).await?;

    render_page(PostTemplate {
        page_title: post.title.clone(),
        is_admin: state.posts.is_admin(),
        post: PostView::from(&post),
    })
}

/// GET /posts/{id}/edit
pub async fn edit_post_form(
    state: web::Data<AppState>,
    _admin: AdminAccess,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = PostId::from(path.into_inner());
    let post = state.posts.get(&id).await?;

    render_page(EditPostTemplate {
        page_title: format!("Edit: {}", post.title),
        is_admin: state.posts.is_admin(),
        post: PostView::from(&post),
    })
}

/// POST /posts/{id}/update
pub async fn update_post(
    _admin: AdminAccess,
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let id = PostId::from(path.into_inner());
    let post = state.posts.update(&id, form.into_inner().into()).await?;
    tracing::info!(post_id = %post.id, "Post updated");

    Ok(see_other(&format!("/posts/{}", post.id)))
}

/// POST /posts/{id}/delete
pub async fn delete_post(
    _admin: AdminAccess,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = PostId::from(path.into_inner());
    match state.posts.delete(&id).await? {
        Deletion::Removed => tracing::info!(post_id = %id, "Post deleted"),
        Deletion::Absent => tracing::debug!(post_id = %id, "Delete of unknown post ignored"),
    }

    Ok(see_other(LISTING_PATH))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::dev::ServiceResponse;
    use actix_web::http::{StatusCode, header};
    use actix_web::{App, test};
    use quill_core::AccessGate;
    use quill_core::domain::{Post, PostDraft};
    use quill_core::ports::PostRepository;
    use quill_infra::InMemoryPostRepository;
    use quill_shared::dto::PostResponse;

    use super::*;
    use crate::handlers::{FORM_LIMIT, configure_routes};

    /// State with one seeded "Welcome" post, plus the repository behind it.
    async fn seeded_state(admin: bool) -> (AppState, Arc<InMemoryPostRepository>, Post) {
        let repo = Arc::new(InMemoryPostRepository::default());
        let welcome = repo
            .create(PostDraft::new("Welcome", "first post"))
            .await
            .unwrap();
        let state = AppState::from_parts(repo.clone(), AccessGate::new(admin));
        (state, repo, welcome)
    }

    fn location<B>(resp: &ServiceResponse<B>) -> &str {
        resp.headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }

    fn form(title: &str, content: &str) -> PostForm {
        PostForm {
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    #[actix_web::test]
    async fn test_listing_shows_admin_controls_only_for_admin() {
        for admin in [true, false] {
            let (state, _repo, welcome) = seeded_state(admin).await;
            let app = test::init_service(
                App::new()
                    .app_data(web::Data::new(state))
                    .configure(configure_routes),
            )
            .await;

            let req = test::TestRequest::get().uri("/").to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);

            let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
            assert!(body.contains("Welcome"));
            let edit_link = format!("/posts/{}/edit", welcome.id);
            assert_eq!(body.contains(&edit_link), admin);
            assert_eq!(body.contains("/posts/new"), admin);
        }
    }

    #[actix_web::test]
    async fn test_create_redirects_to_listing() {
        let (state, repo, _) = seeded_state(true).await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/posts")
            .set_form(form("Hello", "World"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/");

        let titles: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, ["Hello", "Welcome"]);
    }

    #[actix_web::test]
    async fn test_update_redirects_to_post_and_keeps_order() {
        let (state, repo, welcome) = seeded_state(true).await;
        repo.create(PostDraft::new("Hello", "World")).await.unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/posts/{}/update", welcome.id))
            .set_form(form("Welcome!", "Updated body"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), format!("/posts/{}", welcome.id));

        let updated = repo.get(&welcome.id).await.unwrap();
        assert_eq!(updated.title, "Welcome!");
        assert_eq!(updated.content, "Updated body");
        assert!(updated.updated_at.is_some());

        let titles: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, ["Hello", "Welcome!"]);
    }

    #[actix_web::test]
    async fn test_delete_is_idempotent() {
        let (state, repo, welcome) = seeded_state(true).await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        for _ in 0..2 {
            let req = test::TestRequest::post()
                .uri(&format!("/posts/{}/delete", welcome.id))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::SEE_OTHER);
            assert_eq!(location(&resp), "/");
        }

        assert!(repo.list().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_denied_mutations_leave_store_untouched() {
        let (state, repo, welcome) = seeded_state(false).await;
        let before = repo.list().await.unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        let requests = vec![
            test::TestRequest::get().uri("/posts/new").to_request(),
            test::TestRequest::post()
                .uri("/posts")
                .set_form(form("Sneaky", "post"))
                .to_request(),
            test::TestRequest::get()
                .uri(&format!("/posts/{}/edit", welcome.id))
                .to_request(),
            test::TestRequest::post()
                .uri(&format!("/posts/{}/update", welcome.id))
                .set_form(form("Defaced", ""))
                .to_request(),
            test::TestRequest::post()
                .uri(&format!("/posts/{}/delete", welcome.id))
                .to_request(),
        ];

        for req in requests {
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::SEE_OTHER);
            assert_eq!(location(&resp), "/");
        }

        assert_eq!(repo.list().await.unwrap(), before);
    }

    #[actix_web::test]
    async fn test_missing_post_redirects_to_listing() {
        let (state, _repo, _) = seeded_state(true).await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        let requests = vec![
            test::TestRequest::get().uri("/posts/nonexistent-id").to_request(),
            test::TestRequest::get()
                .uri("/posts/nonexistent-id/edit")
                .to_request(),
            test::TestRequest::post()
                .uri("/posts/nonexistent-id/update")
                .set_form(form("t", "c"))
                .to_request(),
        ];

        for req in requests {
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::SEE_OTHER);
            assert_eq!(location(&resp), "/");
        }
    }

    #[actix_web::test]
    async fn test_edit_form_is_prefilled() {
        let (state, _repo, welcome) = seeded_state(true).await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/posts/{}/edit", welcome.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(body.contains("<title>Edit: Welcome</title>"));
        assert!(body.contains("first post"));
        assert!(body.contains(&format!("/posts/{}/update", welcome.id)));
    }

    #[actix_web::test]
    async fn test_single_post_page_is_public() {
        let (state, _repo, welcome) = seeded_state(false).await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/posts/{}", welcome.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(body.contains("first post"));
        assert!(!body.contains("/delete"));
    }

    #[actix_web::test]
    async fn test_json_api_reads() {
        let (state, _repo, welcome) = seeded_state(false).await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        let posts: Vec<PostResponse> = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/api/posts").to_request(),
        )
        .await;
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, welcome.id.to_string());

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/posts/404").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let health: serde_json::Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/api/health").to_request(),
        )
        .await;
        assert_eq!(health["status"], "ok");
        assert_eq!(health["admin_mode"], false);
        assert_eq!(health["posts"], 1);
    }

    #[actix_web::test]
    async fn test_denied_mutation_redirects_whatever_the_body() {
        let (state, repo, welcome) = seeded_state(false).await;
        let before = repo.list().await.unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        let oversized = form("Big", &"x".repeat(FORM_LIMIT + 1));
        let requests = vec![
            test::TestRequest::post()
                .uri("/posts")
                .insert_header((header::CONTENT_TYPE, "application/json"))
                .set_payload(r#"{"title":"json","content":"body"}"#)
                .to_request(),
            test::TestRequest::post().uri("/posts").to_request(),
            test::TestRequest::post()
                .uri("/posts")
                .set_form(oversized)
                .to_request(),
            test::TestRequest::post()
                .uri(&format!("/posts/{}/update", welcome.id))
                .insert_header((header::CONTENT_TYPE, "application/json"))
                .set_payload(r#"{"title":"json"}"#)
                .to_request(),
        ];

        for req in requests {
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::SEE_OTHER);
            assert_eq!(location(&resp), "/");
        }

        assert_eq!(repo.list().await.unwrap(), before);
    }

    #[actix_web::test]
    async fn test_admin_can_publish_long_post() {
        let (state, repo, _) = seeded_state(true).await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        let content = "x".repeat(20_000);
        let req = test::TestRequest::post()
            .uri("/posts")
            .set_form(form("Long read", &content))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/");

        let newest = repo.list().await.unwrap().remove(0);
        assert_eq!(newest.title, "Long read");
        assert_eq!(newest.content.len(), 20_000);
    }

    #[actix_web::test]
    async fn test_unreadable_form_is_bad_request_for_admin() {
        let (state, repo, _) = seeded_state(true).await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/posts")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload(r#"{"title":"json"}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
