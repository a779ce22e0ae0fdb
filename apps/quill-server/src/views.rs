//! HTML views - askama templates fed with pre-formatted post data.

use actix_web::{HttpResponse, http::header::ContentType};
use askama::Template;
use chrono::{DateTime, Utc};

use quill_core::domain::Post;

use crate::middleware::error::AppError;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// A post as the templates see it.
#[derive(Clone)]
pub struct PostView {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: String,
    pub updated_at: Option<String>,
    pub href: String,
    pub edit_href: String,
    pub update_action: String,
    pub delete_action: String,
}

impl From<&Post> for PostView {
    fn from(post: &Post) -> Self {
        let href = format!("/posts/{}", post.id);
        Self {
            id: post.id.to_string(),
            title: post.title.clone(),
            content: post.content.clone(),
            created_at: format_timestamp(&post.created_at),
            updated_at: post.updated_at.as_ref().map(format_timestamp),
            edit_href: format!("{href}/edit"),
            update_action: format!("{href}/update"),
            delete_action: format!("{href}/delete"),
            href,
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub page_title: String,
    pub is_admin: bool,
    pub posts: Vec<PostView>,
}

#[derive(Template)]
#[template(path = "post.html")]
pub struct PostTemplate {
    pub page_title: String,
    pub is_admin: bool,
    pub post: PostView,
}

#[derive(Template)]
#[template(path = "new_post.html")]
pub struct NewPostTemplate {
    pub page_title: String,
    pub is_admin: bool,
}

#[derive(Template)]
#[template(path = "edit_post.html")]
pub struct EditPostTemplate {
    pub page_title: String,
    pub is_admin: bool,
    pub post: PostView,
}

/// Render a template into a 200 HTML response.
pub fn render_page<T: Template>(template: T) -> Result<HttpResponse, AppError> {
    let body = template
        .render()
        .map_err(|err| AppError::Internal(format!("Template rendering failed: {err}")))?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body))
}
