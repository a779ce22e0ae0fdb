//! Data Transfer Objects - request/response types for the HTTP surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use quill_core::domain::{Post, PostDraft};

/// Form body for creating or updating a post.
///
/// Missing fields arrive as empty strings; nothing is validated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl From<PostForm> for PostDraft {
    fn from(form: PostForm) -> Self {
        PostDraft::new(form.title, form.content)
    }
}

/// Public JSON view of a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title,
            content: post.content,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Health check body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
    pub admin_mode: bool,
    pub posts: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::domain::PostId;

    #[test]
    fn test_form_fields_default_to_empty() {
        let form: PostForm = serde_json::from_str(r#"{"title":"only a title"}"#).unwrap();
        let draft = PostDraft::from(form);
        assert_eq!(draft.title, "only a title");
        assert_eq!(draft.content, "");
    }

    #[test]
    fn test_unedited_post_omits_updated_at() {
        let post = Post::new(PostId::new("3"), PostDraft::new("t", "c"), Utc::now());
        let json = serde_json::to_value(PostResponse::from(post)).unwrap();

        assert_eq!(json["id"], "3");
        assert!(json.get("updated_at").is_none());
    }
}
