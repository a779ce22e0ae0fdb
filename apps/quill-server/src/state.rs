//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::AccessGate;
use quill_core::PostService;
use quill_core::domain::PostDraft;
use quill_core::ports::PostRepository;
use quill_infra::InMemoryPostRepository;

use crate::config::AppConfig;

const WELCOME_TITLE: &str = "Welcome to My Blog";
const WELCOME_CONTENT: &str = "This is the first post on my new blog. More content coming soon!";

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
}

impl AppState {
    /// Build the post store and gate from configuration.
    pub async fn new(config: &AppConfig) -> Self {
        let seed = if config.seed_welcome_post {
            vec![PostDraft::new(WELCOME_TITLE, WELCOME_CONTENT)]
        } else {
            Vec::new()
        };

        let repo = InMemoryPostRepository::seeded(config.id_strategy.build(), seed).await;
        let gate = AccessGate::new(config.admin_mode);

        tracing::info!(
            admin_mode = gate.is_admin_enabled(),
            id_strategy = ?config.id_strategy,
            seeded = config.seed_welcome_post,
            "Application state initialized"
        );

        Self::from_parts(Arc::new(repo), gate)
    }

    pub fn from_parts(repo: Arc<dyn PostRepository>, gate: AccessGate) -> Self {
        Self {
            posts: PostService::new(repo, gate),
        }
    }
}
