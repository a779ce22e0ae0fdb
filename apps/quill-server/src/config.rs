//! Application configuration loaded from environment variables.

use std::env;

use quill_infra::IdStrategy;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Turns the admin gate on for the whole process.
    pub admin_mode: bool,
    pub seed_welcome_post: bool,
    pub id_strategy: IdStrategy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            admin_mode: false,
            seed_welcome_post: true,
            id_strategy: IdStrategy::Sequential,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let id_strategy = match env::var("POST_ID_STRATEGY") {
            Ok(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to sequential post ids");
                defaults.id_strategy
            }),
            Err(_) => defaults.id_strategy,
        };

        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            admin_mode: flag("ADMIN_MODE").unwrap_or(defaults.admin_mode),
            seed_welcome_post: flag("SEED_WELCOME_POST").unwrap_or(defaults.seed_welcome_post),
            id_strategy,
        }
    }
}

fn flag(name: &str) -> Option<bool> {
    let raw = env::var(name).ok()?;
    let parsed = parse_flag(&raw);
    if parsed.is_none() {
        tracing::warn!(variable = name, value = %raw, "Ignoring unrecognised boolean");
    }
    parsed
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => Some(true),
        "false" | "0" | "off" | "no" => Some(false),
        _ => None,
    }
}
