use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_BASE_URL;

/// Application configuration loaded from environment variables once at
/// startup and passed into the pipeline; no module reads the environment
/// ad hoc after boot.
///
/// A missing `API_KEY` is not a startup failure: the service boots and each
/// generation request reports a configuration error instead.
#[derive(Debug, Clone)]
pub struct Config {
    /// Credential for the completion service. Optional so the rest of the
    /// service stays usable (UI, health, previously generated artifacts).
    pub api_key: Option<String>,
    pub completion_base_url: String,
    /// Model identifier used when a request does not name one.
    pub default_model: String,
    /// Directory rendered documents are written under, also the route
    /// prefix they are served from.
    pub storage_root: String,
    /// Pause between the two generation calls, to stay inside the
    /// provider's rate limit. Zero disables it.
    pub generation_pause_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            api_key: std::env::var("API_KEY").ok().filter(|k| !k.is_empty()),
            completion_base_url: std::env::var("COMPLETION_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            default_model: std::env::var("DEFAULT_MODEL")
                .unwrap_or_else(|_| "deepseek-r1-distill-llama-70b".to_string()),
            storage_root: std::env::var("STORAGE_ROOT")
                .unwrap_or_else(|_| "static/results".to_string()),
            generation_pause_secs: std::env::var("GENERATION_PAUSE_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse::<u64>()
                .context("GENERATION_PAUSE_SECS must be a number of seconds")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
