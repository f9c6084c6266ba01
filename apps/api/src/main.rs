mod config;
mod errors;
mod llm_client;
mod pipeline;
mod render;
mod routes;
mod state;
mod storage;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::HttpCompletionClient;
use crate::pipeline::{GenerationPipeline, PipelineOptions};
use crate::render::PdfRenderer;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::ArtifactStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; everything downstream receives it explicitly.
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Tailor API v{}", env!("CARGO_PKG_VERSION"));

    if config.api_key.is_none() {
        warn!("API_KEY is not set; generation requests will report a configuration error");
    }

    // Initialize the completion client
    let backend = Arc::new(HttpCompletionClient::new(config.completion_base_url.clone()));
    info!(
        "Completion client initialized (endpoint: {}, default model: {})",
        config.completion_base_url, config.default_model
    );

    // The storage root doubles as the public route prefix it is served from.
    let store = ArtifactStore::new(&config.storage_root, &config.storage_root);

    let pipeline = GenerationPipeline::new(
        backend,
        PdfRenderer::new(),
        store,
        PipelineOptions {
            credential: config.api_key.clone(),
            default_model: config.default_model.clone(),
            pause: Duration::from_secs(config.generation_pause_secs),
        },
    );

    // Build app state
    let state = AppState {
        config: config.clone(),
        pipeline: Arc::new(pipeline),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
