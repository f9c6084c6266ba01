pub mod generate;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Rendered documents are fetched straight from the storage root, which
    // is served at the same path it is written under.
    let results_route = format!("/{}", state.config.storage_root.trim_matches('/'));
    let results_dir = ServeDir::new(&state.config.storage_root);

    Router::new()
        .route("/", get(generate::index_handler))
        .route("/health", get(health::health_handler))
        .route("/generate", post(generate::generate_handler))
        .nest_service(&results_route, results_dir)
        .with_state(state)
}
