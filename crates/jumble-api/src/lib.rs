//! Jumble HTTP API
//!
//! Serves pseudo-random, arbitrarily nested JSON documents for client-side
//! parsing practice. The router here is the whole surface; `main.rs` only
//! binds it to a socket.

use std::sync::Arc;

use axum::{Router, routing::get};
use jumble_core::GenerationConfig;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod config;
pub mod error;
pub mod handlers;
pub mod tracing_setup;
pub mod types;

/// Path of the data endpoint
pub const COMPLEX_ARRAY_PATH: &str = "/api/complex-array";
/// Short alias accepted for the data endpoint
pub const COMPLEX_ARRAY_ALIAS: &str = "/complex-array";

/// Shared, read-only state handed to every request
#[derive(Debug, Clone)]
pub struct AppState {
    pub generation: Arc<GenerationConfig>,
}

impl AppState {
    pub fn new(generation: GenerationConfig) -> Self {
        Self { generation: Arc::new(generation) }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(GenerationConfig::default())
    }
}

/// Build the application router.
pub fn create_app(state: AppState) -> Router {
    info!(
        max_collection_size = state.generation.max_collection_size(),
        max_array_size = state.generation.max_array_size(),
        max_depth_limit = state.generation.max_depth_limit(),
        "Creating Jumble router"
    );

    Router::new()
        .route("/", get(handlers::index))
        .route(COMPLEX_ARRAY_PATH, get(handlers::complex_array))
        .route(COMPLEX_ARRAY_ALIAS, get(handlers::complex_array))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::not_found)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
