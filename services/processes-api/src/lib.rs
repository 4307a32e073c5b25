//! Processes API Service Library
//!
//! HTTP server implementation of OGC API - Processes, hosting the spectra
//! geoparquet retrieval process.

pub mod config;
pub mod handlers;
pub mod state;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Build the service router over shared state.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Landing page
        .route("/", get(handlers::landing::landing_handler))
        // Conformance
        .route(
            "/conformance",
            get(handlers::conformance::conformance_handler),
        )
        // Processes
        .route(
            "/processes",
            get(handlers::processes::list_processes_handler),
        )
        .route(
            "/processes/:process_id",
            get(handlers::processes::get_process_handler),
        )
        .route(
            "/processes/:process_id/execution",
            post(handlers::execution::execute_handler),
        )
        // Health
        .route("/health", get(handlers::health::health_handler))
        // Middleware
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
}
