//! API Routes
//!
//! Configures the Axum router with all document cache endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    get_document_handler, health_handler, stats_handler, update_document_handler, AppState,
};
use crate::store::DocumentStore;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /documents/:id` - Read a document (cache first, store on miss)
/// - `PUT /documents/:id` - Update a document (store first, then cache)
/// - `GET /stats` - Get cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router<S: DocumentStore + 'static>(state: AppState<S>) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route(
            "/documents/:id",
            get(get_document_handler::<S>).put(update_document_handler::<S>),
        )
        .route("/stats", get(stats_handler::<S>))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
