//! API Handlers
//!
//! HTTP request handlers for each document cache endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::cache::{TtlCache, MAX_ID_LENGTH};
use crate::config::Config;
use crate::error::{DocError, Result};
use crate::models::{
    DocumentResponse, HealthResponse, StatsResponse, UpdateDocumentRequest, UpdateResponse,
};
use crate::service::DocumentService;
use crate::store::{DocumentStore, MemoryStore};

/// Application state shared across all handlers.
///
/// Generic over the store backend so any `DocumentStore` implementation can
/// be injected at construction time.
pub struct AppState<S> {
    /// The cache-fronted document service
    pub service: Arc<DocumentService<S>>,
}

// Manual Clone: only the Arc is cloned, the store need not be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

impl<S: DocumentStore> AppState<S> {
    /// Creates a new AppState owning the given service.
    pub fn new(service: DocumentService<S>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

impl AppState<MemoryStore> {
    /// Creates a new AppState from configuration, backed by an in-memory store.
    pub fn from_config(config: &Config) -> Self {
        let cache = TtlCache::new(config.cache_capacity, config.cache_ttl);
        Self::new(DocumentService::new(cache, MemoryStore::new()))
    }
}

/// Validates a document id taken from the request path.
fn validate_id(id: &str) -> Result<()> {
    if id.len() > MAX_ID_LENGTH {
        return Err(DocError::InvalidRequest(format!(
            "Document id exceeds maximum length of {} bytes",
            MAX_ID_LENGTH
        )));
    }
    Ok(())
}

/// Handler for GET /documents/:id
///
/// Read-through: served from the cache when a live entry exists, loaded
/// from the store (and cached) otherwise.
pub async fn get_document_handler<S: DocumentStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<DocumentResponse>> {
    validate_id(&id)?;

    let content = state.service.get(&id).await?;

    Ok(Json(DocumentResponse::new(id, content)))
}

/// Handler for PUT /documents/:id
///
/// Write-through: the store is updated first, then the cache entry is
/// refreshed.
pub async fn update_document_handler<S: DocumentStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateDocumentRequest>,
) -> Result<Json<UpdateResponse>> {
    validate_id(&id)?;
    if let Some(error_msg) = req.validate() {
        return Err(DocError::InvalidRequest(error_msg));
    }

    state.service.put(&id, req.content).await?;

    Ok(Json(UpdateResponse::new(id)))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler<S: DocumentStore>(
    State(state): State<AppState<S>>,
) -> Json<StatsResponse> {
    let stats = state.service.stats().await;

    Json(StatsResponse::new(
        stats.hits,
        stats.misses,
        stats.evictions,
        stats.total_entries,
    ))
}

/// Handler for GET /health
///
/// Returns health status of the service.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
