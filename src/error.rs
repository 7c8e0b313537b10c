//! Error types for the document cache service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Doc Error Enum ==
/// Unified error type for the document cache service.
#[derive(Error, Debug)]
pub enum DocError {
    /// Document not found in the store
    #[error("Document not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Store-level failure (connectivity, IO); propagated unchanged, never retried
    #[error("Store error: {0}")]
    Store(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for DocError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            DocError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            DocError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            DocError::Store(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the document cache service.
pub type Result<T> = std::result::Result<T, DocError>;
