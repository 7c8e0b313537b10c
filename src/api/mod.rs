//! API Module
//!
//! HTTP handlers and routing for the document cache REST API.
//!
//! # Endpoints
//! - `GET /documents/:id` - Read a document (cache first, store on miss)
//! - `PUT /documents/:id` - Update a document (store first, then cache)
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
