//! Doc Cache - A document caching service
//!
//! Places a bounded TTL cache in front of a document store so repeated
//! reads do not refetch from the backend. Reads are read-through, writes
//! are write-through.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use service::DocumentService;
pub use tasks::spawn_cleanup_task;
