//! Document Store Module
//!
//! The backend the cache fronts. The store is injected into the service so
//! any concrete backend (database, filesystem, in-memory) can sit behind
//! the same cache.

mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::error::Result;

// == Document Store Trait ==
/// Backend storage for documents.
///
/// Implementations must surface a missing document from `load` as
/// [`DocError::NotFound`](crate::error::DocError::NotFound) and any
/// backend failure as [`DocError::Store`](crate::error::DocError::Store);
/// the service propagates both unchanged.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Loads the content of a document by id.
    async fn load(&self, id: &str) -> Result<String>;

    /// Saves (inserts or replaces) a document's content.
    async fn save(&self, id: &str, content: &str) -> Result<()>;
}
