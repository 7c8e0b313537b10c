//! Document Service Module
//!
//! Ties the cache to the document store: reads are read-through (a miss
//! loads from the store and populates the cache), writes are write-through
//! (the store is updated first, then the cache entry is refreshed).

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use crate::cache::{CacheStats, TtlCache};
use crate::error::Result;
use crate::store::DocumentStore;

// == Document Service ==
/// Cache-fronted access to a document store.
///
/// The cache sits behind a single mutex, and `get` holds it across the
/// miss-path store fetch so the read-check-insert sequence is atomic:
/// concurrent misses on the same id cannot trigger duplicate loads.
pub struct DocumentService<S> {
    /// The bounded TTL cache
    cache: Arc<Mutex<TtlCache>>,
    /// The injected backend
    store: S,
}

impl<S: DocumentStore> DocumentService<S> {
    // == Constructor ==
    /// Creates a new service owning the given cache and store.
    pub fn new(cache: TtlCache, store: S) -> Self {
        Self {
            cache: Arc::new(Mutex::new(cache)),
            store,
        }
    }

    /// Returns a shared handle to the cache, for the background cleanup task.
    pub fn cache_handle(&self) -> Arc<Mutex<TtlCache>> {
        Arc::clone(&self.cache)
    }

    // == Get ==
    /// Read-through lookup of a document.
    ///
    /// Returns the cached content if a live entry exists; otherwise loads
    /// from the store, caches the result, and returns it. A missing
    /// document surfaces as `NotFound`; store failures propagate unchanged,
    /// with no retry.
    pub async fn get(&self, id: &str) -> Result<String> {
        let mut cache = self.cache.lock().await;

        if let Some(content) = cache.lookup(id) {
            debug!(id, "cache hit");
            return Ok(content);
        }

        debug!(id, "cache miss, loading from store");
        let content = self.store.load(id).await?;
        cache.insert(id.to_string(), content.clone());

        Ok(content)
    }

    // == Put ==
    /// Write-through update of a document.
    ///
    /// Saves to the store first; only after the store accepts the write is
    /// the cache entry inserted or overwritten with a fresh timestamp,
    /// regardless of whether a previous entry had expired. A store failure
    /// leaves the cache untouched.
    pub async fn put(&self, id: &str, content: String) -> Result<()> {
        self.store.save(id, &content).await?;

        let mut cache = self.cache.lock().await;
        cache.insert(id.to_string(), content);
        debug!(id, "document saved and cache refreshed");

        Ok(())
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        self.cache.lock().await.stats()
    }
}
