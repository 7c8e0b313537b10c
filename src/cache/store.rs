//! TTL Cache Module
//!
//! The bounded cache engine: HashMap storage with insertion-order eviction
//! and TTL expiration. A miss here is not an error; the service layer turns
//! misses into document store loads.

use std::collections::HashMap;

use crate::cache::{CacheEntry, CacheStats, InsertionOrder};

// == TTL Cache ==
/// Bounded document cache with a fixed TTL and oldest-first eviction.
#[derive(Debug)]
pub struct TtlCache {
    /// Id-to-document storage
    entries: HashMap<String, CacheEntry>,
    /// Insertion order tracker for capacity eviction
    order: InsertionOrder,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of documents allowed
    capacity: usize,
    /// TTL in seconds applied to every entry
    ttl_seconds: u64,
}

impl TtlCache {
    // == Constructor ==
    /// Creates a new TtlCache with the given capacity and TTL.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of documents the cache can hold
    /// * `ttl_seconds` - Lifetime of every entry, from insertion or last overwrite
    pub fn new(capacity: usize, ttl_seconds: u64) -> Self {
        Self {
            entries: HashMap::new(),
            order: InsertionOrder::new(),
            stats: CacheStats::new(),
            capacity,
            ttl_seconds,
        }
    }

    // == Insert ==
    /// Inserts or overwrites a document, restarting its TTL clock.
    ///
    /// Overwriting refreshes both the TTL and the entry's insertion-order
    /// position, regardless of whether the old entry had already expired.
    /// Inserting a new id into a full cache first evicts the least recently
    /// inserted entry.
    pub fn insert(&mut self, id: String, content: String) {
        // A zero-capacity cache caches nothing
        if self.capacity == 0 {
            return;
        }

        // Check if the id already exists (overwrite case)
        let is_overwrite = self.entries.contains_key(&id);

        // If not overwriting and at capacity, evict the oldest entry
        if !is_overwrite && self.entries.len() >= self.capacity {
            if let Some(evicted_id) = self.order.evict_oldest() {
                self.entries.remove(&evicted_id);
                self.stats.record_eviction();
            }
        }

        // Create and store the entry
        let entry = CacheEntry::new(content, self.ttl_seconds);
        self.entries.insert(id.clone(), entry);

        // Refresh insertion order (record moves to front)
        self.order.record(&id);

        // Update stats
        self.stats.set_total_entries(self.entries.len());
    }

    // == Lookup ==
    /// Returns the cached content for an id if a live entry exists.
    ///
    /// An expired entry is removed lazily and the lookup counts as a miss.
    /// A lookup never refreshes the TTL or the insertion order.
    pub fn lookup(&mut self, id: &str) -> Option<String> {
        if let Some(entry) = self.entries.get(id) {
            // Check if expired
            if entry.is_expired() {
                // Remove expired entry
                self.entries.remove(id);
                self.order.remove(id);
                self.stats.set_total_entries(self.entries.len());
                self.stats.record_miss();
                return None;
            }

            // Entry exists and is live
            let content = entry.content.clone();
            self.stats.record_hit();
            Some(content)
        } else {
            self.stats.record_miss();
            None
        }
    }

    // == Remove ==
    /// Removes an entry by id. Returns true if an entry was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        if self.entries.remove(id).is_some() {
            self.order.remove(id);
            self.stats.set_total_entries(self.entries.len());
            true
        } else {
            false
        }
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Expiry is already enforced lazily at lookup; this sweep only bounds
    /// memory between lookups. Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let expired_ids: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(id, _)| id.clone())
            .collect();

        let count = expired_ids.len();

        for id in expired_ids {
            self.entries.remove(&id);
            self.order.remove(&id);
        }

        self.stats.set_total_entries(self.entries.len());
        count
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
