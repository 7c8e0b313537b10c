//! Cache Entry Module
//!
//! Defines the structure for individual cached documents with TTL support.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A single cached document with its timing metadata.
///
/// Every entry carries an expiration: the cache has one fixed TTL, and the
/// clock restarts whenever the entry is inserted or overwritten.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The cached document content
    pub content: String,
    /// Insertion timestamp (Unix milliseconds)
    pub inserted_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl_seconds` from now.
    pub fn new(content: String, ttl_seconds: u64) -> Self {
        let now = current_timestamp_ms();

        Self {
            content,
            inserted_at: now,
            expires_at: now + ttl_seconds * 1000,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is considered expired when the current
    /// time is greater than or equal to the expiration time, so an expired
    /// document is never served even at the exact boundary.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms() >= self.expires_at
    }

    // == Time To Live ==
    /// Returns remaining TTL in milliseconds (0 once expired).
    ///
    /// Useful for debugging and statistics purposes.
    pub fn ttl_remaining_ms(&self) -> u64 {
        let now = current_timestamp_ms();
        if self.expires_at > now {
            self.expires_at - now
        } else {
            0
        }
    }

    /// Returns remaining TTL in whole seconds (0 once expired).
    pub fn ttl_remaining(&self) -> u64 {
        self.ttl_remaining_ms() / 1000
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
