//! Cache Module
//!
//! Provides the bounded in-memory document cache with TTL expiration and
//! insertion-order (oldest-first) eviction.

mod entry;
mod order;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use order::InsertionOrder;
pub use stats::CacheStats;
pub use store::TtlCache;

// == Public Constants ==
/// Maximum allowed document id length in bytes
pub const MAX_ID_LENGTH: usize = 256;

/// Maximum allowed document size in bytes
pub const MAX_DOCUMENT_SIZE: usize = 1024 * 1024; // 1 MB
