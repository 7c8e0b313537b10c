//! Insertion Order Module
//!
//! Tracks the order in which documents were inserted, for oldest-first
//! capacity eviction.

use std::collections::VecDeque;

// == Insertion Order ==
/// Tracks document ids by insertion time for eviction.
///
/// Ids are stored in a VecDeque where:
/// - Front = most recently inserted
/// - Back = least recently inserted
///
/// Unlike an LRU tracker, lookups never reorder entries; only an insert or
/// overwrite moves an id to the front.
#[derive(Debug, Default)]
pub struct InsertionOrder {
    /// Ids ordered by insertion time
    order: VecDeque<String>,
}

impl InsertionOrder {
    // == Constructor ==
    /// Creates a new empty tracker.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Record ==
    /// Records an insert or overwrite of an id (moves it to the front).
    ///
    /// If the id already exists, removes it first then adds to front.
    pub fn record(&mut self, id: &str) {
        // Remove existing occurrence
        self.remove(id);
        // Add to front (most recently inserted)
        self.order.push_front(id.to_string());
    }

    // == Remove ==
    /// Removes an id from the tracker.
    pub fn remove(&mut self, id: &str) {
        self.order.retain(|k| k != id);
    }

    // == Evict Oldest ==
    /// Returns and removes the least recently inserted id.
    ///
    /// Returns None if the tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<String> {
        self.order.pop_back()
    }

    // == Peek Oldest ==
    /// Returns the least recently inserted id without removing it.
    #[allow(dead_code)]
    pub fn peek_oldest(&self) -> Option<&String> {
        self.order.back()
    }

    // == Length ==
    /// Returns the number of tracked ids.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // == Contains ==
    /// Checks if an id is being tracked.
    #[allow(dead_code)]
    pub fn contains(&self, id: &str) -> bool {
        self.order.iter().any(|k| k == id)
    }
}
