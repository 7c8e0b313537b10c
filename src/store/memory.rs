//! In-Memory Document Store
//!
//! HashMap-backed store implementation, the stand-in for a real database
//! backend during development and in tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{DocError, Result};
use crate::store::DocumentStore;

// == Memory Store ==
/// In-memory `DocumentStore` backed by a HashMap.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with documents.
    pub fn with_documents<I>(documents: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            documents: RwLock::new(documents.into_iter().collect()),
        }
    }

    /// Returns the number of stored documents.
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    /// Returns true if the store holds no documents.
    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn load(&self, id: &str) -> Result<String> {
        self.documents
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| DocError::NotFound(id.to_string()))
    }

    async fn save(&self, id: &str, content: &str) -> Result<()> {
        self.documents
            .write()
            .await
            .insert(id.to_string(), content.to_string());
        Ok(())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_and_load() {
        let store = MemoryStore::new();

        store.save("doc1", "content1").await.unwrap();
        let content = store.load("doc1").await.unwrap();

        assert_eq!(content, "content1");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_load_missing_document() {
        let store = MemoryStore::new();

        let result = store.load("missing").await;
        assert!(matches!(result, Err(DocError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_save_overwrites() {
        let store = MemoryStore::new();

        store.save("doc1", "v1").await.unwrap();
        store.save("doc1", "v2").await.unwrap();

        assert_eq!(store.load("doc1").await.unwrap(), "v2");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_with_documents() {
        let store = MemoryStore::with_documents(vec![
            ("a".to_string(), "alpha".to_string()),
            ("b".to_string(), "beta".to_string()),
        ]);

        assert_eq!(store.load("a").await.unwrap(), "alpha");
        assert_eq!(store.load("b").await.unwrap(), "beta");
        assert!(!store.is_empty().await);
    }
}
