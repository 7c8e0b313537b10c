//! Request DTOs for the document cache API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::cache::MAX_DOCUMENT_SIZE;

/// Request body for updating a document (PUT /documents/:id)
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDocumentRequest {
    /// The new document content
    pub content: String,
}

impl UpdateDocumentRequest {
    /// Validates the request data.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.content.is_empty() {
            return Some("Content cannot be empty".to_string());
        }
        if self.content.len() > MAX_DOCUMENT_SIZE {
            return Some(format!(
                "Content exceeds maximum size of {} bytes",
                MAX_DOCUMENT_SIZE
            ));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_deserialize() {
        let json = r#"{"content": "hello"}"#;
        let req: UpdateDocumentRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.content, "hello");
    }

    #[test]
    fn test_validate_empty_content() {
        let req = UpdateDocumentRequest {
            content: "".to_string(),
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_oversized_content() {
        let req = UpdateDocumentRequest {
            content: "x".repeat(MAX_DOCUMENT_SIZE + 1),
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_valid_request() {
        let req = UpdateDocumentRequest {
            content: "some document text".to_string(),
        };
        assert!(req.validate().is_none());
    }
}
