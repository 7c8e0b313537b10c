//! Integration Tests for API Endpoints
//!
//! Tests the full request/response cycle for each endpoint, driving the
//! router in-process.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use doc_cache::{
    api::create_router, cache::TtlCache, service::DocumentService, store::MemoryStore, AppState,
};
use serde_json::Value;
use std::time::Duration;

// == Helper Functions ==

fn create_app(capacity: usize, ttl_seconds: u64, documents: Vec<(&str, &str)>) -> Router {
    let store = MemoryStore::with_documents(
        documents
            .into_iter()
            .map(|(id, content)| (id.to_string(), content.to_string())),
    );
    let service = DocumentService::new(TtlCache::new(capacity, ttl_seconds), store);
    create_router(AppState::new(service))
}

fn create_test_app() -> Router {
    create_app(10, 60, vec![("doc1", "first document")])
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get_document(app: &Router, id: &str) -> (StatusCode, Value) {
    use tower::ServiceExt;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(format!("/documents/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let json = body_to_json(response.into_body()).await;
    (status, json)
}

async fn put_document(app: &Router, id: &str, content: &str) -> StatusCode {
    use tower::ServiceExt;

    let body = serde_json::json!({ "content": content }).to_string();
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/documents/{}", id))
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    response.status()
}

async fn get_stats(app: &Router) -> Value {
    use tower::ServiceExt;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/stats")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    body_to_json(response.into_body()).await
}

// == GET Endpoint Tests ==

#[tokio::test]
async fn test_get_document_success() {
    let app = create_test_app();

    let (status, json) = get_document(&app, "doc1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"].as_str().unwrap(), "doc1");
    assert_eq!(json["content"].as_str().unwrap(), "first document");
}

#[tokio::test]
async fn test_get_document_not_found() {
    let app = create_test_app();

    let (status, json) = get_document(&app, "nonexistent").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json.get("error").is_some());
}

#[tokio::test]
async fn test_get_is_served_from_cache_on_second_read() {
    let app = create_test_app();

    // First read misses the cache, second read hits it
    get_document(&app, "doc1").await;
    get_document(&app, "doc1").await;

    let stats = get_stats(&app).await;
    assert_eq!(stats["hits"].as_u64().unwrap(), 1);
    assert_eq!(stats["misses"].as_u64().unwrap(), 1);
}

// == PUT Endpoint Tests ==

#[tokio::test]
async fn test_put_then_get_round_trip() {
    let app = create_test_app();

    let status = put_document(&app, "doc2", "brand new content").await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) = get_document(&app, "doc2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["content"].as_str().unwrap(), "brand new content");
}

#[tokio::test]
async fn test_put_overwrites_existing_document() {
    let app = create_test_app();

    let status = put_document(&app, "doc1", "rewritten").await;
    assert_eq!(status, StatusCode::OK);

    let (_, json) = get_document(&app, "doc1").await;
    assert_eq!(json["content"].as_str().unwrap(), "rewritten");
}

#[tokio::test]
async fn test_put_empty_content_rejected() {
    let app = create_test_app();

    let status = put_document(&app, "doc1", "").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// == Expiration Tests ==

#[tokio::test]
async fn test_expired_document_is_refetched() {
    let app = create_app(10, 1, vec![("doc1", "short lived")]);

    // First read populates the cache
    let (status, _) = get_document(&app, "doc1").await;
    assert_eq!(status, StatusCode::OK);

    // Let the cache entry expire
    tokio::time::sleep(Duration::from_millis(1100)).await;

    // Still served (re-fetched from the store), but as a cache miss
    let (status, json) = get_document(&app, "doc1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["content"].as_str().unwrap(), "short lived");

    let stats = get_stats(&app).await;
    assert_eq!(stats["hits"].as_u64().unwrap(), 0);
    assert_eq!(stats["misses"].as_u64().unwrap(), 2);
}

// == Eviction Tests ==

#[tokio::test]
async fn test_capacity_two_eviction_scenario() {
    let app = create_app(2, 60, vec![("A", "a"), ("B", "b"), ("C", "c")]);

    // Fill the cache: {A}, then {A, B}
    get_document(&app, "A").await;
    get_document(&app, "B").await;

    // C evicts A (oldest): cache {B, C}
    get_document(&app, "C").await;

    // A is gone from the cache, so this is a miss and a re-fetch
    let (status, json) = get_document(&app, "A").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["content"].as_str().unwrap(), "a");

    let stats = get_stats(&app).await;
    assert_eq!(stats["misses"].as_u64().unwrap(), 4);
    assert_eq!(stats["evictions"].as_u64().unwrap(), 2);
    assert_eq!(stats["total_entries"].as_u64().unwrap(), 2);
}

// == Stats Endpoint Tests ==

#[tokio::test]
async fn test_stats_endpoint_shape() {
    let app = create_test_app();

    let stats = get_stats(&app).await;
    assert!(stats.get("hits").is_some());
    assert!(stats.get("misses").is_some());
    assert!(stats.get("evictions").is_some());
    assert!(stats.get("total_entries").is_some());
    assert!(stats.get("hit_rate").is_some());
}

// == Health Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    use tower::ServiceExt;

    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"].as_str().unwrap(), "healthy");
}
