//! Shared helpers for REST API integration tests.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use copurchase_core::GraphStore;
use copurchase_server::{build_app, AppState, ServerConfig};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Small document with known answers for every endpoint.
pub const EXAMPLE_DOC: &str = r#"{
    "nodes": [
        {"id": 1, "asin": "A1", "title": "Widget", "group": "Toys", "degree": 2},
        {"id": 2, "asin": "A2", "title": "Gadget", "group": "Toys", "degree": 1},
        {"id": 3, "asin": "A3", "title": "Gizmo", "group": "Books", "degree": 1}
    ],
    "links": [{"source": 1, "target": 2}, {"source": 1, "target": 3}],
    "metadata": {"total_nodes": 3, "total_edges": 2, "cleaned_at": "2024-01-01T00:00:00Z"}
}"#;

/// Default prefix used by the test app.
pub const PREFIX: &str = "/api/network";

/// Create the full application over the example document.
pub fn create_test_app() -> Router {
    create_app_from(EXAMPLE_DOC.as_bytes())
}

/// Create the full application over an arbitrary document.
pub fn create_app_from(doc: &[u8]) -> Router {
    let store = GraphStore::load(doc).expect("Failed to load test graph");
    let state = Arc::new(AppState::new(store));
    build_app(state, &ServerConfig::default()).expect("Failed to build app")
}

/// Issue a GET and return the status and raw body.
pub async fn get(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("Failed to build request"),
        )
        .await
        .expect("Request failed");
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    (status, body.to_vec())
}

/// Issue a GET under the API prefix and parse the JSON body.
pub async fn get_json(app: &Router, path: &str) -> (StatusCode, Value) {
    let (status, body) = get(app, &format!("{PREFIX}{path}")).await;
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

/// Collect the `id` fields of a JSON node array.
pub fn node_ids(value: &Value) -> Vec<i64> {
    value
        .as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|n| n["id"].as_i64().expect("node id"))
        .collect()
}
