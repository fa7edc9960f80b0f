//! Common test utilities

use aegis_daemon::server::api_router;
use aegis_daemon::{AppState, Backend, EntityStore, FsBackend, MemoryBackend};
use axum::body::{to_bytes, Body};
use axum::http::{header::CONTENT_TYPE, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

/// Create a temporary directory for testing
#[allow(dead_code)] // Test utility for integration tests
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// A store over a fresh in-memory backend
pub fn memory_store() -> EntityStore {
    EntityStore::new(Arc::new(MemoryBackend::new()))
}

/// A store writing JSON files under `dir`
#[allow(dead_code)] // Not every test binary uses the file backend
pub fn fs_store(dir: &TempDir) -> EntityStore {
    let backend: Arc<dyn Backend> = Arc::new(FsBackend::new(dir.path()));
    EntityStore::new(backend)
}

/// The API router over an in-memory store
#[allow(dead_code)]
pub fn test_app() -> Router {
    api_router(AppState::new(&memory_store(), 100))
}

/// Send one request and decode the JSON envelope
#[allow(dead_code)]
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).expect("Failed to build request"))
        .await
        .expect("Router is infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let json = serde_json::from_slice(&bytes).expect("Body is not JSON");
    (status, json)
}
