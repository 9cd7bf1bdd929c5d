//! Shared harness for API integration tests.
//!
//! Builds the full router over an in-memory store and provides request
//! builders that decode JSON bodies.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use orgdir_core::db::open_db_in_memory;
use orgdir_server::{router, AppState};
use serde_json::Value;
use tower::ServiceExt;

/// Fresh router over an empty in-memory database.
pub fn test_router() -> Router {
    let conn = open_db_in_memory().expect("in-memory db should open");
    router(AppState::new(conn))
}

/// Sends a bodyless request and decodes the JSON response.
#[allow(dead_code)]
pub async fn send(router: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    dispatch(router, request).await
}

/// Sends a JSON-body request and decodes the JSON response.
#[allow(dead_code)]
pub async fn send_json(
    router: &Router,
    method: Method,
    uri: &str,
    body: Value,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build");
    dispatch(router, request).await
}

async fn dispatch(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("request should complete");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should collect");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body should be JSON")
    };
    (status, json)
}
