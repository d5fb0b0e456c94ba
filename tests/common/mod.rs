//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use sharecode_api::router::build_router;
use sharecode_api::state::AppState;
use sharecode_core::config::AppConfig;
use sharecode_registry::ShareCodeRegistry;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
}

impl TestApp {
    /// Create a test application with a 60-second code TTL
    pub fn new() -> Self {
        Self::with_ttl(60)
    }

    /// Create a test application with the given code TTL in seconds.
    ///
    /// No sweeper is started; expiry is enforced by the lookup path alone.
    pub fn with_ttl(ttl_seconds: u64) -> Self {
        let config = AppConfig::default();
        let (registry, _removals) = ShareCodeRegistry::new(ttl_seconds);
        let state = AppState::new(Arc::new(config), Arc::new(registry));

        Self {
            router: build_router(state),
        }
    }

    /// Mint a code for `token` and return it
    pub async fn mint(&self, token: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/share-codes",
                Some(serde_json::json!({ "token": token })),
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Mint failed: {:?}",
            response.body
        );

        response.body["data"]["code"]
            .as_str()
            .expect("No code in mint response")
            .to_string()
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
