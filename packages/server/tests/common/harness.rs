//! In-process test harness: drives the real router without binding a port.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use landing_core::kernel::{MockAI, ScoringSettings, ServerDeps};
use landing_core::server::build_app;
use serde_json::Value;
use tower::ServiceExt;

pub struct TestHarness {
    router: Router,
}

impl TestHarness {
    pub fn new(deps: ServerDeps) -> Self {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let origins = vec!["http://localhost:5500".to_string()];
        Self {
            router: build_app(deps, &origins),
        }
    }

    /// Forced heuristic mode, as with `USE_MOCK=1`.
    pub fn heuristic() -> Self {
        Self::new(ServerDeps::heuristic_only())
    }

    /// LLM mode backed by a scripted mock.
    pub fn with_mock(mock: Arc<MockAI>) -> Self {
        Self::new(ServerDeps::new(Some(mock), ScoringSettings::default()))
    }

    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(path)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn post_json(&self, path: &str, body: Value) -> (StatusCode, Value) {
        self.post_raw(path, &body.to_string()).await
    }

    pub async fn post_raw(&self, path: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// Send a request and return status plus raw body bytes as text.
    pub async fn send_raw(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let (status, text) = self.send_raw(request).await;
        let json = serde_json::from_str(&text).unwrap_or(Value::Null);
        (status, json)
    }
}
