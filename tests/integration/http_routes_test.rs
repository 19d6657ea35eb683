//! HTTP Route Integration Tests
//!
//! Drives the axum router with `tower::ServiceExt::oneshot`:
//! - `POST /api/roast` success and each error status
//! - `GET /api/health` healthy and failing backends
//! - Request body limit

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use resume_roaster::server;
use resume_roaster::services::roast::{PromptCatalog, RoastService};
use resume_roaster::AppState;
use resume_roaster_core::{BackendReason, CoreError, CoreResult, GenerationClient};
use resume_roaster_llm::{
    LlmError, LlmProvider, LlmRequestOptions, LlmResponse, LlmResult, ProviderConfig,
};

// ============================================================================
// Test Doubles
// ============================================================================

struct FixedClient(CoreResult<String>);

#[async_trait]
impl GenerationClient for FixedClient {
    async fn generate(&self, _prompt: &str) -> CoreResult<String> {
        self.0.clone()
    }
}

struct MockProvider {
    healthy: bool,
    config: ProviderConfig,
}

impl MockProvider {
    fn new(healthy: bool) -> Arc<Self> {
        Arc::new(Self {
            healthy,
            config: ProviderConfig::default(),
        })
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn model(&self) -> &str {
        "mock-model"
    }

    async fn send_message(
        &self,
        _prompt: &str,
        _request_options: LlmRequestOptions,
    ) -> LlmResult<LlmResponse> {
        if self.healthy {
            Ok(LlmResponse {
                content: Some("ok".to_string()),
                model: "mock-model".to_string(),
                finish_reason: None,
            })
        } else {
            Err(LlmError::AuthenticationFailed {
                message: "API key not valid".to_string(),
            })
        }
    }

    fn config(&self) -> &ProviderConfig {
        &self.config
    }
}

/// Accepts the health call and never answers.
struct StalledProvider {
    config: ProviderConfig,
}

#[async_trait]
impl LlmProvider for StalledProvider {
    fn name(&self) -> &'static str {
        "stalled"
    }

    fn model(&self) -> &str {
        "stalled-model"
    }

    async fn send_message(
        &self,
        _prompt: &str,
        _request_options: LlmRequestOptions,
    ) -> LlmResult<LlmResponse> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Err(LlmError::Other {
            message: "unreachable".to_string(),
        })
    }

    fn config(&self) -> &ProviderConfig {
        &self.config
    }
}

fn app_with(reply: CoreResult<String>, healthy: bool, max_body_bytes: usize) -> Router {
    let service = RoastService::new(PromptCatalog::builtin(), Arc::new(FixedClient(reply)));
    let state = AppState::new(service, MockProvider::new(healthy));
    server::router(state, max_body_bytes)
}

fn app(reply: CoreResult<String>) -> Router {
    app_with(reply, true, 1024 * 1024)
}

fn roast_request(body: impl Into<String>) -> Request<Body> {
    let body = body.into();
    Request::builder()
        .method("POST")
        .uri("/api/roast")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::CONTENT_LENGTH, body.len())
        .body(Body::from(body))
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

// ============================================================================
// Roast Route
// ============================================================================

#[tokio::test]
async fn test_roast_success() {
    let app = app(Ok(
        r#"{"roast": "Line one.\nLine two.", "suggestions": ["Quantify"], "score": 8}"#.to_string(),
    ));
    let (status, body) = send(app, roast_request(r#"{"text": "My resume"}"#)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["roast"], "Line one.\n\nLine two.");
    assert_eq!(body["suggestions"][0], "Quantify");
    assert_eq!(body["score"], 8);
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn test_roast_blank_text_is_bad_request() {
    let (status, body) = send(app(Ok("{}".to_string())), roast_request(r#"{"text": "  "}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No resume text provided");
    assert!(body.get("roast").is_none());
}

#[tokio::test]
async fn test_roast_missing_text_field_is_bad_request() {
    let (status, body) = send(app(Ok("{}".to_string())), roast_request("{}")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_roast_malformed_body_is_bad_request() {
    let (status, body) = send(app(Ok("{}".to_string())), roast_request("{ nope")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request body");
}

#[tokio::test]
async fn test_roast_backend_unavailable_is_503() {
    let app = app(Err(CoreError::backend(BackendReason::Unavailable, "429")));
    let (status, body) = send(app, roast_request(r#"{"text": "cv"}"#)).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["error"].as_str().unwrap().contains("temporarily unavailable"));
}

#[tokio::test]
async fn test_roast_backend_auth_failure_is_500_without_details() {
    let app = app(Err(CoreError::backend(
        BackendReason::Unauthenticated,
        "provider body with secrets",
    )));
    let (status, body) = send(app, roast_request(r#"{"text": "cv"}"#)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("API key"));
    assert!(!message.contains("secrets"));
}

#[tokio::test]
async fn test_roast_body_limit() {
    let app = app_with(Ok("{}".to_string()), true, 64);
    let text = "x".repeat(500);
    let (status, body) = send(app, roast_request(format!(r#"{{"text": "{}"}}"#, text))).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error"], "Request body too large");
}

#[tokio::test]
async fn test_roast_body_limit_without_content_length() {
    let app = app_with(Ok("{}".to_string()), true, 64);
    let request = Request::builder()
        .method("POST")
        .uri("/api/roast")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(format!(r#"{{"text": "{}"}}"#, "y".repeat(500))))
        .unwrap();
    let (status, body) = send(app, request).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error"], "Request body too large");
}

// ============================================================================
// Health Route
// ============================================================================

fn health_request() -> Request<Body> {
    Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_health_ok() {
    let app = app_with(Ok("{}".to_string()), true, 1024);
    let (status, body) = send(app, health_request()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["provider"], "mock");
    assert_eq!(body["model"], "mock-model");
}

#[tokio::test]
async fn test_health_failure_is_503() {
    let app = app_with(Ok("{}".to_string()), false, 1024);
    let (status, body) = send(app, health_request()).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["error"].is_string());
}

#[tokio::test(start_paused = true)]
async fn test_health_stalled_backend_hits_deadline() {
    let service = RoastService::new(
        PromptCatalog::builtin(),
        Arc::new(FixedClient(Ok("{}".to_string()))),
    );
    let provider = Arc::new(StalledProvider {
        config: ProviderConfig::default(),
    });
    let state = AppState::new(service, provider).with_deadline(Duration::from_secs(5));
    let app = server::router(state, 1024);

    let (status, body) = send(app, health_request()).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("temporarily unavailable"));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let request = Request::builder()
        .uri("/api/nothing")
        .body(Body::empty())
        .unwrap();
    let response = app(Ok("{}".to_string())).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
