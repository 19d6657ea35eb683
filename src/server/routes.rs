//! API routes
//!
//! - `POST /api/roast` runs the roast pipeline
//! - `GET /api/health` checks that the generation backend answers

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, warn};

use resume_roaster_core::{BackendReason, CoreError, ErrorResponse, RoastResponse};

use crate::models::request::RoastRequest;
use crate::models::response::HealthResponse;
use crate::state::AppState;

pub type AppStateArc = Arc<AppState>;

/// HTTP status for a pipeline error
pub fn status_for(err: &CoreError) -> StatusCode {
    match err {
        CoreError::Validation(_) => StatusCode::BAD_REQUEST,
        CoreError::Backend {
            reason: BackendReason::Unavailable,
            ..
        } => StatusCode::SERVICE_UNAVAILABLE,
        CoreError::Backend { .. } | CoreError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

// ============================================================================
// Roast Routes
// ============================================================================

pub fn roast_routes() -> Router<AppStateArc> {
    Router::new().route("/api/roast", post(roast))
}

async fn roast(
    State(state): State<AppStateArc>,
    payload: Result<Json<RoastRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("Rejected roast request body: {}", rejection.body_text());
            let body = ErrorResponse {
                error: "Invalid request body".to_string(),
            };
            return (rejection.status(), Json(body)).into_response();
        }
    };

    let outcome = state.service.roast(&request.text).await;
    let status = match &outcome {
        Ok(_) => StatusCode::OK,
        Err(err) => status_for(err),
    };
    info!(status = status.as_u16(), "Roast request finished");

    (status, Json(RoastResponse::from(outcome))).into_response()
}

// ============================================================================
// Health Routes
// ============================================================================

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/api/health", get(health))
}

async fn health(State(state): State<AppStateArc>) -> Response {
    let provider = &state.provider;
    match state.health_check().await {
        Ok(()) => Json(HealthResponse::ok(provider.name(), provider.model())).into_response(),
        Err(err) => {
            warn!(provider = provider.name(), "Health check failed: {}", err);
            let err: CoreError = err.into();
            (StatusCode::SERVICE_UNAVAILABLE, Json(ErrorResponse::from(&err))).into_response()
        }
    }
}
