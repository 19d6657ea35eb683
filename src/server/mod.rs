//! HTTP server
//!
//! axum router over the shared `AppState`, with request tracing and a body
//! size limit.

pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::middleware::map_response;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use resume_roaster_core::ErrorResponse;

use crate::state::AppState;
use crate::utils::error::AppResult;

/// Build the application router
pub fn router(state: AppState, max_body_bytes: usize) -> Router {
    let state = Arc::new(state);

    Router::new()
        .merge(routes::roast_routes())
        .merge(routes::health_routes())
        .with_state(state)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(map_response(json_payload_too_large))
        .layer(TraceLayer::new_for_http())
}

/// Give oversized-body rejections the same `{ "error" }` shape as every other failure.
async fn json_payload_too_large(response: Response) -> Response {
    if response.status() != StatusCode::PAYLOAD_TOO_LARGE {
        return response;
    }
    let body = ErrorResponse {
        error: "Request body too large".to_string(),
    };
    (StatusCode::PAYLOAD_TOO_LARGE, Json(body)).into_response()
}

/// Run the HTTP server until Ctrl-C
pub async fn run(addr: SocketAddr, app: Router) -> AppResult<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
