//! Liveness and health check handlers.

use crate::constants::SERVICE_NAME;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use utoipa::ToSchema;

const CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Run an async check with timeout; returns "healthy", "timeout", or "{prefix}: {error}".
async fn run_check<F, E>(timeout: Duration, f: F, error_prefix: &str) -> String
where
    F: Future<Output = Result<(), E>>,
    E: Display,
{
    match tokio::time::timeout(timeout, f).await {
        Ok(Ok(())) => "healthy".to_string(),
        Ok(Err(e)) => format!("{}: {}", error_prefix, e),
        Err(_) => "timeout".to_string(),
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LivenessResponse {
    pub status: String,
    pub service: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthCheckResponse {
    pub status: String,
    /// `memory` or `postgres`
    pub backend: String,
    pub database: String,
    pub storage: String,
}

/// Liveness probe - process is running.
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses((status = 200, description = "Service is running", body = LivenessResponse))
)]
pub async fn liveness_check() -> impl IntoResponse {
    Json(LivenessResponse {
        status: "ok".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}

/// Health check of the portfolio backend and the content directory.
///
/// Returns 503 when the backend is unreachable; a content directory problem is reported
/// as degraded.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Backend reachable", body = HealthCheckResponse),
        (status = 503, description = "Backend unreachable", body = HealthCheckResponse)
    )
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let store = state.portfolio.service.store().clone();
    let database = run_check(
        CHECK_TIMEOUT,
        async move { store.health_check().await },
        "unhealthy",
    )
    .await;

    let root = state.uploads.service.storage().root().to_path_buf();
    let storage = run_check(
        CHECK_TIMEOUT,
        async move {
            let metadata = tokio::fs::metadata(&root).await?;
            if metadata.is_dir() {
                Ok::<(), std::io::Error>(())
            } else {
                Err(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    format!("{} is not a directory", root.display()),
                ))
            }
        },
        "degraded",
    )
    .await;

    let healthy = database == "healthy";
    if !healthy {
        tracing::error!(database = %database, "Health check failed");
    }

    let response = HealthCheckResponse {
        status: if healthy { "healthy" } else { "unhealthy" }.to_string(),
        backend: state.portfolio.service.store().backend().to_string(),
        database,
        storage,
    };

    let status_code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}
