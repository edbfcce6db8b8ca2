//! Route configuration and setup.

pub mod health;

use crate::api_doc::ApiDoc;
use crate::constants::OPENAPI_PATH;
use crate::handlers;
use crate::middleware::{request_id_middleware, RequestId};
use crate::state::AppState;
use axum::{
    body::Body,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, Request},
    routing::{delete, get, post},
    Json, Router,
};
use folio_core::{Config, UPLOADS_PATH};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router<()>, anyhow::Error> {
    let cors = setup_cors(config)?;
    let content_dir = state.uploads.service.storage().root().to_path_buf();

    let app = Router::new()
        .route("/", get(health::liveness_check))
        .route("/health", get(health::health_check))
        .route("/upload", post(handlers::upload::upload_media))
        .route("/save-portfolio", post(handlers::portfolio::save_portfolio))
        .route(
            "/load-portfolio/{user_id}",
            get(handlers::portfolio::load_portfolio),
        )
        .route("/remove-media", delete(handlers::portfolio::remove_media))
        .route(OPENAPI_PATH, get(|| async { Json(ApiDoc::openapi()) }))
        .nest_service(UPLOADS_PATH, ServeDir::new(content_dir))
        .layer(DefaultBodyLimit::max(config.max_upload_size_bytes()))
        .layer(cors)
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(axum::middleware::from_fn(request_id_middleware))
        .with_state(state);

    Ok(app)
}

/// Span for one request, tagged with the id assigned by the request-id middleware.
fn request_span(request: &Request<Body>) -> tracing::Span {
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.as_str())
        .unwrap_or_default();
    tracing::debug_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}

/// Setup CORS configuration
fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let methods = [Method::GET, Method::POST, Method::DELETE, Method::OPTIONS];

    let cors = if config.cors_origins().iter().any(|o| o == "*") {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any)
    } else {
        let origins = config
            .cors_origins()
            .iter()
            .map(|o| {
                o.parse::<HeaderValue>()
                    .map_err(|e| anyhow::anyhow!("Invalid CORS origin '{}': {}", o, e))
            })
            .collect::<Result<Vec<_>, _>>()?;
        tracing::info!(origins = ?config.cors_origins(), "CORS restricted to configured origins");
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(Any)
    };
    Ok(cors)
}
