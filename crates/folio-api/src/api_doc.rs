//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use crate::setup::routes::health;
use folio_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Folio API",
        version = "0.1.0",
        description = "Portfolio media backend: upload images and videos, save a user's portfolio of media records, list it back with download URLs, and remove individual items. Uploaded files are served under /uploads/{filename}."
    ),
    paths(
        // Health
        health::liveness_check,
        health::health_check,
        // Uploads
        handlers::upload::upload_media,
        // Portfolio
        handlers::portfolio::save_portfolio,
        handlers::portfolio::load_portfolio,
        handlers::portfolio::remove_media,
    ),
    components(
        schemas(
            models::MediaType,
            models::MediaRecord,
            models::MediaItem,
            models::Portfolio,
            models::RemoveMediaRequest,
            models::RemoveMediaResponse,
            models::StatusResponse,
            models::LoadPortfolioResponse,
            models::UploadResponse,
            health::LivenessResponse,
            health::HealthCheckResponse,
            error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Liveness and health checks"),
        (name = "uploads", description = "File ingestion"),
        (name = "portfolio", description = "Portfolio records")
    )
)]
pub struct ApiDoc;
