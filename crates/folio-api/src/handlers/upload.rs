use std::io;

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::{header, HeaderMap, StatusCode},
    Json,
};
use folio_core::models::UploadResponse;
use folio_core::{AppError, MediaUrlBuilder};
use futures::TryStreamExt;
use tokio_util::io::StreamReader;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::UploadState;

/// Refuse uploads whose declared `Content-Length` exceeds `limit`.
fn check_declared_length(headers: &HeaderMap, limit: usize) -> Result<(), AppError> {
    let declared = headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok());

    match declared {
        Some(len) if len > limit as u64 => Err(AppError::PayloadTooLarge(format!(
            "Upload of {} bytes exceeds the limit of {} bytes",
            len, limit
        ))),
        _ => Ok(()),
    }
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::InvalidInput(format!("Failed to read multipart: {}", err))
    }
}

/// Upload handler
///
/// Streams the multipart field named `file` into the content directory and returns the
/// identity clients embed in a later portfolio save. Fields with other names are ignored.
///
/// # Errors
/// - `AppError::InvalidInput` - Not a multipart body, or no `file` field
/// - `AppError::PayloadTooLarge` - Declared length over `MAX_UPLOAD_SIZE_MB`
/// - `AppError::Storage` - The file could not be written; no identity is returned
#[utoipa::path(
    post,
    path = "/upload",
    tag = "uploads",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "File stored", body = UploadResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 500, description = "File could not be stored", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(uploads, headers, multipart), fields(operation = "upload_media"))]
pub async fn upload_media(
    State(uploads): State<UploadState>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, HttpAppError> {
    check_declared_length(&headers, uploads.max_upload_bytes)?;

    let mut multipart = multipart.map_err(|e| {
        AppError::InvalidInput(format!("Invalid multipart request: {}", e.body_text()))
    })?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(multipart_error)?
    {
        if field.name() != Some("file") {
            continue;
        }

        let original_filename = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let reader = StreamReader::new(field.map_err(|e| io::Error::new(io::ErrorKind::Other, e)));

        let uploaded = uploads
            .service
            .ingest(
                original_filename.as_deref(),
                content_type.as_deref(),
                Box::pin(reader),
            )
            .await?;

        return Ok(Json(UploadResponse {
            url: MediaUrlBuilder::relative_url(&uploaded.filename),
            id: uploaded.id,
            filename: uploaded.filename,
            media_type: uploaded.media_type,
        }));
    }

    Err(AppError::InvalidInput("No file provided".to_string()).into())
}
