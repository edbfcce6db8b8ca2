//! Portfolio save, load and item removal.

use axum::{
    extract::{Path, State},
    Json,
};
use folio_core::models::{
    LoadPortfolioResponse, Portfolio, RemoveMediaRequest, RemoveMediaResponse, StatusResponse,
};

use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::extractors::RequestBaseUrl;
use crate::services::portfolio::RemoveOutcome;
use crate::state::PortfolioState;

/// Replace a user's portfolio with the submitted items.
///
/// Any `url` sent back with an item is discarded; only the record fields are stored.
#[utoipa::path(
    post,
    path = "/save-portfolio",
    tag = "portfolio",
    request_body = Portfolio,
    responses(
        (status = 200, description = "Portfolio saved", body = StatusResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(portfolio, body),
    fields(user_id = %body.user_id, items = body.items.len(), operation = "save_portfolio")
)]
pub async fn save_portfolio(
    State(portfolio): State<PortfolioState>,
    ValidatedJson(body): ValidatedJson<Portfolio>,
) -> Result<Json<StatusResponse>, HttpAppError> {
    portfolio
        .service
        .save_portfolio(&body.user_id, body.items)
        .await?;
    Ok(Json(StatusResponse::success()))
}

#[utoipa::path(
    get,
    path = "/load-portfolio/{user_id}",
    tag = "portfolio",
    params(
        ("user_id" = String, Path, description = "Portfolio owner")
    ),
    responses(
        (status = 200, description = "Items with download URLs; empty for unknown users", body = LoadPortfolioResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(portfolio, base_url), fields(operation = "load_portfolio"))]
pub async fn load_portfolio(
    State(portfolio): State<PortfolioState>,
    Path(user_id): Path<String>,
    RequestBaseUrl(base_url): RequestBaseUrl,
) -> Result<Json<LoadPortfolioResponse>, HttpAppError> {
    let items = portfolio
        .service
        .load_portfolio(&user_id, &base_url)
        .await?;
    Ok(Json(LoadPortfolioResponse { items }))
}

/// Remove one item from a portfolio.
///
/// An unknown user is reported as `{"status": "error"}` with HTTP 200. Removing an id the
/// portfolio does not contain succeeds and leaves it unchanged.
#[utoipa::path(
    delete,
    path = "/remove-media",
    tag = "portfolio",
    request_body = RemoveMediaRequest,
    responses(
        (status = 200, description = "Removed, or user not found (see `status`)", body = RemoveMediaResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(portfolio, body),
    fields(user_id = %body.user_id, media_id = %body.media_id, operation = "remove_media")
)]
pub async fn remove_media(
    State(portfolio): State<PortfolioState>,
    ValidatedJson(body): ValidatedJson<RemoveMediaRequest>,
) -> Result<Json<RemoveMediaResponse>, HttpAppError> {
    let outcome = portfolio
        .service
        .remove_media(&body.user_id, &body.media_id)
        .await?;

    let response = match outcome {
        RemoveOutcome::Removed => RemoveMediaResponse::Success {
            removed: body.media_id,
        },
        RemoveOutcome::UserNotFound => {
            tracing::debug!("Remove requested for unknown user");
            RemoveMediaResponse::user_not_found()
        }
    };

    Ok(Json(response))
}
