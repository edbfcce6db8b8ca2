use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::media::{MediaItem, MediaRecord, MediaType};

/// All media records owned by one user, in client-submitted order.
///
/// Also the body of `POST /save-portfolio`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Portfolio {
    pub user_id: String,
    pub items: Vec<MediaRecord>,
}

/// Body of `DELETE /remove-media`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RemoveMediaRequest {
    pub user_id: String,
    pub media_id: String,
}

/// `{"status": "success"}` acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn success() -> Self {
        Self {
            status: "success".to_string(),
        }
    }
}

/// Response of `GET /load-portfolio/{user_id}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoadPortfolioResponse {
    pub items: Vec<MediaItem>,
}

/// Response of `DELETE /remove-media`.
///
/// An unknown user is reported in the body, not through the HTTP status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RemoveMediaResponse {
    Success { removed: String },
    Error { message: String },
}

impl RemoveMediaResponse {
    pub fn user_not_found() -> Self {
        RemoveMediaResponse::Error {
            message: "User not found".to_string(),
        }
    }
}

/// Response of `POST /upload`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UploadResponse {
    pub id: String,
    pub filename: String,
    pub media_type: MediaType,
    /// Path relative to the server root: `/uploads/{filename}`
    pub url: String,
}
