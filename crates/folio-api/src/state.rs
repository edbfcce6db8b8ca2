//! Application state and sub-state extractors.
//!
//! Handlers extract only the sub-state they need via Axum's `FromRef`.

use crate::services::portfolio::PortfolioService;
use crate::services::upload::UploadService;
use folio_core::{BaseUrlPolicy, Config};
use std::sync::Arc;

/// Portfolio record operations and the policy used to resolve download URLs.
#[derive(Clone)]
pub struct PortfolioState {
    pub service: PortfolioService,
    pub url_policy: BaseUrlPolicy,
}

/// Upload ingestion into the content directory.
#[derive(Clone)]
pub struct UploadState {
    pub service: UploadService,
    /// Uploads declaring a larger `Content-Length` are refused before any byte is stored.
    pub max_upload_bytes: usize,
}

pub struct AppState {
    pub portfolio: PortfolioState,
    pub uploads: UploadState,
}

impl AppState {
    pub fn new(config: &Config, portfolio: PortfolioService, uploads: UploadService) -> Self {
        Self {
            portfolio: PortfolioState {
                service: portfolio,
                url_policy: config.base_url_policy(),
            },
            uploads: UploadState {
                service: uploads,
                max_upload_bytes: config.max_upload_size_bytes(),
            },
        }
    }
}

// ----- FromRef for sub-state extraction -----

impl axum::extract::FromRef<Arc<AppState>> for PortfolioState {
    fn from_ref(state: &Arc<AppState>) -> Self {
        state.portfolio.clone()
    }
}

impl axum::extract::FromRef<Arc<AppState>> for UploadState {
    fn from_ref(state: &Arc<AppState>) -> Self {
        state.uploads.clone()
    }
}
