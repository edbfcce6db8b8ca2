//! Service wiring

use crate::error::set_hide_error_details;
use crate::services::portfolio::PortfolioService;
use crate::services::upload::UploadService;
use crate::state::AppState;
use folio_core::Config;
use folio_db::PortfolioStore;
use folio_storage::Storage;
use std::sync::Arc;

/// Build application state around a portfolio store and the content directory storage.
pub fn initialize_services(
    config: &Config,
    store: Arc<dyn PortfolioStore>,
    storage: Arc<dyn Storage>,
) -> Arc<AppState> {
    set_hide_error_details(config.is_production());

    let state = AppState::new(
        config,
        PortfolioService::new(store),
        UploadService::new(storage),
    );
    tracing::debug!(url_policy = ?state.portfolio.url_policy, "Services initialized");
    Arc::new(state)
}
