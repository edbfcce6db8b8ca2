//! Portfolio backend setup

use anyhow::{Context, Result};
use folio_core::Config;
use folio_db::{create_portfolio_store, PortfolioStore};
use std::sync::Arc;

/// Build the portfolio store: PostgreSQL when `DATABASE_URL` is set, memory otherwise.
pub async fn setup_database(config: &Config) -> Result<Arc<dyn PortfolioStore>> {
    let store = create_portfolio_store(config)
        .await
        .context("Failed to initialize portfolio backend")?;
    tracing::info!(backend = %store.backend(), "Portfolio backend ready");
    Ok(store)
}
