//! Content directory setup

use anyhow::{Context, Result};
use folio_core::Config;
use folio_storage::{create_storage, Storage};
use std::sync::Arc;

/// Open (and create if needed) the content directory uploads are written to.
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    tracing::info!(upload_dir = %config.upload_dir(), "Initializing content directory...");
    let storage = create_storage(config)
        .await
        .context("Failed to initialize content directory")?;
    tracing::info!(
        root = %storage.root().display(),
        "Content directory initialized successfully"
    );
    Ok(storage)
}
