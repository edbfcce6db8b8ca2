use crate::{LocalStorage, Storage, StorageResult};
use folio_core::Config;
use std::sync::Arc;

/// Create the content directory storage from configuration
pub async fn create_storage(config: &Config) -> StorageResult<Arc<dyn Storage>> {
    let storage = LocalStorage::new(config.upload_dir()).await?;
    Ok(Arc::new(storage))
}
