//! Portfolio store abstraction
//!
//! A store maps a user id to that user's ordered list of media records. Writes replace the
//! whole list; there is no item-level update.

use async_trait::async_trait;
use folio_core::models::MediaRecord;
use folio_core::{AppError, PortfolioBackend};
use thiserror::Error;

/// Portfolio store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Failed to decode stored items: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Result type for portfolio store operations
pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Database(e) => AppError::Database(e),
            StoreError::Decode(e) => AppError::InternalWithSource {
                message: "Stored portfolio could not be decoded".to_string(),
                source: e.into(),
            },
            StoreError::Migration(e) => AppError::InternalWithSource {
                message: "Database migration failed".to_string(),
                source: e.into(),
            },
        }
    }
}

/// Storage backend for portfolios, keyed by user id.
///
/// Implementations must behave identically: `put` is an upsert that fully replaces the
/// stored list, and reads preserve the submitted order.
#[async_trait]
pub trait PortfolioStore: Send + Sync {
    /// Create or replace the item list stored for `user_id`.
    async fn put(&self, user_id: &str, items: Vec<MediaRecord>) -> StoreResult<()>;

    /// Stored list for `user_id`, or `None` when the user has never been saved.
    async fn find(&self, user_id: &str) -> StoreResult<Option<Vec<MediaRecord>>>;

    /// Stored list for `user_id`; unknown users read as an empty list.
    async fn get(&self, user_id: &str) -> StoreResult<Vec<MediaRecord>> {
        Ok(self.find(user_id).await?.unwrap_or_default())
    }

    /// Verify the backend is reachable.
    async fn health_check(&self) -> StoreResult<()>;

    /// Which backend this is.
    fn backend(&self) -> PortfolioBackend;
}
