//! Storage abstraction trait
//!
//! This module defines the Storage trait that content directory backends implement.

use async_trait::async_trait;
use std::path::Path;
use std::pin::Pin;
use thiserror::Error;
use tokio::io::AsyncRead;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// The upload ingestor writes through this trait so the HTTP layer never touches the
/// filesystem directly.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Write a file from a stream/reader under `storage_key`.
    ///
    /// The reader is consumed until EOF. Returns the number of bytes written.
    async fn upload_stream<'r>(
        &self,
        storage_key: &str,
        reader: Pin<Box<dyn AsyncRead + Send + 'r>>,
    ) -> StorageResult<u64>;

    /// Delete a file by its storage key. Deleting a missing file succeeds.
    async fn delete(&self, storage_key: &str) -> StorageResult<()>;

    /// Check if a file exists
    async fn exists(&self, storage_key: &str) -> StorageResult<bool>;

    /// Directory files are served from.
    fn root(&self) -> &Path;
}
