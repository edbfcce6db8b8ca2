//! Folio Core Library
//!
//! This crate provides the domain models, error types, configuration, and media URL
//! resolution shared by all Folio components.

pub mod config;
pub mod error;
pub mod media_url;
pub mod models;
pub mod storage_types;

// Re-export commonly used types
pub use config::{BaseConfig, Config, PortfolioConfig};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use media_url::{BaseUrlPolicy, MediaUrlBuilder, RequestOrigin, UPLOADS_PATH};
pub use storage_types::PortfolioBackend;
