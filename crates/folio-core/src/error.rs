//! Error types module
//!
//! This module provides the core error types used throughout Folio.
//! All errors are unified under the `AppError` enum which can represent database,
//! storage, validation, and other domain-specific errors.
//!
//! The `Database` variant and `From<sqlx::Error>` are gated behind the `sqlx` feature.

use std::io;

#[cfg(feature = "sqlx")]
use sqlx::Error as SqlxError;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Client mistakes: bad bodies, oversized uploads
    Debug,
    /// Failures on our side
    Error,
}

/// Metadata for error responses - defines how an error should be presented
/// This trait allows errors to self-describe their HTTP response characteristics
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "DATABASE_ERROR")
    fn error_code(&self) -> &'static str;

    /// Whether this error is recoverable (can be retried)
    fn is_recoverable(&self) -> bool;

    /// Suggested action for the client
    fn suggested_action(&self) -> Option<&'static str>;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Whether details should be hidden in production
    fn is_sensitive(&self) -> bool;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[cfg(feature = "sqlx")]
    #[error("Database error: {0}")]
    Database(#[source] SqlxError),

    #[cfg(not(feature = "sqlx"))]
    #[error("Database error: {0}")]
    Database(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File too large: {0}")]
    PayloadTooLarge(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Internal error with source")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

#[cfg(feature = "sqlx")]
impl From<SqlxError> for AppError {
    fn from(err: SqlxError) -> Self {
        AppError::Database(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Internal(format!("IO error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidInput(format!("JSON parsing error: {}", err))
    }
}

/// Response characteristics of one error variant.
struct VariantMeta {
    status: u16,
    code: &'static str,
    recoverable: bool,
    suggested_action: Option<&'static str>,
    sensitive: bool,
    log_level: LogLevel,
}

const RETRY_LATER: Option<&str> = Some("Retry after a short delay");

fn variant_meta(err: &AppError) -> VariantMeta {
    match err {
        AppError::Database(_) => VariantMeta {
            status: 500,
            code: "DATABASE_ERROR",
            recoverable: true,
            suggested_action: RETRY_LATER,
            sensitive: true,
            log_level: LogLevel::Error,
        },
        AppError::Storage(_) => VariantMeta {
            status: 500,
            code: "STORAGE_ERROR",
            recoverable: true,
            suggested_action: RETRY_LATER,
            sensitive: true,
            log_level: LogLevel::Error,
        },
        AppError::InvalidInput(_) => VariantMeta {
            status: 400,
            code: "INVALID_INPUT",
            recoverable: false,
            suggested_action: Some("Check request parameters and try again"),
            sensitive: false,
            log_level: LogLevel::Debug,
        },
        AppError::PayloadTooLarge(_) => VariantMeta {
            status: 413,
            code: "PAYLOAD_TOO_LARGE",
            recoverable: false,
            suggested_action: Some("Reduce file size and retry"),
            sensitive: false,
            log_level: LogLevel::Debug,
        },
        AppError::Internal(_) | AppError::InternalWithSource { .. } => VariantMeta {
            status: 500,
            code: "INTERNAL_ERROR",
            recoverable: true,
            suggested_action: RETRY_LATER,
            sensitive: true,
            log_level: LogLevel::Error,
        },
    }
}

impl AppError {
    /// Get the error type name for detailed error responses
    pub fn error_type(&self) -> &str {
        match self {
            AppError::Database(_) => "Database",
            AppError::Storage(_) => "Storage",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::PayloadTooLarge(_) => "PayloadTooLarge",
            AppError::Internal(_) => "Internal",
            AppError::InternalWithSource { .. } => "Internal",
        }
    }

    /// Get detailed error information including error chain
    pub fn detailed_message(&self) -> String {
        use std::error::Error;

        let mut details = self.to_string();

        let mut source = self.source();
        let mut depth = 0;
        while let Some(err) = source {
            depth += 1;
            if depth > 5 {
                details.push_str("\n  ... (truncated)");
                break;
            }
            details.push_str(&format!("\n  Caused by: {}", err));
            source = err.source();
        }

        details
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        variant_meta(self).status
    }

    fn error_code(&self) -> &'static str {
        variant_meta(self).code
    }

    fn is_recoverable(&self) -> bool {
        variant_meta(self).recoverable
    }

    fn suggested_action(&self) -> Option<&'static str> {
        variant_meta(self).suggested_action
    }

    fn is_sensitive(&self) -> bool {
        variant_meta(self).sensitive
    }

    fn log_level(&self) -> LogLevel {
        variant_meta(self).log_level
    }

    fn client_message(&self) -> String {
        match self {
            AppError::Database(_) => "Failed to access portfolio storage".to_string(),
            AppError::Storage(_) => "Failed to store file".to_string(),
            AppError::InvalidInput(msg) | AppError::PayloadTooLarge(msg) => msg.clone(),
            AppError::Internal(_) => "Internal server error".to_string(),
            AppError::InternalWithSource { .. } => "Internal server error".to_string(),
        }
    }
}
