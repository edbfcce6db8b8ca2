//! Configuration validation
//!
//! Checks deployment-level settings at startup so misconfiguration fails fast.

use anyhow::Result;
use folio_core::Config;

/// Validate configuration beyond what `Config::validate` covers.
pub fn validate_config(config: &Config) -> Result<()> {
    config.validate()?;

    if config.is_production() {
        if config.cors_origins().iter().any(|o| o == "*") {
            return Err(anyhow::anyhow!(
                "CORS configured to allow all origins (*) in production - this is a security risk. \
                Please set specific allowed origins via CORS_ORIGINS or FRONTEND_URL."
            ));
        }

        if config.database_url().is_none() {
            tracing::warn!(
                "Production mode without DATABASE_URL - portfolios are kept in memory and lost on restart"
            );
        }

        if config.public_base_url().is_none() && config.trust_forwarded_headers() {
            tracing::warn!(
                "Download URLs are derived from X-Forwarded-* headers - ensure a trusted proxy sets them"
            );
        }
    }

    if config.database_url().is_some() {
        if config.db_max_connections() == 0 {
            return Err(anyhow::anyhow!("Database max connections cannot be 0"));
        }

        if config.db_timeout_seconds() == 0 {
            return Err(anyhow::anyhow!("Database timeout cannot be 0"));
        }
    }

    Ok(())
}
