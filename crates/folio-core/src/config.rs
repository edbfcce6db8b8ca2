//! Configuration module
//!
//! This module provides configuration structures for the API, including the portfolio
//! storage backend, the content directory, CORS, and media URL resolution.

use std::env;

use crate::media_url::BaseUrlPolicy;
use crate::storage_types::PortfolioBackend;

// Common constants
const SERVER_PORT: u16 = 8000;
const MAX_CONNECTIONS: u32 = 10;
const CONNECTION_TIMEOUT_SECS: u64 = 30;
const MAX_UPLOAD_SIZE_MB: usize = 100;
const UPLOAD_DIR: &str = "./uploads";

/// Server-level configuration
#[derive(Clone, Debug)]
pub struct BaseConfig {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
    pub log_format: String,
}

/// Portfolio service configuration
#[derive(Clone, Debug)]
pub struct PortfolioConfig {
    pub base: BaseConfig,
    // Portfolio storage backend; None selects the in-memory map
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub db_timeout_seconds: u64,
    // Content directory for uploaded files
    pub upload_dir: String,
    pub max_upload_size_bytes: usize,
    // Media URL resolution
    pub public_base_url: Option<String>,
    pub trust_forwarded_headers: bool,
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config(pub Box<PortfolioConfig>);

impl Config {
    fn as_portfolio(&self) -> &PortfolioConfig {
        &self.0
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let environment = self.as_portfolio().base.environment.to_lowercase();
        environment == "production" || environment == "prod"
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        let config = PortfolioConfig::from_lookup(|key| env::var(key).ok())?;
        Ok(Config(Box::new(config)))
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        self.as_portfolio().validate()
    }

    pub fn server_port(&self) -> u16 {
        self.as_portfolio().base.server_port
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.as_portfolio().base.cors_origins
    }

    pub fn environment(&self) -> &str {
        &self.as_portfolio().base.environment
    }

    pub fn log_format(&self) -> &str {
        &self.as_portfolio().base.log_format
    }

    pub fn database_url(&self) -> Option<&str> {
        self.as_portfolio().database_url.as_deref()
    }

    pub fn db_max_connections(&self) -> u32 {
        self.as_portfolio().db_max_connections
    }

    pub fn db_timeout_seconds(&self) -> u64 {
        self.as_portfolio().db_timeout_seconds
    }

    pub fn upload_dir(&self) -> &str {
        &self.as_portfolio().upload_dir
    }

    pub fn max_upload_size_bytes(&self) -> usize {
        self.as_portfolio().max_upload_size_bytes
    }

    pub fn public_base_url(&self) -> Option<&str> {
        self.as_portfolio().public_base_url.as_deref()
    }

    pub fn trust_forwarded_headers(&self) -> bool {
        self.as_portfolio().trust_forwarded_headers
    }

    /// Backend selected by the presence of a database URL.
    pub fn portfolio_backend(&self) -> PortfolioBackend {
        if self.database_url().is_some() {
            PortfolioBackend::Postgres
        } else {
            PortfolioBackend::Memory
        }
    }

    /// How download URLs are rooted when portfolios are loaded.
    pub fn base_url_policy(&self) -> BaseUrlPolicy {
        match self.public_base_url() {
            Some(url) => BaseUrlPolicy::Fixed(url.to_string()),
            None => BaseUrlPolicy::FromRequest {
                trust_forwarded_headers: self.trust_forwarded_headers(),
            },
        }
    }
}

fn parse_bool(value: Option<String>, default: bool) -> bool {
    value
        .map(|v| v.trim().to_lowercase())
        .and_then(|v| match v.as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

impl PortfolioConfig {
    /// Build configuration from a key lookup (the process environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let environment = var("ENVIRONMENT")
            .or_else(|| var("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        let mut cors_origins: Vec<String> = var("CORS_ORIGINS")
            .unwrap_or_else(|| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if let Some(frontend_url) = var("FRONTEND_URL") {
            let origin = frontend_url.trim().trim_end_matches('/').to_string();
            if cors_origins == ["*"] {
                cors_origins = vec![origin];
            } else if !cors_origins.contains(&origin) {
                cors_origins.push(origin);
            }
        }

        let base = BaseConfig {
            server_port: var("PORT")
                .unwrap_or_else(|| SERVER_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            cors_origins,
            environment,
            log_format: var("LOG_FORMAT")
                .unwrap_or_else(|| "compact".to_string())
                .to_lowercase(),
        };

        let max_upload_size_mb = var("MAX_UPLOAD_SIZE_MB")
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(MAX_UPLOAD_SIZE_MB);
        let max_upload_size_bytes = max_upload_size_mb
            .checked_mul(1024 * 1024)
            .ok_or_else(|| anyhow::anyhow!("MAX_UPLOAD_SIZE_MB is too large"))?;

        let config = PortfolioConfig {
            base,
            database_url: var("DATABASE_URL"),
            db_max_connections: var("DB_MAX_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(MAX_CONNECTIONS),
            db_timeout_seconds: var("DB_TIMEOUT_SECONDS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(CONNECTION_TIMEOUT_SECS),
            upload_dir: var("UPLOAD_DIR").unwrap_or_else(|| UPLOAD_DIR.to_string()),
            max_upload_size_bytes,
            public_base_url: var("PUBLIC_BASE_URL")
                .map(|url| url.trim().trim_end_matches('/').to_string()),
            trust_forwarded_headers: parse_bool(var("TRUST_FORWARDED_HEADERS"), true),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if let Some(url) = &self.database_url {
            if !(url.starts_with("postgres://") || url.starts_with("postgresql://")) {
                return Err(anyhow::anyhow!(
                    "DATABASE_URL must be a valid PostgreSQL connection string"
                ));
            }
        }

        if let Some(base_url) = &self.public_base_url {
            if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
                return Err(anyhow::anyhow!(
                    "PUBLIC_BASE_URL must start with http:// or https://"
                ));
            }
        }

        if self.upload_dir.trim().is_empty() {
            return Err(anyhow::anyhow!("UPLOAD_DIR cannot be empty"));
        }

        if self.max_upload_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_UPLOAD_SIZE_MB cannot be 0"));
        }

        Ok(())
    }
}
