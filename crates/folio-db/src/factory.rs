//! Portfolio store construction from configuration

use crate::db::{MemoryPortfolioStore, PgPortfolioStore, PortfolioStore, StoreResult};
use folio_core::Config;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Connect a PostgreSQL pool sized from configuration.
pub async fn setup_pool(database_url: &str, config: &Config) -> StoreResult<PgPool> {
    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections())
        .acquire_timeout(Duration::from_secs(config.db_timeout_seconds()))
        .idle_timeout(Duration::from_secs(600))
        .max_lifetime(Duration::from_secs(1800))
        .connect(database_url)
        .await?;

    tracing::info!(
        max_connections = config.db_max_connections(),
        "Database connected successfully"
    );

    Ok(pool)
}

/// Apply pending migrations from the workspace `migrations/` directory.
pub async fn run_migrations(pool: &PgPool) -> StoreResult<()> {
    let migrations_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../migrations");
    let migrator = sqlx::migrate::Migrator::new(migrations_dir).await?;
    migrator.run(pool).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}

/// Build the portfolio store for this deployment.
///
/// With `DATABASE_URL` set the PostgreSQL store is used (migrations are applied first);
/// otherwise portfolios live in process memory.
pub async fn create_portfolio_store(config: &Config) -> StoreResult<Arc<dyn PortfolioStore>> {
    match config.database_url() {
        Some(url) => {
            let pool = setup_pool(url, config).await?;
            run_migrations(&pool).await?;
            Ok(Arc::new(PgPortfolioStore::new(pool)))
        }
        None => {
            tracing::warn!("DATABASE_URL not set; portfolios are kept in memory and lost on restart");
            Ok(Arc::new(MemoryPortfolioStore::new()))
        }
    }
}
