use super::traits::{PortfolioStore, StoreResult};
use async_trait::async_trait;
use folio_core::models::MediaRecord;
use folio_core::PortfolioBackend;
use sqlx::types::Json;
use sqlx::{PgPool, Postgres};

/// PostgreSQL-backed portfolio store.
///
/// One row per user in `portfolios`; the item list is a JSONB array.
#[derive(Clone)]
pub struct PgPortfolioStore {
    pool: PgPool,
}

impl PgPortfolioStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl PortfolioStore for PgPortfolioStore {
    /// Single-statement upsert so concurrent saves for one user never create two rows.
    #[tracing::instrument(skip(self, items), fields(db.table = "portfolios", db.operation = "upsert", items = items.len()))]
    async fn put(&self, user_id: &str, items: Vec<MediaRecord>) -> StoreResult<()> {
        sqlx::query::<Postgres>(
            r#"
            INSERT INTO portfolios (user_id, items)
            VALUES ($1, $2)
            ON CONFLICT (user_id)
            DO UPDATE SET items = EXCLUDED.items, updated_at = NOW()
            "#,
        )
        .bind(user_id)
        .bind(Json(&items))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    #[tracing::instrument(skip(self), fields(db.table = "portfolios", db.operation = "select"))]
    async fn find(&self, user_id: &str) -> StoreResult<Option<Vec<MediaRecord>>> {
        let row = sqlx::query_scalar::<Postgres, serde_json::Value>(
            "SELECT items FROM portfolios WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    #[tracing::instrument(skip(self), fields(db.operation = "health_check"))]
    async fn health_check(&self) -> StoreResult<()> {
        sqlx::query::<Postgres>("SELECT 1")
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    fn backend(&self) -> PortfolioBackend {
        PortfolioBackend::Postgres
    }
}
