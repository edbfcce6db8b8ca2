use super::traits::{PortfolioStore, StoreResult};
use async_trait::async_trait;
use folio_core::models::MediaRecord;
use folio_core::PortfolioBackend;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Process-local portfolio store. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryPortfolioStore {
    portfolios: RwLock<HashMap<String, Vec<MediaRecord>>>,
}

impl MemoryPortfolioStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users with a stored portfolio
    pub async fn len(&self) -> usize {
        self.portfolios.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.portfolios.read().await.is_empty()
    }
}

#[async_trait]
impl PortfolioStore for MemoryPortfolioStore {
    #[tracing::instrument(skip(self, items), fields(db.table = "memory", db.operation = "upsert", items = items.len()))]
    async fn put(&self, user_id: &str, items: Vec<MediaRecord>) -> StoreResult<()> {
        self.portfolios
            .write()
            .await
            .insert(user_id.to_string(), items);
        Ok(())
    }

    #[tracing::instrument(skip(self), fields(db.table = "memory", db.operation = "select"))]
    async fn find(&self, user_id: &str) -> StoreResult<Option<Vec<MediaRecord>>> {
        Ok(self.portfolios.read().await.get(user_id).cloned())
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }

    fn backend(&self) -> PortfolioBackend {
        PortfolioBackend::Memory
    }
}
