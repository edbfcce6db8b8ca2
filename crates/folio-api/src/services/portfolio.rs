//! Portfolio record operations on top of a [`PortfolioStore`].

use folio_core::models::{MediaItem, MediaRecord};
use folio_core::MediaUrlBuilder;
use folio_db::{PortfolioStore, StoreResult};
use std::sync::Arc;

/// Result of a remove request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The user exists; the matching item (if any) is gone.
    Removed,
    /// No portfolio has ever been saved for the user.
    UserNotFound,
}

#[derive(Clone)]
pub struct PortfolioService {
    store: Arc<dyn PortfolioStore>,
}

impl PortfolioService {
    pub fn new(store: Arc<dyn PortfolioStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn PortfolioStore> {
        &self.store
    }

    /// Replace the stored items for `user_id` with `items`.
    #[tracing::instrument(skip(self, items), fields(operation = "save_portfolio", items = items.len()))]
    pub async fn save_portfolio(&self, user_id: &str, items: Vec<MediaRecord>) -> StoreResult<()> {
        self.store.put(user_id, items).await
    }

    /// Stored records for `user_id`, empty for unknown users.
    pub async fn load_records(&self, user_id: &str) -> StoreResult<Vec<MediaRecord>> {
        self.store.get(user_id).await
    }

    /// Stored records with download URLs resolved against `base_url`.
    #[tracing::instrument(skip(self), fields(operation = "load_portfolio"))]
    pub async fn load_portfolio(&self, user_id: &str, base_url: &str) -> StoreResult<Vec<MediaItem>> {
        let records = self.load_records(user_id).await?;
        Ok(MediaUrlBuilder::new(base_url).materialize(records))
    }

    /// Drop the item whose id equals `media_id` and write the rest back in order.
    ///
    /// Read and write are separate store calls, so a concurrent save for the same user
    /// between them is overwritten.
    #[tracing::instrument(skip(self), fields(operation = "remove_media"))]
    pub async fn remove_media(&self, user_id: &str, media_id: &str) -> StoreResult<RemoveOutcome> {
        let Some(items) = self.store.find(user_id).await? else {
            return Ok(RemoveOutcome::UserNotFound);
        };

        let before = items.len();
        let remaining: Vec<MediaRecord> = items.into_iter().filter(|m| m.id != media_id).collect();
        tracing::debug!(removed = before - remaining.len(), "Filtered portfolio items");

        self.store.put(user_id, remaining).await?;
        Ok(RemoveOutcome::Removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use folio_core::models::MediaType;
    use folio_core::PortfolioBackend;
    use folio_db::MemoryPortfolioStore;
    use std::sync::Mutex;

    fn record(id: &str) -> MediaRecord {
        MediaRecord {
            id: id.to_string(),
            filename: format!("{}.png", id),
            media_type: MediaType::Image,
            title: String::new(),
            description: String::new(),
            category: String::new(),
        }
    }

    fn service() -> PortfolioService {
        PortfolioService::new(Arc::new(MemoryPortfolioStore::new()))
    }

    fn ids(items: &[MediaRecord]) -> Vec<&str> {
        items.iter().map(|m| m.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_load_unknown_user_is_empty() {
        let service = service();
        let items = service
            .load_portfolio("ghost", "https://api.example.com")
            .await
            .unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_load_resolves_urls() {
        let service = service();
        let mut item = record("abc123");
        item.filename = "abc123.png".to_string();
        service.save_portfolio("u1", vec![item]).await.unwrap();

        let items = service
            .load_portfolio("u1", "https://api.example.com")
            .await
            .unwrap();
        assert_eq!(items[0].url, "https://api.example.com/uploads/abc123.png");
    }

    #[tokio::test]
    async fn test_save_is_idempotent() {
        let service = service();
        let items = vec![record("a"), record("b")];
        service.save_portfolio("u1", items.clone()).await.unwrap();
        let first = service.load_records("u1").await.unwrap();
        service.save_portfolio("u1", items).await.unwrap();
        let second = service.load_records("u1").await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_save_replaces() {
        let service = service();
        service
            .save_portfolio("u1", vec![record("a"), record("b")])
            .await
            .unwrap();
        service
            .save_portfolio("u1", vec![record("c")])
            .await
            .unwrap();
        assert_eq!(ids(&service.load_records("u1").await.unwrap()), vec!["c"]);
    }

    #[tokio::test]
    async fn test_remove_keeps_others_in_order() {
        let service = service();
        service
            .save_portfolio("u1", vec![record("a"), record("b"), record("c")])
            .await
            .unwrap();

        let outcome = service.remove_media("u1", "b").await.unwrap();
        assert_eq!(outcome, RemoveOutcome::Removed);
        assert_eq!(
            ids(&service.load_records("u1").await.unwrap()),
            vec!["a", "c"]
        );

        let outcome = service.remove_media("u1", "zzz").await.unwrap();
        assert_eq!(outcome, RemoveOutcome::Removed);
        assert_eq!(
            ids(&service.load_records("u1").await.unwrap()),
            vec!["a", "c"]
        );
    }

    #[tokio::test]
    async fn test_remove_unknown_user() {
        let service = service();
        let outcome = service.remove_media("nobody", "m1").await.unwrap();
        assert_eq!(outcome, RemoveOutcome::UserNotFound);
        assert!(service.store().find("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_remove_from_saved_empty_portfolio_succeeds() {
        let service = service();
        service.save_portfolio("u1", Vec::new()).await.unwrap();
        let outcome = service.remove_media("u1", "m1").await.unwrap();
        assert_eq!(outcome, RemoveOutcome::Removed);
    }

    /// Store that lets another writer save for the same user right after the first read.
    struct InterleavingStore {
        inner: MemoryPortfolioStore,
        injected: Mutex<Option<(String, Vec<MediaRecord>)>>,
    }

    #[async_trait]
    impl PortfolioStore for InterleavingStore {
        async fn put(&self, user_id: &str, items: Vec<MediaRecord>) -> StoreResult<()> {
            self.inner.put(user_id, items).await
        }

        async fn find(&self, user_id: &str) -> StoreResult<Option<Vec<MediaRecord>>> {
            let snapshot = self.inner.find(user_id).await?;
            let pending = self.injected.lock().unwrap().take();
            if let Some((user, items)) = pending {
                self.inner.put(&user, items).await?;
            }
            Ok(snapshot)
        }

        async fn health_check(&self) -> StoreResult<()> {
            Ok(())
        }

        fn backend(&self) -> PortfolioBackend {
            PortfolioBackend::Memory
        }
    }

    #[tokio::test]
    async fn test_remove_loses_concurrent_save() {
        let store = Arc::new(InterleavingStore {
            inner: MemoryPortfolioStore::new(),
            injected: Mutex::new(None),
        });
        let service = PortfolioService::new(store.clone());
        service
            .save_portfolio("u1", vec![record("a"), record("b")])
            .await
            .unwrap();

        // A save adding "c" lands between the remove's read and write.
        *store.injected.lock().unwrap() = Some((
            "u1".to_string(),
            vec![record("a"), record("b"), record("c")],
        ));
        service.remove_media("u1", "a").await.unwrap();

        // The remove writes back its stale snapshot; "c" is lost.
        assert_eq!(ids(&service.load_records("u1").await.unwrap()), vec!["b"]);
    }
}
