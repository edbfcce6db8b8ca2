//! Test helpers: build the app around the in-memory backend and a temp content directory.
//!
//! Run from workspace root: `cargo test -p folio-api`.

#![allow(dead_code)]

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use folio_api::setup::{routes, services};
use folio_api::state::AppState;
use folio_core::models::{MediaRecord, MediaType};
use folio_core::{Config, PortfolioConfig};
use async_trait::async_trait;
use folio_core::PortfolioBackend;
use folio_db::{MemoryPortfolioStore, PortfolioStore, StoreError, StoreResult};
use folio_storage::{LocalStorage, Storage};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

/// Test application: server plus owned resources.
pub struct TestApp {
    pub server: TestServer,
    pub state: Arc<AppState>,
    pub temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    pub fn upload_dir(&self) -> &Path {
        self.temp_dir.path()
    }
}

pub fn create_test_config(upload_dir: &Path, extra: &[(&str, &str)]) -> Config {
    let mut vars: HashMap<String, String> = HashMap::new();
    vars.insert(
        "UPLOAD_DIR".to_string(),
        upload_dir.to_string_lossy().to_string(),
    );
    for (k, v) in extra {
        vars.insert(k.to_string(), v.to_string());
    }
    Config(Box::new(
        PortfolioConfig::from_lookup(|key| vars.get(key).cloned())
            .expect("Failed to build test config"),
    ))
}

/// App with default configuration (base URL derived from the request).
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with(&[]).await
}

/// App with extra configuration variables, e.g. `PUBLIC_BASE_URL`.
pub async fn setup_test_app_with(extra: &[(&str, &str)]) -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let storage: Arc<dyn Storage> = Arc::new(
        LocalStorage::new(temp_dir.path())
            .await
            .expect("Failed to create local storage"),
    );
    build_test_app(temp_dir, storage, Arc::new(MemoryPortfolioStore::new()), extra)
}

/// App whose content directory writes go through `storage`.
pub fn setup_test_app_with_storage(storage: Arc<dyn Storage>) -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    build_test_app(temp_dir, storage, Arc::new(MemoryPortfolioStore::new()), &[])
}

/// App whose portfolio reads and writes go through `store`.
pub async fn setup_test_app_with_store(store: Arc<dyn PortfolioStore>) -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let storage: Arc<dyn Storage> = Arc::new(
        LocalStorage::new(temp_dir.path())
            .await
            .expect("Failed to create local storage"),
    );
    build_test_app(temp_dir, storage, store, &[])
}

fn build_test_app(
    temp_dir: TempDir,
    storage: Arc<dyn Storage>,
    store: Arc<dyn PortfolioStore>,
    extra: &[(&str, &str)],
) -> TestApp {
    let config = create_test_config(temp_dir.path(), extra);
    let state = services::initialize_services(&config, store, storage);
    let app = routes::setup_routes(&config, state.clone()).expect("Failed to build routes");
    let server = TestServer::new(app.into_make_service()).expect("Failed to create test server");

    TestApp {
        server,
        state,
        temp_dir,
    }
}

pub fn media_json(id: &str, filename: &str, media_type: &str) -> Value {
    json!({
        "id": id,
        "filename": filename,
        "media_type": media_type,
        "title": format!("Title {}", id),
        "description": "",
        "category": "work",
    })
}

pub fn record(id: &str, filename: &str, media_type: MediaType) -> MediaRecord {
    MediaRecord {
        id: id.to_string(),
        filename: filename.to_string(),
        media_type,
        title: format!("Title {}", id),
        description: String::new(),
        category: "work".to_string(),
    }
}

pub async fn save(client: &TestServer, user_id: &str, items: Vec<Value>) {
    let response = client
        .post("/save-portfolio")
        .json(&json!({ "user_id": user_id, "items": items }))
        .await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.json::<Value>(), json!({ "status": "success" }));
}

pub async fn load_items(client: &TestServer, user_id: &str) -> Vec<Value> {
    let response = client.get(&format!("/load-portfolio/{}", user_id)).await;
    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    body["items"].as_array().cloned().expect("items array")
}

pub async fn remove(client: &TestServer, user_id: &str, media_id: &str) -> Value {
    let response = client
        .delete("/remove-media")
        .json(&json!({ "user_id": user_id, "media_id": media_id }))
        .await;
    assert_eq!(response.status_code(), 200);
    response.json()
}

pub fn file_form(file_name: &str, mime_type: &str, data: &[u8]) -> MultipartForm {
    let part = Part::bytes(data.to_vec())
        .file_name(file_name.to_string())
        .mime_type(mime_type.to_string());
    MultipartForm::new().add_part("file", part)
}

pub fn ids(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .map(|item| item["id"].as_str().unwrap_or_default().to_string())
        .collect()
}

/// Durable backend whose database is unreachable: every call times out on the pool.
pub struct UnreachableStore;

#[async_trait]
impl PortfolioStore for UnreachableStore {
    async fn put(&self, _user_id: &str, _items: Vec<MediaRecord>) -> StoreResult<()> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn find(&self, _user_id: &str) -> StoreResult<Option<Vec<MediaRecord>>> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn health_check(&self) -> StoreResult<()> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    fn backend(&self) -> PortfolioBackend {
        PortfolioBackend::Postgres
    }
}
