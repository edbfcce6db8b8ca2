//! Portfolio API integration tests.
//!
//! Run with: `cargo test -p folio-api --test portfolio_test`

mod helpers;

use helpers::{ids, load_items, media_json, remove, save, setup_test_app, setup_test_app_with};
use serde_json::{json, Value};

#[tokio::test]
async fn test_load_unknown_user_returns_empty_list() {
    let app = setup_test_app().await;
    let response = app.client().get("/load-portfolio/never-saved").await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.json::<Value>(), json!({ "items": [] }));
}

#[tokio::test]
async fn test_save_load_remove_scenario() {
    let app = setup_test_app_with(&[("PUBLIC_BASE_URL", "https://api.example.com")]).await;
    let client = app.client();

    save(client, "u1", vec![media_json("m1", "m1.png", "image")]).await;

    let items = load_items(client, "u1").await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], "m1");
    assert_eq!(items[0]["url"], "https://api.example.com/uploads/m1.png");

    assert_eq!(
        remove(client, "u1", "m1").await,
        json!({ "status": "success", "removed": "m1" })
    );
    assert!(load_items(client, "u1").await.is_empty());

    // Removing again is a no-op that still succeeds
    assert_eq!(
        remove(client, "u1", "m1").await,
        json!({ "status": "success", "removed": "m1" })
    );
    assert!(load_items(client, "u1").await.is_empty());
}

#[tokio::test]
async fn test_fixed_base_url_materialization() {
    let app = setup_test_app_with(&[("PUBLIC_BASE_URL", "https://api.example.com/")]).await;
    save(app.client(), "u1", vec![media_json("abc123", "abc123.png", "image")]).await;

    let items = load_items(app.client(), "u1").await;
    assert_eq!(items[0]["url"], "https://api.example.com/uploads/abc123.png");
}

#[tokio::test]
async fn test_base_url_from_request_host() {
    let app = setup_test_app().await;
    save(app.client(), "u1", vec![media_json("a", "a.mp4", "video")]).await;

    let response = app
        .client()
        .get("/load-portfolio/u1")
        .add_header("host", "media.example.com")
        .await;
    let body: Value = response.json();
    assert_eq!(body["items"][0]["url"], "http://media.example.com/uploads/a.mp4");
}

#[tokio::test]
async fn test_base_url_from_forwarded_headers() {
    let app = setup_test_app().await;
    save(app.client(), "u1", vec![media_json("a", "a.png", "image")]).await;

    let response = app
        .client()
        .get("/load-portfolio/u1")
        .add_header("host", "10.0.0.7:8000")
        .add_header("x-forwarded-proto", "https")
        .add_header("x-forwarded-host", "folio.example.com")
        .await;
    let body: Value = response.json();
    assert_eq!(body["items"][0]["url"], "https://folio.example.com/uploads/a.png");
}

#[tokio::test]
async fn test_forwarded_headers_ignored_when_untrusted() {
    let app = setup_test_app_with(&[("TRUST_FORWARDED_HEADERS", "false")]).await;
    save(app.client(), "u1", vec![media_json("a", "a.png", "image")]).await;

    let response = app
        .client()
        .get("/load-portfolio/u1")
        .add_header("host", "internal:8000")
        .add_header("x-forwarded-host", "evil.example.com")
        .await;
    let body: Value = response.json();
    assert_eq!(body["items"][0]["url"], "http://internal:8000/uploads/a.png");
}

#[tokio::test]
async fn test_save_is_idempotent() {
    let app = setup_test_app().await;
    let client = app.client();
    let items = vec![
        media_json("a", "a.png", "image"),
        media_json("b", "b.mov", "video"),
    ];

    save(client, "u1", items.clone()).await;
    let first = load_items(client, "u1").await;
    save(client, "u1", items).await;
    let second = load_items(client, "u1").await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_save_replaces_instead_of_merging() {
    let app = setup_test_app().await;
    let client = app.client();

    save(
        client,
        "u1",
        vec![media_json("a", "a.png", "image"), media_json("b", "b.png", "image")],
    )
    .await;
    save(client, "u1", vec![media_json("c", "c.mp4", "video")]).await;

    assert_eq!(ids(&load_items(client, "u1").await), vec!["c"]);
}

#[tokio::test]
async fn test_remove_keeps_remaining_order() {
    let app = setup_test_app().await;
    let client = app.client();
    save(
        client,
        "u1",
        vec![
            media_json("a", "a.png", "image"),
            media_json("b", "b.png", "image"),
            media_json("c", "c.png", "image"),
        ],
    )
    .await;

    remove(client, "u1", "b").await;
    assert_eq!(ids(&load_items(client, "u1").await), vec!["a", "c"]);

    remove(client, "u1", "does-not-exist").await;
    assert_eq!(ids(&load_items(client, "u1").await), vec!["a", "c"]);
}

#[tokio::test]
async fn test_remove_for_unknown_user_reports_error_status() {
    let app = setup_test_app().await;

    assert_eq!(
        remove(app.client(), "ghost", "m1").await,
        json!({ "status": "error", "message": "User not found" })
    );
    // No portfolio is created as a side effect
    assert!(app
        .state
        .portfolio
        .service
        .store()
        .find("ghost")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_client_url_is_not_persisted() {
    let app = setup_test_app_with(&[("PUBLIC_BASE_URL", "https://api.example.com")]).await;
    let mut item = media_json("m1", "m1.png", "image");
    item["url"] = json!("https://attacker.example.com/evil.png");
    save(app.client(), "u1", vec![item]).await;

    let stored = app
        .state
        .portfolio
        .service
        .load_records("u1")
        .await
        .unwrap();
    assert_eq!(stored[0].filename, "m1.png");

    let items = load_items(app.client(), "u1").await;
    assert_eq!(items[0]["url"], "https://api.example.com/uploads/m1.png");
}

#[tokio::test]
async fn test_free_text_fields_round_trip() {
    let app = setup_test_app().await;
    let item = json!({
        "id": "m1",
        "filename": "m1.png",
        "media_type": "image",
        "title": "<b>Sunset</b> 🌅",
        "description": "",
        "category": "landscapes / 2024",
    });
    save(app.client(), "u1", vec![item]).await;

    let items = load_items(app.client(), "u1").await;
    assert_eq!(items[0]["title"], "<b>Sunset</b> 🌅");
    assert_eq!(items[0]["category"], "landscapes / 2024");
}

#[tokio::test]
async fn test_empty_filename_gives_degenerate_url() {
    let app = setup_test_app_with(&[("PUBLIC_BASE_URL", "https://api.example.com")]).await;
    save(app.client(), "u1", vec![media_json("m1", "", "image")]).await;

    let items = load_items(app.client(), "u1").await;
    assert_eq!(items[0]["url"], "https://api.example.com/uploads/");
}

#[tokio::test]
async fn test_malformed_save_body_is_rejected() {
    let app = setup_test_app().await;
    let response = app
        .client()
        .post("/save-portfolio")
        .json(&json!({ "items": [] }))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_unknown_media_type_is_rejected() {
    let app = setup_test_app().await;
    let response = app
        .client()
        .post("/save-portfolio")
        .json(&json!({
            "user_id": "u1",
            "items": [media_json("m1", "m1.pdf", "document")],
        }))
        .await;

    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn test_oversized_save_body_is_413() {
    let app = setup_test_app_with(&[("MAX_UPLOAD_SIZE_MB", "1")]).await;
    let mut item = media_json("m1", "m1.png", "image");
    item["description"] = json!("x".repeat(2 * 1024 * 1024));

    let response = app
        .client()
        .post("/save-portfolio")
        .json(&json!({ "user_id": "u1", "items": [item] }))
        .await;

    assert_eq!(response.status_code(), 413);
    let body: Value = response.json();
    assert_eq!(body["code"], "PAYLOAD_TOO_LARGE");
    assert!(load_items(app.client(), "u1").await.is_empty());
}
