//! Storage-event webhook integration tests.
//!
//! Requires Postgres: set TEST_DATABASE_URL (or DATABASE_URL) and run
//! `cargo test -p filevault-api -- --ignored`.

mod helpers;

use helpers::auth::register_test_user;
use helpers::{seed_file, setup_test_app, TEST_WEBHOOK_SECRET};
use serde_json::json;

#[tokio::test]
#[ignore = "requires a running Postgres via TEST_DATABASE_URL"]
async fn test_webhook_rejects_missing_or_wrong_secret() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client
        .post("/files/webhook")
        .json(&json!({ "key": "uploads/u/1_a.txt", "size": 42 }))
        .await;
    assert_eq!(response.status_code(), 401);

    let response = client
        .post("/files/webhook")
        .add_header("x-webhook-secret", "wrong-secret-value")
        .json(&json!({ "key": "uploads/u/1_a.txt", "size": 42 }))
        .await;
    assert_eq!(response.status_code(), 401);
}

#[tokio::test]
#[ignore = "requires a running Postgres via TEST_DATABASE_URL"]
async fn test_webhook_unknown_key_is_404() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client
        .post("/files/webhook")
        .add_header("x-webhook-secret", TEST_WEBHOOK_SECRET)
        .json(&json!({ "key": "uploads/nobody/1_ghost.txt", "size": 42 }))
        .await;
    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
#[ignore = "requires a running Postgres via TEST_DATABASE_URL"]
async fn test_webhook_completes_pending_upload() {
    let app = setup_test_app().await;
    let client = app.client();
    let user = register_test_user(client).await;

    let (file_id, storage_key) = seed_file(&app.pool, user.user_id, "pending", 0).await;

    let response = client
        .post("/files/webhook")
        .add_header("x-webhook-secret", TEST_WEBHOOK_SECRET)
        .json(&json!({ "bucket": "vault", "key": storage_key, "size": 1234 }))
        .await;
    assert_eq!(response.status_code(), 200, "{}", response.text());

    // Status flipped and the storage-reported size replaced the declared one
    let (status, size) = sqlx::query_as::<_, (String, i64)>(
        "SELECT status::text, file_size FROM files WHERE id = $1",
    )
    .bind(file_id)
    .fetch_one(&app.pool)
    .await
    .expect("fetch row");
    assert_eq!(status, "completed");
    assert_eq!(size, 1234);

    // The file is now visible in the listing
    let response = client
        .get("/files")
        .add_header("Authorization", format!("Bearer {}", user.token))
        .await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["files"].as_array().unwrap().len(), 1);
}

#[tokio::test]
#[ignore = "requires a running Postgres via TEST_DATABASE_URL"]
async fn test_webhook_redelivery_is_idempotent() {
    let app = setup_test_app().await;
    let client = app.client();
    let user = register_test_user(client).await;

    let (file_id, storage_key) = seed_file(&app.pool, user.user_id, "pending", 0).await;

    for _ in 0..2 {
        let response = client
            .post("/files/webhook")
            .add_header("x-webhook-secret", TEST_WEBHOOK_SECRET)
            .json(&json!({ "key": storage_key, "size": 1234 }))
            .await;
        assert_eq!(response.status_code(), 200);
    }

    // Redelivery with a different size must not clobber the completed row
    let response = client
        .post("/files/webhook")
        .add_header("x-webhook-secret", TEST_WEBHOOK_SECRET)
        .json(&json!({ "key": storage_key, "size": 9999 }))
        .await;
    assert_eq!(response.status_code(), 200);

    let size = sqlx::query_scalar::<_, i64>("SELECT file_size FROM files WHERE id = $1")
        .bind(file_id)
        .fetch_one(&app.pool)
        .await
        .expect("fetch size");
    assert_eq!(size, 1234);
}
