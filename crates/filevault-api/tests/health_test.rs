//! Health probe and documentation route integration tests.
//!
//! Requires Postgres: set TEST_DATABASE_URL (or DATABASE_URL) and run
//! `cargo test -p filevault-api -- --ignored`.

mod helpers;

use helpers::setup_test_app;

#[tokio::test]
#[ignore = "requires a running Postgres via TEST_DATABASE_URL"]
async fn test_health_reports_database_connectivity() {
    let app = setup_test_app().await;

    let response = app.client().get("/health").await;
    assert_eq!(response.status_code(), 200);

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "connected");
}

#[tokio::test]
#[ignore = "requires a running Postgres via TEST_DATABASE_URL"]
async fn test_docs_routes_are_mounted() {
    let app = setup_test_app().await;

    let response = app.client().get("/api/openapi.json").await;
    assert_eq!(response.status_code(), 200);
    let spec: serde_json::Value = response.json();
    assert!(spec["paths"].get("/files/upload").is_some());

    let response = app.client().get("/docs").await;
    assert_eq!(response.status_code(), 200);
}
