//! Test helpers: build AppState and router for integration tests.
//!
//! Requires a running Postgres; point TEST_DATABASE_URL (or DATABASE_URL) at
//! it and run `cargo test -p filevault-api -- --ignored`. Each test isolates
//! itself through freshly registered users, so a shared database is fine.

pub mod auth;
pub mod storage;

use axum_test::TestServer;
use chrono::Utc;
use filevault_api::setup::routes;
use filevault_api::state::AppState;
use filevault_core::{Config, StorageBackend};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

pub const TEST_WEBHOOK_SECRET: &str = "test-webhook-secret-value";
pub const TEST_JWT_SECRET: &str = "test-secret-key-min-32-characters-long";
pub const TEST_MAX_UPLOAD_SIZE: i64 = 1024 * 1024;

/// Test application: server, pool, and the storage double for assertions.
pub struct TestApp {
    pub server: TestServer,
    pub pool: PgPool,
    pub storage: Arc<storage::RecordingStorage>,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

/// Setup the app against the configured test database with in-memory storage.
pub async fn setup_test_app() -> TestApp {
    let database_url = std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .expect("TEST_DATABASE_URL or DATABASE_URL must be set for integration tests");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(30))
        .connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("../../migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    let recording = Arc::new(storage::RecordingStorage::new());
    let config = create_test_config(&database_url);

    let state = Arc::new(AppState::new(config, pool.clone(), recording.clone()));
    let server = TestServer::new(routes::setup_routes(state)).expect("Failed to create test server");

    TestApp {
        server,
        pool,
        storage: recording,
    }
}

/// Insert a file row directly, bypassing the upload endpoint. `age_secs`
/// backdates created_at so sweeper cutoffs can be exercised.
pub async fn seed_file(
    pool: &PgPool,
    user_id: Uuid,
    status: &str,
    age_secs: i64,
) -> (Uuid, String) {
    let storage_key = format!(
        "uploads/{}/{}_{}.txt",
        user_id,
        Utc::now().timestamp_millis(),
        Uuid::new_v4().simple()
    );
    let id = sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO files (user_id, storage_key, file_name, mime_type, file_size, status, created_at, updated_at)
        VALUES ($1, $2, 'seed.txt', 'text/plain', 42, $3::file_status,
                NOW() - make_interval(secs => $4), NOW())
        RETURNING id
        "#,
    )
    .bind(user_id)
    .bind(&storage_key)
    .bind(status)
    .bind(age_secs as f64)
    .fetch_one(pool)
    .await
    .expect("Failed to seed file row");

    (id, storage_key)
}

fn create_test_config(database_url: &str) -> Config {
    Config {
        server_port: 0,
        cors_origins: vec!["*".to_string()],
        environment: "test".to_string(),
        database_url: database_url.to_string(),
        db_max_connections: 5,
        db_timeout_seconds: 30,
        jwt_secret: TEST_JWT_SECRET.to_string(),
        jwt_expiry_hours: 1,
        webhook_secret: TEST_WEBHOOK_SECRET.to_string(),
        storage_backend: Some(StorageBackend::Local),
        s3_bucket: None,
        s3_region: None,
        s3_endpoint: None,
        aws_region: None,
        local_storage_path: Some("/tmp/filevault-test".to_string()),
        local_storage_base_url: Some("http://localhost:4000/files".to_string()),
        max_upload_size_bytes: TEST_MAX_UPLOAD_SIZE,
        upload_url_expiry_secs: 300,
        download_url_expiry_secs: 300,
        // Long enough that the background loop never fires during a test run
        cleanup_interval_secs: 86_400,
        pending_max_age_secs: 3600,
    }
}
