//! Registration, login, and bearer-token middleware integration tests.
//!
//! Requires Postgres: set TEST_DATABASE_URL (or DATABASE_URL) and run
//! `cargo test -p filevault-api -- --ignored`.

mod helpers;

use helpers::auth::register_test_user;
use helpers::setup_test_app;
use serde_json::json;

#[tokio::test]
#[ignore = "requires a running Postgres via TEST_DATABASE_URL"]
async fn test_register_and_login() {
    let app = setup_test_app().await;
    let user = register_test_user(app.client()).await;

    assert!(!user.token.is_empty());
}

#[tokio::test]
#[ignore = "requires a running Postgres via TEST_DATABASE_URL"]
async fn test_register_duplicate_email_conflicts() {
    let app = setup_test_app().await;
    let client = app.client();
    let user = register_test_user(client).await;

    let response = client
        .post("/auth/register")
        .json(&json!({
            "name": "Someone Else",
            "email": user.email,
            "password": "another-password",
        }))
        .await;

    assert_eq!(response.status_code(), 409);
}

#[tokio::test]
#[ignore = "requires a running Postgres via TEST_DATABASE_URL"]
async fn test_register_rejects_invalid_payload() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client
        .post("/auth/register")
        .json(&json!({
            "name": "Test User",
            "email": "not-an-email",
            "password": "long-enough-password",
        }))
        .await;
    assert_eq!(response.status_code(), 400);

    let response = client
        .post("/auth/register")
        .json(&json!({
            "name": "Test User",
            "email": "valid@example.com",
            "password": "short",
        }))
        .await;
    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
#[ignore = "requires a running Postgres via TEST_DATABASE_URL"]
async fn test_login_failures_are_indistinguishable() {
    let app = setup_test_app().await;
    let client = app.client();
    let user = register_test_user(client).await;

    let wrong_password = client
        .post("/auth/login")
        .json(&json!({ "email": user.email, "password": "wrong-password" }))
        .await;
    assert_eq!(wrong_password.status_code(), 401);

    let unknown_email = client
        .post("/auth/login")
        .json(&json!({ "email": "nobody@example.com", "password": user.password }))
        .await;
    assert_eq!(unknown_email.status_code(), 401);

    let a: serde_json::Value = wrong_password.json();
    let b: serde_json::Value = unknown_email.json();
    assert_eq!(a["error"], "Invalid email or password");
    assert_eq!(a["error"], b["error"]);
}

#[tokio::test]
#[ignore = "requires a running Postgres via TEST_DATABASE_URL"]
async fn test_middleware_rejections() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client.get("/users/profile").await;
    assert_eq!(response.status_code(), 401);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Authorization header missing");

    let response = client
        .get("/users/profile")
        .add_header("Authorization", "just-a-token")
        .await;
    assert_eq!(response.status_code(), 401);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Invalid token format");

    let response = client
        .get("/users/profile")
        .add_header("Authorization", "Basic abc123")
        .await;
    assert_eq!(response.status_code(), 401);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Invalid token scheme");

    let response = client
        .get("/users/profile")
        .add_header("Authorization", "Bearer not.a.token")
        .await;
    assert_eq!(response.status_code(), 401);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Invalid or expired token");
}

#[tokio::test]
#[ignore = "requires a running Postgres via TEST_DATABASE_URL"]
async fn test_profile_and_check() {
    let app = setup_test_app().await;
    let client = app.client();
    let user = register_test_user(client).await;

    let response = client
        .get("/users/profile")
        .add_header("Authorization", format!("Bearer {}", user.token))
        .await;
    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["email"], user.email.as_str());
    assert!(body.get("password_hash").is_none());

    let response = client
        .get("/users/check")
        .add_header("Authorization", format!("Bearer {}", user.token))
        .await;
    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["authenticated"], true);
    assert_eq!(body["userId"], user.user_id.to_string());
}
