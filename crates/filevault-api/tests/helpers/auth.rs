//! Registration/login helpers for integration tests.

use axum_test::TestServer;
use serde_json::json;
use uuid::Uuid;

pub struct TestUser {
    pub user_id: Uuid,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Register a fresh user with a unique email and log them in.
pub async fn register_test_user(client: &TestServer) -> TestUser {
    let email = format!("user-{}@example.com", Uuid::new_v4().simple());
    let password = "correct-horse-battery".to_string();

    let response = client
        .post("/auth/register")
        .json(&json!({
            "name": "Test User",
            "email": email,
            "password": password,
        }))
        .await;
    assert_eq!(response.status_code(), 201, "register failed: {}", response.text());

    let body: serde_json::Value = response.json();
    let user_id = body["user"]["id"]
        .as_str()
        .and_then(|s| Uuid::parse_str(s).ok())
        .expect("register response carries the user id");

    let response = client
        .post("/auth/login")
        .json(&json!({ "email": email, "password": password }))
        .await;
    assert_eq!(response.status_code(), 200, "login failed: {}", response.text());

    let body: serde_json::Value = response.json();
    let token = body["token"]
        .as_str()
        .expect("login response carries a token")
        .to_string();

    TestUser {
        user_id,
        email,
        password,
        token,
    }
}
