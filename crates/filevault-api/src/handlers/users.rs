use crate::auth::models::CurrentUser;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use filevault_core::models::PublicUser;
use filevault_core::AppError;
use serde_json::json;
use std::sync::Arc;

/// Fetch the authenticated user's profile
#[utoipa::path(
    get,
    path = "/users/profile",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user profile", body = PublicUser),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "User no longer exists", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(user_id = %current_user.user_id, operation = "get_profile"))]
pub async fn get_profile(
    current_user: CurrentUser,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let user = state
        .users
        .find_by_id(current_user.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(PublicUser::from(&user)))
}

/// Cheap token validity check. Returns the claims the token carries without
/// touching the database.
#[utoipa::path(
    get,
    path = "/users/check",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Token is valid"),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    )
)]
pub async fn check_auth(current_user: CurrentUser) -> impl IntoResponse {
    Json(json!({
        "authenticated": true,
        "userId": current_user.user_id,
        "email": current_user.email,
    }))
}
