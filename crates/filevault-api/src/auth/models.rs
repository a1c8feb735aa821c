use axum::{extract::FromRequestParts, http::request::Parts, http::StatusCode, Json};

use crate::error::ErrorResponse;

/// Identity established by the auth middleware, stored in request extensions.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: uuid::Uuid,
    pub email: String,
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<CurrentUser>().cloned().ok_or((
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::new("Authentication required", "UNAUTHORIZED")),
        ))
    }
}
