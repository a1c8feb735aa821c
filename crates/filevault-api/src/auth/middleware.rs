use crate::auth::jwt::decode_token;
use crate::auth::models::CurrentUser;
use crate::error::HttpAppError;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use filevault_core::AppError;
use std::sync::Arc;
use subtle::ConstantTimeEq;

/// Constant-time string comparison for shared secrets. The length check leaks
/// length only, never content.
pub fn secure_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

fn unauthorized(message: &str) -> Response {
    HttpAppError(AppError::Unauthorized(message.to_string())).into_response()
}

/// Bearer-token middleware for the protected routes. On success, the decoded
/// identity is inserted into request extensions as [`CurrentUser`].
pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let auth_header = match request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
    {
        Some(h) => h,
        None => return unauthorized("Authorization header missing"),
    };

    let mut parts = auth_header.split(' ');
    let (scheme, token) = match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) => (scheme, token),
        _ => return unauthorized("Invalid token format"),
    };

    if scheme != "Bearer" {
        return unauthorized("Invalid token scheme");
    }

    let claims = match decode_token(token, &state.config.jwt_secret) {
        Ok(claims) => claims,
        Err(_) => return unauthorized("Invalid or expired token"),
    };

    request.extensions_mut().insert(CurrentUser {
        user_id: claims.sub,
        email: claims.email,
    });
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_compare_equal() {
        assert!(secure_compare("whsec_abc123", "whsec_abc123"));
    }

    #[test]
    fn test_secure_compare_different_content() {
        assert!(!secure_compare("whsec_abc123", "whsec_abc124"));
    }

    #[test]
    fn test_secure_compare_different_length() {
        assert!(!secure_compare("short", "a-much-longer-secret"));
    }
}
