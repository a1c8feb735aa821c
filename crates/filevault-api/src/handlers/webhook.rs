use crate::auth::middleware::secure_compare;
use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{extract::State, http::HeaderMap, response::IntoResponse, Json};
use filevault_core::models::{FileStatus, WebhookRequest, WebhookResponse};
use filevault_core::AppError;
use std::sync::Arc;

const WEBHOOK_SECRET_HEADER: &str = "x-webhook-secret";

/// Storage event callback marking an upload as completed.
///
/// Authenticated by a shared secret header instead of a bearer token because
/// the caller is the storage notification pipeline, not a user.
#[utoipa::path(
    post,
    path = "/files/webhook",
    tag = "files",
    request_body = WebhookRequest,
    responses(
        (status = 200, description = "File marked completed", body = WebhookResponse),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 401, description = "Missing or invalid webhook secret", body = ErrorResponse),
        (status = 404, description = "No file recorded for this key", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state, headers, request),
    fields(storage_key = %request.key, size = request.size, operation = "confirm_upload")
)]
pub async fn confirm_upload(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    ValidatedJson(request): ValidatedJson<WebhookRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let provided = headers
        .get(WEBHOOK_SECRET_HEADER)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Webhook secret missing".to_string()))?;

    if !secure_compare(provided, &state.config.webhook_secret) {
        return Err(HttpAppError(AppError::Unauthorized(
            "Invalid webhook secret".to_string(),
        )));
    }

    // The bucket field is informational only; the key alone identifies the row.
    if let Some(ref bucket) = request.bucket {
        tracing::debug!(bucket = %bucket, "Webhook event bucket");
    }

    let record = state
        .files
        .get_by_key(&request.key)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("No file recorded for key: {}", request.key))
        })?;

    // Redelivered events are acknowledged without touching the row
    if record.status == FileStatus::Completed {
        return Ok(Json(WebhookResponse {
            message: "File already marked as completed".to_string(),
        }));
    }

    state
        .files
        .mark_completed(&request.key, request.size)
        .await?
        .ok_or_else(|| {
            // Row deleted between lookup and update; the object is orphaned but
            // there is nothing left to complete.
            AppError::NotFound(format!("No file recorded for key: {}", request.key))
        })?;

    tracing::info!(file_id = %record.id, "Upload confirmed");

    Ok(Json(WebhookResponse {
        message: "File marked as completed".to_string(),
    }))
}
