use crate::auth::models::CurrentUser;
use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{Duration as ChronoDuration, Utc};
use filevault_core::models::{
    DownloadUrlResponse, FileListResponse, FileStatus, SweepResponse, UploadRequest,
    UploadResponse,
};
use filevault_core::AppError;
use filevault_storage::build_storage_key;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

/// Broker a presigned upload URL and record the pending file
#[utoipa::path(
    post,
    path = "/files/upload",
    tag = "files",
    security(("bearer_auth" = [])),
    request_body = UploadRequest,
    responses(
        (status = 200, description = "Presigned upload URL generated", body = UploadResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 413, description = "File exceeds the upload size limit", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state, request),
    fields(
        user_id = %current_user.user_id,
        file_name = %request.file_name,
        file_size = request.file_size,
        operation = "request_upload_url"
    )
)]
pub async fn request_upload_url(
    current_user: CurrentUser,
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<UploadRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    // Reject oversize declarations before any row or URL is created
    if request.file_size > state.config.max_upload_size_bytes {
        return Err(HttpAppError(AppError::PayloadTooLarge(format!(
            "File size {} exceeds the maximum of {} bytes",
            request.file_size, state.config.max_upload_size_bytes
        ))));
    }

    let storage_key = build_storage_key(current_user.user_id, &request.file_name);

    let record = state
        .files
        .create_pending(
            current_user.user_id,
            &storage_key,
            &request.file_name,
            &request.mime_type,
            request.file_size,
        )
        .await?;

    let expires_in = Duration::from_secs(state.config.upload_url_expiry_secs);
    let expires_at = Utc::now() + ChronoDuration::seconds(state.config.upload_url_expiry_secs as i64);

    let upload_url = state
        .storage
        .presigned_put_url(&storage_key, &request.mime_type, expires_in)
        .await?;

    tracing::info!(
        file_id = %record.id,
        storage_key = %storage_key,
        "Generated presigned upload URL"
    );

    Ok(Json(UploadResponse {
        upload_url,
        key: storage_key,
        expires_at,
    }))
}

/// List the authenticated user's completed files, newest first
#[utoipa::path(
    get,
    path = "/files",
    tag = "files",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Completed files for the current user", body = FileListResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(user_id = %current_user.user_id, operation = "list_files"))]
pub async fn list_files(
    current_user: CurrentUser,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let files = state.files.list_completed(current_user.user_id).await?;
    Ok(Json(FileListResponse { files }))
}

/// Broker a presigned download URL for an owned, completed file
#[utoipa::path(
    get,
    path = "/files/{id}/download-url",
    tag = "files",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "File id")),
    responses(
        (status = 200, description = "Presigned download URL", body = DownloadUrlResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "File not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state),
    fields(user_id = %current_user.user_id, file_id = %file_id, operation = "get_download_url")
)]
pub async fn get_download_url(
    current_user: CurrentUser,
    State(state): State<Arc<AppState>>,
    Path(file_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpAppError> {
    let record = state
        .files
        .get_owned(current_user.user_id, file_id)
        .await?
        .ok_or_else(|| AppError::NotFound("File not found".to_string()))?;

    // Pending files are indistinguishable from missing ones: the upload never
    // completed, so there is nothing to hand out.
    if record.status != FileStatus::Completed {
        return Err(HttpAppError(AppError::NotFound(
            "File not found".to_string(),
        )));
    }

    let expires_in = Duration::from_secs(state.config.download_url_expiry_secs);
    let expires_at =
        Utc::now() + ChronoDuration::seconds(state.config.download_url_expiry_secs as i64);

    let download_url = state
        .storage
        .presigned_get_url(&record.storage_key, expires_in)
        .await?;

    Ok(Json(DownloadUrlResponse {
        download_url,
        expires_at,
    }))
}

/// Delete an owned file from storage and the database
#[utoipa::path(
    delete,
    path = "/files/{id}",
    tag = "files",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "File id")),
    responses(
        (status = 204, description = "File deleted"),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "File not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state),
    fields(user_id = %current_user.user_id, file_id = %file_id, operation = "delete_file")
)]
pub async fn delete_file(
    current_user: CurrentUser,
    State(state): State<Arc<AppState>>,
    Path(file_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpAppError> {
    let record = state
        .files
        .get_owned(current_user.user_id, file_id)
        .await?
        .ok_or_else(|| AppError::NotFound("File not found".to_string()))?;

    // Storage deletion is best-effort: a failed object delete must not leave
    // the row behind, or the user can never clear the entry.
    if let Err(e) = state.storage.delete(&record.storage_key).await {
        tracing::warn!(
            error = %e,
            storage_key = %record.storage_key,
            "Failed to delete object from storage, continuing with database deletion"
        );
    }

    state.files.delete(record.id).await?;

    tracing::info!(storage_key = %record.storage_key, "File deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Sweep the authenticated user's stale pending uploads immediately
#[utoipa::path(
    delete,
    path = "/files/cleanup/pending",
    tag = "files",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Sweep finished", body = SweepResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(user_id = %current_user.user_id, operation = "sweep_pending"))]
pub async fn sweep_pending(
    current_user: CurrentUser,
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    let outcome = state
        .cleanup
        .sweep_for_user(current_user.user_id)
        .await
        .map_err(|e| AppError::Internal(format!("Cleanup sweep failed: {}", e)))?;

    Ok(Json(SweepResponse {
        deleted: outcome.deleted,
        failed: outcome.failed,
    }))
}
