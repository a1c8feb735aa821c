use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request body for `POST /files/upload`
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    #[validate(length(min = 1, max = 255, message = "fileName is required"))]
    pub file_name: String,
    #[validate(length(min = 1, max = 255, message = "mimeType is required"))]
    pub mime_type: String,
    #[validate(range(min = 1, message = "fileSize must be positive"))]
    pub file_size: i64,
}

/// Response body for `POST /files/upload`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// Presigned PUT URL the client uploads the bytes to
    pub upload_url: String,
    /// Storage key identifying the object
    pub key: String,
    pub expires_at: DateTime<Utc>,
}

/// Body posted by the storage-event notifier after an object lands.
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct WebhookRequest {
    #[validate(length(min = 1, message = "key is required"))]
    pub key: String,
    /// Authoritative object size reported by storage
    #[validate(range(min = 0, message = "size must not be negative"))]
    pub size: i64,
    /// Bucket name, informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,
}

/// Response body for `POST /files/webhook`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WebhookResponse {
    pub message: String,
}

/// Response body for `GET /files/{id}/download-url`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DownloadUrlResponse {
    pub download_url: String,
    pub expires_at: DateTime<Utc>,
}

/// Response body for `DELETE /files/cleanup/pending`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SweepResponse {
    pub deleted: u64,
    pub failed: u64,
}
