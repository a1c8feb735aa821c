use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use utoipa::ToSchema;
use uuid::Uuid;

/// Lifecycle state of a stored file.
///
/// Records are created `Pending` when a presigned upload URL is issued and
/// become `Completed` when the storage webhook confirms the object landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(type_name = "file_status", rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Pending,
    Completed,
}

impl Display for FileStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            FileStatus::Pending => write!(f, "pending"),
            FileStatus::Completed => write!(f, "completed"),
        }
    }
}

/// File metadata record. The bytes themselves live in object storage under
/// `storage_key`; this row only tracks ownership and lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(rename = "key")]
    pub storage_key: String,
    pub file_name: String,
    pub mime_type: String,
    pub file_size: i64,
    pub status: FileStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Response body for `GET /files`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FileListResponse {
    pub files: Vec<FileRecord>,
}
