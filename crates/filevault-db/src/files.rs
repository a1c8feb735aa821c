use chrono::{DateTime, Utc};
use filevault_core::models::FileRecord;
use filevault_core::AppError;
use sqlx::PgPool;
use uuid::Uuid;

const FILE_COLUMNS: &str =
    "id, user_id, storage_key, file_name, mime_type, file_size, status, created_at, updated_at";

/// Repository for file lifecycle records
#[derive(Clone)]
pub struct FileRepository {
    pool: PgPool,
}

impl FileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a pending record for a freshly issued upload URL.
    pub async fn create_pending(
        &self,
        user_id: Uuid,
        storage_key: &str,
        file_name: &str,
        mime_type: &str,
        file_size: i64,
    ) -> Result<FileRecord, AppError> {
        // Use dynamic SQLx queries to avoid requiring DATABASE_URL/sqlx prepare
        let record = sqlx::query_as::<_, FileRecord>(&format!(
            r#"
            INSERT INTO files (user_id, storage_key, file_name, mime_type, file_size, status)
            VALUES ($1, $2, $3, $4, $5, 'pending')
            RETURNING {FILE_COLUMNS}
            "#,
        ))
        .bind(user_id)
        .bind(storage_key)
        .bind(file_name)
        .bind(mime_type)
        .bind(file_size)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    /// Fetch a record only if it belongs to `user_id`. Callers treat `None`
    /// uniformly for missing and foreign-owned records.
    pub async fn get_owned(
        &self,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<Option<FileRecord>, AppError> {
        let record = sqlx::query_as::<_, FileRecord>(&format!(
            r#"
            SELECT {FILE_COLUMNS}
            FROM files
            WHERE id = $1 AND user_id = $2
            "#,
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    pub async fn get_by_key(&self, storage_key: &str) -> Result<Option<FileRecord>, AppError> {
        let record = sqlx::query_as::<_, FileRecord>(&format!(
            r#"
            SELECT {FILE_COLUMNS}
            FROM files
            WHERE storage_key = $1
            "#,
        ))
        .bind(storage_key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// Completed files owned by `user_id`, newest first. Pending records are
    /// invisible to listings.
    pub async fn list_completed(&self, user_id: Uuid) -> Result<Vec<FileRecord>, AppError> {
        let records = sqlx::query_as::<_, FileRecord>(&format!(
            r#"
            SELECT {FILE_COLUMNS}
            FROM files
            WHERE user_id = $1 AND status = 'completed'
            ORDER BY created_at DESC
            "#,
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Flip a record to completed and store the authoritative object size.
    /// Returns the updated record, or `None` when no row matches the key.
    /// Idempotent: re-confirming an already-completed record just rewrites
    /// the size.
    pub async fn mark_completed(
        &self,
        storage_key: &str,
        file_size: i64,
    ) -> Result<Option<FileRecord>, AppError> {
        let record = sqlx::query_as::<_, FileRecord>(&format!(
            r#"
            UPDATE files
            SET status = 'completed', file_size = $2, updated_at = NOW()
            WHERE storage_key = $1
            RETURNING {FILE_COLUMNS}
            "#,
        ))
        .bind(storage_key)
        .bind(file_size)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// Delete a record by id. Returns the number of rows removed.
    pub async fn delete(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            DELETE FROM files
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Pending records created before `cutoff`, i.e. abandoned uploads.
    pub async fn stale_pending(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<FileRecord>, AppError> {
        let records = sqlx::query_as::<_, FileRecord>(&format!(
            r#"
            SELECT {FILE_COLUMNS}
            FROM files
            WHERE status = 'pending' AND created_at < $1
            ORDER BY created_at
            "#,
        ))
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Abandoned uploads belonging to one user, for the manual sweep endpoint.
    pub async fn stale_pending_for_user(
        &self,
        user_id: Uuid,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<FileRecord>, AppError> {
        let records = sqlx::query_as::<_, FileRecord>(&format!(
            r#"
            SELECT {FILE_COLUMNS}
            FROM files
            WHERE user_id = $1 AND status = 'pending' AND created_at < $2
            ORDER BY created_at
            "#,
        ))
        .bind(user_id)
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }
}
