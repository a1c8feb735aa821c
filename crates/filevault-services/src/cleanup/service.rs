use chrono::{Duration as ChronoDuration, Utc};
use filevault_core::models::FileRecord;
use filevault_db::FileRepository;
use filevault_storage::Storage;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;
use uuid::Uuid;

/// Result of a cleanup pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepOutcome {
    /// Records removed from the database.
    pub deleted: u64,
    /// Records that could not be removed and remain for the next pass.
    pub failed: u64,
}

/// Deletes pending upload records that were never confirmed by the storage
/// webhook, together with any object that did land under their key.
#[derive(Clone)]
pub struct CleanupService {
    file_repository: FileRepository,
    storage: Arc<dyn Storage>,
    interval_secs: u64,
    pending_max_age_secs: i64,
}

impl CleanupService {
    pub fn new(
        file_repository: FileRepository,
        storage: Arc<dyn Storage>,
        interval_secs: u64,
        pending_max_age_secs: i64,
    ) -> Self {
        Self {
            file_repository,
            storage,
            interval_secs,
            pending_max_age_secs,
        }
    }

    /// Start the background cleanup task.
    /// Returns a JoinHandle for graceful shutdown.
    pub fn start(self: Arc<Self>) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            let mut cleanup_interval = interval(Duration::from_secs(self.interval_secs));

            loop {
                cleanup_interval.tick().await;

                tracing::info!("Starting scheduled cleanup of stale pending uploads");

                match self.sweep().await {
                    Ok(outcome) => {
                        tracing::info!(
                            deleted = outcome.deleted,
                            failed = outcome.failed,
                            "Cleanup task completed"
                        );
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Cleanup task failed");
                    }
                }
            }
        })
    }

    /// Remove all stale pending records. Safe to re-run immediately: a pass
    /// that finds nothing stale is a no-op.
    #[tracing::instrument(skip(self), fields(cleanup.operation = "sweep_all"))]
    pub async fn sweep(&self) -> Result<SweepOutcome, anyhow::Error> {
        let cutoff = Utc::now() - ChronoDuration::seconds(self.pending_max_age_secs);
        let stale = self.file_repository.stale_pending(cutoff).await?;

        Ok(self.delete_records(stale).await)
    }

    /// Remove stale pending records belonging to a single user.
    #[tracing::instrument(skip(self), fields(cleanup.operation = "sweep_user", user_id = %user_id))]
    pub async fn sweep_for_user(&self, user_id: Uuid) -> Result<SweepOutcome, anyhow::Error> {
        let cutoff = Utc::now() - ChronoDuration::seconds(self.pending_max_age_secs);
        let stale = self
            .file_repository
            .stale_pending_for_user(user_id, cutoff)
            .await?;

        Ok(self.delete_records(stale).await)
    }

    async fn delete_records(&self, records: Vec<FileRecord>) -> SweepOutcome {
        let mut outcome = SweepOutcome::default();

        for record in records {
            tracing::info!(
                file_id = %record.id,
                key = %record.storage_key,
                created_at = %record.created_at,
                "Deleting stale pending upload"
            );

            // The object may or may not exist: the client could have uploaded
            // without the webhook ever confirming. Storage delete is best-effort.
            match self.storage.delete(&record.storage_key).await {
                Ok(_) => {
                    tracing::debug!(key = %record.storage_key, "Successfully deleted from storage");
                }
                Err(e) => {
                    tracing::error!(
                        error = %e,
                        key = %record.storage_key,
                        "Failed to delete object from storage, continuing with database deletion"
                    );
                }
            }

            match self.file_repository.delete(record.id).await {
                Ok(_) => {
                    outcome.deleted += 1;
                    tracing::debug!(file_id = %record.id, "Successfully deleted from database");
                }
                Err(e) => {
                    outcome.failed += 1;
                    tracing::error!(
                        error = %e,
                        file_id = %record.id,
                        "Failed to delete from database"
                    );
                }
            }
        }

        outcome
    }
}
