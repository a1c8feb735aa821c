use filevault_core::Config;
use filevault_db::{FileRepository, UserRepository};
use filevault_services::CleanupService;
use filevault_storage::Storage;
use sqlx::PgPool;
use std::sync::Arc;

/// Shared application state available to all handlers.
pub struct AppState {
    pub config: Config,
    pub pool: PgPool,
    pub users: UserRepository,
    pub files: FileRepository,
    pub storage: Arc<dyn Storage>,
    pub cleanup: Arc<CleanupService>,
}

impl AppState {
    pub fn new(config: Config, pool: PgPool, storage: Arc<dyn Storage>) -> Self {
        let users = UserRepository::new(pool.clone());
        let files = FileRepository::new(pool.clone());
        let cleanup = Arc::new(CleanupService::new(
            files.clone(),
            storage.clone(),
            config.cleanup_interval_secs,
            config.pending_max_age_secs,
        ));

        Self {
            config,
            pool,
            users,
            files,
            storage,
            cleanup,
        }
    }
}
