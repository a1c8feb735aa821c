//! Application wiring: database, storage, routes, server.

pub mod database;
pub mod routes;
pub mod server;

use crate::state::AppState;
use anyhow::{Context, Result};
use axum::Router;
use filevault_core::Config;
use filevault_storage::create_storage;
use std::sync::Arc;

/// Build the shared state and router from configuration. Telemetry is
/// initialized here so startup failures are already logged.
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, Router)> {
    crate::telemetry::init_telemetry();

    config.validate().context("Invalid configuration")?;

    let pool = database::setup_database(&config).await?;

    let storage = create_storage(&config)
        .await
        .context("Failed to initialize storage backend")?;
    tracing::info!(backend = %storage.backend_type(), "Storage backend initialized");

    let state = Arc::new(AppState::new(config, pool, storage));
    let router = routes::setup_routes(state.clone());

    Ok((state, router))
}
