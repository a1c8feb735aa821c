//! Filevault HTTP API
//!
//! axum application exposing registration/login, presigned upload brokering,
//! the storage completion webhook, per-user file listing/download/delete, and
//! the stale-upload sweeper.

pub mod api_doc;
pub mod auth;
pub mod error;
pub mod handlers;
pub mod setup;
pub mod state;
pub mod telemetry;
