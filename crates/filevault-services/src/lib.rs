//! Filevault Services Library
//!
//! Background services that run outside the request path.

pub mod cleanup;

pub use cleanup::{CleanupService, SweepOutcome};
