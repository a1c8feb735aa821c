//! Cleanup of abandoned pending uploads.

mod service;

pub use service::{CleanupService, SweepOutcome};
