//! Crate-wide constants and configuration defaults.

/// Upload size ceiling enforced before a pending record is created.
pub const MAX_UPLOAD_SIZE_BYTES: i64 = 50 * 1024 * 1024;

/// Lifetime of presigned PUT URLs.
pub const UPLOAD_URL_EXPIRY_SECS: u64 = 300;

/// Lifetime of presigned GET URLs.
pub const DOWNLOAD_URL_EXPIRY_SECS: u64 = 300;

/// How often the background sweeper runs.
pub const CLEANUP_INTERVAL_SECS: u64 = 3600;

/// Pending records older than this are considered abandoned.
pub const PENDING_MAX_AGE_SECS: i64 = 3600;

/// Default bearer token lifetime.
pub const JWT_EXPIRY_HOURS: i64 = 1;
