//! Filevault Storage Library
//!
//! Storage abstraction over object stores. The service never proxies file bytes;
//! clients upload and download directly against presigned URLs, so the trait
//! surface is presign/delete/exists.
//!
//! # Storage key format
//!
//! Keys are owner-scoped: `uploads/{user_id}/{unix_millis}_{sanitized_filename}`.
//! Keys must not contain `..` or a leading `/`. Key generation is centralized in
//! the `keys` module so all backends stay consistent.

pub mod factory;
pub mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use filevault_core::StorageBackend;
pub use keys::build_storage_key;
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
