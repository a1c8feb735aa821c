//! In-memory storage double. Hands out deterministic fake presigned URLs and
//! records deletions so tests can assert on them.

use async_trait::async_trait;
use filevault_core::StorageBackend;
use filevault_storage::{Storage, StorageResult};
use std::collections::HashSet;
use std::sync::Mutex;
use std::time::Duration;

pub struct RecordingStorage {
    deleted: Mutex<HashSet<String>>,
}

impl RecordingStorage {
    pub fn new() -> Self {
        Self {
            deleted: Mutex::new(HashSet::new()),
        }
    }

    pub fn was_deleted(&self, storage_key: &str) -> bool {
        self.deleted.lock().unwrap().contains(storage_key)
    }
}

#[async_trait]
impl Storage for RecordingStorage {
    async fn presigned_put_url(
        &self,
        storage_key: &str,
        _content_type: &str,
        expires_in: Duration,
    ) -> StorageResult<String> {
        Ok(format!(
            "https://test-storage.invalid/put/{}?expires={}",
            storage_key,
            expires_in.as_secs()
        ))
    }

    async fn presigned_get_url(
        &self,
        storage_key: &str,
        expires_in: Duration,
    ) -> StorageResult<String> {
        Ok(format!(
            "https://test-storage.invalid/get/{}?expires={}",
            storage_key,
            expires_in.as_secs()
        ))
    }

    async fn delete(&self, storage_key: &str) -> StorageResult<()> {
        self.deleted.lock().unwrap().insert(storage_key.to_string());
        Ok(())
    }

    async fn exists(&self, storage_key: &str) -> StorageResult<bool> {
        Ok(!self.was_deleted(storage_key))
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}
