//! In-memory key-value store for testing and development.
//!
//! Same contract as the SQLite store but nothing survives a restart. Uses
//! `Arc<RwLock<HashMap>>` for thread-safe concurrent access.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::kv::KvStore;

/// Volatile [`KvStore`] backed by a shared hash map. Clones share the map.
#[derive(Debug, Clone, Default)]
pub struct MemoryKvStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryKvStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored keys.
    pub async fn len(&self) -> usize {
        let entries = self.entries.read().await;
        entries.len()
    }

    /// Returns true if nothing has been written yet.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl KvStore for MemoryKvStore {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).cloned())
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().await;
        entries.remove(key);
        Ok(())
    }
}
