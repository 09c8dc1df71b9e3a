//! The key-value store abstraction the application persists its state through.

use async_trait::async_trait;

use crate::error::StorageError;

/// A string-keyed blob store. Values are opaque to this crate; callers decide
/// what goes in them (the application stores JSON). Implementations must be
/// safe to share behind an `Arc` across tasks.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Returns the stored value, or `None` when the key was never written.
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes a value, replacing any previous one under the same key.
    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Deletes a key. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
