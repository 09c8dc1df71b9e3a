//! SQLite-backed key-value store: durable blob persistence for app state.
//!
//! One row per key in `kv_blobs`; writes are whole-blob upserts. Uses
//! SqlitePoolManager for the pool; callers go through the [`KvStore`] trait.

use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::error::StorageError;
use crate::kv::KvStore;
use crate::sqlite_pool::SqlitePoolManager;

#[derive(Clone)]
pub struct SqliteKvStore {
    pool_manager: SqlitePoolManager,
}

impl SqliteKvStore {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        let store = Self { pool_manager };
        store.init().await?;
        Ok(store)
    }

    async fn init(&self) -> Result<(), StorageError> {
        info!("Creating database tables if not exist");

        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS kv_blobs (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl KvStore for SqliteKvStore {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let pool = self.pool_manager.pool();

        let row: Option<(String,)> = sqlx::query_as("SELECT value FROM kv_blobs WHERE key = ?")
            .bind(key)
            .fetch_optional(pool)
            .await?;

        Ok(row.map(|(value,)| value))
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            INSERT INTO kv_blobs (key, value, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now().to_rfc3339())
        .execute(pool)
        .await?;

        info!("Saved blob: key={}, bytes={}", key, value.len());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let pool = self.pool_manager.pool();

        sqlx::query("DELETE FROM kv_blobs WHERE key = ?")
            .bind(key)
            .execute(pool)
            .await?;

        Ok(())
    }
}
