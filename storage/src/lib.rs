//! Storage crate: key-value blob persistence for application state.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`kv`] – KvStore trait
//! - [`sqlite`] – SqliteKvStore (durable, via sqlx)
//! - [`sqlite_pool`] – SqlitePoolManager
//! - [`memory`] – MemoryKvStore (volatile, for tests and development)

mod error;
mod kv;
mod memory;
mod sqlite;
mod sqlite_pool;

pub use error::StorageError;
pub use kv::KvStore;
pub use memory::MemoryKvStore;
pub use sqlite::SqliteKvStore;
pub use sqlite_pool::SqlitePoolManager;
