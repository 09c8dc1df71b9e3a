//! Integration tests for [`storage::SqliteKvStore`].
//!
//! Covers read/write/remove round-trips, upsert semantics, and durability across store instances using in-memory and temp-file databases.

use storage::{KvStore, SqliteKvStore};

/// **Test: Read returns what was last written.**
///
/// **Setup:** In-memory DB.
/// **Action:** `write("freshcheck_fridge", ...)` then `read` the same key.
/// **Expected:** Returns `Some` with the exact value.
#[tokio::test]
async fn test_write_then_read() {
    let store = SqliteKvStore::new("sqlite::memory:")
        .await
        .expect("Failed to create store");

    store
        .write("freshcheck_fridge", r#"[{"id":"a","name":"菠菜"}]"#)
        .await
        .expect("Failed to write");

    let value = store
        .read("freshcheck_fridge")
        .await
        .expect("Failed to read");

    assert_eq!(value.as_deref(), Some(r#"[{"id":"a","name":"菠菜"}]"#));
}

/// **Test: Reading a key that was never written.**
///
/// **Setup:** Empty in-memory DB.
/// **Action:** `read("freshcheck_history")`.
/// **Expected:** Returns `None`, not an error.
#[tokio::test]
async fn test_read_unwritten_key() {
    let store = SqliteKvStore::new("sqlite::memory:")
        .await
        .expect("Failed to create store");

    let value = store
        .read("freshcheck_history")
        .await
        .expect("Failed to read");

    assert!(value.is_none());
}

/// **Test: A second write to the same key replaces the first.**
///
/// **Setup:** In-memory DB with one value under a key.
/// **Action:** `write` the same key again with different content, then `read`.
/// **Expected:** Only the second value is returned.
#[tokio::test]
async fn test_write_is_an_upsert() {
    let store = SqliteKvStore::new("sqlite::memory:")
        .await
        .expect("Failed to create store");

    store
        .write("freshcheck_agreed", "false")
        .await
        .expect("Failed to write");
    store
        .write("freshcheck_agreed", "true")
        .await
        .expect("Failed to write");

    let value = store
        .read("freshcheck_agreed")
        .await
        .expect("Failed to read");

    assert_eq!(value.as_deref(), Some("true"));
}

/// **Test: Remove deletes the key and tolerates absent keys.**
///
/// **Setup:** In-memory DB with one key.
/// **Action:** `remove` the key twice, then `read` it.
/// **Expected:** Both removes succeed; the read returns `None`.
#[tokio::test]
async fn test_remove_is_idempotent() {
    let store = SqliteKvStore::new("sqlite::memory:")
        .await
        .expect("Failed to create store");

    store
        .write("freshcheck_history", "[]")
        .await
        .expect("Failed to write");

    store
        .remove("freshcheck_history")
        .await
        .expect("Failed to remove");
    store
        .remove("freshcheck_history")
        .await
        .expect("Failed to remove twice");

    let value = store
        .read("freshcheck_history")
        .await
        .expect("Failed to read");
    assert!(value.is_none());
}

/// **Test: Blobs survive closing and reopening the store.**
///
/// **Setup:** Temp-file DB; one store instance writes a blob.
/// **Action:** Open a second store on the same file and `read` the key.
/// **Expected:** The second instance sees the blob written by the first.
#[tokio::test]
async fn test_blob_survives_reopen() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("kv.db");
    let database_url = format!("sqlite:{}", db_path.display());

    {
        let store = SqliteKvStore::new(&database_url)
            .await
            .expect("Failed to create first store");
        store
            .write("freshcheck_fridge", r#"[{"name":"土豆","quantity":2}]"#)
            .await
            .expect("Failed to write");
    }

    let reopened = SqliteKvStore::new(&database_url)
        .await
        .expect("Failed to reopen store");

    let value = reopened
        .read("freshcheck_fridge")
        .await
        .expect("Failed to read");

    assert_eq!(value.as_deref(), Some(r#"[{"name":"土豆","quantity":2}]"#));
}

/// **Test: Keys are independent rows.**
///
/// **Setup:** In-memory DB with values under two different keys.
/// **Action:** Remove one key; read both.
/// **Expected:** The removed key is gone, the other is untouched.
#[tokio::test]
async fn test_keys_do_not_interfere() {
    let store = SqliteKvStore::new("sqlite::memory:")
        .await
        .expect("Failed to create store");

    store
        .write("freshcheck_history", "[]")
        .await
        .expect("Failed to write history");
    store
        .write("freshcheck_fridge", "[]")
        .await
        .expect("Failed to write fridge");

    store
        .remove("freshcheck_history")
        .await
        .expect("Failed to remove");

    assert!(store.read("freshcheck_history").await.unwrap().is_none());
    assert_eq!(store.read("freshcheck_fridge").await.unwrap().as_deref(), Some("[]"));
}
