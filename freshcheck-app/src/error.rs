use storage::StorageError;
use thiserror::Error;

/// Application-state errors: persistence failures plus lookups by unknown id.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("storage failure: {0}")]
    Storage(#[from] StorageError),

    #[error("blob serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("no item with id {0}")]
    UnknownItem(String),
}
