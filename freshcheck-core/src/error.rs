//! Error types for domain-level parsing failures.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    /// A category label that is not one of the eight catalog categories.
    #[error("unknown ingredient category: {0}")]
    UnknownCategory(String),

    /// A storage zone name that is neither fridge nor freezer.
    #[error("unknown storage zone: {0}")]
    UnknownZone(String),
}
