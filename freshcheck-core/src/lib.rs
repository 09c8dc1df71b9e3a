//! # freshcheck-core
//!
//! Domain types and pure logic for FreshCheck: assessment records, the fridge
//! inventory and history ledger, shelf-life parsing, the ingredient reference
//! catalog, and tracing initialization. No I/O; persistence and the vision
//! service live in the `storage` and `vision-client` crates.

pub mod catalog;
pub mod error;
pub mod fridge;
pub mod history;
pub mod logger;
pub mod shelf_life;
pub mod types;

pub use catalog::{DiagnosticTier, FreshnessDiagnostic, IngredientCategory, IngredientEntry};
pub use error::CoreError;
pub use fridge::{FridgeInventory, QuantityChange};
pub use history::{HistoryLedger, HISTORY_CAP};
pub use logger::init_tracing;
pub use shelf_life::{parse_shelf_life_days, DEFAULT_SHELF_LIFE_DAYS};
pub use types::{
    now_ms, suggested_unit, AssessmentRecord, DerivedStatus, FreshnessLevel, FridgeItem,
    HistoryItem, Region, StorageZone, UserLocation, DAY_MS,
};
