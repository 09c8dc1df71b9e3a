//! FreshCheck application layer: env config, persistent app state, and the
//! recipe suggestion rules behind the home board. The `freshcheck` binary in
//! `main.rs` is a thin CLI over these.

pub mod config;
pub mod error;
pub mod recipes;
pub mod state;

pub use config::{load_location, AppConfig};
pub use error::AppError;
pub use recipes::{recipe_detail, suggest, RecipeDetail, RecipeSuggestion};
pub use state::{AppState, ErrorReport, CONSENT_KEY, FRIDGE_KEY, HISTORY_KEY, REPORTS_KEY};
