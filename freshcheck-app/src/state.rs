//! Application state: the in-memory ledgers plus explicit blob persistence.
//!
//! One JSON blob per collection, under the original web app's localStorage
//! keys and shapes. Blobs load once at startup and are rewritten after every
//! mutation; a missing or unparseable blob degrades to the empty default.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use freshcheck_core::{
    now_ms, AssessmentRecord, FridgeInventory, FridgeItem, HistoryItem, HistoryLedger,
    QuantityChange, StorageZone, UserLocation,
};
use storage::KvStore;

use crate::error::AppError;

/// Blob keys, unchanged from the original web app.
pub const HISTORY_KEY: &str = "freshcheck_history";
pub const FRIDGE_KEY: &str = "freshcheck_fridge";
pub const CONSENT_KEY: &str = "freshcheck_agreed";
pub const REPORTS_KEY: &str = "freshcheck_reports";

/// One "识别有误" report filed against a history entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorReport {
    pub result_id: String,
    pub ingredient_name: String,
    pub timestamp: i64,
    pub feedback: String,
}

/// Owns the ledgers and the store they persist to. Mutating operations write
/// their blob before returning; read paths never touch the store.
pub struct AppState {
    store: Arc<dyn KvStore>,
    history: HistoryLedger,
    fridge: FridgeInventory,
    consent: bool,
    location: UserLocation,
}

/// Parses a stored blob, falling back to the default on a missing key or
/// junk content. Losing a corrupt blob is preferable to refusing to start.
fn parse_or_default<T>(key: &str, blob: Option<String>) -> T
where
    T: serde::de::DeserializeOwned + Default,
{
    match blob {
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, %err, "unparseable blob, starting from the default");
                T::default()
            }
        },
        None => T::default(),
    }
}

impl AppState {
    /// Loads all blobs from the store. Storage failures propagate; parse
    /// failures degrade per blob.
    pub async fn load(store: Arc<dyn KvStore>, location: UserLocation) -> Result<Self, AppError> {
        let history_items: Vec<HistoryItem> =
            parse_or_default(HISTORY_KEY, store.read(HISTORY_KEY).await?);
        let fridge_items: Vec<FridgeItem> =
            parse_or_default(FRIDGE_KEY, store.read(FRIDGE_KEY).await?);
        let consent = matches!(store.read(CONSENT_KEY).await?.as_deref(), Some("true"));

        tracing::info!(
            history = history_items.len(),
            fridge = fridge_items.len(),
            consent,
            "App state loaded"
        );

        Ok(Self {
            store,
            history: HistoryLedger::from_items(history_items),
            fridge: FridgeInventory::from_items(fridge_items),
            consent,
            location,
        })
    }

    pub fn history(&self) -> &HistoryLedger {
        &self.history
    }

    pub fn fridge(&self) -> &FridgeInventory {
        &self.fridge
    }

    pub fn consent(&self) -> bool {
        self.consent
    }

    pub fn location(&self) -> &UserLocation {
        &self.location
    }

    /// Stores an assessment at the head of the history ledger.
    pub async fn record_assessment(
        &mut self,
        record: AssessmentRecord,
        image_url: Option<String>,
    ) -> Result<HistoryItem, AppError> {
        let stored = self.history.record(record, image_url);
        self.persist_history().await?;
        Ok(stored)
    }

    /// Empties the ledger and removes its blob, as the original clear button did.
    pub async fn clear_history(&mut self) -> Result<(), AppError> {
        self.history.clear();
        self.store.remove(HISTORY_KEY).await?;
        Ok(())
    }

    /// Transfers an assessment into the fridge with the user's stocking choices.
    pub async fn add_from_assessment(
        &mut self,
        source: &AssessmentRecord,
        zone: StorageZone,
        quantity: i64,
        unit: &str,
    ) -> Result<FridgeItem, AppError> {
        let item = FridgeItem::from_assessment(source, zone, quantity, unit, now_ms());
        self.fridge.add(item.clone());
        self.persist_fridge().await?;
        Ok(item)
    }

    /// Stocks an item by hand, outside the assessment flow.
    #[allow(clippy::too_many_arguments)]
    pub async fn add_manual(
        &mut self,
        name: &str,
        category: &str,
        icon: &str,
        zone: StorageZone,
        quantity: i64,
        unit: &str,
        days: i64,
    ) -> Result<FridgeItem, AppError> {
        let item = FridgeItem::manual(name, category, icon, zone, quantity, unit, days, now_ms());
        self.fridge.add(item.clone());
        self.persist_fridge().await?;
        Ok(item)
    }

    pub async fn adjust_quantity(
        &mut self,
        id: &str,
        delta: i64,
    ) -> Result<QuantityChange, AppError> {
        let change = self
            .fridge
            .adjust_quantity(id, delta)
            .ok_or_else(|| AppError::UnknownItem(id.to_string()))?;
        self.persist_fridge().await?;
        Ok(change)
    }

    pub async fn remove_item(&mut self, id: &str) -> Result<(), AppError> {
        if !self.fridge.remove(id) {
            return Err(AppError::UnknownItem(id.to_string()));
        }
        self.persist_fridge().await?;
        Ok(())
    }

    /// Records agreement to the disclaimer. The blob holds the literal
    /// string `"true"` like the original localStorage flag.
    pub async fn accept_terms(&mut self) -> Result<(), AppError> {
        self.store.write(CONSENT_KEY, "true").await?;
        self.consent = true;
        Ok(())
    }

    /// Appends a misidentification report for a history entry.
    pub async fn report_error(&self, history_id: &str) -> Result<ErrorReport, AppError> {
        let item = self
            .history
            .find(history_id)
            .ok_or_else(|| AppError::UnknownItem(history_id.to_string()))?;

        let report = ErrorReport {
            result_id: item.id.clone(),
            ingredient_name: item.record.ingredient_name.clone(),
            timestamp: now_ms(),
            feedback: "AI判断失误".to_string(),
        };

        let mut reports: Vec<ErrorReport> =
            parse_or_default(REPORTS_KEY, self.store.read(REPORTS_KEY).await?);
        reports.push(report.clone());
        self.store
            .write(REPORTS_KEY, &serde_json::to_string(&reports)?)
            .await?;
        Ok(report)
    }

    async fn persist_history(&self) -> Result<(), AppError> {
        let blob = serde_json::to_string(self.history.items())?;
        self.store.write(HISTORY_KEY, &blob).await?;
        Ok(())
    }

    async fn persist_fridge(&self) -> Result<(), AppError> {
        let blob = serde_json::to_string(self.fridge.items())?;
        self.store.write(FRIDGE_KEY, &blob).await?;
        Ok(())
    }
}
