//! The assessment history ledger: newest-first, capped at a fixed depth.

use serde::{Deserialize, Serialize};

use crate::types::{AssessmentRecord, HistoryItem};

/// Oldest entries beyond this count are discarded on every insert.
pub const HISTORY_CAP: usize = 20;

/// Ordered collection of past assessments. Indexing is positional; position 0
/// is always the most recent record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLedger {
    items: Vec<HistoryItem>,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a ledger from persisted items, enforcing the cap in case the
    /// stored blob predates it or was edited by hand.
    pub fn from_items(mut items: Vec<HistoryItem>) -> Self {
        if items.len() > HISTORY_CAP {
            tracing::warn!(count = items.len(), cap = HISTORY_CAP, "history blob over cap, truncating");
            items.truncate(HISTORY_CAP);
        }
        Self { items }
    }

    /// Prepends a new assessment and drops anything beyond the cap.
    /// Returns the stored entry so the caller can show its assigned id.
    pub fn record(&mut self, record: AssessmentRecord, image_url: Option<String>) -> HistoryItem {
        let item = HistoryItem::new(record, image_url);
        self.items.insert(0, item.clone());
        self.items.truncate(HISTORY_CAP);
        item
    }

    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn find(&self, id: &str) -> Option<&HistoryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
