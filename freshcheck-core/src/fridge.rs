//! The fridge inventory: stocked items, quantity adjustment with drop-at-zero,
//! and near-expiry queries.

use serde::{Deserialize, Serialize};

use crate::types::{FridgeItem, StorageZone, DAY_MS};

/// Outcome of a quantity adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// Quantity changed to this value and the item stays stocked.
    Updated(i64),
    /// Quantity reached zero and the item left the inventory.
    Removed,
}

/// The set of currently stocked items. Insertion order is preserved; queries
/// that need another order sort on the way out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FridgeInventory {
    items: Vec<FridgeItem>,
}

impl FridgeInventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<FridgeItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[FridgeItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&FridgeItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn add(&mut self, item: FridgeItem) {
        self.items.push(item);
    }

    /// Applies a signed quantity delta, flooring at zero. An item that hits
    /// zero is removed outright; the inventory keeps no empty placeholders.
    /// Extreme deltas saturate instead of wrapping. Returns `None` when no
    /// item has the given id.
    pub fn adjust_quantity(&mut self, id: &str, delta: i64) -> Option<QuantityChange> {
        let idx = self.items.iter().position(|item| item.id == id)?;
        let next = self.items[idx].quantity.saturating_add(delta).max(0);
        if next == 0 {
            self.items.remove(idx);
            Some(QuantityChange::Removed)
        } else {
            self.items[idx].quantity = next;
            Some(QuantityChange::Updated(next))
        }
    }

    /// Removes an item regardless of its quantity. Returns whether anything
    /// was actually removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    pub fn in_zone(&self, zone: StorageZone) -> Vec<&FridgeItem> {
        self.items.iter().filter(|item| item.zone == zone).collect()
    }

    /// Items with more than zero but at most three days of shelf life left,
    /// soonest-expiring first. Expired items are excluded; they surface as
    /// spoiled in the inventory view instead.
    pub fn near_expiry(&self, now_ms: i64) -> Vec<&FridgeItem> {
        let mut soon: Vec<&FridgeItem> = self
            .items
            .iter()
            .filter(|item| {
                let remaining = item.remaining_ms(now_ms);
                remaining > 0 && remaining <= 3 * DAY_MS
            })
            .collect();
        soon.sort_by_key(|item| item.expiry_date);
        soon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, days: i64, added: i64) -> FridgeItem {
        FridgeItem::manual(name, "叶菜类", "🥬", StorageZone::Fridge, 2, "份", days, added)
    }

    #[test]
    fn quantity_floors_at_zero_and_removes() {
        let mut fridge = FridgeInventory::new();
        let it = item("菠菜", 3, 0);
        let id = it.id.clone();
        fridge.add(it);

        assert_eq!(fridge.adjust_quantity(&id, -1), Some(QuantityChange::Updated(1)));
        // Over-consuming floors at zero rather than going negative.
        assert_eq!(fridge.adjust_quantity(&id, -5), Some(QuantityChange::Removed));
        // No tombstone left behind.
        assert!(fridge.get(&id).is_none());
        assert_eq!(fridge.adjust_quantity(&id, 1), None);
    }

    #[test]
    fn restock_increases_quantity() {
        let mut fridge = FridgeInventory::new();
        let it = item("土豆", 30, 0);
        let id = it.id.clone();
        fridge.add(it);
        assert_eq!(fridge.adjust_quantity(&id, 3), Some(QuantityChange::Updated(5)));
    }

    #[test]
    fn extreme_deltas_saturate_instead_of_wrapping() {
        let mut fridge = FridgeInventory::new();
        let it = item("菠菜", 3, 0);
        let id = it.id.clone();
        fridge.add(it);
        assert_eq!(fridge.adjust_quantity(&id, i64::MIN), Some(QuantityChange::Removed));

        let it = item("土豆", 30, 0);
        let id = it.id.clone();
        fridge.add(it);
        assert_eq!(
            fridge.adjust_quantity(&id, i64::MAX),
            Some(QuantityChange::Updated(i64::MAX))
        );
    }

    #[test]
    fn remove_reports_whether_anything_left() {
        let mut fridge = FridgeInventory::new();
        let it = item("菠菜", 3, 0);
        let id = it.id.clone();
        fridge.add(it);
        assert!(fridge.remove(&id));
        assert!(!fridge.remove(&id));
    }

    #[test]
    fn expiry_offset_matches_parsed_days() {
        let it = item("胡萝卜", 14, 5_000);
        assert_eq!(it.expiry_date - it.added_date, 14 * DAY_MS);
    }

    #[test]
    fn near_expiry_window_is_zero_exclusive_three_inclusive() {
        let mut fridge = FridgeInventory::new();
        fridge.add(item("expired", 1, 0)); // expires day 1
        fridge.add(item("expiring-now", 2, 0)); // remaining exactly 0
        fridge.add(item("exactly-three", 5, 0)); // remaining exactly 3 days
        fridge.add(item("two-days-left", 4, 0)); // remaining 2 days
        fridge.add(item("far-out", 30, 0));

        let soon = fridge.near_expiry(2 * DAY_MS);
        let names: Vec<_> = soon.iter().map(|i| i.name.as_str()).collect();
        // Expired and just-expiring items stay out (they show as spoiled
        // instead); the rest sort by soonest expiry.
        assert_eq!(names, vec!["two-days-left", "exactly-three"]);
    }

    #[test]
    fn zone_filter() {
        let mut fridge = FridgeInventory::new();
        fridge.add(item("菠菜", 3, 0));
        let frozen = FridgeItem::manual("猪肉", "肉类", "🥩", StorageZone::Freezer, 1, "kg", 180, 0);
        fridge.add(frozen);
        assert_eq!(fridge.in_zone(StorageZone::Fridge).len(), 1);
        assert_eq!(fridge.in_zone(StorageZone::Freezer).len(), 1);
    }
}
