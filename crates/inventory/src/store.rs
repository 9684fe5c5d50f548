//! The inventory store.

use std::path::Path;

use chrono::Utc;

use stockroom_core::{InventoryError, InventoryResult, ItemName, Quantity, Severity};

use crate::log::{LogEntry, StockLog};
use crate::outcome::{AddOutcome, LoadOutcome, RemoveOutcome, SaveOutcome};
use crate::persistence::{self, Entries};

/// Threshold used by the demo workflow and the CLI when none is configured.
pub const DEFAULT_LOW_STOCK_THRESHOLD: Quantity = Quantity::Int(5);

/// In-memory mapping from item name to quantity.
///
/// Not synchronized; wrap it in [`crate::SharedInventory`] when several
/// callers mutate the same inventory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryStore {
    entries: Entries,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Entries) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &Entries {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemName, &Quantity)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.entries.contains_key(item)
    }

    /// Stored quantity of `item`, or zero when it is not tracked.
    pub fn get_quantity(&self, item: &str) -> Quantity {
        self.entries.get(item).copied().unwrap_or(Quantity::ZERO)
    }

    /// Add `qty` to `item`, creating it if needed.
    ///
    /// Negative quantities are accepted and may leave a zero or negative total;
    /// only [`Self::try_remove`] drops depleted items.
    pub fn try_add(
        &mut self,
        item: &str,
        qty: impl Into<Quantity>,
        logs: Option<&mut StockLog>,
    ) -> InventoryResult<AddOutcome> {
        let qty = qty.into();
        let item = ItemName::parse(item)?;
        if !qty.is_finite() {
            return Err(InventoryError::validation(format!(
                "invalid quantity for item '{item}': {qty}"
            )));
        }

        let total = self.get_quantity(item.as_str()).checked_add(qty)?;
        self.entries.insert(item.clone(), total);

        if let Some(logs) = logs {
            logs.push(LogEntry::added(item.clone(), qty, Utc::now()));
        }

        Ok(AddOutcome {
            item,
            added: qty,
            total,
        })
    }

    /// Subtract `qty` from `item`, dropping it once depleted.
    ///
    /// On any error the inventory is left untouched.
    pub fn try_remove(
        &mut self,
        item: &str,
        qty: impl Into<Quantity>,
    ) -> InventoryResult<RemoveOutcome> {
        let qty = qty.into();
        let Some((name, current)) = self.entries.get_key_value(item) else {
            return Err(InventoryError::not_found(item));
        };
        let name = name.clone();
        let remaining = current.checked_sub(qty)?;

        if remaining.is_depleted() {
            self.entries.shift_remove(item);
            Ok(RemoveOutcome::Depleted { item: name })
        } else {
            self.entries.insert(name.clone(), remaining);
            Ok(RemoveOutcome::Reduced {
                item: name,
                remaining,
            })
        }
    }

    /// Names of items whose quantity is strictly below `threshold`, in
    /// insertion order.
    pub fn low_stock(&self, threshold: Quantity) -> Vec<ItemName> {
        self.entries
            .iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(item, _)| item.clone())
            .collect()
    }

    /// [`Self::low_stock`] plus an info diagnostic summarizing the result.
    pub fn list_low_stock(&self, threshold: Quantity) -> Vec<ItemName> {
        let low = self.low_stock(threshold);
        let names: Vec<&str> = low.iter().map(ItemName::as_str).collect();
        tracing::info!("Low items below {}: {:?}", threshold, names);
        low
    }

    /// Replace the whole inventory with the contents of `path`.
    ///
    /// Nothing is changed unless the file was read and parsed completely.
    pub fn try_load(&mut self, path: impl AsRef<Path>) -> InventoryResult<LoadOutcome> {
        let path = path.as_ref();
        let entries = persistence::read_inventory(path)?;
        self.entries = entries;
        Ok(LoadOutcome {
            path: path.to_path_buf(),
            items: self.entries.len(),
        })
    }

    /// Overwrite `path` with the whole inventory.
    pub fn try_save(&self, path: impl AsRef<Path>) -> InventoryResult<SaveOutcome> {
        let path = path.as_ref();
        persistence::write_inventory(path, &self.entries)?;
        Ok(SaveOutcome {
            path: path.to_path_buf(),
            items: self.entries.len(),
        })
    }

    /// Caller-facing [`Self::try_add`]: failures are logged, never returned.
    ///
    /// Returns whether the addition was applied.
    pub fn add(
        &mut self,
        item: &str,
        qty: impl Into<Quantity>,
        logs: Option<&mut StockLog>,
    ) -> bool {
        match self.try_add(item, qty, logs) {
            Ok(outcome) => {
                tracing::info!("Added {} of {}", outcome.added, outcome.item);
                true
            }
            Err(err) => {
                report_failure(&err, "skipping add");
                false
            }
        }
    }

    /// Caller-facing [`Self::try_remove`]: failures are logged, never returned.
    pub fn remove(&mut self, item: &str, qty: impl Into<Quantity>) -> bool {
        match self.try_remove(item, qty) {
            Ok(RemoveOutcome::Depleted { item }) => {
                tracing::info!("Removed '{}' completely from stock", item);
                true
            }
            Ok(RemoveOutcome::Reduced { item, remaining }) => {
                tracing::debug!("Removed stock of '{}', {} left", item, remaining);
                true
            }
            Err(err @ InventoryError::NotFound(_)) => {
                report_failure(&err, "tried to remove non-existent item");
                false
            }
            Err(err) => {
                report_failure(&err, &format!("unexpected error removing {item}"));
                false
            }
        }
    }

    /// Caller-facing [`Self::try_load`]: failures are logged, never returned.
    pub fn load(&mut self, path: impl AsRef<Path>) -> bool {
        match self.try_load(path) {
            Ok(outcome) => {
                tracing::info!("Inventory data loaded from {}", outcome.path.display());
                true
            }
            Err(err @ InventoryError::MissingFile { .. }) => {
                report_failure(&err, "no existing inventory file, starting fresh");
                false
            }
            Err(err) => {
                report_failure(&err, "inventory not loaded");
                false
            }
        }
    }

    /// Caller-facing [`Self::try_save`]: failures are logged, never returned.
    pub fn save(&self, path: impl AsRef<Path>) -> bool {
        match self.try_save(path) {
            Ok(outcome) => {
                tracing::info!("Inventory data saved to {}", outcome.path.display());
                true
            }
            Err(err) => {
                report_failure(&err, "file save error");
                false
            }
        }
    }
}

fn report_failure(err: &InventoryError, context: &str) {
    match err.severity() {
        Severity::Warning => tracing::warn!("{}: {}", context, err),
        Severity::Error => tracing::error!("{}: {}", context, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample() -> InventoryStore {
        let mut store = InventoryStore::new();
        store.add("apple", 7, None);
        store.add("banana", -2, None);
        store.add("grapes", 4, None);
        store
    }

    fn names(items: &[ItemName]) -> Vec<&str> {
        items.iter().map(ItemName::as_str).collect()
    }

    #[test]
    fn add_accumulates_per_item() {
        let mut store = InventoryStore::new();
        assert!(store.add("apple", 10, None));
        assert!(store.add("apple", Quantity::Float(2.5), None));
        assert_eq!(store.get_quantity("apple"), Quantity::Float(12.5));
    }

    #[test]
    fn add_rejects_empty_name_and_non_finite_quantity() {
        let mut store = sample();
        let before = store.clone();

        assert!(!store.add("", 3, None));
        assert!(!store.add("  ", 3, None));
        assert!(!store.add("apple", Quantity::Float(f64::NAN), None));
        assert!(matches!(
            store.try_add("apple", Quantity::Float(f64::INFINITY), None),
            Err(InventoryError::Validation(_))
        ));
        assert_eq!(store, before);
    }

    #[test]
    fn add_accepts_negative_without_depletion_cleanup() {
        let mut store = InventoryStore::new();
        assert!(store.add("banana", -2, None));
        assert!(store.contains("banana"));
        assert_eq!(store.get_quantity("banana"), Quantity::Int(-2));

        store.add("pear", 3, None);
        store.add("pear", -3, None);
        assert!(store.contains("pear"));
        assert_eq!(store.get_quantity("pear"), Quantity::ZERO);
    }

    #[test]
    fn add_appends_to_caller_log_only_on_success() {
        let mut store = InventoryStore::new();
        let mut logs = StockLog::new();

        store.add("apple", 10, Some(&mut logs));
        store.add("", 10, Some(&mut logs));
        store.add("grapes", 4, Some(&mut logs));

        assert_eq!(logs.len(), 2);
        assert!(logs[0].to_string().ends_with(": Added 10 of apple"));
        assert_eq!(logs[1].item.as_str(), "grapes");
    }

    #[test]
    fn remove_reduces_then_depletes() {
        let mut store = InventoryStore::new();
        store.add("apple", 10, None);

        let outcome = store.try_remove("apple", 3).unwrap();
        assert!(matches!(outcome, RemoveOutcome::Reduced { remaining: Quantity::Int(7), .. }));

        let outcome = store.try_remove("apple", 7).unwrap();
        assert!(matches!(outcome, RemoveOutcome::Depleted { .. }));
        assert!(!store.contains("apple"));
        assert_eq!(store.get_quantity("apple"), Quantity::ZERO);
    }

    #[test]
    fn remove_past_zero_drops_item() {
        let mut store = sample();
        assert!(store.remove("grapes", 10));
        assert!(!store.contains("grapes"));
    }

    #[test]
    fn remove_absent_item_is_a_logged_no_op() {
        let mut store = sample();
        let before = store.clone();

        assert!(!store.remove("orange", 1));
        assert!(matches!(store.try_remove("orange", 1), Err(InventoryError::NotFound(_))));
        assert_eq!(store, before);
    }

    #[test]
    fn remove_with_non_finite_result_leaves_item_untouched() {
        let mut store = sample();
        let err = store.try_remove("apple", Quantity::Float(f64::NAN)).unwrap_err();
        assert!(matches!(err, InventoryError::Arithmetic(_)));
        assert!(!store.remove("apple", Quantity::Float(f64::INFINITY)));
        assert_eq!(store.get_quantity("apple"), Quantity::Int(7));
    }

    #[test]
    fn remove_keeps_position_of_reduced_item() {
        let mut store = sample();
        store.remove("apple", 1);
        let order: Vec<&str> = store.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(order, vec!["apple", "banana", "grapes"]);
    }

    #[test]
    fn low_stock_is_strictly_below_threshold() {
        let store = sample();
        let low = store.list_low_stock(DEFAULT_LOW_STOCK_THRESHOLD);
        assert_eq!(names(&low), vec!["banana", "grapes"]);
        assert_eq!(names(&store.low_stock(Quantity::Int(4))), vec!["banana"]);
        let low = store.low_stock(Quantity::Float(7.5));
        assert_eq!(names(&low), vec!["apple", "banana", "grapes"]);
    }

    #[test]
    fn end_to_end_scenario() {
        let mut store = InventoryStore::new();
        store.add("apple", 10, None);
        store.add("grapes", 4, None);
        store.remove("apple", 3);

        assert_eq!(store.get_quantity("apple"), Quantity::Int(7));
        assert_eq!(store.get_quantity("grapes"), Quantity::Int(4));
        assert_eq!(store.get_quantity("orange"), Quantity::ZERO);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        let mut store = sample();
        store.add("flour", Quantity::Float(1.25), None);

        assert!(store.save(&path));

        let mut reloaded = InventoryStore::new();
        let outcome = reloaded.try_load(&path).unwrap();
        assert_eq!(outcome.items, 4);
        assert_eq!(reloaded, store);
    }

    #[test]
    fn load_replaces_rather_than_merges() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        std::fs::write(&path, r#"{"milk": 2}"#).unwrap();

        let mut store = sample();
        assert!(store.load(&path));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get_quantity("milk"), Quantity::Int(2));
        assert!(!store.contains("apple"));
    }

    #[test]
    fn load_missing_file_keeps_current_state() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = sample();
        let before = store.clone();

        assert!(!store.load(dir.path().join("nope.json")));
        assert!(!store.load(dir.path().join("nope.json")));
        assert_eq!(store, before);
    }

    #[test]
    fn load_corrupt_file_keeps_current_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        std::fs::write(&path, "not json at all").unwrap();

        let mut store = sample();
        let before = store.clone();
        assert!(matches!(store.try_load(&path), Err(InventoryError::Corrupt { .. })));
        assert!(!store.load(&path));
        assert_eq!(store, before);
    }

    #[test]
    fn save_failure_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        let store = sample();
        let target = dir.path().join("missing-dir").join("inventory.json");

        assert!(!store.save(&target));
        assert!(matches!(store.try_save(&target), Err(InventoryError::Write { .. })));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: add increases the stored quantity by exactly `qty`.
        #[test]
        fn add_increases_by_qty(start in -1_000i64..1_000, qty in -1_000i64..1_000) {
            let mut store = InventoryStore::new();
            store.add("widget", start, None);
            let before = store.get_quantity("widget");

            prop_assert!(store.add("widget", qty, None));
            let expected = before.checked_add(Quantity::Int(qty)).unwrap();
            prop_assert_eq!(store.get_quantity("widget"), expected);
        }

        /// Property: removal either leaves exactly `q - r` or drops the item.
        #[test]
        fn remove_reduces_or_depletes(q in 1i64..1_000, r in -1_000i64..2_000) {
            let mut store = InventoryStore::new();
            store.add("widget", q, None);
            store.remove("widget", r);

            if q - r <= 0 {
                prop_assert!(!store.contains("widget"));
                prop_assert_eq!(store.get_quantity("widget"), Quantity::ZERO);
            } else {
                prop_assert_eq!(store.get_quantity("widget"), Quantity::Int(q - r));
            }
        }

        /// Property: low stock is exactly the set of items strictly below the threshold.
        #[test]
        fn low_stock_matches_filter(
            qtys in prop::collection::vec(-50i64..50, 0..20),
            threshold in -50i64..50,
        ) {
            let mut store = InventoryStore::new();
            for (i, q) in qtys.iter().enumerate() {
                store.add(&format!("item-{i}"), *q, None);
            }

            let low = store.low_stock(Quantity::Int(threshold));
            let expected: Vec<String> = qtys
                .iter()
                .enumerate()
                .filter(|(_, q)| **q < threshold)
                .map(|(i, _)| format!("item-{i}"))
                .collect();
            let got: Vec<String> = low.iter().map(|n| n.to_string()).collect();
            prop_assert_eq!(got, expected);
        }
    }
}
