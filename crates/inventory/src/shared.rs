//! Lock-guarded inventory for use from several callers.

use std::path::Path;
use std::sync::{Arc, RwLock};

use stockroom_core::{ItemName, Quantity};

use crate::log::StockLog;
use crate::store::InventoryStore;

/// Cloneable handle to one [`InventoryStore`] behind a `RwLock`.
///
/// Mutations (`add`, `remove`, `load`) take the write lock; reads and `save`
/// take the read lock. A poisoned lock turns the call into a logged no-op.
#[derive(Debug, Clone, Default)]
pub struct SharedInventory {
    inner: Arc<RwLock<InventoryStore>>,
}

impl SharedInventory {
    pub fn new(store: InventoryStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    pub fn add(&self, item: &str, qty: impl Into<Quantity>, logs: Option<&mut StockLog>) -> bool {
        match self.inner.write() {
            Ok(mut store) => store.add(item, qty, logs),
            Err(_) => {
                tracing::error!("inventory lock poisoned; add of {} skipped", item);
                false
            }
        }
    }

    pub fn remove(&self, item: &str, qty: impl Into<Quantity>) -> bool {
        match self.inner.write() {
            Ok(mut store) => store.remove(item, qty),
            Err(_) => {
                tracing::error!("inventory lock poisoned; removal of {} skipped", item);
                false
            }
        }
    }

    pub fn load(&self, path: impl AsRef<Path>) -> bool {
        match self.inner.write() {
            Ok(mut store) => store.load(path),
            Err(_) => {
                tracing::error!("inventory lock poisoned; load skipped");
                false
            }
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> bool {
        match self.inner.read() {
            Ok(store) => store.save(path),
            Err(_) => {
                tracing::error!("inventory lock poisoned; save skipped");
                false
            }
        }
    }

    pub fn get_quantity(&self, item: &str) -> Quantity {
        match self.inner.read() {
            Ok(store) => store.get_quantity(item),
            Err(_) => {
                tracing::error!("inventory lock poisoned; quantity of {} unavailable", item);
                Quantity::ZERO
            }
        }
    }

    pub fn list_low_stock(&self, threshold: Quantity) -> Vec<ItemName> {
        match self.inner.read() {
            Ok(store) => store.list_low_stock(threshold),
            Err(_) => {
                tracing::error!("inventory lock poisoned; low-stock listing skipped");
                vec![]
            }
        }
    }

    /// Copy of the current inventory.
    pub fn snapshot(&self) -> InventoryStore {
        match self.inner.read() {
            Ok(store) => store.clone(),
            Err(_) => {
                tracing::error!("inventory lock poisoned; snapshot is empty");
                InventoryStore::new()
            }
        }
    }
}

impl From<InventoryStore> for SharedInventory {
    fn from(store: InventoryStore) -> Self {
        Self::new(store)
    }
}
