//! Caller-owned record of stock additions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{ItemName, Quantity};

/// Sequence of log entries owned by the caller of [`crate::InventoryStore::add`].
pub type StockLog = Vec<LogEntry>;

/// One successful addition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub at: DateTime<Utc>,
    pub item: ItemName,
    pub quantity: Quantity,
}

impl LogEntry {
    pub fn added(item: ItemName, quantity: Quantity, at: DateTime<Utc>) -> Self {
        Self { at, item, quantity }
    }
}

impl core::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: Added {} of {}", self.at, self.quantity, self.item)
    }
}
