//! Inventory tracking: an in-memory map of item name to quantity.
//!
//! The store keeps the "never crash over inventory data" contract: the
//! caller-facing operations (`add`, `remove`, `load`, `save`) report failures
//! through `tracing` only. The `try_*` forms return the underlying
//! [`InventoryResult`] for callers that want to decide for themselves.

pub mod config;
pub mod log;
pub mod outcome;
pub mod persistence;
pub mod report;
pub mod shared;
pub mod store;

pub use config::InventoryConfig;
pub use log::{LogEntry, StockLog};
pub use outcome::{AddOutcome, LoadOutcome, RemoveOutcome, SaveOutcome};
pub use persistence::{DEFAULT_PATH, Entries};
pub use shared::SharedInventory;
pub use store::{DEFAULT_LOW_STOCK_THRESHOLD, InventoryStore};

pub use stockroom_core::{InventoryError, InventoryResult, ItemName, Quantity};
