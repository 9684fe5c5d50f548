//! Tagged results of successful store operations.

use std::path::PathBuf;

use stockroom_core::{ItemName, Quantity};

/// Stock was added to an item.
#[derive(Debug, Clone, PartialEq)]
pub struct AddOutcome {
    pub item: ItemName,
    pub added: Quantity,
    pub total: Quantity,
}

/// Stock was taken from an item.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoveOutcome {
    /// The item is still tracked with the remaining quantity.
    Reduced { item: ItemName, remaining: Quantity },
    /// The quantity dropped to zero or below and the item was dropped.
    Depleted { item: ItemName },
}

/// The inventory was replaced from a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOutcome {
    pub path: PathBuf,
    pub items: usize,
}

/// The inventory was written to a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    pub path: PathBuf,
    pub items: usize,
}
