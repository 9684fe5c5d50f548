//! `stockroom-core` — inventory domain building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no logging).

pub mod error;
pub mod item;
pub mod quantity;
pub mod value_object;

pub use error::{InventoryError, InventoryResult, Severity};
pub use item::ItemName;
pub use quantity::Quantity;
pub use value_object::ValueObject;
