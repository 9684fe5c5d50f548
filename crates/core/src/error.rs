//! Inventory error model.

use std::path::PathBuf;

use thiserror::Error;

/// Result type used across the inventory crates.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Diagnostic level a failure is reported at when it is swallowed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// Inventory-level error.
///
/// None of these escape the caller-facing store operations; they are returned
/// by the `try_*` forms and turned into diagnostics by the adapters.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InventoryError {
    /// An item name or quantity was rejected before touching the inventory.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The referenced item is not tracked.
    #[error("item not found: {0}")]
    NotFound(String),

    /// Quantities could not be combined (overflow into a non-finite value).
    #[error("arithmetic failure: {0}")]
    Arithmetic(String),

    /// The inventory file does not exist.
    #[error("inventory file not found: {}", path.display())]
    MissingFile { path: PathBuf },

    /// The inventory file exists but is not a JSON object of numbers.
    #[error("invalid JSON format in {}: {reason}", path.display())]
    Corrupt { path: PathBuf, reason: String },

    /// Reading the inventory file failed for a reason other than absence.
    #[error("failed to read {}: {reason}", path.display())]
    Read { path: PathBuf, reason: String },

    /// Writing the inventory file failed.
    #[error("failed to write {}: {reason}", path.display())]
    Write { path: PathBuf, reason: String },
}

impl InventoryError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(item: impl Into<String>) -> Self {
        Self::NotFound(item.into())
    }

    pub fn arithmetic(msg: impl Into<String>) -> Self {
        Self::Arithmetic(msg.into())
    }

    /// Level the failure is logged at by the caller-facing adapters.
    pub fn severity(&self) -> Severity {
        match self {
            Self::Validation(_) | Self::NotFound(_) | Self::MissingFile { .. } => {
                Severity::Warning
            }
            Self::Arithmetic(_) | Self::Corrupt { .. } | Self::Read { .. } | Self::Write { .. } => {
                Severity::Error
            }
        }
    }
}
