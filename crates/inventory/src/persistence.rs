//! JSON file persistence.
//!
//! The file holds a single JSON object of item name to number. Saving is a
//! full overwrite of the target path; there is no temp file or rename.

use std::fs;
use std::io;
use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use stockroom_core::{InventoryError, InventoryResult, ItemName, Quantity};

/// Default inventory file, relative to the working directory.
pub const DEFAULT_PATH: &str = "inventory.json";

/// Inventory contents in insertion order.
pub type Entries = IndexMap<ItemName, Quantity>;

/// Read and parse an inventory file.
pub fn read_inventory(path: &Path) -> InventoryResult<Entries> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(InventoryError::MissingFile {
                path: path.to_path_buf(),
            });
        }
        Err(e) => {
            return Err(InventoryError::Read {
                path: path.to_path_buf(),
                reason: e.to_string(),
            });
        }
    };

    serde_json::from_str(&raw).map_err(|e| InventoryError::Corrupt {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Serialize entries (4-space indented) and overwrite `path` with them.
pub fn write_inventory(path: &Path, entries: &Entries) -> InventoryResult<()> {
    let write_err = |reason: String| InventoryError::Write {
        path: path.to_path_buf(),
        reason,
    };

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    entries
        .serialize(&mut ser)
        .map_err(|e| write_err(e.to_string()))?;

    fs::write(path, buf).map_err(|e| write_err(e.to_string()))
}
