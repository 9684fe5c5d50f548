//! Inventory configuration (file location, low-stock threshold).

use std::path::PathBuf;

use stockroom_core::Quantity;

use crate::persistence::DEFAULT_PATH;
use crate::store::DEFAULT_LOW_STOCK_THRESHOLD;

/// Environment variable overriding the inventory file path.
pub const FILE_ENV: &str = "STOCKROOM_FILE";

/// Environment variable overriding the low-stock threshold.
pub const THRESHOLD_ENV: &str = "STOCKROOM_LOW_STOCK_THRESHOLD";

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryConfig {
    pub path: PathBuf,
    pub low_stock_threshold: Quantity,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PATH),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl InventoryConfig {
    /// Defaults overridden by `STOCKROOM_FILE` / `STOCKROOM_LOW_STOCK_THRESHOLD`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup(FILE_ENV).filter(|p| !p.trim().is_empty()) {
            config.path = PathBuf::from(path);
        }

        if let Some(raw) = lookup(THRESHOLD_ENV) {
            match raw.parse::<Quantity>() {
                Ok(threshold) => config.low_stock_threshold = threshold,
                Err(err) => tracing::warn!(
                    "{} ignored, keeping threshold {}: {}",
                    THRESHOLD_ENV,
                    config.low_stock_threshold,
                    err
                ),
            }
        }

        config
    }
}
