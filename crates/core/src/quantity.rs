//! Stock quantities: integer or floating point, always finite.

use core::cmp::Ordering;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{InventoryError, InventoryResult};
use crate::value_object::ValueObject;

/// Tracked amount of an item.
///
/// Integers and floats are kept apart so that a stored `7` is written back as
/// `7` rather than `7.0`. Comparisons and equality are numeric across the two
/// variants (`Int(7) == Float(7.0)`).
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Int(i64),
    Float(f64),
}

impl Quantity {
    pub const ZERO: Quantity = Quantity::Int(0);

    /// Build a float quantity, rejecting NaN and infinities.
    pub fn float(value: f64) -> InventoryResult<Self> {
        if value.is_finite() {
            Ok(Self::Float(value))
        } else {
            Err(InventoryError::validation(format!(
                "quantity must be finite, got {value}"
            )))
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(v) => v as f64,
            Self::Float(v) => v,
        }
    }

    pub fn is_finite(self) -> bool {
        match self {
            Self::Int(_) => true,
            Self::Float(v) => v.is_finite(),
        }
    }

    /// Whether an item holding this quantity should leave the inventory.
    pub fn is_depleted(self) -> bool {
        self <= Self::ZERO
    }

    /// Sum of two quantities. Integer overflow promotes to float.
    pub fn checked_add(self, rhs: Quantity) -> InventoryResult<Quantity> {
        let sum = match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => a
                .checked_add(b)
                .map(Self::Int)
                .unwrap_or(Self::Float(a as f64 + b as f64)),
            (a, b) => Self::Float(a.as_f64() + b.as_f64()),
        };
        finite(sum, || format!("{self} + {rhs}"))
    }

    /// Difference of two quantities. Integer overflow promotes to float.
    pub fn checked_sub(self, rhs: Quantity) -> InventoryResult<Quantity> {
        let diff = match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => a
                .checked_sub(b)
                .map(Self::Int)
                .unwrap_or(Self::Float(a as f64 - b as f64)),
            (a, b) => Self::Float(a.as_f64() - b.as_f64()),
        };
        finite(diff, || format!("{self} - {rhs}"))
    }
}

fn finite(q: Quantity, expr: impl FnOnce() -> String) -> InventoryResult<Quantity> {
    if q.is_finite() {
        Ok(q)
    } else {
        Err(InventoryError::arithmetic(format!(
            "{} is not a finite quantity",
            expr()
        )))
    }
}

impl ValueObject for Quantity {}

impl Default for Quantity {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }
}

impl PartialOrd for Quantity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a.partial_cmp(b),
            (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
        }
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            // `{:?}` keeps the trailing `.0` on whole floats.
            Self::Float(v) => write!(f, "{v:?}"),
        }
    }
}

impl From<i64> for Quantity {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Quantity {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl TryFrom<f64> for Quantity {
    type Error = InventoryError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::float(value)
    }
}

impl FromStr for Quantity {
    type Err = InventoryError;

    /// Integers first, then floats.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(v) = s.parse::<i64>() {
            return Ok(Self::Int(v));
        }
        let v = s
            .parse::<f64>()
            .map_err(|e| InventoryError::validation(format!("invalid quantity {s:?}: {e}")))?;
        Self::float(v)
    }
}
