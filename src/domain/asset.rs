//! Asset metadata record.

use crate::domain::AssetId;
use serde::{Deserialize, Serialize};

/// Descriptive metadata for a tradable asset.
///
/// Carries no quantity or price state; current holdings are always derived
/// from the transaction ledger, never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Stable unique identifier.
    pub id: AssetId,
    /// Ticker symbol, e.g. "BTC".
    pub symbol: String,
    /// Human-readable name, e.g. "Bitcoin".
    pub name: String,
    /// Grouping label, e.g. "crypto" or "stock".
    pub category: String,
}

impl Asset {
    /// Create an asset with a fresh id.
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Asset {
            id: AssetId::random(),
            symbol: symbol.into(),
            name: name.into(),
            category: category.into(),
        }
    }
}
