//! Transaction type: one immutable ledger fact.

use crate::domain::{AssetId, Decimal, StrategyId, TxId, TxKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single buy/sell/swap recorded against an asset.
///
/// Append-only: corrections are full replacements, never in-place edits.
/// `date` is the only field that determines processing order; insertion and
/// display order carry no meaning for any calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Stable unique identifier.
    pub id: TxId,
    /// Asset this transaction trades.
    pub asset_id: AssetId,
    /// Buy, Sell, or Swap (Swap = disposal).
    #[serde(rename = "type")]
    pub kind: TxKind,
    /// Units traded; positive.
    pub quantity: Decimal,
    /// Price per unit at execution; non-negative.
    pub price: Decimal,
    /// Total value of the execution. Trusted when supplied, else derived as
    /// `quantity * price`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_value: Option<Decimal>,
    /// Transaction fee; non-negative. Ignored by the core math, counted only
    /// in per-strategy invested capital.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<Decimal>,
    /// Execution time; sole ordering key.
    pub date: DateTime<Utc>,
    /// Strategy this transaction belongs to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_id: Option<StrategyId>,
    /// Free-form labels.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Free-form note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Transaction {
    /// Create a transaction with a fresh id and no optional metadata.
    pub fn new(
        asset_id: AssetId,
        kind: TxKind,
        quantity: Decimal,
        price: Decimal,
        date: DateTime<Utc>,
    ) -> Self {
        Transaction {
            id: TxId::random(),
            asset_id,
            kind,
            quantity,
            price,
            total_value: None,
            fee: None,
            date,
            strategy_id: None,
            tags: Vec::new(),
            notes: None,
        }
    }

    /// Set an explicit total value.
    pub fn with_total_value(mut self, total_value: Decimal) -> Self {
        self.total_value = Some(total_value);
        self
    }

    /// Set the fee.
    pub fn with_fee(mut self, fee: Decimal) -> Self {
        self.fee = Some(fee);
        self
    }

    /// Attach the transaction to a strategy.
    pub fn with_strategy(mut self, strategy_id: StrategyId) -> Self {
        self.strategy_id = Some(strategy_id);
        self
    }

    /// Total value of the execution: the supplied `total_value` when present,
    /// otherwise `quantity * price`.
    pub fn notional(&self) -> Decimal {
        self.total_value.unwrap_or(self.quantity * self.price)
    }

    /// Quantity with the kind's sign applied (+buy, -disposal).
    pub fn signed_quantity(&self) -> Decimal {
        if self.kind.is_disposal() {
            -self.quantity
        } else {
            self.quantity
        }
    }

    /// Fee, or zero when absent.
    pub fn fee_or_zero(&self) -> Decimal {
        self.fee.unwrap_or(Decimal::zero())
    }
}
