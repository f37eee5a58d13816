//! Validation boundary for incoming transaction lists.
//!
//! The engine tolerates over-sell by clamping; whether that tolerance is
//! acceptable is the caller's call, so it is a policy here rather than a
//! branch inside the math.

use crate::domain::{sorted_chronological, AssetId, Decimal, Transaction};
use crate::engine::dust_threshold;
use crate::error::ValidationError;
use std::collections::HashMap;
use tracing::debug;

/// What to do when a disposal exceeds the held quantity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OversellPolicy {
    /// Tolerate it; the engine's full-exit clamp absorbs the excess.
    #[default]
    Clamp,
    /// Treat it as a ledger error before any computation runs.
    Reject,
}

/// Validation settings applied at the API edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationPolicy {
    pub oversell: OversellPolicy,
}

impl ValidationPolicy {
    /// Policy that rejects over-sell instead of clamping.
    pub fn strict() -> Self {
        Self {
            oversell: OversellPolicy::Reject,
        }
    }
}

/// Check a transaction list before it is handed to the engine.
///
/// Field checks: quantity must be positive, price and fee non-negative, and
/// a supplied totalValue must match `quantity * price` within the dust
/// threshold. Under [`OversellPolicy::Reject`] the quantities are also
/// replayed chronologically and any disposal exceeding the held quantity
/// fails. Unknown transaction kinds and non-finite numbers cannot reach this
/// function; the typed deserialization boundary already refuses them.
pub fn validate_transactions(
    transactions: &[Transaction],
    policy: &ValidationPolicy,
) -> Result<(), ValidationError> {
    for t in transactions {
        if !t.quantity.is_positive() {
            return Err(ValidationError::NonPositiveQuantity {
                id: t.id,
                quantity: t.quantity,
            });
        }
        if t.price.is_negative() {
            return Err(ValidationError::NegativePrice {
                id: t.id,
                price: t.price,
            });
        }
        if let Some(fee) = t.fee {
            if fee.is_negative() {
                return Err(ValidationError::NegativeFee { id: t.id, fee });
            }
        }
        if let Some(supplied) = t.total_value {
            let derived = t.quantity * t.price;
            if (supplied - derived).abs() > dust_threshold() {
                return Err(ValidationError::InconsistentTotalValue {
                    id: t.id,
                    supplied,
                    derived,
                });
            }
        }
    }

    if policy.oversell == OversellPolicy::Reject {
        check_oversell(transactions)?;
    }

    debug!(count = transactions.len(), "ledger validated");
    Ok(())
}

/// Replay quantities chronologically and fail on the first disposal that
/// exceeds the held amount. A disposal of exactly the held quantity (full
/// exit) is fine.
fn check_oversell(transactions: &[Transaction]) -> Result<(), ValidationError> {
    let mut held: HashMap<AssetId, Decimal> = HashMap::new();

    for t in sorted_chronological(transactions) {
        let balance = held.entry(t.asset_id).or_insert_with(Decimal::zero);
        if t.kind.is_disposal() {
            if t.quantity > *balance {
                return Err(ValidationError::Oversell {
                    id: t.id,
                    requested: t.quantity,
                    held: *balance,
                });
            }
            *balance = *balance - t.quantity;
        } else {
            *balance = *balance + t.quantity;
        }
    }

    Ok(())
}
