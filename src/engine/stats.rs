//! Per-asset and per-strategy stat bundles.

use crate::domain::{AssetId, Decimal, StrategyId, Transaction};
use crate::engine::{
    calculate_average_cost, calculate_holdings, calculate_realized_pnl, calculate_total_invested,
};
use serde::{Deserialize, Serialize};

/// The stats panel for a single asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetStats {
    pub holdings: Decimal,
    pub average_cost: Decimal,
    pub total_invested: Decimal,
    pub realized_pnl: Decimal,
    pub realized_pnl_percent: Decimal,
}

impl AssetStats {
    pub fn zero() -> Self {
        Self {
            holdings: Decimal::zero(),
            average_cost: Decimal::zero(),
            total_invested: Decimal::zero(),
            realized_pnl: Decimal::zero(),
            realized_pnl_percent: Decimal::zero(),
        }
    }
}

/// Bundle the single-asset metrics for one asset, filtering the ledger down
/// to its transactions first.
pub fn asset_stats(transactions: &[Transaction], asset_id: &AssetId) -> AssetStats {
    let own: Vec<Transaction> = transactions
        .iter()
        .filter(|t| t.asset_id == *asset_id)
        .cloned()
        .collect();

    if own.is_empty() {
        return AssetStats::zero();
    }

    let pnl = calculate_realized_pnl(&own);
    AssetStats {
        holdings: calculate_holdings(&own),
        average_cost: calculate_average_cost(&own),
        total_invested: calculate_total_invested(&own),
        realized_pnl: pnl.realized_pnl,
        realized_pnl_percent: pnl.realized_pnl_percent,
    }
}

/// Accumulated stats for one strategy.
///
/// Tracks inflows rather than trade performance: no price feed means no
/// current value or unrealized P&L here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyStats {
    /// Capital put in through buys: total value plus fees. The one aggregate
    /// where fees count.
    pub total_invested: Decimal,
    /// Net quantity attributed to the strategy (disposals subtract).
    pub total_quantity: Decimal,
    /// Number of transactions attributed to the strategy.
    pub transaction_count: usize,
}

impl StrategyStats {
    pub fn zero() -> Self {
        Self {
            total_invested: Decimal::zero(),
            total_quantity: Decimal::zero(),
            transaction_count: 0,
        }
    }
}

/// Accumulate stats over the transactions attributed to one strategy.
pub fn strategy_stats(transactions: &[Transaction], strategy_id: &StrategyId) -> StrategyStats {
    let mut stats = StrategyStats::zero();

    for t in transactions {
        if t.strategy_id != Some(*strategy_id) {
            continue;
        }
        stats.transaction_count += 1;

        if t.kind.is_disposal() {
            stats.total_quantity = stats.total_quantity - t.quantity;
        } else {
            stats.total_invested = stats.total_invested + t.notional() + t.fee_or_zero();
            stats.total_quantity = stats.total_quantity + t.quantity;
        }
    }

    stats
}
