//! Single-asset aggregate metrics.
//!
//! Each function re-sorts and re-replays independently from the raw slice,
//! so they stay pure and individually testable.

use crate::domain::{Decimal, Transaction};
use crate::engine::TradeReplay;
use serde::{Deserialize, Serialize};

/// Net holdings: signed quantity sum (+Buy, -Sell, -Swap).
///
/// Deliberately NOT clamped at zero; an inconsistent ledger (more sold than
/// bought) yields a negative number rather than hiding the inconsistency.
pub fn calculate_holdings(transactions: &[Transaction]) -> Decimal {
    transactions.iter().map(|t| t.signed_quantity()).sum()
}

/// Weighted average cost per unit across all buys.
///
/// Disposals are ignored entirely: they reduce the cost basis
/// proportionally but never move the average cost per unit. Zero when the
/// list contains no buys.
pub fn calculate_average_cost(transactions: &[Transaction]) -> Decimal {
    let mut total_quantity = Decimal::zero();
    let mut total_cost = Decimal::zero();

    for t in transactions {
        if !t.kind.is_disposal() {
            total_quantity = total_quantity + t.quantity;
            total_cost = total_cost + t.notional();
        }
    }

    if total_quantity.is_zero() {
        Decimal::zero()
    } else {
        total_cost / total_quantity
    }
}

/// Cost basis of current holdings: `holdings * average cost`.
///
/// This is the algebraic composition of the two functions above, not a
/// replay of the clamped running state. Once disposals have occurred the two
/// models can diverge (unclamped holdings, disposal-blind average cost);
/// that divergence is part of the contract and must not be "fixed" here.
pub fn calculate_total_invested(transactions: &[Transaction]) -> Decimal {
    calculate_holdings(transactions) * calculate_average_cost(transactions)
}

/// Realized profit/loss across all disposals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealizedPnl {
    /// Sum of per-disposal P&L against average cost at time of sale.
    pub realized_pnl: Decimal,
    /// P&L as a percentage of the cost basis of everything sold; zero when
    /// nothing has been sold.
    pub realized_pnl_percent: Decimal,
}

impl RealizedPnl {
    pub fn zero() -> Self {
        Self {
            realized_pnl: Decimal::zero(),
            realized_pnl_percent: Decimal::zero(),
        }
    }
}

/// Replay the ledger and accumulate realized P&L (average-cost method).
pub fn calculate_realized_pnl(transactions: &[Transaction]) -> RealizedPnl {
    let mut total_pnl = Decimal::zero();
    let mut total_sell_cost_basis = Decimal::zero();

    for outcome in TradeReplay::new(transactions) {
        total_pnl = total_pnl + outcome.pnl;
        total_sell_cost_basis = total_sell_cost_basis + outcome.cost_basis;
    }

    let percent = if total_sell_cost_basis.is_zero() {
        Decimal::zero()
    } else {
        (total_pnl / total_sell_cost_basis) * Decimal::hundred()
    };

    RealizedPnl {
        realized_pnl: total_pnl,
        realized_pnl_percent: percent,
    }
}

/// Percentage of disposals with strictly positive P&L, in [0, 100].
///
/// Zero-P&L trades count as losses, not as excluded. Zero when the ledger
/// contains no disposals.
pub fn calculate_win_rate(transactions: &[Transaction]) -> Decimal {
    let mut wins = 0i64;
    let mut trades = 0i64;

    for outcome in TradeReplay::new(transactions) {
        trades += 1;
        if outcome.is_win() {
            wins += 1;
        }
    }

    if trades == 0 {
        Decimal::zero()
    } else {
        Decimal::from_i64(wins) / Decimal::from_i64(trades) * Decimal::hundred()
    }
}

/// Mean winning and losing trade sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AverageWinLoss {
    /// Mean P&L of winning trades; zero when there are none.
    pub avg_win: Decimal,
    /// Mean P&L of losing trades, sign retained (non-positive); zero when
    /// there are none.
    pub avg_loss: Decimal,
}

impl AverageWinLoss {
    pub fn zero() -> Self {
        Self {
            avg_win: Decimal::zero(),
            avg_loss: Decimal::zero(),
        }
    }
}

/// Replay the ledger and average winning and losing trades separately.
pub fn calculate_average_win_loss(transactions: &[Transaction]) -> AverageWinLoss {
    let mut win_total = Decimal::zero();
    let mut win_count = 0i64;
    let mut loss_total = Decimal::zero();
    let mut loss_count = 0i64;

    for outcome in TradeReplay::new(transactions) {
        if outcome.is_win() {
            win_total = win_total + outcome.pnl;
            win_count += 1;
        } else {
            loss_total = loss_total + outcome.pnl;
            loss_count += 1;
        }
    }

    AverageWinLoss {
        avg_win: if win_count == 0 {
            Decimal::zero()
        } else {
            win_total / Decimal::from_i64(win_count)
        },
        avg_loss: if loss_count == 0 {
            Decimal::zero()
        } else {
            loss_total / Decimal::from_i64(loss_count)
        },
    }
}
