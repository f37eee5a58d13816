//! Chronological replay driver.
//!
//! One replay backs every trade-level metric: realized P&L, win rate, and
//! average win/loss all aggregate the same outcome stream differently.

use crate::domain::{sorted_chronological, AssetId, Transaction};
use crate::engine::{RunningAssetState, TradeOutcome};
use std::collections::HashMap;
use tracing::debug;

/// Lazy iterator over disposal outcomes.
///
/// Sorts the input chronologically (stable, ties keep original order), then
/// folds each transaction into its asset's [`RunningAssetState`]. Buys mutate
/// state silently; each Sell/Swap yields one [`TradeOutcome`] measured
/// against the average cost at that moment.
///
/// The sequence is finite and restartable: build a new replay from the same
/// slice to run it again. State lives inside the iterator, so concurrent
/// replays never interfere.
pub struct TradeReplay {
    transactions: Vec<Transaction>,
    next: usize,
    states: HashMap<AssetId, RunningAssetState>,
}

impl TradeReplay {
    pub fn new(transactions: &[Transaction]) -> Self {
        debug!(count = transactions.len(), "starting trade replay");
        Self {
            transactions: sorted_chronological(transactions),
            next: 0,
            states: HashMap::new(),
        }
    }

    /// Per-asset state after the replay has consumed every transaction.
    ///
    /// Drains any unconsumed tail first, so it is safe to call on a fresh
    /// replay to get final positions directly.
    pub fn into_final_states(mut self) -> HashMap<AssetId, RunningAssetState> {
        while self.next().is_some() {}
        self.states
    }
}

impl Iterator for TradeReplay {
    type Item = TradeOutcome;

    fn next(&mut self) -> Option<TradeOutcome> {
        while self.next < self.transactions.len() {
            let tx = &self.transactions[self.next];
            self.next += 1;

            let state = self.states.entry(tx.asset_id).or_default();

            if !tx.kind.is_disposal() {
                state.apply_buy(tx.quantity, tx.notional());
                continue;
            }

            let proceeds = tx.quantity * tx.price;
            let cost_basis = state.apply_disposal(tx.quantity);

            return Some(TradeOutcome {
                asset_id: tx.asset_id,
                date: tx.date,
                quantity: tx.quantity,
                proceeds,
                cost_basis,
                pnl: proceeds - cost_basis,
            });
        }
        None
    }
}

/// Final per-asset running state for a transaction list, replayed in global
/// chronological order.
pub fn final_positions(transactions: &[Transaction]) -> HashMap<AssetId, RunningAssetState> {
    TradeReplay::new(transactions).into_final_states()
}
