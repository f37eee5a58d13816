//! Portfolio-level breakdowns: allocation by cost basis and realized return
//! per asset.

use crate::domain::{Asset, AssetId, Decimal, Transaction};
use crate::engine::{dust_threshold, final_positions, AllocationSlice, TradeReplay};
use std::collections::{HashMap, HashSet};
use tracing::warn;

/// Current allocation: remaining cost basis per asset.
///
/// All transactions replay in global chronological order through one state
/// per asset. Assets whose final cost basis is at or below the dust
/// threshold (including everything fully exited and clamped to zero) are
/// omitted; this is a display simplification, not data loss. Result is
/// sorted descending by value.
pub fn generate_asset_allocation(
    transactions: &[Transaction],
    assets: &[Asset],
) -> Vec<AllocationSlice> {
    let states = final_positions(transactions);
    let dust = dust_threshold();

    warn_unknown_assets(states.keys(), assets);

    let mut slices: Vec<AllocationSlice> = assets
        .iter()
        .filter_map(|asset| {
            let state = states.get(&asset.id)?;
            if state.total_cost > dust {
                Some(AllocationSlice {
                    name: asset.name.clone(),
                    symbol: asset.symbol.clone(),
                    value: state.total_cost,
                })
            } else {
                None
            }
        })
        .collect();

    slices.sort_by(|a, b| b.value.cmp(&a.value));
    slices
}

/// Realized P&L per asset, for ranking charts.
///
/// Same global chronological replay as the allocation, but accumulating each
/// disposal's P&L per asset instead of the remaining cost. Assets whose
/// absolute realized P&L is at or below the dust threshold are omitted.
/// Result is sorted descending by value.
pub fn generate_return_per_asset(
    transactions: &[Transaction],
    assets: &[Asset],
) -> Vec<AllocationSlice> {
    let mut pnl_by_asset: HashMap<AssetId, Decimal> = HashMap::new();
    for outcome in TradeReplay::new(transactions) {
        let entry = pnl_by_asset.entry(outcome.asset_id).or_insert_with(Decimal::zero);
        *entry = *entry + outcome.pnl;
    }
    let dust = dust_threshold();

    warn_unknown_assets(pnl_by_asset.keys(), assets);

    let mut slices: Vec<AllocationSlice> = assets
        .iter()
        .filter_map(|asset| {
            let pnl = *pnl_by_asset.get(&asset.id)?;
            if pnl.abs() > dust {
                Some(AllocationSlice {
                    name: asset.name.clone(),
                    symbol: asset.symbol.clone(),
                    value: pnl,
                })
            } else {
                None
            }
        })
        .collect();

    slices.sort_by(|a, b| b.value.cmp(&a.value));
    slices
}

/// Transactions referencing an asset id with no metadata cannot be labeled
/// and are skipped from breakdowns.
fn warn_unknown_assets<'a>(ids: impl Iterator<Item = &'a AssetId>, assets: &[Asset]) {
    let known: HashSet<AssetId> = assets.iter().map(|a| a.id).collect();
    for id in ids {
        if !known.contains(id) {
            warn!(asset_id = %id, "transactions reference an unknown asset; skipping it in breakdowns");
        }
    }
}
