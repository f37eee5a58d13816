//! Period filtering and the dashboard analytics summary.

use crate::domain::{Asset, Decimal, Period, Transaction};
use crate::engine::{
    calculate_average_win_loss, calculate_realized_pnl, calculate_total_invested,
    calculate_win_rate, generate_asset_allocation, generate_portfolio_history, AllocationSlice,
    HistoryPoint,
};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Cutoff instant for a reporting window: `now - N days`, or None for ALL.
pub fn period_cutoff(period: Period, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    period.days().map(|days| now - Duration::days(days))
}

/// Keep transactions strictly after the cutoff; a None cutoff keeps all.
pub fn filter_after(
    transactions: &[Transaction],
    cutoff: Option<DateTime<Utc>>,
) -> Vec<Transaction> {
    match cutoff {
        Some(cutoff) => transactions
            .iter()
            .filter(|t| t.date > cutoff)
            .cloned()
            .collect(),
        None => transactions.to_vec(),
    }
}

/// Everything the analytics dashboard shows for one reporting window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    /// Cost basis of current holdings, always from the FULL ledger.
    pub total_invested: Decimal,
    /// Realized P&L within the window.
    pub realized_pnl: Decimal,
    /// Realized P&L percent within the window.
    pub realized_pnl_percent: Decimal,
    /// Win rate within the window, 0-100.
    pub win_rate: Decimal,
    /// Mean winning trade within the window.
    pub avg_win: Decimal,
    /// Mean losing trade within the window (sign retained).
    pub avg_loss: Decimal,
    /// Number of transactions inside the window.
    pub transaction_count: usize,
    /// Portfolio value series, visible part of the window.
    pub history: Vec<HistoryPoint>,
    /// Current allocation, always from the FULL ledger.
    pub allocation: Vec<AllocationSlice>,
}

/// Compute the dashboard summary for one reporting window.
///
/// Window scoping is deliberately uneven:
/// - Trade metrics (P&L, win rate, averages, count) see only transactions
///   after the cutoff.
/// - The value series is generated from the FULL history first and then cut
///   down to visible points, so the window opens at the true cumulative
///   value instead of restarting from zero.
/// - Allocation and total invested are current-state snapshots and ignore
///   the window entirely.
pub fn analytics_summary(
    transactions: &[Transaction],
    assets: &[Asset],
    period: Period,
    now: DateTime<Utc>,
) -> AnalyticsSummary {
    let cutoff = period_cutoff(period, now);
    let windowed = filter_after(transactions, cutoff);

    let pnl = calculate_realized_pnl(&windowed);
    let win_rate = calculate_win_rate(&windowed);
    let win_loss = calculate_average_win_loss(&windowed);

    let full_history = generate_portfolio_history(transactions);
    let history = match cutoff {
        Some(cutoff) => {
            let cutoff_day = cutoff.date_naive();
            full_history
                .into_iter()
                .filter(|point| point.date > cutoff_day)
                .collect()
        }
        None => full_history,
    };

    AnalyticsSummary {
        total_invested: calculate_total_invested(transactions),
        realized_pnl: pnl.realized_pnl,
        realized_pnl_percent: pnl.realized_pnl_percent,
        win_rate,
        avg_win: win_loss.avg_win,
        avg_loss: win_loss.avg_loss,
        transaction_count: windowed.len(),
        history,
        allocation: generate_asset_allocation(transactions, assets),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AssetId, TxKind};
    use chrono::TimeZone;

    fn d(s: &str) -> Decimal {
        Decimal::from_str_canonical(s).unwrap()
    }

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, day, 12, 0, 0).unwrap()
    }

    fn tx(asset: AssetId, kind: TxKind, quantity: &str, price: &str, day: u32) -> Transaction {
        Transaction::new(asset, kind, d(quantity), d(price), at(day))
    }

    #[test]
    fn test_cutoff_subtracts_days() {
        let now = at(31);
        assert_eq!(period_cutoff(Period::SevenDays, now), Some(at(24)));
        assert_eq!(period_cutoff(Period::All, now), None);
    }

    #[test]
    fn test_filter_is_strictly_after() {
        let asset = AssetId::random();
        let txs = vec![
            tx(asset, TxKind::Buy, "1", "10", 10),
            tx(asset, TxKind::Buy, "1", "10", 20),
        ];
        // Cutoff exactly at the first transaction's instant excludes it.
        let kept = filter_after(&txs, Some(at(10)));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].date, at(20));

        assert_eq!(filter_after(&txs, None).len(), 2);
    }

    #[test]
    fn test_summary_scopes_trade_metrics_but_not_snapshots() {
        let asset = Asset::new("BTC", "Bitcoin", "crypto");
        let txs = vec![
            // Old trade: a win outside the 7-day window.
            tx(asset.id, TxKind::Buy, "10", "10", 1),
            tx(asset.id, TxKind::Sell, "2", "30", 2),
            // Recent trade: a loss inside the window.
            tx(asset.id, TxKind::Sell, "2", "5", 29),
        ];
        let summary = analytics_summary(&txs, &[asset], Period::SevenDays, at(31));

        // Only the recent disposal is visible to trade metrics; with no buy
        // inside the window its cost basis is zero, so P&L equals proceeds.
        assert_eq!(summary.transaction_count, 1);
        assert_eq!(summary.realized_pnl, d("10"));
        assert_eq!(summary.win_rate, d("100"));

        // Snapshots still see the whole ledger.
        assert_eq!(summary.total_invested, d("60"));
        assert_eq!(summary.allocation.len(), 1);
        assert_eq!(summary.allocation[0].value, d("60"));
    }

    #[test]
    fn test_summary_history_keeps_cumulative_values_at_window_start() {
        let asset = Asset::new("ETH", "Ethereum", "crypto");
        let txs = vec![
            tx(asset.id, TxKind::Buy, "1", "100", 1),
            tx(asset.id, TxKind::Buy, "1", "100", 28),
        ];
        let summary = analytics_summary(&txs, &[asset], Period::SevenDays, at(31));
        // The day-1 point is filtered out, but the visible point carries the
        // full cumulative value, not a window-local restart.
        assert_eq!(summary.history.len(), 1);
        assert_eq!(summary.history[0].value, d("200"));
    }

    #[test]
    fn test_summary_all_period_is_everything() {
        let asset = Asset::new("SOL", "Solana", "crypto");
        let txs = vec![
            tx(asset.id, TxKind::Buy, "1", "10", 1),
            tx(asset.id, TxKind::Buy, "1", "10", 30),
        ];
        let summary = analytics_summary(&txs, &[asset], Period::All, at(31));
        assert_eq!(summary.transaction_count, 2);
        assert_eq!(summary.history.len(), 2);
    }

    #[test]
    fn test_summary_empty_ledger() {
        let summary = analytics_summary(&[], &[], Period::ThirtyDays, at(15));
        assert_eq!(summary.total_invested, Decimal::zero());
        assert_eq!(summary.realized_pnl, Decimal::zero());
        assert_eq!(summary.win_rate, Decimal::zero());
        assert_eq!(summary.transaction_count, 0);
        assert!(summary.history.is_empty());
        assert!(summary.allocation.is_empty());
    }
}
