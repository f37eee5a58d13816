//! Portfolio value time series, bucketed by calendar day.

use crate::domain::{AssetId, Transaction};
use crate::engine::{HistoryPoint, RunningAssetState};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

/// Cumulative invested value (sum of per-asset cost basis) after each day
/// that had at least one transaction.
///
/// Transactions are bucketed by their date truncated to a calendar day and
/// the buckets processed in ascending day order. WITHIN a day, transactions
/// apply in original array order with no secondary time-of-day sort. Days with
/// no activity emit no point; connecting the gaps is the consumer's concern.
pub fn generate_portfolio_history(transactions: &[Transaction]) -> Vec<HistoryPoint> {
    let mut days: BTreeMap<NaiveDate, Vec<&Transaction>> = BTreeMap::new();
    for tx in transactions {
        days.entry(tx.date.date_naive()).or_default().push(tx);
    }

    let mut states: HashMap<AssetId, RunningAssetState> = HashMap::new();
    let mut points = Vec::with_capacity(days.len());

    for (day, day_txs) in days {
        for tx in day_txs {
            states.entry(tx.asset_id).or_default().apply(tx);
        }
        let value = states.values().map(|s| s.total_cost).sum();
        points.push(HistoryPoint { date: day, value });
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Decimal, TxKind};
    use chrono::{TimeZone, Utc};

    fn d(s: &str) -> Decimal {
        Decimal::from_str_canonical(s).unwrap()
    }

    fn tx_at(
        asset: AssetId,
        kind: TxKind,
        quantity: &str,
        price: &str,
        day: u32,
        hour: u32,
    ) -> Transaction {
        Transaction::new(
            asset,
            kind,
            d(quantity),
            d(price),
            Utc.with_ymd_and_hms(2024, 6, day, hour, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_one_point_per_active_day() {
        let asset = AssetId::random();
        let txs = vec![
            tx_at(asset, TxKind::Buy, "1", "100", 1, 9),
            tx_at(asset, TxKind::Buy, "1", "200", 5, 9),
        ];
        let history = generate_portfolio_history(&txs);
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(history[0].value, d("100"));
        assert_eq!(history[1].date, NaiveDate::from_ymd_opt(2024, 6, 5).unwrap());
        assert_eq!(history[1].value, d("300"));
    }

    #[test]
    fn test_same_day_transactions_collapse_into_one_point() {
        let asset = AssetId::random();
        let txs = vec![
            tx_at(asset, TxKind::Buy, "1", "100", 3, 9),
            tx_at(asset, TxKind::Buy, "1", "300", 3, 15),
        ];
        let history = generate_portfolio_history(&txs);
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].value, d("400"));
    }

    #[test]
    fn test_days_emitted_ascending_even_if_input_is_not() {
        let asset = AssetId::random();
        let txs = vec![
            tx_at(asset, TxKind::Buy, "1", "50", 20, 9),
            tx_at(asset, TxKind::Buy, "1", "30", 2, 9),
        ];
        let history = generate_portfolio_history(&txs);
        assert_eq!(history[0].date, NaiveDate::from_ymd_opt(2024, 6, 2).unwrap());
        assert_eq!(history[0].value, d("30"));
        assert_eq!(history[1].value, d("80"));
    }

    #[test]
    fn test_within_day_original_array_order_applies() {
        let asset = AssetId::random();
        // Array order: sell first, then buy, both on the same day. The sell
        // hits an empty position (removes nothing), then the buy lands.
        // A time-of-day sort would give the same end-of-day total here; the
        // point is that the sell's later wall-clock time is NOT consulted.
        let txs = vec![
            tx_at(asset, TxKind::Sell, "1", "100", 10, 18),
            tx_at(asset, TxKind::Buy, "1", "100", 10, 9),
        ];
        let history = generate_portfolio_history(&txs);
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].value, d("100"));
    }

    #[test]
    fn test_disposals_reduce_series_value() {
        let asset = AssetId::random();
        let other = AssetId::random();
        let txs = vec![
            tx_at(asset, TxKind::Buy, "10", "10", 1, 9),
            tx_at(other, TxKind::Buy, "1", "50", 2, 9),
            tx_at(asset, TxKind::Sell, "5", "99", 3, 9),
        ];
        let history = generate_portfolio_history(&txs);
        assert_eq!(history[0].value, d("100"));
        assert_eq!(history[1].value, d("150"));
        // Half the position leaves at cost 50, sale price irrelevant.
        assert_eq!(history[2].value, d("100"));
    }

    #[test]
    fn test_empty_ledger_empty_series() {
        assert!(generate_portfolio_history(&[]).is_empty());
    }
}
