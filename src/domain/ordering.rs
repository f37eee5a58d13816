//! Chronological transaction ordering for deterministic replay.

use crate::domain::Transaction;

/// Sort transactions ascending by date, in place.
///
/// The sort is stable: transactions sharing a date keep their original
/// sequence order. No secondary key is defined, so consumers must not read
/// meaning into the relative order of same-date transactions.
pub fn sort_chronological(transactions: &mut [Transaction]) {
    transactions.sort_by_key(|t| t.date);
}

/// Clone a slice into a chronologically sorted Vec.
///
/// Every metric replays from its own sorted copy; the caller's slice is
/// never reordered.
pub fn sorted_chronological(transactions: &[Transaction]) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sort_chronological(&mut sorted);
    sorted
}
