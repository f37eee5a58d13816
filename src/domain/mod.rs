//! Domain types and determinism layer for the portfolio ledger engine.
//!
//! This module provides:
//! - Exact numeric handling via the Decimal wrapper
//! - Id newtypes: TxId, AssetId, StrategyId
//! - Transaction and Asset records with ledger-compatible JSON serialization
//! - Stable chronological ordering for deterministic replay

pub mod asset;
pub mod decimal;
pub mod ordering;
pub mod primitives;
pub mod transaction;

pub use asset::Asset;
pub use decimal::Decimal;
pub use ordering::{sort_chronological, sorted_chronological};
pub use primitives::{AssetId, Period, PeriodParseError, StrategyId, TxId, TxKind};
pub use transaction::Transaction;
