pub mod domain;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod validate;

pub use domain::{
    Asset, AssetId, Decimal, Period, PeriodParseError, StrategyId, Transaction, TxId, TxKind,
};
pub use engine::{
    analytics_summary, asset_stats, calculate_average_cost, calculate_average_win_loss,
    calculate_holdings, calculate_realized_pnl, calculate_total_invested, calculate_win_rate,
    generate_asset_allocation, generate_portfolio_history, generate_return_per_asset,
    strategy_stats, AllocationSlice, AnalyticsSummary, AssetStats, AverageWinLoss, HistoryPoint,
    RealizedPnl, RunningAssetState, StrategyStats, TradeOutcome, TradeReplay,
};
pub use error::ValidationError;
pub use ledger::{load_snapshot, load_snapshot_with_policy, LedgerError, LedgerSnapshot};
pub use validate::{validate_transactions, OversellPolicy, ValidationPolicy};
