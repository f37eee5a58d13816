//! Pure computation engine for cost-basis and performance analytics.
//!
//! Every public function here reconstructs its per-asset state from the raw
//! transaction slice on each call. Nothing is cached or shared, so callers
//! may invoke any of these concurrently.

use crate::domain::{AssetId, Decimal};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub mod allocation;
pub mod history;
pub mod metrics;
pub mod replay;
pub mod state;
pub mod stats;
pub mod summary;

pub use allocation::{generate_asset_allocation, generate_return_per_asset};
pub use history::generate_portfolio_history;
pub use metrics::{
    calculate_average_cost, calculate_average_win_loss, calculate_holdings,
    calculate_realized_pnl, calculate_total_invested, calculate_win_rate, AverageWinLoss,
    RealizedPnl,
};
pub use replay::{final_positions, TradeReplay};
pub use state::RunningAssetState;
pub use stats::{asset_stats, strategy_stats, AssetStats, StrategyStats};
pub use summary::{analytics_summary, filter_after, AnalyticsSummary};

/// Minimum absolute value below which a computed balance is treated as
/// effectively zero for display purposes.
pub fn dust_threshold() -> Decimal {
    Decimal::from_str_canonical("0.01").expect("0.01 is a valid decimal")
}

/// Outcome of a single disposal (Sell or Swap), measured against the
/// running average cost at the moment of disposal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeOutcome {
    /// Asset the disposal traded.
    pub asset_id: AssetId,
    /// Execution time of the disposal.
    pub date: DateTime<Utc>,
    /// Units disposed.
    pub quantity: Decimal,
    /// `quantity * price`: what the disposal brought in.
    pub proceeds: Decimal,
    /// `quantity * average cost before the disposal`: what those units cost.
    pub cost_basis: Decimal,
    /// `proceeds - cost_basis`.
    pub pnl: Decimal,
}

impl TradeOutcome {
    /// A trade counts as a win only on strictly positive P&L; zero is a loss.
    pub fn is_win(&self) -> bool {
        self.pnl.is_positive()
    }
}

/// One labeled value in an allocation or return-per-asset breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationSlice {
    /// Asset display name.
    pub name: String,
    /// Asset ticker symbol.
    pub symbol: String,
    /// Cost basis (allocation) or realized P&L (return ranking).
    pub value: Decimal,
}

/// One point in the portfolio value time series: cumulative invested value
/// at the end of a day that had at least one transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryPoint {
    /// Calendar day (date truncated to day).
    pub date: NaiveDate,
    /// Sum of cost basis across all per-asset states after that day.
    pub value: Decimal,
}
