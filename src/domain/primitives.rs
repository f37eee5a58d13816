//! Domain primitives: id newtypes, TxKind, Period.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique transaction identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TxId(pub Uuid);

impl TxId {
    /// Wrap an existing UUID.
    pub fn new(id: Uuid) -> Self {
        TxId(id)
    }

    /// Generate a fresh random id.
    pub fn random() -> Self {
        TxId(Uuid::new_v4())
    }

    /// Get the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique asset identifier. Many transactions reference one asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AssetId(pub Uuid);

impl AssetId {
    /// Wrap an existing UUID.
    pub fn new(id: Uuid) -> Self {
        AssetId(id)
    }

    /// Generate a fresh random id.
    pub fn random() -> Self {
        AssetId(Uuid::new_v4())
    }

    /// Get the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique strategy identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StrategyId(pub Uuid);

impl StrategyId {
    /// Wrap an existing UUID.
    pub fn new(id: Uuid) -> Self {
        StrategyId(id)
    }

    /// Generate a fresh random id.
    pub fn random() -> Self {
        StrategyId(Uuid::new_v4())
    }

    /// Get the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for StrategyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Transaction kind.
///
/// Swap is a disposal: for cost-basis purposes it behaves exactly like Sell
/// (units leave the position at the running average cost). It is never
/// modeled as a transfer into another asset's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TxKind {
    Buy,
    Sell,
    Swap,
}

impl TxKind {
    /// Returns true for kinds that reduce held quantity (Sell and Swap).
    pub fn is_disposal(&self) -> bool {
        matches!(self, TxKind::Sell | TxKind::Swap)
    }

    /// Signed multiplier for holdings arithmetic (+1 buy, -1 disposal).
    pub fn sign(&self) -> i32 {
        match self {
            TxKind::Buy => 1,
            TxKind::Sell | TxKind::Swap => -1,
        }
    }
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxKind::Buy => write!(f, "BUY"),
            TxKind::Sell => write!(f, "SELL"),
            TxKind::Swap => write!(f, "SWAP"),
        }
    }
}

/// Reporting window for the analytics summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "7D")]
    SevenDays,
    #[serde(rename = "30D")]
    ThirtyDays,
    #[serde(rename = "90D")]
    NinetyDays,
    #[serde(rename = "1Y")]
    OneYear,
    #[serde(rename = "ALL")]
    All,
}

impl Period {
    /// Window length in days; None means unbounded.
    pub fn days(&self) -> Option<i64> {
        match self {
            Period::SevenDays => Some(7),
            Period::ThirtyDays => Some(30),
            Period::NinetyDays => Some(90),
            Period::OneYear => Some(365),
            Period::All => None,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::SevenDays => write!(f, "7D"),
            Period::ThirtyDays => write!(f, "30D"),
            Period::NinetyDays => write!(f, "90D"),
            Period::OneYear => write!(f, "1Y"),
            Period::All => write!(f, "ALL"),
        }
    }
}

/// Error returned when a period string is not one of the known windows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodParseError(pub String);

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown period {:?}, expected 7D, 30D, 90D, 1Y, or ALL", self.0)
    }
}

impl std::error::Error for PeriodParseError {}

impl FromStr for Period {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "7D" => Ok(Period::SevenDays),
            "30D" => Ok(Period::ThirtyDays),
            "90D" => Ok(Period::NinetyDays),
            "1Y" => Ok(Period::OneYear),
            "ALL" => Ok(Period::All),
            other => Err(PeriodParseError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_sign() {
        assert_eq!(TxKind::Buy.sign(), 1);
        assert_eq!(TxKind::Sell.sign(), -1);
        assert_eq!(TxKind::Swap.sign(), -1);
    }

    #[test]
    fn test_kind_is_disposal() {
        assert!(!TxKind::Buy.is_disposal());
        assert!(TxKind::Sell.is_disposal());
        assert!(TxKind::Swap.is_disposal());
    }

    #[test]
    fn test_kind_serialization_uppercase() {
        assert_eq!(serde_json::to_string(&TxKind::Buy).unwrap(), "\"BUY\"");
        assert_eq!(serde_json::to_string(&TxKind::Swap).unwrap(), "\"SWAP\"");
        let parsed: TxKind = serde_json::from_str("\"SELL\"").unwrap();
        assert_eq!(parsed, TxKind::Sell);
    }

    #[test]
    fn test_kind_rejects_unknown() {
        // The closed enum is the validation surface for unrecognized types.
        let result = serde_json::from_str::<TxKind>("\"AIRDROP\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_period_days() {
        assert_eq!(Period::SevenDays.days(), Some(7));
        assert_eq!(Period::OneYear.days(), Some(365));
        assert_eq!(Period::All.days(), None);
    }

    #[test]
    fn test_period_parse_display_roundtrip() {
        for p in [
            Period::SevenDays,
            Period::ThirtyDays,
            Period::NinetyDays,
            Period::OneYear,
            Period::All,
        ] {
            assert_eq!(p.to_string().parse::<Period>().unwrap(), p);
        }
        assert!("2W".parse::<Period>().is_err());
    }

    #[test]
    fn test_period_serde_names() {
        assert_eq!(serde_json::to_string(&Period::ThirtyDays).unwrap(), "\"30D\"");
        let parsed: Period = serde_json::from_str("\"ALL\"").unwrap();
        assert_eq!(parsed, Period::All);
    }

    #[test]
    fn test_id_display_matches_uuid() {
        let id = AssetId::random();
        assert_eq!(id.to_string(), id.as_uuid().to_string());
    }
}
