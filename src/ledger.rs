//! Ledger snapshot loading for the report binary.
//!
//! A snapshot is a plain JSON document `{ "transactions": [...],
//! "assets": [...] }` in the same shape the tracker app exports. Where the
//! records come from is otherwise none of the engine's business.

use crate::domain::{Asset, Transaction};
use crate::error::ValidationError;
use crate::validate::{validate_transactions, ValidationPolicy};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Transactions plus asset metadata, as loaded from disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSnapshot {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub assets: Vec<Asset>,
}

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("failed to read ledger file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse ledger file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("invalid ledger: {0}")]
    Invalid(#[from] ValidationError),
}

/// Load and validate a snapshot with the default (clamping) policy.
pub fn load_snapshot(path: &Path) -> Result<LedgerSnapshot, LedgerError> {
    load_snapshot_with_policy(path, &ValidationPolicy::default())
}

/// Load a snapshot and validate its transactions under the given policy.
pub fn load_snapshot_with_policy(
    path: &Path,
    policy: &ValidationPolicy,
) -> Result<LedgerSnapshot, LedgerError> {
    let content = std::fs::read_to_string(path).map_err(|source| LedgerError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let snapshot: LedgerSnapshot =
        serde_json::from_str(&content).map_err(|source| LedgerError::Parse {
            path: path.display().to_string(),
            source,
        })?;

    validate_transactions(&snapshot.transactions, policy)?;

    debug!(
        transactions = snapshot.transactions.len(),
        assets = snapshot.assets.len(),
        "loaded ledger snapshot"
    );

    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(content.as_bytes()).expect("write temp file");
        file
    }

    const SAMPLE: &str = r#"{
        "transactions": [
            {
                "id": "5f0c54a1-6a81-4f3a-9c5e-111111111111",
                "assetId": "5f0c54a1-6a81-4f3a-9c5e-222222222222",
                "type": "BUY",
                "quantity": 2,
                "price": 150,
                "totalValue": 300,
                "date": "2024-03-01T12:00:00Z"
            }
        ],
        "assets": [
            {
                "id": "5f0c54a1-6a81-4f3a-9c5e-222222222222",
                "symbol": "BTC",
                "name": "Bitcoin",
                "category": "crypto"
            }
        ]
    }"#;

    #[test]
    fn test_load_valid_snapshot() {
        let file = write_temp(SAMPLE);
        let snapshot = load_snapshot(file.path()).expect("load failed");
        assert_eq!(snapshot.transactions.len(), 1);
        assert_eq!(snapshot.assets.len(), 1);
        assert_eq!(snapshot.assets[0].symbol, "BTC");
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let file = write_temp("{}");
        let snapshot = load_snapshot(file.path()).expect("load failed");
        assert!(snapshot.transactions.is_empty());
        assert!(snapshot.assets.is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_snapshot(Path::new("/nonexistent/ledger.json")).unwrap_err();
        assert!(matches!(err, LedgerError::Io { .. }));
    }

    #[test]
    fn test_unknown_transaction_type_is_a_parse_error() {
        let file = write_temp(&SAMPLE.replace("BUY", "AIRDROP"));
        let err = load_snapshot(file.path()).unwrap_err();
        assert!(matches!(err, LedgerError::Parse { .. }));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let file = write_temp(&SAMPLE.replace("\"quantity\": 2", "\"quantity\": -2"));
        let err = load_snapshot(file.path()).unwrap_err();
        assert!(matches!(
            err,
            LedgerError::Invalid(ValidationError::NonPositiveQuantity { .. })
        ));
    }
}
