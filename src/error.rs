use crate::domain::{Decimal, TxId};
use thiserror::Error;

/// Rejection reasons from the validation boundary.
///
/// Computation itself is total and never raises these; they exist so that a
/// malformed ledger is reported at the API edge instead of surfacing as a
/// silent zero deep in the math.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("transaction {id}: quantity must be positive, got {quantity}")]
    NonPositiveQuantity { id: TxId, quantity: Decimal },

    #[error("transaction {id}: price must be non-negative, got {price}")]
    NegativePrice { id: TxId, price: Decimal },

    #[error("transaction {id}: fee must be non-negative, got {fee}")]
    NegativeFee { id: TxId, fee: Decimal },

    #[error(
        "transaction {id}: totalValue {supplied} does not match quantity * price = {derived}"
    )]
    InconsistentTotalValue {
        id: TxId,
        supplied: Decimal,
        derived: Decimal,
    },

    #[error("transaction {id}: disposal of {requested} exceeds held quantity {held}")]
    Oversell {
        id: TxId,
        requested: Decimal,
        held: Decimal,
    },
}
