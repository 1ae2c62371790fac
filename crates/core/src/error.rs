//! Rejection outcomes for account operations, using thiserror.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::receipt::Receipt;

/// A rejected account operation.
///
/// Rejections are ordinary, non-fatal outcomes: the account state is
/// unchanged and nothing propagates beyond the caller. Display renders the
/// one-line status message for each case.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The requested amount was zero or negative.
    #[error("Invalid amount: ${0:.2}")]
    InvalidAmount(Decimal),

    /// Savings withdrawal past the current balance.
    #[error("Insufficient funds: requested ${requested:.2}, available ${available:.2}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    /// Checking withdrawal past balance plus overdraft limit.
    #[error(
        "Withdrawal of ${requested:.2} exceeds overdraft limit: available ${available:.2} (limit ${limit:.2})"
    )]
    OverdraftExceeded {
        requested: Decimal,
        available: Decimal,
        limit: Decimal,
    },
}

/// Result type alias for mutating account operations
pub type OpResult = Result<Receipt, Rejection>;

impl Rejection {
    /// Check whether this rejection was caused by a bad amount
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, Rejection::InvalidAmount(_))
    }

    /// Check whether this rejection was caused by the admission rule
    pub fn is_policy_rejection(&self) -> bool {
        matches!(
            self,
            Rejection::InsufficientFunds { .. } | Rejection::OverdraftExceeded { .. }
        )
    }
}
