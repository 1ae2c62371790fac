//! Receipts for accepted account operations.
//!
//! The entity model returns outcomes as values; rendering the status line is
//! left to the caller via Display. Amounts render to two decimal places with
//! a `$` prefix.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of mutating operation a receipt confirms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Deposit,
    Withdrawal,
    Interest,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Deposit => "deposit",
            Operation::Withdrawal => "withdrawal",
            Operation::Interest => "interest",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Confirmation of an accepted operation.
///
/// For `Interest`, `amount` is the interest added, not the new balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// What was performed
    pub operation: Operation,
    /// Account the operation applied to
    pub account_number: String,
    /// Amount moved by the operation
    pub amount: Decimal,
    /// Balance once the operation settled
    pub balance_after: Decimal,
}

impl Receipt {
    pub fn new(
        operation: Operation,
        account_number: &str,
        amount: Decimal,
        balance_after: Decimal,
    ) -> Self {
        Self {
            operation,
            account_number: account_number.to_string(),
            amount,
            balance_after,
        }
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operation {
            Operation::Deposit => write!(
                f,
                "Deposited ${:.2} into account {}",
                self.amount, self.account_number
            ),
            Operation::Withdrawal => write!(
                f,
                "Withdrew ${:.2} from account {}",
                self.amount, self.account_number
            ),
            Operation::Interest => write!(
                f,
                "Added interest of ${:.2} to account {}",
                self.amount, self.account_number
            ),
        }
    }
}
