//! # Checking Account
//!
//! Checking accounts may overdraw: a withdrawal is admitted as long as the
//! balance stays at or above `-overdraft_limit`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::account::{AccountCore, BankAccount};
use crate::error::{OpResult, Rejection};
use crate::receipt::{Operation, Receipt};

/// Default overdraft limit ($100)
pub const DEFAULT_OVERDRAFT_LIMIT: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// A checking account with a bounded overdraft allowance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckingAccount {
    core: AccountCore,
    /// How far below zero the balance may go, fixed at construction.
    /// Negative limits are not validated away; callers wanting a strictly
    /// non-negative limit must check before constructing.
    overdraft_limit: Decimal,
}

impl CheckingAccount {
    /// Open a checking account with an initial balance and overdraft limit.
    pub fn new(account_number: &str, initial_balance: Decimal, overdraft_limit: Decimal) -> Self {
        Self {
            core: AccountCore::new(account_number, initial_balance),
            overdraft_limit,
        }
    }

    /// Open an empty checking account at the default overdraft limit.
    pub fn with_default_limit(account_number: &str) -> Self {
        Self {
            core: AccountCore::empty(account_number),
            overdraft_limit: DEFAULT_OVERDRAFT_LIMIT,
        }
    }

    /// The fixed overdraft limit
    pub fn overdraft_limit(&self) -> Decimal {
        self.overdraft_limit
    }

    /// Amount still withdrawable before the admission rule rejects:
    /// `balance + overdraft_limit`.
    pub fn available_funds(&self) -> Decimal {
        self.core.balance() + self.overdraft_limit
    }
}

impl BankAccount for CheckingAccount {
    fn core(&self) -> &AccountCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AccountCore {
        &mut self.core
    }

    /// Admitted iff `amount > 0` and `balance + overdraft_limit >= amount`.
    /// A resulting balance of exactly `-overdraft_limit` is admitted.
    fn withdraw(&mut self, amount: Decimal) -> OpResult {
        if amount <= Decimal::ZERO {
            return Err(Rejection::InvalidAmount(amount));
        }
        let available = self.available_funds();
        if available < amount {
            return Err(Rejection::OverdraftExceeded {
                requested: amount,
                available,
                limit: self.overdraft_limit,
            });
        }
        self.core.set_balance(self.core.balance() - amount);
        debug!(
            account = %self.core.account_number(),
            %amount,
            balance = %self.core.balance(),
            "withdrawal accepted"
        );
        Ok(Receipt::new(
            Operation::Withdrawal,
            self.core.account_number(),
            amount,
            self.core.balance(),
        ))
    }
}

impl fmt::Display for CheckingAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Checking {} (overdraft limit: ${:.2})",
            self.core, self.overdraft_limit
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_withdraw_within_balance() {
        let mut account = CheckingAccount::new("CA456", dec!(500), dec!(200));
        let receipt = account.withdraw(dec!(300)).unwrap();
        assert_eq!(receipt.balance_after, dec!(200));
    }

    #[test]
    fn test_withdraw_into_overdraft() {
        let mut account = CheckingAccount::new("CA456", dec!(500), dec!(200));
        let receipt = account.withdraw(dec!(600)).unwrap();
        assert_eq!(receipt.balance_after, dec!(-100));
        assert_eq!(account.balance(), dec!(-100));
    }

    #[test]
    fn test_withdraw_to_exact_limit() {
        let mut account = CheckingAccount::new("CA456", Decimal::ZERO, dec!(100));
        assert!(account.withdraw(dec!(100)).is_ok());
        assert_eq!(account.balance(), dec!(-100));
    }

    #[test]
    fn test_withdraw_past_limit_rejected() {
        let mut account = CheckingAccount::new("CA456", dec!(-100), dec!(200));
        let result = account.withdraw(dec!(200));
        assert_eq!(
            result,
            Err(Rejection::OverdraftExceeded {
                requested: dec!(200),
                available: dec!(100),
                limit: dec!(200),
            })
        );
        assert_eq!(account.balance(), dec!(-100));
    }

    #[test]
    fn test_withdraw_at_limit_rejects_anything() {
        let mut account = CheckingAccount::new("CA456", Decimal::ZERO, dec!(100));
        account.withdraw(dec!(100)).unwrap();
        assert!(account.withdraw(dec!(0.01)).is_err());
        assert_eq!(account.balance(), dec!(-100));
    }

    #[test]
    fn test_withdraw_invalid_amount_rejected() {
        let mut account = CheckingAccount::new("CA456", dec!(500), dec!(200));
        assert!(account.withdraw(Decimal::ZERO).is_err());
        assert!(account.withdraw(dec!(-10)).is_err());
        assert_eq!(account.balance(), dec!(500));
    }

    #[test]
    fn test_available_funds() {
        let account = CheckingAccount::new("CA456", dec!(500), dec!(200));
        assert_eq!(account.available_funds(), dec!(700));
    }

    #[test]
    fn test_default_limit() {
        let account = CheckingAccount::with_default_limit("CA001");
        assert_eq!(account.overdraft_limit(), dec!(100));
    }
}
