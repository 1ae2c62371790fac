//! # Savings Account
//!
//! Savings accounts never go below zero: a withdrawal is admitted only when
//! the full amount is covered by the current balance. They also accrue
//! interest on demand; each call compounds on the current balance.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::account::{AccountCore, BankAccount};
use crate::error::{OpResult, Rejection};
use crate::receipt::{Operation, Receipt};

/// Default interest rate (1% per accrual)
pub const DEFAULT_INTEREST_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 2); // 0.01

/// A savings account: no overdraft, accrues interest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsAccount {
    core: AccountCore,
    /// Fractional rate applied per accrual, fixed at construction.
    /// Negative rates are not validated away; callers wanting a strictly
    /// non-negative rate must check before constructing.
    interest_rate: Decimal,
}

impl SavingsAccount {
    /// Open a savings account with an initial balance and interest rate.
    pub fn new(account_number: &str, initial_balance: Decimal, interest_rate: Decimal) -> Self {
        Self {
            core: AccountCore::new(account_number, initial_balance),
            interest_rate,
        }
    }

    /// Open an empty savings account at the default rate.
    pub fn with_default_rate(account_number: &str) -> Self {
        Self {
            core: AccountCore::empty(account_number),
            interest_rate: DEFAULT_INTEREST_RATE,
        }
    }

    /// The fixed interest rate
    pub fn interest_rate(&self) -> Decimal {
        self.interest_rate
    }

    /// Accrue one round of interest: `balance * interest_rate` is added to
    /// the balance. Always accepted; the receipt carries the interest amount.
    ///
    /// There is no time-based gating. Calling twice compounds twice; the
    /// caller controls cadence.
    pub fn accrue_interest(&mut self) -> Receipt {
        let interest = self.core.balance() * self.interest_rate;
        self.core.set_balance(self.core.balance() + interest);
        debug!(
            account = %self.core.account_number(),
            %interest,
            balance = %self.core.balance(),
            "interest accrued"
        );
        Receipt::new(
            Operation::Interest,
            self.core.account_number(),
            interest,
            self.core.balance(),
        )
    }
}

impl BankAccount for SavingsAccount {
    fn core(&self) -> &AccountCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AccountCore {
        &mut self.core
    }

    /// Admitted iff `amount > 0` and the balance covers it. `amount ==
    /// balance` is admitted, so the balance may reach exactly zero.
    fn withdraw(&mut self, amount: Decimal) -> OpResult {
        if amount <= Decimal::ZERO {
            return Err(Rejection::InvalidAmount(amount));
        }
        let balance = self.core.balance();
        if balance < amount {
            return Err(Rejection::InsufficientFunds {
                requested: amount,
                available: balance,
            });
        }
        self.core.set_balance(balance - amount);
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

impl fmt::Display for SavingsAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Savings {} (rate: {})", self.core, self.interest_rate)
    }
}
