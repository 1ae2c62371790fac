//! # Account Module
//!
//! `AccountCore` holds the state every account variant shares: an account
//! number and a balance. `BankAccount` is the capability trait over that
//! state: deposit and balance reads are provided once, while `withdraw` is
//! left to each variant's admission rule.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::error::{OpResult, Rejection};
use crate::receipt::{Operation, Receipt};

/// Shared state of a bank account.
///
/// The balance is signed; sign restrictions are the business of each
/// variant's withdrawal policy, not of the core. Account numbers are opaque
/// and uniqueness is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountCore {
    /// Account number (SA123, CA456, ...), immutable after construction
    account_number: String,
    /// Current balance, mutated only through operations
    balance: Decimal,
    /// Time the account was opened
    opened_at: DateTime<Utc>,
}

impl AccountCore {
    /// Create a new account core with an initial balance.
    pub fn new(account_number: &str, initial_balance: Decimal) -> Self {
        Self {
            account_number: account_number.to_string(),
            balance: initial_balance,
            opened_at: Utc::now(),
        }
    }

    /// Create a new account core with a zero balance.
    pub fn empty(account_number: &str) -> Self {
        Self::new(account_number, Decimal::ZERO)
    }

    /// The account number
    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    /// Current balance. Pure read, never mutates.
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// When the account was opened
    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Set the balance directly.
    ///
    /// Reserved for the account variants in this crate; external callers go
    /// through deposit/withdraw.
    pub(crate) fn set_balance(&mut self, balance: Decimal) {
        self.balance = balance;
    }

    /// Deposit an amount. Accepted iff `amount > 0`; anything else is an
    /// `InvalidAmount` rejection with no mutation.
    pub(crate) fn deposit(&mut self, amount: Decimal) -> OpResult {
        if amount <= Decimal::ZERO {
            return Err(Rejection::InvalidAmount(amount));
        }
        self.balance += amount;
        debug!(
            account = %self.account_number,
            %amount,
            balance = %self.balance,
            "deposit accepted"
        );
        Ok(Receipt::new(
            Operation::Deposit,
            &self.account_number,
            amount,
            self.balance,
        ))
    }
}

impl fmt::Display for AccountCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Account {} (balance: ${:.2})", self.account_number, self.balance)
    }
}

/// Capability trait implemented by every account variant.
///
/// Deposit and the balance accessors are shared behavior provided over the
/// variant's `AccountCore`; `withdraw` is the per-variant admission rule.
pub trait BankAccount {
    /// Shared core state of this account
    fn core(&self) -> &AccountCore;

    /// Mutable core state; used by the provided operations
    fn core_mut(&mut self) -> &mut AccountCore;

    /// Withdraw an amount under this variant's admission rule.
    ///
    /// A rejection leaves the balance untouched.
    fn withdraw(&mut self, amount: Decimal) -> OpResult;

    /// The account number
    fn account_number(&self) -> &str {
        self.core().account_number()
    }

    /// Current balance
    fn balance(&self) -> Decimal {
        self.core().balance()
    }

    /// Deposit an amount; accepted iff `amount > 0`.
    fn deposit(&mut self, amount: Decimal) -> OpResult {
        self.core_mut().deposit(amount)
    }
}
