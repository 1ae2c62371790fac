//! # Minibank Core
//!
//! In-memory bank account model: a shared account core with deposit and
//! balance operations, plus two variants with their own withdrawal policy:
//! - `SavingsAccount`: no overdraft, accrues interest
//! - `CheckingAccount`: bounded overdraft allowance
//!
//! No persistence, no ledger, no internal synchronization. Each account
//! instance is independently owned by its caller.

pub mod account;
pub mod checking;
pub mod error;
pub mod receipt;
pub mod savings;

pub use account::{AccountCore, BankAccount};
pub use checking::{CheckingAccount, DEFAULT_OVERDRAFT_LIMIT};
pub use error::{OpResult, Rejection};
pub use receipt::{Operation, Receipt};
pub use savings::{SavingsAccount, DEFAULT_INTEREST_RATE};
