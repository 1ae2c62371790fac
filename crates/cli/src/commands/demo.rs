//! Built-in demonstration: one of each account variant through the full
//! operation set, like a short teller session.

use anyhow::Result;
use minibank_core::{BankAccount, CheckingAccount, SavingsAccount};
use rust_decimal_macros::dec;

use super::report;

pub fn run() -> Result<()> {
    let mut savings = SavingsAccount::new("SA123", dec!(1000), dec!(0.02));
    println!("Savings Account Balance: ${:.2}", savings.balance());
    report(savings.deposit(dec!(500)));
    report(savings.withdraw(dec!(200)));
    println!("{}", savings.accrue_interest());
    println!("Savings Account Balance: ${:.2}", savings.balance());
    println!();

    let mut checking = CheckingAccount::new("CA456", dec!(500), dec!(200));
    println!("Checking Account Balance: ${:.2}", checking.balance());
    // Into overdraft: 500 + 200 covers 600
    report(checking.withdraw(dec!(600)));
    println!("Checking Account Balance: ${:.2}", checking.balance());
    // Exceeds what is left of the overdraft allowance
    report(checking.withdraw(dec!(200)));
    println!("Checking Account Balance: ${:.2}", checking.balance());

    Ok(())
}
