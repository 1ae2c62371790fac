//! End-to-end account scenarios exercised through the `BankAccount` trait.

use minibank_core::{BankAccount, CheckingAccount, SavingsAccount};
use rust_decimal_macros::dec;

#[test]
fn savings_lifecycle() {
    let mut account = SavingsAccount::new("SA123", dec!(1000), dec!(0.02));

    account.deposit(dec!(500)).unwrap();
    assert_eq!(account.balance(), dec!(1500));

    account.withdraw(dec!(200)).unwrap();
    assert_eq!(account.balance(), dec!(1300));

    let receipt = account.accrue_interest();
    assert_eq!(receipt.amount, dec!(26));
    assert_eq!(account.balance(), dec!(1326.00));
}

#[test]
fn checking_overdraft_boundaries() {
    let mut account = CheckingAccount::new("CA456", dec!(500), dec!(200));

    // 500 + 200 >= 600, admitted into overdraft
    account.withdraw(dec!(600)).unwrap();
    assert_eq!(account.balance(), dec!(-100));

    // -100 + 200 = 100 < 200, rejected with no mutation
    assert!(account.withdraw(dec!(200)).is_err());
    assert_eq!(account.balance(), dec!(-100));
}

#[test]
fn empty_savings_rejects_smallest_withdrawal() {
    let mut account = SavingsAccount::new("SA000", dec!(0), dec!(0.01));
    assert!(account.withdraw(dec!(0.01)).is_err());
    assert_eq!(account.balance(), dec!(0));
}

#[test]
fn checking_drains_to_exact_limit_then_rejects() {
    let mut account = CheckingAccount::new("CA000", dec!(0), dec!(100));
    account.withdraw(dec!(100)).unwrap();
    assert_eq!(account.balance(), dec!(-100));
    assert!(account.withdraw(dec!(0.01)).is_err());
    assert_eq!(account.balance(), dec!(-100));
}

#[test]
fn polymorphic_deposits() {
    let mut accounts: Vec<Box<dyn BankAccount>> = vec![
        Box::new(SavingsAccount::with_default_rate("SA001")),
        Box::new(CheckingAccount::with_default_limit("CA001")),
    ];

    for account in accounts.iter_mut() {
        account.deposit(dec!(50)).unwrap();
        assert!(account.deposit(dec!(-1)).is_err());
        assert_eq!(account.balance(), dec!(50));
    }
}

#[test]
fn rejection_messages_are_distinguishable() {
    let mut savings = SavingsAccount::new("SA123", dec!(10), dec!(0.01));
    let mut checking = CheckingAccount::new("CA456", dec!(10), dec!(5));

    let ok = savings.deposit(dec!(1)).unwrap().to_string();
    let insufficient = savings.withdraw(dec!(100)).unwrap_err().to_string();
    let overdraft = checking.withdraw(dec!(100)).unwrap_err().to_string();

    assert!(ok.starts_with("Deposited"));
    assert!(insufficient.starts_with("Insufficient funds"));
    assert!(overdraft.contains("exceeds overdraft limit"));
}
