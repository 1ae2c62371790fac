//! Scenario runner: apply a list of operation tokens to a fresh account.
//!
//! Tokens are `deposit:<amount>`, `withdraw:<amount>`, `interest` (savings
//! only), and `balance`. Malformed tokens are CLI errors; rejected
//! operations are reported and the run continues.

use anyhow::{bail, Context, Result};
use minibank_core::{BankAccount, CheckingAccount, SavingsAccount};
use rust_decimal::Decimal;
use tracing::debug;

use super::report;

/// A single operation token from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Deposit(Decimal),
    Withdraw(Decimal),
    Interest,
    Balance,
}

impl Op {
    /// Parse one command-line token into an operation.
    pub fn parse(token: &str) -> Result<Self> {
        match token.split_once(':') {
            None => match token {
                "interest" => Ok(Op::Interest),
                "balance" => Ok(Op::Balance),
                other => bail!("unknown operation: {}", other),
            },
            Some((op, raw_amount)) => {
                let amount: Decimal = raw_amount
                    .parse()
                    .with_context(|| format!("invalid amount in '{}'", token))?;
                match op {
                    "deposit" => Ok(Op::Deposit(amount)),
                    "withdraw" => Ok(Op::Withdraw(amount)),
                    other => bail!("unknown operation: {}", other),
                }
            }
        }
    }
}

fn parse_ops(tokens: &[String]) -> Result<Vec<Op>> {
    let ops = tokens
        .iter()
        .map(|token| Op::parse(token))
        .collect::<Result<Vec<_>>>()?;
    debug!(count = ops.len(), "parsed operations");
    Ok(ops)
}

/// Run operations against a fresh savings account.
pub fn savings(account: &str, balance: Decimal, rate: Decimal, tokens: &[String]) -> Result<()> {
    let ops = parse_ops(tokens)?;
    let mut acct = SavingsAccount::new(account, balance, rate);
    println!("{}", acct);

    for op in ops {
        match op {
            Op::Deposit(amount) => report(acct.deposit(amount)),
            Op::Withdraw(amount) => report(acct.withdraw(amount)),
            Op::Interest => println!("{}", acct.accrue_interest()),
            Op::Balance => println!("Balance: ${:.2}", acct.balance()),
        }
    }

    println!("Final balance: ${:.2}", acct.balance());
    Ok(())
}

/// Run operations against a fresh checking account.
pub fn checking(account: &str, balance: Decimal, limit: Decimal, tokens: &[String]) -> Result<()> {
    let ops = parse_ops(tokens)?;
    let mut acct = CheckingAccount::new(account, balance, limit);
    println!("{}", acct);

    for op in ops {
        match op {
            Op::Deposit(amount) => report(acct.deposit(amount)),
            Op::Withdraw(amount) => report(acct.withdraw(amount)),
            Op::Interest => bail!("interest is only available on savings accounts"),
            Op::Balance => println!("Balance: ${:.2}", acct.balance()),
        }
    }

    println!("Final balance: ${:.2}", acct.balance());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_deposit() {
        assert_eq!(Op::parse("deposit:500").unwrap(), Op::Deposit(dec!(500)));
    }

    #[test]
    fn test_parse_withdraw_fractional() {
        assert_eq!(
            Op::parse("withdraw:0.01").unwrap(),
            Op::Withdraw(dec!(0.01))
        );
    }

    #[test]
    fn test_parse_bare_ops() {
        assert_eq!(Op::parse("interest").unwrap(), Op::Interest);
        assert_eq!(Op::parse("balance").unwrap(), Op::Balance);
    }

    #[test]
    fn test_parse_unknown_op() {
        assert!(Op::parse("transfer:10").is_err());
        assert!(Op::parse("freeze").is_err());
    }

    #[test]
    fn test_parse_bad_amount() {
        assert!(Op::parse("deposit:ten").is_err());
        assert!(Op::parse("deposit:").is_err());
    }
}
