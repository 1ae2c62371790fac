//! Minibank CLI - Account demonstrations from command line
//!
//! Usage:
//! ```bash
//! minibank demo
//! minibank savings --account SA123 --balance 1000 --rate 0.02 deposit:500 withdraw:200 interest
//! minibank checking --account CA456 --balance 500 --limit 200 withdraw:600 withdraw:200
//! ```
//!
//! Accounts live only for the duration of one invocation; there is no
//! persistence.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

mod commands;

use commands::{demo, run};

/// Minibank - an in-memory bank account model demonstration
#[derive(Parser)]
#[command(name = "minibank")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the built-in demonstration (one savings + one checking account)
    Demo,

    /// Run operations against a fresh savings account
    Savings {
        /// Account number
        #[arg(long, default_value = "SA001")]
        account: String,
        /// Initial balance
        #[arg(long, default_value = "0")]
        balance: Decimal,
        /// Interest rate applied per accrual
        #[arg(long, default_value = "0.01")]
        rate: Decimal,
        /// Operations: deposit:<amount>, withdraw:<amount>, interest, balance
        #[arg(required = true)]
        ops: Vec<String>,
    },

    /// Run operations against a fresh checking account
    Checking {
        /// Account number
        #[arg(long, default_value = "CA001")]
        account: String,
        /// Initial balance
        #[arg(long, default_value = "0")]
        balance: Decimal,
        /// Overdraft limit
        #[arg(long, default_value = "100")]
        limit: Decimal,
        /// Operations: deposit:<amount>, withdraw:<amount>, balance
        #[arg(required = true)]
        ops: Vec<String>,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Demo => demo::run(),
        Commands::Savings {
            account,
            balance,
            rate,
            ops,
        } => run::savings(&account, balance, rate, &ops),
        Commands::Checking {
            account,
            balance,
            limit,
            ops,
        } => run::checking(&account, balance, limit, &ops),
    }
}
