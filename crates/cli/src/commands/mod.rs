//! CLI subcommand handlers

use minibank_core::OpResult;

pub mod demo;
pub mod run;

/// Print the status line for an operation outcome.
///
/// Rejections are ordinary outcomes here, not process failures; both arms
/// print one line and the run continues.
pub(crate) fn report(outcome: OpResult) {
    match outcome {
        Ok(receipt) => println!("{}", receipt),
        Err(rejection) => println!("{}", rejection),
    }
}
