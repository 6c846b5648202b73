//! Command-line interface layer: argument parsing, running a scan and
//! reporting its outcome.

use std::process::ExitCode;

use anyhow::Result;

mod args;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, OutputFormat};
pub use exit_status::ExitStatus;
pub use run::{RunOutcome, run, run_in};

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let outcome = run(&args)?;
    report::print(&outcome, args.format);

    Ok(ExitStatus::from(&outcome).into())
}
