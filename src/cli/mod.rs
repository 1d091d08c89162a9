//! Command-line entry point.
//!
//! Wires the pieces together: load the configuration, print the banner,
//! run the check pipeline, render the report. Diagnostics never affect
//! the exit status; only internal failures (invalid config file,
//! unreadable folders) propagate as errors.

mod args;
mod exit_status;

pub use args::Arguments;
pub use exit_status::ExitStatus;

use std::env;

use anyhow::Result;

use crate::config::load_config;
use crate::report::{print_banner, report};
use crate::rules::run_checks;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let current_dir = env::current_dir()?;
    let config = load_config(&current_dir)?.config;

    print_banner(&args.path);
    let issues = run_checks(&args.path, &config)?;
    report(&issues);

    Ok(ExitStatus::Success)
}
