//! jwt-ttl: report a JWT's time-to-live without verifying its signature.
//!
//! Entry point for the application. Parses CLI arguments and delegates
//! to the inspect command handler.

#![forbid(unsafe_code)]

mod cli;
mod commands;
mod core;
mod display;
mod error;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use cli::Cli;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Parse CLI arguments and run the inspection.
///
/// Returns `ExitCode` so the caller can exit without `process::exit`,
/// allowing all destructors to run.
fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    commands::inspect::execute(&cli)
}
