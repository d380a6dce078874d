//! Handler for the default (and only) command: inspect a token's TTL.
//!
//! Resolves the token from a CLI argument, environment variable, or
//! stdin, builds the clock (live or simulated via `--at`), runs the
//! core inspection, and renders the report as human-readable text or
//! JSON.

use std::io::Read;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Utc;

use crate::cli::Cli;
use crate::core::clock::{Clock, FixedClock, SystemClock, parse_time_expression};
use crate::core::inspector::{TtlReport, inspect};
use crate::display;
use crate::error::JwtTtlError;

/// Execute the inspection with the given arguments.
///
/// Exit codes: success for a live token or one without an `exp` claim;
/// failure when the token is expired or could not be decoded, so the
/// binary composes in shell conditionals.
pub fn execute(args: &Cli) -> Result<ExitCode> {
    let token = resolve_token(args)?;
    let clock = resolve_clock(args)?;

    let report = inspect(&token, clock.as_ref());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display::print_report(&report);
    }

    Ok(exit_code(&report))
}

/// Resolve the token from argument, environment variable, or stdin.
fn resolve_token(args: &Cli) -> Result<String> {
    if let Some(token) = &args.token {
        let token = token.trim();
        if token.is_empty() {
            return Err(JwtTtlError::NoTokenProvided.into());
        }
        return Ok(token.to_string());
    }

    if let Some(name) = &args.token_env {
        if name.is_empty() || name.contains('=') {
            return Err(JwtTtlError::InvalidEnvVarName { name: name.clone() }.into());
        }
        let token = std::env::var(name).map_err(|_| JwtTtlError::EnvVarNotFound {
            name: name.clone(),
        })?;
        return Ok(token.trim().to_string());
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read token from stdin")?;
    let token = buffer.trim();
    if token.is_empty() {
        return Err(JwtTtlError::NoTokenProvided.into());
    }
    Ok(token.to_string())
}

/// Build the clock: live system time, or a fixed instant from `--at`.
fn resolve_clock(args: &Cli) -> Result<Box<dyn Clock>> {
    match &args.at {
        Some(expression) => {
            let instant = parse_time_expression(expression, Utc::now())?;
            Ok(Box::new(FixedClock(instant)))
        }
        None => Ok(Box::new(SystemClock)),
    }
}

/// Map a report onto the process exit code.
fn exit_code(report: &TtlReport) -> ExitCode {
    if indicates_failure(report) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// A report fails the invocation when the token is expired or unreadable.
fn indicates_failure(report: &TtlReport) -> bool {
    report.error.is_some() || report.is_expired == Some(true)
}
