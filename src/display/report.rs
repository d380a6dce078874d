//! Human-readable rendering of a TTL report.
//!
//! Status color coding:
//! - Expired tokens: red "EXPIRED"
//! - Live tokens: green "VALID"
//! - Tokens without an `exp` claim: yellow informational note
//!
//! Colors are handled by the `colored` crate, which disables itself
//! automatically when stdout is not a terminal.

use std::time::Duration;

use colored::Colorize;

use crate::core::inspector::TtlReport;

/// Print a TTL report for human consumption.
///
/// Report output goes to stdout; a decode failure is printed to stderr
/// so that piped consumers never see partial reports.
pub fn print_report(report: &TtlReport) {
    if let Some(error) = &report.error {
        eprintln!("{} {error}", "Error:".red().bold());
        return;
    }

    println!("JWT TTL Information:");

    let Some(timestamp) = report.expiration_timestamp else {
        println!("  {}", "'exp' claim not found in the JWT.".yellow());
        return;
    };

    println!("  Expiration (Unix):  {timestamp}");
    if let Some(expires_at) = report.expires_at {
        println!("  Expires at (UTC):   {expires_at}");
    }

    match report.is_expired {
        Some(true) => println!("  Status:             {}", "EXPIRED".red().bold()),
        Some(false) => println!("  Status:             {}", "VALID".green().bold()),
        None => {}
    }

    if let Some(remaining) = report.time_remaining {
        println!("  Time remaining:     {}", format_duration(remaining));
    }
}

/// Format a duration as a compact "1w 2d 3h 4m 5s" string.
///
/// Zero-valued leading units are skipped; a zero duration renders as "0s".
pub fn format_duration(duration: Duration) -> String {
    const UNITS: [(&str, u64); 4] = [("w", 604_800), ("d", 86_400), ("h", 3_600), ("m", 60)];

    let mut secs = duration.as_secs();
    let mut parts = Vec::new();

    for (suffix, unit_secs) in UNITS {
        if secs >= unit_secs {
            parts.push(format!("{}{suffix}", secs / unit_secs));
            secs %= unit_secs;
        }
    }
    if secs > 0 || parts.is_empty() {
        parts.push(format!("{secs}s"));
    }

    parts.join(" ")
}
