//! CLI argument definitions for jwt-ttl.
//!
//! Uses `clap` derive macros to define the command-line interface.
//!
//! # Security
//!
//! `Cli` implements a custom `Debug` that redacts the token to prevent
//! accidental leakage through debug formatting, error chains, or logging.

use std::fmt;

use clap::Parser;

/// Report a JWT's time-to-live: whether it has expired, when it expires,
/// and how long it remains valid.
///
/// The token's signature is NOT verified: this tool answers "what does
/// this token claim", not "is this token valid".
#[derive(Parser)]
#[command(name = "jwt-ttl")]
#[command(version, about)]
pub struct Cli {
    /// The JWT token to inspect. If omitted, reads from stdin.
    pub token: Option<String>,

    /// Read the token from the specified environment variable.
    #[arg(long, value_name = "VAR_NAME")]
    pub token_env: Option<String>,

    /// Evaluate expiry at a simulated current time instead of now.
    ///
    /// Accepts relative expressions like "+7d", "-1h", "+30m" or
    /// absolute timestamps in ISO 8601 or Unix epoch format.
    #[arg(long, value_name = "EXPR", allow_hyphen_values = true)]
    pub at: Option<String>,

    /// Output the report as raw JSON (machine-readable).
    #[arg(long)]
    pub json: bool,
}

/// Custom `Debug` that redacts the token field to prevent accidental leakage.
impl fmt::Debug for Cli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cli")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("token_env", &self.token_env)
            .field("at", &self.at)
            .field("json", &self.json)
            .finish()
    }
}
