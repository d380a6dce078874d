//! Command handler for the CLI.
//!
//! Resolves the token and clock from the parsed arguments, runs the
//! inspection, and renders the report.

pub mod inspect;
