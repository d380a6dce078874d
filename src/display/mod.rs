//! Terminal display and formatting utilities.
//!
//! Renders a TTL report as human-readable text with color-coded
//! expiry status.

pub mod report;

pub use report::print_report;
