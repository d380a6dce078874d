//! Core business logic for TTL inspection.
//!
//! This module contains the domain logic separated from CLI concerns.
//! All types and functions here are testable without the CLI layer.

pub mod clock;
pub mod decoder;
pub mod inspector;
