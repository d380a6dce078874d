//! Domain error types for jwt-ttl.
//!
//! All business-logic errors are defined here using `thiserror`.
//! Decoding faults never reach the caller of `inspect` directly; they
//! are folded into the `error` field of the TTL report. The remaining
//! variants cover CLI input plumbing and are converted to user-friendly
//! messages at the CLI boundary.

use thiserror::Error;

/// Errors that can occur while inspecting a token or resolving CLI input.
#[derive(Debug, Error)]
pub enum JwtTtlError {
    /// The provided token does not have the expected three-part structure.
    #[error("invalid token format: expected 'header.payload.signature' structure")]
    InvalidTokenFormat,

    /// Failed to decode a base64url-encoded token segment.
    #[error("failed to decode {segment}: invalid base64url encoding")]
    Base64DecodeError {
        /// Which segment failed to decode.
        segment: Segment,
    },

    /// A segment decoded cleanly but its content is not valid JSON.
    #[error("failed to parse {segment} as JSON: {reason}")]
    JsonParseError {
        /// Which segment failed to parse.
        segment: Segment,
        /// Description of the parsing failure.
        reason: String,
    },

    /// The payload parsed as JSON but is not an object of claims.
    #[error("payload is not a JSON object")]
    PayloadNotAnObject,

    /// The `exp` claim is present but is not a JSON number.
    #[error("'exp' claim is not a numeric timestamp (found {found})")]
    ExpClaimNotNumeric {
        /// JSON type of the value that was found.
        found: String,
    },

    /// The `exp` claim is numeric but outside the representable date range.
    #[error("'exp' claim {timestamp} is outside the representable date range")]
    TimestampOutOfRange {
        /// The out-of-range epoch value.
        timestamp: i64,
    },

    /// Failed to parse a time expression passed via `--at`.
    #[error("invalid time expression '{expression}': {reason}")]
    InvalidTimeExpression {
        /// The time expression that failed to parse.
        expression: String,
        /// Description of the parsing failure.
        reason: String,
    },

    /// No token was provided via any input method.
    #[error("no token provided: pass a token as an argument, via --token-env, or through stdin")]
    NoTokenProvided,

    /// The environment variable name is empty or contains '='.
    #[error("invalid environment variable name '{name}'")]
    InvalidEnvVarName {
        /// The rejected variable name.
        name: String,
    },

    /// The specified environment variable is not set.
    #[error("environment variable '{name}' is not set")]
    EnvVarNotFound {
        /// Name of the missing environment variable.
        name: String,
    },
}

/// The token segment a decoding fault refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Header,
    Payload,
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Segment::Header => f.write_str("header"),
            Segment::Payload => f.write_str("payload"),
        }
    }
}
