//! TTL inspection: the decode-and-compare core.
//!
//! [`inspect`] reads a token's `exp` claim **without verifying the
//! signature** and reports whether it has expired and how long it
//! remains valid. The function is total: every fault becomes the
//! `error` field of the returned report, so arbitrary input can never
//! make it return `Err` or panic.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::core::clock::Clock;
use crate::core::decoder;
use crate::error::JwtTtlError;

/// Fixed message for structurally invalid tokens.
const INVALID_FORMAT_MSG: &str = "invalid JWT format";

/// What a token claims about its own time-to-live.
///
/// Produced once per [`inspect`] call and never mutated. Exactly one of
/// three shapes occurs:
///
/// - the token carries an `exp` claim: all four TTL fields are set;
/// - the token carries no `exp` claim (or `exp` is JSON null): every
///   field is `None`. That is a normal outcome, not a fault;
/// - the token could not be decoded: only `error` is set.
///
/// `time_remaining` is never negative; an expired token reports zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TtlReport {
    /// The raw `exp` claim, in Unix epoch seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_timestamp: Option<i64>,

    /// The expiration instant in UTC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,

    /// Whether the clock's "now" is strictly after the expiration instant.
    ///
    /// The boundary is strict: a token whose `exp` equals the current
    /// instant is not yet expired and has zero time remaining.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_expired: Option<bool>,

    /// Time left until expiry; zero once expired. Serialized as whole seconds.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_duration_secs",
        rename = "time_remaining_secs"
    )]
    pub time_remaining: Option<Duration>,

    /// Decode failure description; set only when the token could not be read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TtlReport {
    /// Report for a token that carries no `exp` claim.
    fn no_expiry() -> Self {
        TtlReport {
            expiration_timestamp: None,
            expires_at: None,
            is_expired: None,
            time_remaining: None,
            error: None,
        }
    }

    /// Report for a token that could not be decoded.
    ///
    /// Structural faults (segment count, base64url encoding, a payload
    /// that is not an object of claims) collapse to a fixed "invalid
    /// JWT format" message; everything else embeds the underlying
    /// fault description.
    fn from_fault(fault: &JwtTtlError) -> Self {
        let message = match fault {
            JwtTtlError::InvalidTokenFormat
            | JwtTtlError::Base64DecodeError { .. }
            | JwtTtlError::PayloadNotAnObject => INVALID_FORMAT_MSG.to_string(),
            other => format!("an unexpected error occurred: {other}"),
        };
        TtlReport {
            error: Some(message),
            ..TtlReport::no_expiry()
        }
    }
}

/// Inspect a JWT's time-to-live against the given clock.
///
/// The payload is decoded **without any signature verification**: the
/// claims are read as declared, trusting the caller about authenticity.
/// This answers "what does this token claim", not "is this token
/// valid"; do not use it as a validator.
///
/// Never fails: decode faults are reported through [`TtlReport::error`].
pub fn inspect(token: &str, clock: &dyn Clock) -> TtlReport {
    match try_inspect(token, clock) {
        Ok(report) => report,
        Err(fault) => TtlReport::from_fault(&fault),
    }
}

/// Fallible inner body of [`inspect`]; faults surface as typed errors.
fn try_inspect(token: &str, clock: &dyn Clock) -> Result<TtlReport, JwtTtlError> {
    let payload = decoder::decode_payload(token)?;

    let exp = match payload.get("exp") {
        None | Some(Value::Null) => return Ok(TtlReport::no_expiry()),
        Some(value) => value,
    };
    let timestamp = claim_as_epoch_seconds(exp)?;

    let expires_at = DateTime::from_timestamp(timestamp, 0)
        .ok_or(JwtTtlError::TimestampOutOfRange { timestamp })?;
    let now = clock.now();
    let is_expired = now > expires_at;

    let time_remaining = if is_expired {
        Duration::ZERO
    } else {
        (expires_at - now).to_std().unwrap_or(Duration::ZERO)
    };

    Ok(TtlReport {
        expiration_timestamp: Some(timestamp),
        expires_at: Some(expires_at),
        is_expired: Some(is_expired),
        time_remaining: Some(time_remaining),
        error: None,
    })
}

/// Read a claim value as Unix epoch seconds.
///
/// RFC 7519 NumericDate values may carry a fractional part; those are
/// floored to whole seconds. Non-numeric values are a fault.
fn claim_as_epoch_seconds(value: &Value) -> Result<i64, JwtTtlError> {
    if let Some(secs) = value.as_i64() {
        return Ok(secs);
    }
    if let Some(secs) = value.as_f64() {
        // `as` saturates; out-of-range values are caught by the
        // timestamp conversion downstream.
        return Ok(secs.floor() as i64);
    }
    Err(JwtTtlError::ExpClaimNotNumeric {
        found: json_type_name(value).to_string(),
    })
}

/// JSON type name for fault messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Serialize an optional duration as whole seconds.
fn serialize_duration_secs<S: Serializer>(
    duration: &Option<Duration>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match duration {
        Some(d) => serializer.serialize_u64(d.as_secs()),
        None => serializer.serialize_none(),
    }
}
