//! JWT payload decoding.
//!
//! Splits a compact-serialization token into its three segments,
//! base64url-decodes the header and payload, and parses the payload as
//! a JSON value. The signature segment is left untouched: this tool
//! answers "what does this token claim", never "is this token valid",
//! so no verification path is ever taken.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::Value;

use crate::error::{JwtTtlError, Segment};

/// Decode the claims payload of a compact-serialization JWT.
///
/// The token must have exactly three `.`-separated segments. The header
/// and payload segments must be valid base64url; only the payload is
/// parsed as JSON, since the TTL report reads claims alone. The payload
/// must be a JSON object, as standard JWT parsers require. The
/// signature is deliberately ignored; see the module docs.
///
/// # Errors
///
/// [`JwtTtlError::InvalidTokenFormat`] for a wrong segment count,
/// [`JwtTtlError::Base64DecodeError`] for an invalid segment encoding,
/// [`JwtTtlError::JsonParseError`] when the decoded payload bytes are
/// not valid JSON, and [`JwtTtlError::PayloadNotAnObject`] when they
/// parse to a non-object value.
pub fn decode_payload(token: &str) -> Result<Value, JwtTtlError> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(JwtTtlError::InvalidTokenFormat);
    }

    // Checking the header's encoding keeps "structurally valid" meaning
    // the same thing it does for standard JWT parsers, even though its
    // content is irrelevant to the TTL report.
    decode_segment(parts[0], Segment::Header)?;
    let payload = decode_segment(parts[1], Segment::Payload)?;

    let payload: Value =
        serde_json::from_slice(&payload).map_err(|e| JwtTtlError::JsonParseError {
            segment: Segment::Payload,
            reason: e.to_string(),
        })?;

    if !payload.is_object() {
        return Err(JwtTtlError::PayloadNotAnObject);
    }
    Ok(payload)
}

/// Base64url-decode one segment, tagging failures with its name.
fn decode_segment(encoded: &str, segment: Segment) -> Result<Vec<u8>, JwtTtlError> {
    URL_SAFE_NO_PAD
        .decode(encoded)
        .map_err(|_| JwtTtlError::Base64DecodeError { segment })
}
