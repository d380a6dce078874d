//! Clock injection and time expressions.
//!
//! The inspector never reads ambient time directly: callers hand it a
//! [`Clock`], so tests (and the CLI's `--at` flag) can evaluate expiry
//! at a frozen instant. Time expressions accept relative offsets like
//! "+7d" or "-1h" as well as absolute ISO 8601 and Unix epoch values.

use chrono::{DateTime, Duration, Utc};

use crate::error::JwtTtlError;

/// A source of the current UTC instant.
pub trait Clock {
    /// The instant "now" according to this clock.
    fn now(&self) -> DateTime<Utc>;
}

/// The live system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a fixed instant, for tests and `--at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Parse a time expression into an absolute UTC instant.
///
/// Supported formats:
/// - Relative to `base`: `+7d`, `-1h`, `+30m`, `+45s`, `-2w`
/// - Absolute ISO 8601: `2024-01-15T14:30:00Z`
/// - Absolute Unix epoch seconds: `1705312200` (may be negative for
///   instants before 1970)
///
/// # Errors
///
/// Returns [`JwtTtlError::InvalidTimeExpression`] when the expression
/// matches none of the supported formats or the result is out of range.
pub fn parse_time_expression(
    expression: &str,
    base: DateTime<Utc>,
) -> Result<DateTime<Utc>, JwtTtlError> {
    let expr = expression.trim();
    if expr.is_empty() {
        return Err(invalid(expression, "empty expression"));
    }

    if let Some(rest) = expr.strip_prefix('+') {
        let offset = parse_offset(expression, rest)?;
        return base
            .checked_add_signed(offset)
            .ok_or_else(|| invalid(expression, "offset is out of range"));
    }
    if expr.starts_with('-') && !expr.chars().all(|c| c.is_ascii_digit() || c == '-') {
        // A leading '-' could also start a negative epoch; offsets always
        // end in a unit letter, so digits-only strings fall through to
        // the epoch branch below.
        let offset = parse_offset(expression, &expr[1..])?;
        return base
            .checked_sub_signed(offset)
            .ok_or_else(|| invalid(expression, "offset is out of range"));
    }

    // Epoch seconds, optionally negative for instants before 1970.
    let digits = expr.strip_prefix('-').unwrap_or(expr);
    if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
        let secs: i64 = expr
            .parse()
            .map_err(|_| invalid(expression, "epoch value out of range"))?;
        return DateTime::from_timestamp(secs, 0)
            .ok_or_else(|| invalid(expression, "epoch value out of range"));
    }

    DateTime::parse_from_rfc3339(expr)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            invalid(
                expression,
                "expected a relative offset (+7d, -1h), ISO 8601 timestamp, or Unix epoch",
            )
        })
}

/// Parse the `<number><unit>` part of a relative offset.
fn parse_offset(expression: &str, body: &str) -> Result<Duration, JwtTtlError> {
    let unit = body
        .chars()
        .last()
        .ok_or_else(|| invalid(expression, "missing offset amount"))?;
    let amount: i64 = body[..body.len() - unit.len_utf8()]
        .parse()
        .map_err(|_| invalid(expression, "offset amount is not a whole number"))?;

    let duration = match unit {
        's' => Duration::try_seconds(amount),
        'm' => Duration::try_minutes(amount),
        'h' => Duration::try_hours(amount),
        'd' => Duration::try_days(amount),
        'w' => Duration::try_weeks(amount),
        other => return Err(invalid(expression, &format!("unknown unit '{other}'"))),
    };
    duration.ok_or_else(|| invalid(expression, "offset is out of range"))
}

fn invalid(expression: &str, reason: &str) -> JwtTtlError {
    JwtTtlError::InvalidTimeExpression {
        expression: expression.to_string(),
        reason: reason.to_string(),
    }
}
