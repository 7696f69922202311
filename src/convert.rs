//! Conversion between UTC timestamps and `datetime-local` form values
//!
//! This module provides the two halves of the populate/submit cycle for a
//! `datetime-local` form control: [`utc_to_local`] turns a stored UTC
//! timestamp into the minute-precision, designator-less string the control
//! expects, and [`local_to_utc`] turns the string the control hands back into
//! a fully qualified UTC timestamp.
//!
//! Both functions take the timezone explicitly rather than reading ambient
//! host configuration, so they are pure and testable with any
//! [`chrono::TimeZone`] implementation — a [`chrono::FixedOffset`] or a named
//! [`chrono_tz::Tz`]. Callers that want the ambient behavior compose with
//! [`crate::timezone::viewer_timezone`].

use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone, Timelike, Utc};

use crate::constants::{
    LOCAL_INPUT_FORMAT, LOCAL_INPUT_SECONDS_FORMAT, SPACE_SEPARATED_FORMAT, UTC_OUTPUT_FORMAT,
};

/// Errors raised while converting timestamp strings.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Unparseable timestamp: '{0}'")]
    UnparseableTimestamp(String),

    #[error("Local time does not exist in this timezone (DST gap): '{0}'")]
    NonexistentLocalTime(String),
}

/// Convert a UTC timestamp string into a `datetime-local` form value.
///
/// Empty input is the defined no-value case and yields `Ok(None)`. Any other
/// input must parse as an absolute instant (RFC3339, e.g.
/// `2024-03-15T13:45:00.000Z`, or the space-separated variant with an
/// explicit offset); the instant is converted into `tz` and formatted as
/// `YYYY-MM-DDTHH:MM` — 16 characters, no timezone designator, seconds and
/// subseconds discarded.
///
/// The output is a wall-clock string, not an instant: feeding it back into
/// this function is an error, not a no-op. Use [`local_to_utc`] to go the
/// other way.
pub fn utc_to_local<Z: TimeZone>(input: &str, tz: &Z) -> Result<Option<String>, ConvertError> {
    if input.is_empty() {
        return Ok(None);
    }

    let instant = parse_instant(input.trim())?;
    let local = instant.with_timezone(tz).naive_local();
    Ok(Some(local.format(LOCAL_INPUT_FORMAT).to_string()))
}

/// Convert a `datetime-local` form value into a UTC timestamp string.
///
/// Empty input yields `Ok(None)`. Any other input must be a designator-less
/// wall-clock string (`YYYY-MM-DDTHH:MM`, a trailing seconds field is
/// tolerated and dropped). The wall-clock time is resolved in `tz`,
/// converted to UTC and serialized with millisecond precision and the `Z`
/// designator, so `local_to_utc(utc_to_local(x, tz)?, tz)` recovers `x`
/// truncated to minutes.
///
/// A wall-clock time that falls in a DST gap of `tz` does not name an
/// instant and is rejected with [`ConvertError::NonexistentLocalTime`]. A
/// time that occurs twice during a DST fold resolves to the earlier instant.
pub fn local_to_utc<Z: TimeZone>(input: &str, tz: &Z) -> Result<Option<String>, ConvertError> {
    if input.is_empty() {
        return Ok(None);
    }

    let trimmed = input.trim();
    let naive = NaiveDateTime::parse_from_str(trimmed, LOCAL_INPUT_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, LOCAL_INPUT_SECONDS_FORMAT))
        .map_err(|_| ConvertError::UnparseableTimestamp(input.to_string()))?;

    // Minute precision: a tolerated seconds field is not carried through.
    let naive = naive
        .with_second(0)
        .and_then(|n| n.with_nanosecond(0))
        .unwrap_or(naive);

    let resolved = resolve_local(naive, tz)?;
    let utc = resolved.with_timezone(&Utc);
    Ok(Some(utc.format(UTC_OUTPUT_FORMAT).to_string()))
}

/// Parse an absolute instant: RFC3339 first, then the space-separated
/// variant with an explicit offset.
pub(crate) fn parse_instant(input: &str) -> Result<DateTime<Utc>, ConvertError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(input, SPACE_SEPARATED_FORMAT) {
        return Ok(dt.with_timezone(&Utc));
    }
    Err(ConvertError::UnparseableTimestamp(input.to_string()))
}

/// Resolve a naive wall-clock time in `tz`, taking the earlier instant of a
/// DST fold and rejecting times that fall in a DST gap.
pub(crate) fn resolve_local<Z: TimeZone>(
    naive: NaiveDateTime,
    tz: &Z,
) -> Result<DateTime<Z>, ConvertError> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(earlier, _later) => Ok(earlier),
        LocalResult::None => Err(ConvertError::NonexistentLocalTime(
            naive.format(LOCAL_INPUT_FORMAT).to_string(),
        )),
    }
}
