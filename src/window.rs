//! Schedule-window normalization
//!
//! Schedule item boundaries arrive in two shapes: fully qualified instants
//! (RFC3339, usually with a `Z` designator) and designator-less wall-clock
//! strings that must be interpreted in the enterprise timezone. Both are
//! normalized here into UTC before any comparison or storage.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

use crate::constants::{LOCAL_INPUT_FORMAT, LOCAL_INPUT_SECONDS_FORMAT};
use crate::convert::{self, ConvertError};

#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("Window end {end} is not after start {start}")]
    EndNotAfterStart {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error(transparent)]
    Convert(#[from] ConvertError),
}

/// Parse a timestamp that may or may not carry a timezone designator.
///
/// Designated strings are taken at face value; designator-less ones are
/// resolved as wall-clock time in `tz`. Either way the result is UTC.
pub fn parse_instant_or_local<Z: TimeZone>(input: &str, tz: &Z) -> Result<DateTime<Utc>, ConvertError> {
    if let Ok(instant) = convert::parse_instant(input) {
        return Ok(instant);
    }

    let naive = NaiveDateTime::parse_from_str(input, LOCAL_INPUT_SECONDS_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(input, LOCAL_INPUT_FORMAT))
        .map_err(|_| ConvertError::UnparseableTimestamp(input.to_string()))?;

    Ok(convert::resolve_local(naive, tz)?.with_timezone(&Utc))
}

/// A normalized schedule window: both boundaries in UTC, end after start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Parse and validate a window from its boundary strings.
    pub fn parse<Z: TimeZone>(start_str: &str, end_str: &str, tz: &Z) -> Result<Self, WindowError> {
        let start = parse_instant_or_local(start_str, tz)?;
        let end = parse_instant_or_local(end_str, tz)?;

        if end <= start {
            return Err(WindowError::EndNotAfterStart { start, end });
        }

        Ok(Self { start, end })
    }

    /// Window length in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}
