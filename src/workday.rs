//! Workday window generation
//!
//! Builds the start/end of a workday in the enterprise timezone and returns
//! both boundaries as UTC instants, ready for storage or comparison against
//! other UTC timestamps.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;

use crate::constants::{DEFAULT_WORKDAY_END_HOUR, DEFAULT_WORKDAY_START_HOUR};
use crate::convert::{self, ConvertError};
use crate::timezone;

#[derive(Debug, thiserror::Error)]
pub enum WorkdayError {
    #[error("Invalid workday hours: start {0}, end {1}")]
    InvalidHours(u32, u32),

    #[error(transparent)]
    Convert(#[from] ConvertError),
}

/// A workday's boundaries, in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkdayWindow {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Generates workday windows for an enterprise timezone.
pub struct WorkdayService {
    tz: Tz,
    start: NaiveTime,
    end: NaiveTime,
}

impl WorkdayService {
    /// Create a service for the given zone and enterprise-local hours.
    ///
    /// `tz_name` falls back to the ambient viewer timezone when `None`, and
    /// to UTC when the name is unrecognized (logged, not fatal — the same
    /// tolerance the ambient resolution has). Hours must be on-the-clock
    /// with the start strictly before the end.
    pub fn new(tz_name: Option<&str>, start_hour: u32, end_hour: u32) -> Result<Self, WorkdayError> {
        let tz = match tz_name {
            Some(name) => timezone::parse_timezone(name).unwrap_or_else(|_| {
                log::warn!("Unrecognized enterprise timezone '{}', falling back to UTC", name);
                Tz::UTC
            }),
            None => timezone::viewer_timezone(),
        };

        let (start, end) = match (
            NaiveTime::from_hms_opt(start_hour, 0, 0),
            NaiveTime::from_hms_opt(end_hour, 0, 0),
        ) {
            (Some(start), Some(end)) if start < end => (start, end),
            _ => return Err(WorkdayError::InvalidHours(start_hour, end_hour)),
        };

        Ok(Self { tz, start, end })
    }

    /// Service with the default 10:00–18:00 enterprise hours.
    pub fn with_default_hours(tz_name: Option<&str>) -> Result<Self, WorkdayError> {
        Self::new(tz_name, DEFAULT_WORKDAY_START_HOUR, DEFAULT_WORKDAY_END_HOUR)
    }

    /// The zone this service resolves wall-clock hours in.
    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// The workday window for a given enterprise-local date.
    pub fn window_for(&self, day: NaiveDate) -> Result<WorkdayWindow, WorkdayError> {
        let start = convert::resolve_local(day.and_time(self.start), &self.tz)?;
        let end = convert::resolve_local(day.and_time(self.end), &self.tz)?;
        Ok(WorkdayWindow {
            start_time: start.with_timezone(&Utc),
            end_time: end.with_timezone(&Utc),
        })
    }

    /// The workday window for today, as observed in the enterprise timezone.
    pub fn today(&self) -> Result<WorkdayWindow, WorkdayError> {
        let today = Utc::now().with_timezone(&self.tz).date_naive();
        self.window_for(today)
    }
}
