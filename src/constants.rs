//! Constants used throughout the crate
//!
//! This module centralizes the wire formats and default values so every
//! module agrees on the exact shape of the strings it exchanges.

/// Format of a `datetime-local` form value: minute precision, no timezone
/// designator (16 characters).
pub const LOCAL_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Same as [`LOCAL_INPUT_FORMAT`] with a seconds field, tolerated on input.
pub const LOCAL_INPUT_SECONDS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Format of a fully qualified UTC timestamp: millisecond precision with the
/// `Z` designator, e.g. `2024-03-15T13:45:00.000Z`.
pub const UTC_OUTPUT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// RFC3339 variant with a space separator, as emitted by some backends.
pub const SPACE_SEPARATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f%:z";

/// Environment variable consulted for the ambient viewer/enterprise timezone.
pub const TZ_ENV_VAR: &str = "TZ";

// Workday defaults (enterprise-local hours)
pub const DEFAULT_WORKDAY_START_HOUR: u32 = 10;
pub const DEFAULT_WORKDAY_END_HOUR: u32 = 18;
