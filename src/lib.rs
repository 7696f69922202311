//! tzform - Timezone-aware form timestamp conversion
//!
//! This library converts between the UTC ISO-8601 timestamps an application
//! stores and the minute-precision, designator-less strings a
//! `datetime-local` form control exchanges, plus the surrounding timezone
//! plumbing: resolving named zones from the environment, generating workday
//! windows in an enterprise timezone, and normalizing schedule windows to
//! UTC.
//!
//! # Modules
//!
//! * [`convert`] - UTC ↔ `datetime-local` string conversion
//! * [`timezone`] - Named-zone parsing and ambient viewer-timezone resolution
//! * [`workday`] - Enterprise workday window generation
//! * [`window`] - Schedule-window parsing and normalization to UTC
//! * [`config`] - Application configuration management
//! * [`logger`] - Logging setup
//!
//! # Example
//!
//! ```
//! use chrono::FixedOffset;
//! use tzform::{local_to_utc, utc_to_local};
//!
//! let tz = FixedOffset::west_opt(5 * 3600).unwrap();
//! let shown = utc_to_local("2024-03-15T13:45:00.000Z", &tz).unwrap();
//! assert_eq!(shown.as_deref(), Some("2024-03-15T08:45"));
//!
//! let stored = local_to_utc("2024-03-15T08:45", &tz).unwrap();
//! assert_eq!(stored.as_deref(), Some("2024-03-15T13:45:00.000Z"));
//! ```

/// Configuration module for managing application settings
pub mod config;

/// Application constants and wire formats
pub mod constants;

/// UTC to datetime-local conversion and back
pub mod convert;

/// Logging setup
pub mod logger;

/// Named-timezone parsing and ambient resolution
pub mod timezone;

/// Schedule-window parsing and normalization
pub mod window;

/// Enterprise workday window generation
pub mod workday;

// Re-export the conversion surface for convenient access
pub use convert::{local_to_utc, utc_to_local, ConvertError};
pub use timezone::{parse_timezone, viewer_timezone};
pub use window::TimeWindow;
pub use workday::{WorkdayService, WorkdayWindow};
