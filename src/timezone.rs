//! Named-timezone resolution
//!
//! Zones are IANA names resolved through `chrono-tz`. The ambient viewer
//! timezone comes from the `TZ` environment variable and falls back to UTC
//! when unset or unrecognized, so callers always get a usable zone.

use std::str::FromStr;

use chrono_tz::Tz;

use crate::constants::TZ_ENV_VAR;

#[derive(Debug, thiserror::Error)]
pub enum TimezoneError {
    #[error("Unknown timezone: '{0}'")]
    UnknownTimezone(String),
}

/// Parse an IANA timezone name (e.g. `Europe/Berlin`).
pub fn parse_timezone(name: &str) -> Result<Tz, TimezoneError> {
    Tz::from_str(name.trim()).map_err(|_| TimezoneError::UnknownTimezone(name.to_string()))
}

/// Resolve the ambient viewer timezone from the `TZ` environment variable.
///
/// Unset, empty, or unrecognized values fall back to UTC; the unrecognized
/// case is logged so a misconfigured host is visible.
pub fn viewer_timezone() -> Tz {
    match std::env::var(TZ_ENV_VAR) {
        Ok(name) if !name.is_empty() => parse_timezone(&name).unwrap_or_else(|_| {
            log::warn!("Unrecognized {} value '{}', falling back to UTC", TZ_ENV_VAR, name);
            Tz::UTC
        }),
        _ => Tz::UTC,
    }
}
