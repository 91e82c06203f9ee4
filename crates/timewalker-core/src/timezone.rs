//! Zone names from configuration resolved into `chrono-tz` zones.
//!
//! Any name `chrono-tz` knows is taken as written. Anything else goes through
//! ICU4X, which maps Windows zone names (`Eastern Standard Time`) and
//! retired IANA aliases onto their canonical IANA zone.

use chrono_tz::Tz;
use icu::time::zone::WindowsParser;
use icu::time::zone::iana::IanaParserExtended;
use std::str::FromStr;

use crate::config::ZoneConfig;
use crate::error::{CoreError, CoreResult};

impl ZoneConfig {
    /// ## Summary
    /// Resolves the configured zone name.
    ///
    /// ## Errors
    ///
    /// Returns `CoreError::UnknownTimezone` if the name matches no zone.
    pub fn timezone(&self) -> CoreResult<Tz> {
        resolve_zone(&self.name)
    }
}

/// ## Summary
/// Resolves a zone name, trying `chrono-tz` first and ICU4X second.
///
/// ## Errors
///
/// Returns `CoreError::UnknownTimezone` if the name matches no zone.
pub fn resolve_zone(name: &str) -> CoreResult<Tz> {
    let name = name.trim();
    if let Ok(tz) = Tz::from_str(name) {
        return Ok(tz);
    }

    let canonical = canonical_iana_name(name)
        .ok_or_else(|| CoreError::UnknownTimezone(name.to_string()))?;
    tracing::debug!(name, canonical = %canonical, "Zone name canonicalized");

    Tz::from_str(&canonical).map_err(|_e| CoreError::UnknownTimezone(name.to_string()))
}

/// Canonical IANA name for a Windows zone name or an IANA alias.
fn canonical_iana_name(name: &str) -> Option<String> {
    let iana = IanaParserExtended::new();

    if let Some(zone) = WindowsParser::new().parse(name, None) {
        return iana
            .iter()
            .find(|entry| entry.time_zone == zone)
            .map(|entry| entry.canonical.to_string());
    }

    let parsed = iana.parse(name);
    (parsed.time_zone != icu::time::TimeZone::UNKNOWN).then(|| parsed.canonical.to_string())
}
