//! A zone and unit pair, usually built from configuration.

use chrono::{DateTime, NaiveDateTime};
use chrono_tz::Tz;
use timewalker_core::config::Settings;

use crate::calendar::{CalendarUnit, Interval, Walk, resolve_local};
use crate::error::WalkResult;

/// Walks civil date-times of one zone in steps of one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Walker {
    pub zone: Tz,
    pub unit: CalendarUnit,
}

impl Walker {
    #[must_use]
    pub const fn new(zone: Tz, unit: CalendarUnit) -> Self {
        Self { zone, unit }
    }

    /// ## Summary
    /// Builds a `Walker` from the `zone` and `walk` sections of `settings`.
    ///
    /// ## Errors
    ///
    /// - `WalkError::Core` if the zone name cannot be resolved
    /// - `WalkError::InvalidCalendarUnit` if the unit name is unknown
    pub fn from_settings(settings: &Settings) -> WalkResult<Self> {
        let zone = settings.zone.timezone()?;
        let unit = settings.walk.unit.parse()?;
        tracing::debug!(zone = %zone, unit = %unit, "Walker configured");

        Ok(Self::new(zone, unit))
    }

    /// ## Summary
    /// Places a civil date-time in the walker's zone.
    ///
    /// Times in a DST fold take the earlier instant; times in a DST gap move
    /// past the gap.
    #[must_use]
    pub fn localize(&self, local: NaiveDateTime) -> DateTime<Tz> {
        resolve_local(&self.zone, local)
    }

    /// ## Summary
    /// Rounds `[start, end)` in the walker's zone onto its unit.
    ///
    /// ## Errors
    ///
    /// Never fails in practice: both bounds are localized in the same zone.
    pub fn round(&self, start: NaiveDateTime, end: NaiveDateTime) -> WalkResult<Interval<Tz>> {
        self.interval(start, end).round(self.unit)
    }

    /// ## Summary
    /// Walks `[start, end)` in the walker's zone one unit at a time.
    ///
    /// ## Errors
    ///
    /// Never fails in practice: both bounds are localized in the same zone.
    pub fn walk(&self, start: NaiveDateTime, end: NaiveDateTime) -> WalkResult<Walk<Tz>> {
        self.interval(start, end).walk(self.unit)
    }

    fn interval(&self, start: NaiveDateTime, end: NaiveDateTime) -> Interval<Tz> {
        Interval::new(self.localize(start), self.localize(end))
    }
}
