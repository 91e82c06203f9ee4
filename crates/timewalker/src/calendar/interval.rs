//! Half-open time ranges and their normalization onto calendar boundaries.

use std::fmt;

use chrono::{DateTime, SecondsFormat, TimeDelta, TimeZone};

use super::unit::CalendarUnit;
use super::walk::Walk;
use crate::error::{WalkError, WalkResult};

/// A half-open range of time `[start, end)`.
///
/// Any pair of timestamps can be stored, in either order and even in different
/// zones. [`Interval::round`] turns it into a non-empty, unit-aligned range
/// whose bounds share one zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval<Tz: TimeZone> {
    /// Inclusive lower bound.
    pub start: DateTime<Tz>,
    /// Exclusive upper bound.
    pub end: DateTime<Tz>,
}

impl<Tz: TimeZone> Interval<Tz> {
    #[must_use]
    pub fn new(start: DateTime<Tz>, end: DateTime<Tz>) -> Self {
        Self { start, end }
    }

    /// Elapsed time between the bounds, negative if they are reversed.
    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.end.clone().signed_duration_since(&self.start)
    }

    #[must_use]
    pub fn contains(&self, t: &DateTime<Tz>) -> bool {
        self.start <= *t && *t < self.end
    }

    /// Bounds in chronological order.
    pub(crate) fn ordered(&self) -> (DateTime<Tz>, DateTime<Tz>) {
        if self.end < self.start {
            tracing::debug!("Swapping reversed interval bounds");
            (self.end.clone(), self.start.clone())
        } else {
            (self.start.clone(), self.end.clone())
        }
    }
}

impl<Tz> Interval<Tz>
where
    Tz: TimeZone + PartialEq + fmt::Display,
    Tz::Offset: fmt::Display,
{
    /// ## Summary
    /// Normalizes the interval onto `unit` boundaries.
    ///
    /// Reversed bounds are swapped, the start is floored and the end is
    /// ceiled, each in its own zone. The end is then pushed out to at least one
    /// unit past the start, so even a zero-width input covers one whole period.
    ///
    /// ## Errors
    ///
    /// Returns `WalkError::TimezoneMismatch` if the bounds are in different zones.
    pub fn round(&self, unit: CalendarUnit) -> WalkResult<Self> {
        let (start, end) = self.ordered();
        let start = unit.floor(&start);
        let mut end = unit.ceil(&end);

        ensure_same_zone(&start, &end)?;

        let min_end = unit.next_boundary(&start);
        if end < min_end {
            tracing::debug!(unit = %unit, "Widening interval to one unit");
            end = min_end;
        }

        let rounded = Self::new(start, end);
        tracing::trace!(unit = %unit, interval = %rounded, "Rounded interval");
        Ok(rounded)
    }

    /// ## Summary
    /// Rounds the interval on `unit`, then walks it one unit at a time.
    ///
    /// The returned iterator yields at least one step. Each call produces an
    /// independent sequence.
    ///
    /// ## Errors
    ///
    /// Returns `WalkError::TimezoneMismatch` if the bounds are in different zones;
    /// nothing is produced in that case.
    pub fn walk(&self, unit: CalendarUnit) -> WalkResult<Walk<Tz>> {
        Ok(Walk::new(unit, self.round(unit)?))
    }

    /// ## Summary
    /// Aligned instants from the floored start up to, excluding, the rounded end.
    ///
    /// ## Errors
    ///
    /// Returns `WalkError::TimezoneMismatch` if the bounds are in different zones.
    pub fn instants(
        &self,
        unit: CalendarUnit,
    ) -> WalkResult<impl Iterator<Item = DateTime<Tz>> + use<Tz>> {
        Ok(self.walk(unit)?.map(|step| step.start))
    }
}

/// Fails unless both bounds carry the same zone.
pub(crate) fn ensure_same_zone<Tz>(start: &DateTime<Tz>, end: &DateTime<Tz>) -> WalkResult<()>
where
    Tz: TimeZone + PartialEq + fmt::Display,
    Tz::Offset: fmt::Display,
{
    let (start_zone, end_zone) = (start.timezone(), end.timezone());
    if start_zone == end_zone {
        return Ok(());
    }

    let interval = Interval::new(start.clone(), end.clone()).to_string();
    tracing::warn!(%start_zone, %end_zone, %interval, "Interval bounds in different timezones");
    Err(WalkError::TimezoneMismatch {
        start_zone: start_zone.to_string(),
        end_zone: end_zone.to_string(),
        interval,
    })
}

impl<Tz: TimeZone> fmt::Display for Interval<Tz>
where
    Tz::Offset: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {})",
            self.start.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            self.end.to_rfc3339_opts(SecondsFormat::AutoSi, true)
        )
    }
}
