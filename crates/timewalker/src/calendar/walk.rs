//! Lazy, forward-only sequences of sub-intervals.

use std::iter::FusedIterator;

use chrono::{DateTime, TimeDelta, TimeZone};

use super::interval::Interval;
use super::unit::CalendarUnit;

/// Iterator over the unit-sized steps of a normalized interval.
///
/// Produced by [`Interval::walk`]. Each item is `[cursor, next boundary)`; the
/// steps tile the normalized interval with no gaps or overlaps. Once the cursor
/// reaches the end the iterator is exhausted for good.
#[derive(Debug, Clone)]
pub struct Walk<Tz: TimeZone> {
    unit: CalendarUnit,
    /// `None` once exhausted.
    cursor: Option<DateTime<Tz>>,
    end: DateTime<Tz>,
}

impl<Tz: TimeZone> Walk<Tz> {
    pub(crate) fn new(unit: CalendarUnit, rounded: Interval<Tz>) -> Self {
        Self {
            unit,
            cursor: Some(rounded.start),
            end: rounded.end,
        }
    }
}

impl<Tz: TimeZone> Iterator for Walk<Tz> {
    type Item = Interval<Tz>;

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.cursor.take()?;
        if cursor >= self.end {
            return None;
        }

        let next = self.unit.next_boundary(&cursor);
        if next <= cursor {
            // Saturated at the end of the representable range
            return Some(Interval::new(cursor, self.end.clone()));
        }

        tracing::trace!(unit = %self.unit, "Walk step");
        self.cursor = Some(next.clone());
        Some(Interval::new(cursor, next))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.cursor {
            Some(cursor) if *cursor < self.end => (1, None),
            _ => (0, Some(0)),
        }
    }
}

impl<Tz: TimeZone> FusedIterator for Walk<Tz> {}

/// Iterator over fixed-length steps of an interval.
///
/// Produced by [`Interval::walk_fixed`]. Every step lasts exactly `step` of
/// elapsed time, whatever the civil calendar does meanwhile.
#[derive(Debug, Clone)]
pub struct FixedWalk<Tz: TimeZone> {
    step: TimeDelta,
    cursor: Option<DateTime<Tz>>,
    end: DateTime<Tz>,
}

impl<Tz: TimeZone> FixedWalk<Tz> {
    pub(crate) fn new(step: TimeDelta, rounded: Interval<Tz>) -> Self {
        Self {
            step,
            cursor: Some(rounded.start),
            end: rounded.end,
        }
    }
}

impl<Tz: TimeZone> Iterator for FixedWalk<Tz> {
    type Item = Interval<Tz>;

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.cursor.take()?;
        if cursor >= self.end {
            return None;
        }

        let Some(next) = cursor.clone().checked_add_signed(self.step) else {
            return Some(Interval::new(cursor, self.end.clone()));
        };

        self.cursor = Some(next.clone());
        Some(Interval::new(cursor, next))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.cursor {
            Some(cursor) if *cursor < self.end => (1, None),
            _ => (0, Some(0)),
        }
    }
}

impl<Tz: TimeZone> FusedIterator for FixedWalk<Tz> {}
