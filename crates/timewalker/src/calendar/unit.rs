//! Calendar units: periods whose elapsed length depends on where they fall.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Days, Months, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::local::resolve_local;
use crate::error::WalkError;

/// A calendar period: one day, one month or one year of civil time.
///
/// Unlike a `TimeDelta`, a unit has no fixed length. A day across a DST
/// transition lasts 23 or 25 hours, a month 28 to 31 days. Every operation reads
/// civil fields in the timestamp's own zone and resolves its result in that
/// same zone.
///
/// Adding a month or a year clamps the day-of-month to the last day of the
/// target month: Jan 31 + 1 month is Feb 28 (or 29), and Feb 29 + 1 year is
/// Feb 28.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarUnit {
    Day,
    Month,
    Year,
}

impl CalendarUnit {
    /// Every unit, smallest first.
    pub const ALL: [Self; 3] = [Self::Day, Self::Month, Self::Year];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "Day",
            Self::Month => "Month",
            Self::Year => "Year",
        }
    }

    /// ## Summary
    /// Diagnostic label for a raw unit tag, `"Invalid"` when the tag is unknown.
    #[must_use]
    pub fn label_for(tag: u8) -> &'static str {
        Self::try_from(tag).map_or("Invalid", Self::as_str)
    }

    /// ## Summary
    /// Returns the latest unit boundary at or before `t`, in `t`'s zone.
    #[must_use]
    pub fn floor<Tz: TimeZone>(self, t: &DateTime<Tz>) -> DateTime<Tz> {
        resolve_local(&t.timezone(), self.floor_local(t.naive_local()))
    }

    /// ## Summary
    /// Returns the earliest unit boundary at or after `t`, in `t`'s zone.
    ///
    /// A timestamp already on a boundary is returned unchanged.
    #[must_use]
    pub fn ceil<Tz: TimeZone>(self, t: &DateTime<Tz>) -> DateTime<Tz> {
        let floor = self.floor(t);
        if floor >= *t {
            return floor;
        }
        self.next_boundary(&floor)
    }

    /// ## Summary
    /// Advances `t` by exactly one unit of civil time.
    ///
    /// Only the date changes; the wall-clock time of day is kept and the result
    /// is resolved again in `t`'s zone, so it picks up any offset change in
    /// between. Results past the representable range saturate at the latest
    /// representable instant.
    #[must_use]
    pub fn add_to<Tz: TimeZone>(self, t: &DateTime<Tz>) -> DateTime<Tz> {
        match self.step_local(t.naive_local()) {
            Some(next) => resolve_local(&t.timezone(), next),
            None => self.saturate(t),
        }
    }

    /// ## Summary
    /// Returns the boundary one unit after the period containing `boundary`.
    ///
    /// Steps from the civil start of the period rather than from the wall-clock
    /// time of `boundary`, so a boundary pushed off midnight by a DST gap is
    /// followed by a true midnight.
    pub(crate) fn next_boundary<Tz: TimeZone>(self, boundary: &DateTime<Tz>) -> DateTime<Tz> {
        let start = self.floor_local(boundary.naive_local());
        match self.step_local(start) {
            Some(next) => resolve_local(&boundary.timezone(), next),
            None => self.saturate(boundary),
        }
    }

    /// Start of the civil period containing `local`.
    pub(crate) fn floor_local(self, local: NaiveDateTime) -> NaiveDateTime {
        let date = local.date();
        let start = match self {
            Self::Day => date,
            Self::Month => date - Days::new(u64::from(date.day0())),
            Self::Year => date - Days::new(u64::from(date.ordinal0())),
        };
        start.and_time(NaiveTime::MIN)
    }

    /// Civil date-time one unit after `local`, `None` past chrono's range.
    pub(crate) fn step_local(self, local: NaiveDateTime) -> Option<NaiveDateTime> {
        match self {
            Self::Day => local.checked_add_days(Days::new(1)),
            Self::Month => local.checked_add_months(Months::new(1)),
            Self::Year => local.checked_add_months(Months::new(12)),
        }
    }

    pub(crate) fn saturate<Tz: TimeZone>(self, t: &DateTime<Tz>) -> DateTime<Tz> {
        tracing::warn!(unit = %self, "Calendar addition out of range, saturating");
        DateTime::<Utc>::MAX_UTC.with_timezone(&t.timezone())
    }
}

impl fmt::Display for CalendarUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for CalendarUnit {
    type Error = WalkError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Self::Day),
            1 => Ok(Self::Month),
            2 => Ok(Self::Year),
            _ => Err(WalkError::InvalidCalendarUnit(tag.to_string())),
        }
    }
}

impl FromStr for CalendarUnit {
    type Err = WalkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| WalkError::InvalidCalendarUnit(s.to_string()))
    }
}
