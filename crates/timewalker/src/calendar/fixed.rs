//! Fixed-duration rounding.
//!
//! Unlike calendar units, a `TimeDelta` step has one length everywhere. Bounds
//! are truncated on the absolute time line (multiples of `step` since the Unix
//! epoch), so an hourly step stays hourly across DST transitions while a
//! 24-hour step drifts off local midnight.

use std::fmt;

use chrono::{DateTime, DurationRound, RoundingError, TimeDelta, TimeZone, Utc};

use super::interval::{Interval, ensure_same_zone};
use super::walk::FixedWalk;
use crate::error::{WalkError, WalkResult};

impl<Tz> Interval<Tz>
where
    Tz: TimeZone + PartialEq + fmt::Display,
    Tz::Offset: fmt::Display,
{
    /// ## Summary
    /// Normalizes the interval onto multiples of a fixed `step`.
    ///
    /// The start is truncated and the end rounded up to a multiple of `step`,
    /// then pushed out to at least `start + step`.
    ///
    /// ## Errors
    ///
    /// - `WalkError::NonPositiveStep` if `step` is zero or negative
    /// - `WalkError::Rounding` if a rounded bound leaves chrono's range, or,
    ///   for a step with a sub-second part, if a bound falls outside the
    ///   nanosecond timestamp range (about 1677 to 2262)
    /// - `WalkError::TimezoneMismatch` if the bounds are in different zones
    pub fn round_fixed(&self, step: TimeDelta) -> WalkResult<Self> {
        if step <= TimeDelta::zero() {
            return Err(WalkError::NonPositiveStep(step));
        }

        let (start, end) = self.ordered();
        let start = truncate(&start, step)?;
        let truncated_end = truncate(&end, step)?;
        let mut end = if truncated_end < end {
            add_step(truncated_end, step)?
        } else {
            truncated_end
        };

        ensure_same_zone(&start, &end)?;

        let min_end = add_step(start.clone(), step)?;
        if end < min_end {
            tracing::debug!(step_seconds = step.num_seconds(), "Widening interval to one step");
            end = min_end;
        }

        Ok(Self::new(start, end))
    }

    /// ## Summary
    /// Rounds the interval on `step`, then walks it one step at a time.
    ///
    /// ## Errors
    ///
    /// Propagates any error from [`Interval::round_fixed`].
    pub fn walk_fixed(&self, step: TimeDelta) -> WalkResult<FixedWalk<Tz>> {
        Ok(FixedWalk::new(step, self.round_fixed(step)?))
    }
}

/// Latest multiple of `step` since the epoch at or before `t`.
fn truncate<Tz: TimeZone>(t: &DateTime<Tz>, step: TimeDelta) -> WalkResult<DateTime<Tz>> {
    if step.subsec_nanos() != 0 {
        let truncated = t.with_timezone(&Utc).duration_trunc(step)?;
        return Ok(truncated.with_timezone(&t.timezone()));
    }

    // Whole-second steps work on second timestamps, which cover chrono's full range
    let excess = TimeDelta::seconds(t.timestamp().rem_euclid(step.num_seconds()))
        + TimeDelta::nanoseconds(i64::from(t.timestamp_subsec_nanos()));
    t.clone()
        .checked_sub_signed(excess)
        .ok_or(WalkError::Rounding(RoundingError::TimestampExceedsLimit))
}

fn add_step<Tz: TimeZone>(t: DateTime<Tz>, step: TimeDelta) -> WalkResult<DateTime<Tz>> {
    t.checked_add_signed(step)
        .ok_or(WalkError::Rounding(RoundingError::TimestampExceedsLimit))
}
