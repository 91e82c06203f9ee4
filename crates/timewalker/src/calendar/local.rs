//! Zone-aware construction of instants from civil date-times.

use chrono::{DateTime, LocalResult, NaiveDateTime, Offset, TimeDelta, TimeZone};

/// ## Summary
/// Resolves a local civil date-time in `tz`, never failing.
///
/// - Ambiguous times (DST fold) resolve to the earlier instant.
/// - Nonexistent times (DST gap) are read with the offset in force before the
///   transition, which lands on the first instant after the gap.
#[must_use]
pub fn resolve_local<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt,
        LocalResult::None => {
            // Gaps never exceed a day, so a day earlier is on the far side
            let before = local
                .checked_sub_signed(TimeDelta::days(1))
                .and_then(|probe| tz.offset_from_local_datetime(&probe).earliest());

            match before {
                Some(offset) => {
                    let utc = local - offset.fix();
                    tracing::trace!(%local, %utc, "Resolved civil time inside DST gap");
                    tz.from_utc_datetime(&utc)
                }
                None => tz.from_utc_datetime(&local),
            }
        }
    }
}
