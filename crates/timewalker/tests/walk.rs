//! Walk behaviour through the public API.

use chrono::{DateTime, FixedOffset, TimeDelta};
use timewalker::{CalendarUnit, Interval, WalkError};

fn parse_time(s: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(s).unwrap()
}

#[test]
fn test_same_instant_walks_once() {
    let same_instant = parse_time("2001-02-03T12:45:56Z");

    let count = Interval::new(same_instant, same_instant)
        .walk(CalendarUnit::Day)
        .unwrap()
        .count();
    assert_eq!(count, 1);
}

#[test]
fn test_mixed_zones_fail_before_producing() {
    let start = parse_time("2001-02-03T12:45:56Z");
    let end = parse_time("2002-02-03T07:45:56-05:00");

    let result = Interval::new(start, end).instants(CalendarUnit::Month);
    assert!(matches!(result, Err(WalkError::TimezoneMismatch { .. })));
}

#[test]
fn test_abandoned_walk_leaves_others_untouched() {
    let interval = Interval::new(
        parse_time("1990-01-01T00:00:00Z"),
        parse_time("2090-01-01T00:00:00Z"),
    );

    let mut abandoned = interval.walk(CalendarUnit::Day).unwrap();
    let first = abandoned.next().unwrap();
    drop(abandoned);

    let years = interval.walk(CalendarUnit::Year).unwrap();
    assert_eq!(years.count(), 100);
    assert_eq!(first.duration(), TimeDelta::days(1));
}

#[test]
fn test_walks_run_on_threads() {
    // 2020 is a leap year: 366 days to 2020-11-20, then 35 more through 2020-12-24
    let interval = Interval::new(
        parse_time("2019-11-20T10:00:00Z"),
        parse_time("2020-12-24T10:00:00Z"),
    );

    let handles: Vec<_> = CalendarUnit::ALL
        .into_iter()
        .map(|unit| {
            let interval = interval.clone();
            std::thread::spawn(move || interval.walk(unit).unwrap().count())
        })
        .collect();

    let counts: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(counts, vec![401, 14, 2]);
}
