//! Calendar walks across daylight saving transitions.

use chrono::{Datelike, Days, NaiveDate, TimeDelta, TimeZone};
use chrono_tz::America::{Montreal, Sao_Paulo};
use chrono_tz::Europe::London;
use timewalker::{CalendarUnit, Interval};

#[test_log::test]
fn test_montreal_day_lengths_2000_to_2008() {
    let interval = Interval::new(
        Montreal.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap(),
        Montreal.with_ymd_and_hms(2009, 1, 1, 0, 0, 0).unwrap(),
    );

    let rounded = interval.round(CalendarUnit::Day).unwrap();
    assert_eq!(
        rounded.to_string(),
        "[2000-01-01T00:00:00-05:00, 2009-01-01T00:00:00-05:00)"
    );

    let irregular: Vec<_> = interval
        .walk(CalendarUnit::Day)
        .unwrap()
        .filter(|day| day.duration() != TimeDelta::hours(24))
        .map(|day| {
            (
                day.start.format("%Y-%m-%d").to_string(),
                day.start.format("%Z").to_string(),
                day.end.format("%Z").to_string(),
                day.duration().num_hours(),
            )
        })
        .collect();

    let expected: Vec<(String, String, String, i64)> = [
        ("2000-04-02", "EST", "EDT", 23),
        ("2000-10-29", "EDT", "EST", 25),
        ("2001-04-01", "EST", "EDT", 23),
        ("2001-10-28", "EDT", "EST", 25),
        ("2002-04-07", "EST", "EDT", 23),
        ("2002-10-27", "EDT", "EST", 25),
        ("2003-04-06", "EST", "EDT", 23),
        ("2003-10-26", "EDT", "EST", 25),
        ("2004-04-04", "EST", "EDT", 23),
        ("2004-10-31", "EDT", "EST", 25),
        ("2005-04-03", "EST", "EDT", 23),
        ("2005-10-30", "EDT", "EST", 25),
        ("2006-04-02", "EST", "EDT", 23),
        ("2006-10-29", "EDT", "EST", 25),
        ("2007-03-11", "EST", "EDT", 23),
        ("2007-11-04", "EDT", "EST", 25),
        ("2008-03-09", "EST", "EDT", 23),
        ("2008-11-02", "EDT", "EST", 25),
    ]
    .into_iter()
    .map(|(date, from, to, hours)| (date.to_string(), from.to_string(), to.to_string(), hours))
    .collect();

    assert_eq!(irregular, expected);
}

#[test]
fn test_day_walk_advances_one_civil_day_per_step() {
    let interval = Interval::new(
        London.with_ymd_and_hms(2024, 3, 28, 9, 0, 0).unwrap(),
        London.with_ymd_and_hms(2024, 4, 2, 9, 0, 0).unwrap(),
    );

    let days: Vec<_> = interval.walk(CalendarUnit::Day).unwrap().collect();
    assert_eq!(days.len(), 6);

    for day in &days {
        let start = day.start.naive_local();
        let end = day.end.naive_local();
        assert_eq!(end.date(), start.date() + Days::new(1));
        assert_eq!(start.time(), chrono::NaiveTime::MIN);
        assert_eq!(end.time(), chrono::NaiveTime::MIN);
    }

    // Clocks went forward on 2024-03-31
    let short = days.iter().find(|day| day.duration() == TimeDelta::hours(23));
    assert_eq!(
        short.map(|day| day.start.date_naive()),
        NaiveDate::from_ymd_opt(2024, 3, 31)
    );
}

#[test]
fn test_month_walk_across_fall_back() {
    let interval = Interval::new(
        London.with_ymd_and_hms(2023, 10, 15, 0, 0, 0).unwrap(),
        London.with_ymd_and_hms(2023, 11, 15, 0, 0, 0).unwrap(),
    );

    let months: Vec<_> = interval.walk(CalendarUnit::Month).unwrap().collect();
    assert_eq!(months.len(), 2);

    // October 2023 had one extra hour
    assert_eq!(months[0].duration(), TimeDelta::days(31) + TimeDelta::hours(1));
    assert_eq!(months[1].duration(), TimeDelta::days(30));
}

#[test]
fn test_add_day_across_fall_back_keeps_wall_clock() {
    let t = Montreal.with_ymd_and_hms(2008, 11, 1, 18, 30, 0).unwrap();

    let next = CalendarUnit::Day.add_to(&t);
    assert_eq!(next.naive_local(), t.naive_local() + Days::new(1));
    assert_eq!(next - t, TimeDelta::hours(25));
}

#[test]
fn test_midnight_gap_day_starts_after_gap() {
    // Sao Paulo sprang forward from 00:00 to 01:00 on 2018-11-04
    let t = Sao_Paulo.with_ymd_and_hms(2018, 11, 4, 12, 0, 0).unwrap();

    let floor = CalendarUnit::Day.floor(&t);
    assert_eq!(floor.naive_local().to_string(), "2018-11-04 01:00:00");
    assert!(floor <= t);

    let ceil = CalendarUnit::Day.ceil(&t);
    assert_eq!(ceil.naive_local().to_string(), "2018-11-05 00:00:00");
    assert_eq!(CalendarUnit::Day.ceil(&floor), floor);
}

#[test]
fn test_walk_through_midnight_gap_stays_aligned() {
    let interval = Interval::new(
        Sao_Paulo.with_ymd_and_hms(2018, 11, 2, 12, 0, 0).unwrap(),
        Sao_Paulo.with_ymd_and_hms(2018, 11, 6, 12, 0, 0).unwrap(),
    );

    let starts: Vec<_> = interval
        .walk(CalendarUnit::Day)
        .unwrap()
        .map(|day| (day.start.day(), day.start.naive_local().time().to_string(), day.duration()))
        .collect();

    assert_eq!(
        starts,
        [
            (2, "00:00:00".to_string(), TimeDelta::hours(24)),
            (3, "00:00:00".to_string(), TimeDelta::hours(24)),
            (4, "01:00:00".to_string(), TimeDelta::hours(23)),
            (5, "00:00:00".to_string(), TimeDelta::hours(24)),
            (6, "00:00:00".to_string(), TimeDelta::hours(24)),
        ]
    );
}
