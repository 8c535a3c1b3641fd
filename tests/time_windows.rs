//! Integration tests for time range resolution
//!
//! Every window is a half-open UTC interval aligned to midnight.

mod common;

use chrono::{Duration, TimeZone, Utc};
use common::{date, fixed_now};
use pretty_assertions::assert_eq;
use vidnlq::resolver::midnight_utc;
use vidnlq::{
    build_scalar_query_at, parse_intent, resolve_time_range, Measure, Metric, QueryIntent,
    ResolveError, TimeRange, UtcInterval,
};

fn resolve(range: TimeRange) -> UtcInterval {
    resolve_time_range(&range, Some(fixed_now())).unwrap()
}

#[test]
fn test_today_and_yesterday() {
    let today = midnight_utc(date(2025, 11, 28));
    assert_eq!(
        resolve(TimeRange::Today),
        UtcInterval { start: today, end: today + Duration::days(1) }
    );
    assert_eq!(
        resolve(TimeRange::Yesterday),
        UtcInterval { start: today - Duration::days(1), end: today }
    );
}

#[test]
fn test_between_length_is_inclusive_day_count() {
    let from = date(2025, 11, 1);
    for days in [0i64, 1, 4, 27, 365] {
        let to = from + Duration::days(days);
        let interval = resolve(TimeRange::between(from, to));
        assert_eq!(interval.days(), (to - from).num_days() + 1);
        assert_eq!(interval.start, midnight_utc(from));
    }
}

#[test]
fn test_between_crosses_month_and_year() {
    let interval = resolve(TimeRange::between(date(2024, 12, 30), date(2025, 1, 2)));
    assert_eq!(interval.start, Utc.with_ymd_and_hms(2024, 12, 30, 0, 0, 0).unwrap());
    assert_eq!(interval.end, Utc.with_ymd_and_hms(2025, 1, 3, 0, 0, 0).unwrap());
}

#[test]
fn test_last_n_days_ends_with_today() {
    let tomorrow = midnight_utc(date(2025, 11, 29));
    for n in [1u32, 7, 30, 36500] {
        let interval = resolve(TimeRange::last_n_days(n));
        assert_eq!(interval.end, tomorrow, "n = {n}");
        assert_eq!(interval.days(), i64::from(n), "n = {n}");
    }
    assert_eq!(resolve(TimeRange::last_n_days(1)), resolve(TimeRange::Today));
}

#[test]
fn test_time_of_day_does_not_matter() {
    let early = Utc.with_ymd_and_hms(2025, 11, 28, 0, 0, 0).unwrap();
    let late = Utc.with_ymd_and_hms(2025, 11, 28, 23, 59, 59).unwrap();
    for range in [TimeRange::Today, TimeRange::Yesterday, TimeRange::last_n_days(7)] {
        assert_eq!(
            resolve_time_range(&range, Some(early)).unwrap(),
            resolve_time_range(&range, Some(late)).unwrap()
        );
    }
}

#[test]
fn test_boundaries_are_half_open() {
    let interval = resolve(TimeRange::on(date(2025, 11, 27)));
    assert!(interval.contains(midnight_utc(date(2025, 11, 27))));
    assert!(interval.contains(Utc.with_ymd_and_hms(2025, 11, 27, 23, 59, 59).unwrap()));
    assert!(!interval.contains(midnight_utc(date(2025, 11, 28))));
}

#[test]
fn test_unvalidated_ranges_are_rejected() {
    assert_eq!(
        resolve_time_range(&TimeRange::LastNDays { n: 0 }, Some(fixed_now())),
        Err(ResolveError::EmptyWindow(0))
    );
    let from = date(2025, 11, 5);
    let to = date(2025, 11, 1);
    assert_eq!(
        resolve_time_range(&TimeRange::Between { from, to }, Some(fixed_now())),
        Err(ResolveError::InvertedWindow { from, to })
    );
}

#[test]
fn test_query_carries_resolved_window() {
    let intent = parse_intent("комментарии 01.11.2025-28.11.2025").unwrap();
    let query = build_scalar_query_at(&intent, Some(fixed_now())).unwrap();
    assert_eq!(query.interval.start, midnight_utc(date(2025, 11, 1)));
    assert_eq!(query.interval.end, midnight_utc(date(2025, 11, 29)));

    let all_time = QueryIntent::new(Metric::Videos, Measure::Final, TimeRange::last_n_days(36500));
    let query = build_scalar_query_at(&all_time, Some(fixed_now())).unwrap();
    assert_eq!(query.interval.days(), 36500);
}
