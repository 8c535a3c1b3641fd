//! Window arithmetic

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::intent::TimeRange;
use super::error::ResolveError;

/// A half-open UTC interval `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UtcInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl UtcInterval {
    /// Whole days covered by the interval
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant < self.end
    }
}

/// Midnight UTC at the start of `day`
pub fn midnight_utc(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}

/// Resolve a time range relative to `now` (the current UTC instant when `None`)
///
/// Day boundaries are always UTC midnight:
/// * `today` is `[today, today + 1d)`
/// * `yesterday` is `[today - 1d, today)`
/// * `last_n_days(n)` is the `n` days ending with today, `[today + 1d - n, today + 1d)`
/// * `between(from, to)` is `[from, to + 1d)`
///
/// Windows that could only come from an unvalidated intent (`n = 0`, `to < from`)
/// are rejected rather than resolved to an empty or negative interval.
pub fn resolve_time_range(
    range: &TimeRange,
    now: Option<DateTime<Utc>>,
) -> Result<UtcInterval, ResolveError> {
    let today = now.unwrap_or_else(Utc::now).date_naive();
    let out_of_range = || ResolveError::OutOfRange(range.to_string());
    let one_day = Duration::days(1);

    let interval = match *range {
        TimeRange::Today => {
            let start = midnight_utc(today);
            UtcInterval {
                start,
                end: start.checked_add_signed(one_day).ok_or_else(out_of_range)?,
            }
        }
        TimeRange::Yesterday => {
            let end = midnight_utc(today);
            UtcInterval {
                start: end.checked_sub_signed(one_day).ok_or_else(out_of_range)?,
                end,
            }
        }
        TimeRange::LastNDays { n } => {
            if n < 1 {
                return Err(ResolveError::EmptyWindow(n));
            }
            let end = midnight_utc(today)
                .checked_add_signed(one_day)
                .ok_or_else(out_of_range)?;
            let start = end
                .checked_sub_signed(Duration::days(i64::from(n)))
                .ok_or_else(out_of_range)?;
            UtcInterval { start, end }
        }
        TimeRange::Between { from, to } => {
            if to < from {
                return Err(ResolveError::InvertedWindow { from, to });
            }
            UtcInterval {
                start: midnight_utc(from),
                end: midnight_utc(to)
                    .checked_add_signed(one_day)
                    .ok_or_else(out_of_range)?,
            }
        }
    };

    debug!(%range, start = %interval.start, end = %interval.end, "resolved time range");
    Ok(interval)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 11, 20, 15, 42, 7).unwrap()
    }

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_today() {
        let w = resolve_time_range(&TimeRange::Today, Some(now())).unwrap();
        assert_eq!(w.start, at(2025, 11, 20));
        assert_eq!(w.end, at(2025, 11, 21));
        assert!(w.contains(now()));
    }

    #[test]
    fn test_yesterday() {
        let w = resolve_time_range(&TimeRange::Yesterday, Some(now())).unwrap();
        assert_eq!(w.start, at(2025, 11, 19));
        assert_eq!(w.end, at(2025, 11, 20));
        assert!(!w.contains(now()));
    }

    #[test]
    fn test_last_n_days_includes_today() {
        let w = resolve_time_range(&TimeRange::last_n_days(7), Some(now())).unwrap();
        assert_eq!(w.start, at(2025, 11, 14));
        assert_eq!(w.end, at(2025, 11, 21));
        assert_eq!(w.days(), 7);
    }

    #[test]
    fn test_last_one_day_equals_today() {
        let last = resolve_time_range(&TimeRange::last_n_days(1), Some(now())).unwrap();
        let today = resolve_time_range(&TimeRange::Today, Some(now())).unwrap();
        assert_eq!(last, today);
    }

    #[test]
    fn test_between_includes_both_days() {
        let w = resolve_time_range(
            &TimeRange::between(date(2025, 11, 1), date(2025, 11, 28)),
            Some(now()),
        )
        .unwrap();
        assert_eq!(w.start, at(2025, 11, 1));
        assert_eq!(w.end, at(2025, 11, 29));
        assert_eq!(w.days(), 28);
    }

    #[test]
    fn test_between_crosses_month_end() {
        let w = resolve_time_range(&TimeRange::on(date(2024, 2, 29)), None).unwrap();
        assert_eq!(w.end, at(2024, 3, 1));
    }

    #[test]
    fn test_between_ignores_now() {
        let range = TimeRange::between(date(2025, 1, 1), date(2025, 1, 3));
        let a = resolve_time_range(&range, Some(now())).unwrap();
        let b = resolve_time_range(&range, Some(at(1999, 1, 1))).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unvalidated_windows_are_rejected() {
        assert_eq!(
            resolve_time_range(&TimeRange::last_n_days(0), Some(now())),
            Err(ResolveError::EmptyWindow(0))
        );
        assert!(matches!(
            resolve_time_range(&TimeRange::between(date(2025, 2, 1), date(2025, 1, 1)), Some(now())),
            Err(ResolveError::InvertedWindow { .. })
        ));
    }

    #[test]
    fn test_all_time_sentinel_resolves() {
        let w = resolve_time_range(&TimeRange::last_n_days(36500), Some(now())).unwrap();
        assert_eq!(w.days(), 36500);
        assert_eq!(w.end, at(2025, 11, 21));
    }
}
