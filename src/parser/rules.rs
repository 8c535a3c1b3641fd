//! Ordered rule tables
//!
//! Precedence lives here and only here: each table is scanned top to bottom
//! and the first matching row decides the outcome.

use crate::intent::{Measure, Metric, TimeRange};
use super::dates::collect_dates;
use super::error::ParseError;
use super::patterns::LAST_N_DAYS_PATTERN;

/// Day count standing in for "all time"
pub const ALL_TIME_DAYS: u32 = 36500;

/// Metric keywords in precedence order, matched as substrings of the lowercased text
pub const METRIC_RULES: &[(Metric, &[&str])] = &[
    (Metric::Views, &["просмотр", "views"]),
    (Metric::Likes, &["лайк", "likes"]),
    (Metric::Comments, &["коммент", "comments"]),
    (Metric::Reports, &["репорт", "жалоб", "reports", "complaints"]),
    (Metric::Videos, &["видео", "ролик", "видос", "video"]),
];

/// Wording that asks for growth rather than a total
pub const DELTA_KEYWORDS: &[&str] = &[
    "прирост",
    "увелич",
    "рост",
    "на сколько",
    "delta",
    "increase",
    "growth",
    "grew",
    "by how much",
];

const ALL_TIME_KEYWORDS: &[&str] = &["за всё время", "за все время", "в системе", "all time", "all-time"];
const TODAY_KEYWORDS: &[&str] = &["сегодня", "today"];
const YESTERDAY_KEYWORDS: &[&str] = &["вчера", "yesterday"];

/// One row of the time range table
///
/// `matcher` receives the input text and its lowercased form.
pub struct TimeRule {
    pub name: &'static str,
    pub matcher: fn(&str, &str) -> Result<Option<TimeRange>, ParseError>,
}

/// Time range rules in precedence order; `today` applies when none match
pub const TIME_RULES: &[TimeRule] = &[
    TimeRule { name: "all_time", matcher: match_all_time },
    TimeRule { name: "today", matcher: match_today },
    TimeRule { name: "yesterday", matcher: match_yesterday },
    TimeRule { name: "last_n_days", matcher: match_last_n_days },
    TimeRule { name: "explicit_dates", matcher: match_explicit_dates },
];

fn contains_any(low: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| low.contains(k))
}

/// First metric whose keywords occur in the lowercased text
pub fn detect_metric(low: &str) -> Option<Metric> {
    METRIC_RULES
        .iter()
        .find(|(_, keywords)| contains_any(low, keywords))
        .map(|(metric, _)| *metric)
}

/// `delta_sum` when growth wording is present, otherwise `final`
pub fn detect_measure(low: &str) -> Measure {
    if contains_any(low, DELTA_KEYWORDS) {
        Measure::DeltaSum
    } else {
        Measure::Final
    }
}

/// Apply `TIME_RULES` in order, returning the winning rule's name and range
pub fn detect_time_range(text: &str, low: &str) -> Result<(&'static str, TimeRange), ParseError> {
    for rule in TIME_RULES {
        if let Some(range) = (rule.matcher)(text, low)? {
            return Ok((rule.name, range));
        }
    }
    Ok(("default", TimeRange::Today))
}

fn match_all_time(_text: &str, low: &str) -> Result<Option<TimeRange>, ParseError> {
    Ok(contains_any(low, ALL_TIME_KEYWORDS).then(|| TimeRange::last_n_days(ALL_TIME_DAYS)))
}

fn match_today(_text: &str, low: &str) -> Result<Option<TimeRange>, ParseError> {
    Ok(contains_any(low, TODAY_KEYWORDS).then_some(TimeRange::Today))
}

fn match_yesterday(_text: &str, low: &str) -> Result<Option<TimeRange>, ParseError> {
    Ok(contains_any(low, YESTERDAY_KEYWORDS).then_some(TimeRange::Yesterday))
}

fn match_last_n_days(_text: &str, low: &str) -> Result<Option<TimeRange>, ParseError> {
    Ok(LAST_N_DAYS_PATTERN
        .captures(low)
        .and_then(|caps| caps["n"].parse::<u32>().ok())
        .map(TimeRange::last_n_days))
}

/// Two or more dates: the first two collected, as-is (no sorting or swapping).
/// One date: that single day.
fn match_explicit_dates(text: &str, _low: &str) -> Result<Option<TimeRange>, ParseError> {
    let dates = collect_dates(text)?;
    Ok(match dates.as_slice() {
        [] => None,
        [day] => Some(TimeRange::on(*day)),
        [from, to, ..] => Some(TimeRange::between(*from, *to)),
    })
}
