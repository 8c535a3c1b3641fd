//! Symbolic time windows

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A time window as the user expressed it, before resolution to UTC instants
///
/// Serializes to the document form accepted by the validator:
/// `{"type": "between", "from": "2025-11-01", "to": "2025-11-28"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TimeRange {
    Today,
    Yesterday,
    /// An `n`-day window ending with (and including) today
    LastNDays { n: u32 },
    /// Both boundary days included
    Between { from: NaiveDate, to: NaiveDate },
}

impl TimeRange {
    pub fn last_n_days(n: u32) -> Self {
        TimeRange::LastNDays { n }
    }

    pub fn between(from: NaiveDate, to: NaiveDate) -> Self {
        TimeRange::Between { from, to }
    }

    /// A one-day `between` window
    pub fn on(day: NaiveDate) -> Self {
        TimeRange::Between { from: day, to: day }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeRange::Today => write!(f, "today"),
            TimeRange::Yesterday => write!(f, "yesterday"),
            TimeRange::LastNDays { n } => write!(f, "last_n_days({})", n),
            TimeRange::Between { from, to } => write!(f, "between({}, {})", from, to),
        }
    }
}

/// The `type` tag of a time range document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeRangeKind {
    Today,
    Yesterday,
    LastNDays,
    Between,
}
