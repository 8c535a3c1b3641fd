//! Resolver errors

use chrono::NaiveDate;

/// A time range cannot be turned into a UTC interval
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResolveError {
    #[error("last_n_days requires n >= 1, got {0}")]
    EmptyWindow(u32),
    #[error("between range ends ({to}) before it starts ({from})")]
    InvertedWindow { from: NaiveDate, to: NaiveDate },
    #[error("time range {0} falls outside the representable calendar")]
    OutOfRange(String),
}
