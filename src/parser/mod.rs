//! Rule-based question parser (verb module)
//!
//! Transforms free Russian or English text into a `QueryIntent` using fixed,
//! ordered keyword and pattern tables. Matching is case-insensitive and
//! deterministic; the first rule that matches in each table wins.

mod dates;
mod error;
mod filters;
mod parse;
mod patterns;
mod rules;

pub use dates::{collect_dates, DateFamily, DATE_FAMILIES};
pub use error::ParseError;
pub use filters::extract_filters;
pub use parse::parse_intent;
pub use rules::{
    detect_measure, detect_metric, detect_time_range, TimeRule, ALL_TIME_DAYS, DELTA_KEYWORDS,
    METRIC_RULES, TIME_RULES,
};
