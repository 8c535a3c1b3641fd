//! Free text → QueryIntent

use tracing::debug;

use crate::intent::{Measure, Metric, QueryIntent};
use crate::validator::check_intent;
use super::error::ParseError;
use super::filters::extract_filters;
use super::rules::{detect_measure, detect_metric, detect_time_range};

/// Rule-based intents are fully determined by the tables
const RULE_CONFIDENCE: f64 = 1.0;

/// Parse a Russian or English question into a validated intent
///
/// Metric, measure, time range and filters are each decided by their own
/// ordered table. A video count combined with growth wording is rejected
/// before anything else is extracted.
pub fn parse_intent(text: &str) -> Result<QueryIntent, ParseError> {
    let text = text.trim();
    let low = text.to_lowercase();

    let metric = detect_metric(&low).ok_or(ParseError::UnsupportedMetric)?;
    let measure = detect_measure(&low);
    if metric == Metric::Videos && measure == Measure::DeltaSum {
        return Err(ParseError::UnsupportedCombination);
    }

    let filters = extract_filters(text);
    let (rule, time_range) = detect_time_range(text, &low)?;
    debug!(rule, %time_range, "time range rule matched");

    let intent = QueryIntent::new(metric, measure, time_range)
        .with_filters(filters)
        .with_confidence(RULE_CONFIDENCE);
    check_intent(&intent)?;

    debug!(metric = %intent.metric, measure = %intent.measure, "parsed question");
    Ok(intent)
}
