//! Validation pass: schema and invariants

use chrono::NaiveDate;
use serde_json::{Map, Value};
use tracing::debug;

use crate::intent::{Filters, Measure, Metric, QueryIntent, TimeRange, TimeRangeKind};
use super::error::SchemaValidationError;
use super::normalize::normalize;

const INTENT_FIELDS: &[&str] = &["metric", "measure", "time_range", "filters", "confidence"];
const TIME_RANGE_FIELDS: &[&str] = &["type", "n", "from", "to"];
const FILTER_FIELDS: &[&str] = &["creator_id", "min_views", "unique_videos"];

/// Parse, normalize and validate a JSON intent document
pub fn intent_from_json(json: &str) -> Result<QueryIntent, SchemaValidationError> {
    let doc: Value =
        serde_json::from_str(json).map_err(|e| SchemaValidationError::Json(e.to_string()))?;
    intent_from_value(doc)
}

/// Normalize then validate an untyped intent document
pub fn intent_from_value(doc: Value) -> Result<QueryIntent, SchemaValidationError> {
    validate(&normalize(doc))
}

/// Validate a (normalized) intent document
///
/// Unknown fields are rejected at every level. An absent `filters` is treated
/// as empty, so un-normalized documents are accepted as long as they are
/// otherwise complete.
pub fn validate(doc: &Value) -> Result<QueryIntent, SchemaValidationError> {
    let root = as_object(doc, "<root>")?;
    reject_unknown(root, "", INTENT_FIELDS)?;

    let metric: Metric = parse_enum(root, "metric")?;
    let measure: Measure = parse_enum(root, "measure")?;

    let time_range = match root.get("time_range") {
        None | Some(Value::Null) => {
            return Err(SchemaValidationError::MissingField("time_range".to_string()))
        }
        Some(value) => validate_time_range(value)?,
    };

    let filters = match root.get("filters") {
        None | Some(Value::Null) => Filters::default(),
        Some(value) => validate_filters(value)?,
    };

    let confidence = match root.get("confidence") {
        None | Some(Value::Null) => None,
        Some(value) => Some(validate_confidence(value)?),
    };

    let intent = QueryIntent {
        metric,
        measure,
        time_range,
        filters,
        confidence,
    };
    debug!(metric = %intent.metric, measure = %intent.measure, time_range = %intent.time_range, "validated intent document");
    Ok(intent)
}

/// Check the invariants of an already typed intent
///
/// Used for intents built in code (e.g. by the parser) that never went
/// through a document.
pub fn check_intent(intent: &QueryIntent) -> Result<(), SchemaValidationError> {
    match intent.time_range {
        TimeRange::LastNDays { n } if n < 1 => {
            return Err(out_of_range("time_range.n", ">= 1", n));
        }
        TimeRange::Between { from, to } if to < from => {
            return Err(SchemaValidationError::InvertedRange { from, to });
        }
        _ => {}
    }
    if let Some(confidence) = intent.confidence {
        if !(0.0..=1.0).contains(&confidence) {
            return Err(out_of_range("confidence", "in [0, 1]", confidence));
        }
    }
    Ok(())
}

fn validate_time_range(value: &Value) -> Result<TimeRange, SchemaValidationError> {
    let obj = as_object(value, "time_range")?;
    reject_unknown(obj, "time_range.", TIME_RANGE_FIELDS)?;

    let kind: TimeRangeKind = parse_enum_at(obj, "type", "time_range.type")?;
    let n = optional_integer(obj, "n", "time_range.n")?;
    let from = optional_date(obj, "from", "time_range.from")?;
    let to = optional_date(obj, "to", "time_range.to")?;

    let n = match n {
        Some(n) if n < 1 => return Err(out_of_range("time_range.n", ">= 1", n)),
        Some(n) => Some(
            u32::try_from(n).map_err(|_| out_of_range("time_range.n", "<= 4294967295", n))?,
        ),
        None => None,
    };

    match kind {
        TimeRangeKind::Today => Ok(TimeRange::Today),
        TimeRangeKind::Yesterday => Ok(TimeRange::Yesterday),
        TimeRangeKind::LastNDays => {
            let n = n.ok_or_else(|| SchemaValidationError::MissingField("time_range.n".to_string()))?;
            Ok(TimeRange::LastNDays { n })
        }
        TimeRangeKind::Between => {
            let from = from
                .ok_or_else(|| SchemaValidationError::MissingField("time_range.from".to_string()))?;
            let to =
                to.ok_or_else(|| SchemaValidationError::MissingField("time_range.to".to_string()))?;
            if to < from {
                return Err(SchemaValidationError::InvertedRange { from, to });
            }
            Ok(TimeRange::Between { from, to })
        }
    }
}

fn validate_filters(value: &Value) -> Result<Filters, SchemaValidationError> {
    let obj = as_object(value, "filters")?;
    reject_unknown(obj, "filters.", FILTER_FIELDS)?;

    let creator_id = match obj.get("creator_id") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            return Err(SchemaValidationError::invalid(
                "filters.creator_id",
                format!("expected a string, got {}", other),
            ))
        }
    };

    let min_views = match optional_integer(obj, "min_views", "filters.min_views")? {
        Some(n) if n < 0 => return Err(out_of_range("filters.min_views", ">= 0", n)),
        Some(n) => Some(n as u64),
        None => None,
    };

    let unique_videos = match obj.get("unique_videos") {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(other) => {
            return Err(SchemaValidationError::invalid(
                "filters.unique_videos",
                format!("expected a boolean, got {}", other),
            ))
        }
    };

    Ok(Filters {
        creator_id,
        min_views,
        unique_videos,
    })
}

fn validate_confidence(value: &Value) -> Result<f64, SchemaValidationError> {
    let confidence = value.as_f64().ok_or_else(|| {
        SchemaValidationError::invalid("confidence", format!("expected a number, got {}", value))
    })?;
    if !(0.0..=1.0).contains(&confidence) {
        return Err(out_of_range("confidence", "in [0, 1]", confidence));
    }
    Ok(confidence)
}

// ---------------------------------------------------------------------------
// Field helpers
// ---------------------------------------------------------------------------

fn as_object<'a>(value: &'a Value, field: &str) -> Result<&'a Map<String, Value>, SchemaValidationError> {
    value
        .as_object()
        .ok_or_else(|| SchemaValidationError::NotAnObject(field.to_string()))
}

fn reject_unknown(
    obj: &Map<String, Value>,
    prefix: &str,
    allowed: &[&str],
) -> Result<(), SchemaValidationError> {
    match obj.keys().find(|k| !allowed.contains(&k.as_str())) {
        Some(unknown) => Err(SchemaValidationError::UnknownField(format!("{}{}", prefix, unknown))),
        None => Ok(()),
    }
}

fn parse_enum<T>(obj: &Map<String, Value>, key: &str) -> Result<T, SchemaValidationError>
where
    T: serde::de::DeserializeOwned,
{
    parse_enum_at(obj, key, key)
}

fn parse_enum_at<T>(obj: &Map<String, Value>, key: &str, field: &str) -> Result<T, SchemaValidationError>
where
    T: serde::de::DeserializeOwned,
{
    match obj.get(key) {
        None | Some(Value::Null) => Err(SchemaValidationError::MissingField(field.to_string())),
        Some(value) => serde_json::from_value(value.clone())
            .map_err(|e| SchemaValidationError::invalid(field, e.to_string())),
    }
}

fn optional_integer(
    obj: &Map<String, Value>,
    key: &str,
    field: &str,
) -> Result<Option<i64>, SchemaValidationError> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value.as_i64().map(Some).ok_or_else(|| {
            SchemaValidationError::invalid(field, format!("expected an integer, got {}", value))
        }),
    }
}

fn optional_date(
    obj: &Map<String, Value>,
    key: &str,
    field: &str,
) -> Result<Option<NaiveDate>, SchemaValidationError> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(|e| SchemaValidationError::invalid(field, format!("'{}': {}", s, e))),
        Some(other) => Err(SchemaValidationError::invalid(
            field,
            format!("expected a YYYY-MM-DD date, got {}", other),
        )),
    }
}

fn out_of_range(field: &str, expected: &'static str, value: impl ToString) -> SchemaValidationError {
    SchemaValidationError::OutOfRange {
        field: field.to_string(),
        expected,
        value: value.to_string(),
    }
}
