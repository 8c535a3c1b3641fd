//! Validator errors

use chrono::NaiveDate;

/// A structured intent is malformed or contradictory
///
/// Every variant names the offending field path, e.g. `time_range.n` or
/// `filters.min_views`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaValidationError {
    #[error("Malformed JSON document: {0}")]
    Json(String),
    #[error("'{0}' must be an object")]
    NotAnObject(String),
    #[error("Unknown field '{0}'")]
    UnknownField(String),
    #[error("Missing required field '{0}'")]
    MissingField(String),
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
    #[error("'{field}' must be {expected}, got {value}")]
    OutOfRange {
        field: String,
        expected: &'static str,
        value: String,
    },
    #[error("'time_range.to' ({to}) must not be earlier than 'time_range.from' ({from})")]
    InvertedRange { from: NaiveDate, to: NaiveDate },
}

impl SchemaValidationError {
    /// Path of the field that failed validation
    pub fn field(&self) -> &str {
        match self {
            SchemaValidationError::Json(_) => "",
            SchemaValidationError::NotAnObject(field)
            | SchemaValidationError::UnknownField(field)
            | SchemaValidationError::MissingField(field) => field,
            SchemaValidationError::InvalidValue { field, .. }
            | SchemaValidationError::OutOfRange { field, .. } => field,
            SchemaValidationError::InvertedRange { .. } => "time_range.to",
        }
    }

    pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
        SchemaValidationError::InvalidValue {
            field: field.to_string(),
            message: message.into(),
        }
    }
}
