//! Parser errors

use crate::validator::SchemaValidationError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// No metric keyword found in the text
    #[error("Unsupported metric: the question mentions none of views, likes, comments, reports or videos")]
    UnsupportedMetric,
    /// Growth wording combined with a video count
    #[error("Unsupported combination: growth can be asked about views, likes, comments or reports, not about the number of videos")]
    UnsupportedCombination,
    /// A date literal matched a pattern but is not a calendar date
    #[error("Invalid date '{0}'")]
    InvalidDate(String),
    /// The extracted intent violates a model invariant
    #[error("Parsed intent is invalid: {0}")]
    Invalid(#[from] SchemaValidationError),
}
