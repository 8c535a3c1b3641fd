//! Executor errors

/// A scalar query could not be evaluated
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExecError {
    #[error("Unknown table '{0}'")]
    UnknownTable(String),
    #[error("Unknown column '{0}'")]
    UnknownColumn(String),
    #[error("Unsupported plan node: {0}")]
    UnsupportedNode(&'static str),
    #[error("Type mismatch: {0}")]
    TypeMismatch(String),
    #[error("Query has no output column '{0}'")]
    MissingOutput(String),
    #[error("Aggregate overflowed a 64-bit integer")]
    Overflow,
    /// Failure reported by a backing store
    #[error("Storage error: {0}")]
    Storage(String),
}
