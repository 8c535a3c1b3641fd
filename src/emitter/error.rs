//! Emitter errors

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EmitError {
    /// Plan node in a position a flat SELECT cannot express
    #[error("Unsupported plan node: {0}")]
    UnsupportedNode(String),
    /// Projection references an aggregate output that does not exist
    #[error("Unknown aggregate output: {0}")]
    UnknownAlias(String),
    #[error("Invalid plan: {0}")]
    InvalidPlan(String),
}
