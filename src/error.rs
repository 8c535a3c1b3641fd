//! Error types for vidnlq

use crate::builder::BuildError;
use crate::emitter::EmitError;
use crate::executor::ExecError;
use crate::parser::ParseError;
use crate::resolver::ResolveError;
use crate::validator::SchemaValidationError;

/// Any failure between a question and its number
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Schema(#[from] SchemaValidationError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error(transparent)]
    Emit(#[from] EmitError),
    #[error(transparent)]
    Exec(#[from] ExecError),
}

impl Error {
    /// The question asks for growth of the video count
    pub fn is_unsupported_combination(&self) -> bool {
        matches!(
            self,
            Error::Parse(ParseError::UnsupportedCombination)
                | Error::Build(BuildError::UnsupportedCombination { .. })
        )
    }

    /// The question names no known metric
    pub fn is_unsupported_metric(&self) -> bool {
        matches!(self, Error::Parse(ParseError::UnsupportedMetric))
    }
}
