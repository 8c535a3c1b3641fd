//! Builder errors

use crate::intent::{Measure, Metric};
use crate::resolver::ResolveError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BuildError {
    /// The metric cannot be aggregated with the requested measure
    #[error("Unsupported combination: measure '{measure}' is not supported for metric '{metric}'")]
    UnsupportedCombination { metric: Metric, measure: Measure },
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}
