//! Scalar query execution (verb module)
//!
//! The builder only describes a query. Adapters implement `ScalarExecutor`
//! to run it: a relational adapter renders it with `emitter::emit_sql`,
//! while `MemoryStore` evaluates the plan directly over in-memory rows.

mod error;
mod memory;

pub use error::ExecError;
pub use memory::MemoryStore;

use crate::plan::ScalarQuery;

/// Runs a scalar query and returns its single integer
///
/// An empty window yields 0, never an error.
pub trait ScalarExecutor {
    fn fetch_scalar(&self, query: &ScalarQuery) -> Result<i64, ExecError>;
}

impl<T: ScalarExecutor + ?Sized> ScalarExecutor for &T {
    fn fetch_scalar(&self, query: &ScalarQuery) -> Result<i64, ExecError> {
        (**self).fetch_scalar(query)
    }
}
