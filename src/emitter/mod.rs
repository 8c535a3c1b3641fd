//! SQL emitter (verb module)
//!
//! Transforms a `ScalarQuery` into a single parameterized SQL statement.

mod error;
mod sql;

pub use error::EmitError;
pub use sql::{emit_sql, SqlParam, SqlStatement};
