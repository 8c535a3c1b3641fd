//! Query builder (verb module)
//!
//! Transforms a validated `QueryIntent` into a `ScalarQuery` plan.

mod build;
mod error;

pub use build::{build_scalar_query, build_scalar_query_at, OUTPUT_COLUMN};
pub use error::BuildError;
