//! Intent validator (verb module)
//!
//! Turns an untyped JSON document into a `QueryIntent` in two ordered passes:
//! `normalize` fills defaults and one-sided `between` ranges, then `validate`
//! checks the schema and the intent invariants.

mod error;
mod normalize;
mod validate;

pub use error::SchemaValidationError;
pub use normalize::normalize;
pub use validate::{check_intent, intent_from_json, intent_from_value, validate};
