//! Time range resolver (verb module)
//!
//! Turns a symbolic `TimeRange` into a concrete half-open UTC interval.

mod error;
mod window;

pub use error::ResolveError;
pub use window::{midnight_utc, resolve_time_range, UtcInterval};
