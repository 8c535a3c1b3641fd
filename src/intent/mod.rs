//! Query intent types (noun module)
//!
//! A `QueryIntent` is the fully structured form of a single-number question:
//! which counter, which measure, which time window and which filters.
//! Values of these types are produced by the `validator` (from documents) or
//! the `parser` (from free text) and consumed by the `resolver` and `builder`.

mod metric;
mod query;
mod time_range;

pub use metric::{Measure, Metric};
pub use query::{Filters, QueryIntent};
pub use time_range::{TimeRange, TimeRangeKind};
