//! vidnlq - Compile analytics questions about a video catalog to scalar queries
//!
//! This library provides:
//! - The query intent model (metric, measure, time range, filters)
//! - Strict validation of intent documents
//! - A deterministic Russian/English rule-based question parser
//! - Time range resolution to half-open UTC intervals
//! - Scalar query planning against `videos` / `video_snapshots`
//! - SQL emission and an in-memory reference executor
//!
//! # Architecture
//!
//! **Noun modules** (data structures):
//! - `intent/` - what is being asked (QueryIntent, Metric, Measure, TimeRange, Filters)
//! - `relations/` - the two source relations (column names, Video, VideoSnapshot, Dataset)
//! - `plan/` - logical plan types (PlanNode, Expr, Column, ScalarQuery)
//! - `config/` - deployment settings (Settings, FileConfig)
//!
//! **Verb modules** (transformations):
//! - `validator/` - JSON document → QueryIntent
//! - `parser/` - free text → QueryIntent
//! - `resolver/` - TimeRange + now → UtcInterval
//! - `builder/` - QueryIntent → ScalarQuery
//! - `emitter/` - ScalarQuery → SQL
//! - `executor/` - ScalarQuery → i64
//! - `service` - raw input → answer or user hint
//!
//! # Example
//!
//! ```
//! use vidnlq::{parse_intent, build_scalar_query, emit_sql, Metric};
//!
//! let intent = parse_intent("Сколько просмотров набрали видео за последние 7 дней?").unwrap();
//! assert_eq!(intent.metric, Metric::Views);
//!
//! let query = build_scalar_query(&intent).unwrap();
//! let sql = emit_sql(&query).unwrap();
//! assert!(sql.sql.starts_with("SELECT COALESCE(SUM(videos.views_count), 0)"));
//! ```

pub mod intent;
pub mod relations;
pub mod plan;
pub mod config;
pub mod validator;
pub mod parser;
pub mod resolver;
pub mod builder;
pub mod emitter;
pub mod executor;
pub mod service;
pub mod error;

// Re-export commonly used types
pub use intent::{Filters, Measure, Metric, QueryIntent, TimeRange};
pub use relations::{Dataset, Video, VideoSnapshot};
pub use plan::{PlanNode, Expr, Column, AggregateExpr, ScalarQuery};
pub use config::{FileConfig, Settings};
pub use validator::{intent_from_json, intent_from_value, validate, SchemaValidationError};
pub use parser::{parse_intent, ParseError};
pub use resolver::{resolve_time_range, ResolveError, UtcInterval};
pub use builder::{build_scalar_query, build_scalar_query_at, BuildError};
pub use emitter::{emit_sql, EmitError, SqlParam, SqlStatement};
pub use executor::{ExecError, MemoryStore, ScalarExecutor};
pub use service::{answer, interpret, interpret_request, user_hint};
pub use error::Error;
