//! Logical plan types (noun module)
//!
//! A small relational algebra tree describing one scalar aggregate query.
//! The `builder` produces it, the `emitter` renders it as SQL and an
//! `executor` may evaluate it directly.

mod expr;
mod node;
mod query;

pub use expr::{AggregateExpr, Aggregation, BinaryOperator, Column, Expr, Literal};
pub use node::{Aggregate, Filter, Join, PlanNode, Project, ProjectExpr, Scan};
pub use query::ScalarQuery;
