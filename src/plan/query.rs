//! The scalar query descriptor handed to storage adapters

use crate::intent::{Measure, Metric};
use crate::resolver::UtcInterval;
use super::node::PlanNode;

/// One aggregate query that yields exactly one integer
///
/// The builder never runs it; an adapter either renders it (see
/// `emitter::emit_sql`) or evaluates it (see `executor`).
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarQuery {
    pub plan: PlanNode,
    /// Name of the single output column
    pub output: String,
    /// The resolved window the plan is scoped to
    pub interval: UtcInterval,
    pub metric: Metric,
    pub measure: Measure,
}

impl ScalarQuery {
    pub fn source_table(&self) -> &str {
        self.plan.source_table()
    }
}
