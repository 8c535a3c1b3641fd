//! Plan node types

use super::expr::{AggregateExpr, Column, Expr};

/// A node in the logical plan tree
#[derive(Debug, Clone, PartialEq)]
pub enum PlanNode {
    /// Scan a relation
    Scan(Scan),
    /// Join two relations
    Join(Join),
    /// Filter rows
    Filter(Filter),
    /// Aggregate all input rows into one row
    Aggregate(Aggregate),
    /// Compute output columns from the input row
    Project(Project),
}

impl PlanNode {
    /// Name of the relation at the bottom of the left-most path
    pub fn source_table(&self) -> &str {
        match self {
            PlanNode::Scan(scan) => &scan.table,
            PlanNode::Join(join) => join.left.source_table(),
            PlanNode::Filter(filter) => filter.input.source_table(),
            PlanNode::Aggregate(agg) => agg.input.source_table(),
            PlanNode::Project(proj) => proj.input.source_table(),
        }
    }

    /// Whether any node in the tree is a join
    pub fn has_join(&self) -> bool {
        match self {
            PlanNode::Scan(_) => false,
            PlanNode::Join(_) => true,
            PlanNode::Filter(filter) => filter.input.has_join(),
            PlanNode::Aggregate(agg) => agg.input.has_join(),
            PlanNode::Project(proj) => proj.input.has_join(),
        }
    }
}

/// Scan a relation
#[derive(Debug, Clone, PartialEq)]
pub struct Scan {
    pub table: String,
}

impl Scan {
    pub fn new(table: impl Into<String>) -> Self {
        Self { table: table.into() }
    }
}

/// Inner join of two relations on one key pair
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub left: Box<PlanNode>,
    pub right: Box<PlanNode>,
    pub left_key: Column,
    pub right_key: Column,
}

/// Filter rows (WHERE clause)
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub input: Box<PlanNode>,
    pub predicate: Expr,
}

/// Aggregate without grouping: always yields exactly one row
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate {
    pub input: Box<PlanNode>,
    pub aggregates: Vec<AggregateExpr>,
}

/// Project computed expressions over the input row
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub input: Box<PlanNode>,
    pub expressions: Vec<ProjectExpr>,
}

/// A projected expression with its output alias
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectExpr {
    /// May reference aggregate outputs of the input by alias
    pub expr: Expr,
    pub alias: String,
}
