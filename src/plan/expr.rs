//! Expression types for the logical plan

use chrono::{DateTime, Utc};

/// A column reference
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Relation name, empty for references to an aggregate output
    pub table: String,
    pub name: String,
}

impl Column {
    pub fn new(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            name: name.into(),
        }
    }

    /// Create an unqualified column reference (no table prefix)
    pub fn unqualified(name: impl Into<String>) -> Self {
        Self {
            table: String::new(),
            name: name.into(),
        }
    }

    /// Fully qualified name: table.column
    pub fn qualified_name(&self) -> String {
        if self.table.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.table, self.name)
        }
    }
}

/// Scalar expressions
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Column(Column),
    Literal(Literal),
    /// Binary comparison (e.g., a = b, a >= 5)
    BinaryOp {
        left: Box<Expr>,
        op: BinaryOperator,
        right: Box<Expr>,
    },
    /// AND of multiple expressions
    And(Vec<Expr>),
    /// First non-null value
    Coalesce(Vec<Expr>),
}

impl Expr {
    pub fn column(table: &str, name: &str) -> Self {
        Expr::Column(Column::new(table, name))
    }

    pub fn compare(left: Expr, op: BinaryOperator, right: Expr) -> Self {
        Expr::BinaryOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }
}

/// Literal values
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    String(String),
    Timestamp(DateTime<Utc>),
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BinaryOperator {
    Eq,
    Lt,
    GtEq,
}

impl BinaryOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOperator::Eq => "=",
            BinaryOperator::Lt => "<",
            BinaryOperator::GtEq => ">=",
        }
    }
}

/// Aggregate functions
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Aggregation {
    Sum,
    Count,
    CountDistinct,
}

/// An aggregate expression: func(expr) AS alias
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateExpr {
    pub func: Aggregation,
    pub expr: Expr,
    pub alias: String,
}
