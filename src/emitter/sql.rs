//! SQL emitter
//!
//! Flattens a scalar query plan into one `SELECT` statement. Text and
//! timestamp values are bound as positional parameters (`$1`, `$2`, ...) in
//! the order they appear; integers are inlined.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

use crate::plan::{
    Aggregate, AggregateExpr, Aggregation, Column, Expr, Join, Literal, PlanNode,
    ProjectExpr, ScalarQuery,
};
use super::error::EmitError;

/// A rendered statement with its bind parameters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SqlStatement {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

/// A bind parameter value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SqlParam {
    Text(String),
    Timestamp(DateTime<Utc>),
}

impl fmt::Display for SqlParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlParam::Text(s) => write!(f, "'{}'", s),
            SqlParam::Timestamp(ts) => write!(f, "{}", ts.to_rfc3339()),
        }
    }
}

/// Emit a parameterized SQL statement from a scalar query
pub fn emit_sql(query: &ScalarQuery) -> Result<SqlStatement, EmitError> {
    let mut writer = SqlWriter::default();
    let sql = writer.emit_select(&query.plan)?;
    debug!(sql = %sql, params = writer.params.len(), "emitted sql");
    Ok(SqlStatement {
        sql,
        params: writer.params,
    })
}

#[derive(Default)]
struct SqlWriter {
    params: Vec<SqlParam>,
}

impl SqlWriter {
    fn bind(&mut self, param: SqlParam) -> String {
        self.params.push(param);
        format!("${}", self.params.len())
    }

    // -----------------------------------------------------------------------
    // Statement shape
    // -----------------------------------------------------------------------

    fn emit_select(&mut self, node: &PlanNode) -> Result<String, EmitError> {
        let (items, body) = match node {
            PlanNode::Project(proj) => {
                let (outputs, input) = match proj.input.as_ref() {
                    PlanNode::Aggregate(agg) => (self.emit_aggregates(agg)?, agg.input.as_ref()),
                    other => (HashMap::new(), other),
                };
                let items = proj
                    .expressions
                    .iter()
                    .map(|pe| self.emit_projected(pe, &outputs))
                    .collect::<Result<Vec<_>, _>>()?;
                (items, self.emit_body(input)?)
            }
            PlanNode::Aggregate(agg) => {
                let items = agg
                    .aggregates
                    .iter()
                    .map(|a| Ok(format!("{} AS \"{}\"", self.emit_aggregate_expr(a)?, a.alias)))
                    .collect::<Result<Vec<_>, EmitError>>()?;
                (items, self.emit_body(&agg.input)?)
            }
            other => (vec!["*".to_string()], self.emit_body(other)?),
        };

        if items.is_empty() {
            return Err(EmitError::InvalidPlan("query selects no columns".to_string()));
        }
        Ok(format!("SELECT {}\n{}", items.join(", "), body))
    }

    /// Aggregate SQL keyed by output alias, for substitution into the projection
    fn emit_aggregates(&mut self, agg: &Aggregate) -> Result<HashMap<String, String>, EmitError> {
        agg.aggregates
            .iter()
            .map(|a| Ok((a.alias.clone(), self.emit_aggregate_expr(a)?)))
            .collect::<Result<HashMap<_, _>, EmitError>>()
    }

    fn emit_projected(
        &mut self,
        pe: &ProjectExpr,
        outputs: &HashMap<String, String>,
    ) -> Result<String, EmitError> {
        let expr_sql = self.emit_expr(&pe.expr, outputs)?;
        Ok(format!("{} AS \"{}\"", expr_sql, pe.alias))
    }

    fn emit_body(&mut self, node: &PlanNode) -> Result<String, EmitError> {
        match node {
            PlanNode::Filter(filter) => {
                let from = self.emit_from(&filter.input)?;
                let predicate = match &filter.predicate {
                    Expr::And(parts) if parts.is_empty() => return Ok(format!("FROM {}", from)),
                    Expr::And(parts) => parts
                        .iter()
                        .map(|p| self.emit_expr(p, &HashMap::new()))
                        .collect::<Result<Vec<_>, _>>()?
                        .join("\n  AND "),
                    other => self.emit_expr(other, &HashMap::new())?,
                };
                Ok(format!("FROM {}\nWHERE {}", from, predicate))
            }
            other => Ok(format!("FROM {}", self.emit_from(other)?)),
        }
    }

    fn emit_from(&mut self, node: &PlanNode) -> Result<String, EmitError> {
        match node {
            PlanNode::Scan(scan) => Ok(scan.table.clone()),
            PlanNode::Join(join) => self.emit_join(join),
            PlanNode::Filter(_) => Err(EmitError::UnsupportedNode("nested Filter".to_string())),
            PlanNode::Aggregate(_) => Err(EmitError::UnsupportedNode("nested Aggregate".to_string())),
            PlanNode::Project(_) => Err(EmitError::UnsupportedNode("nested Project".to_string())),
        }
    }

    fn emit_join(&mut self, join: &Join) -> Result<String, EmitError> {
        let left = self.emit_from(&join.left)?;
        let PlanNode::Scan(right) = join.right.as_ref() else {
            return Err(EmitError::UnsupportedNode("join with a non-scan right side".to_string()));
        };
        Ok(format!(
            "{left}\nJOIN {right} ON {lk} = {rk}",
            right = right.table,
            lk = emit_column(&join.left_key),
            rk = emit_column(&join.right_key),
        ))
    }

    // -----------------------------------------------------------------------
    // Expressions
    // -----------------------------------------------------------------------

    fn emit_expr(&mut self, expr: &Expr, outputs: &HashMap<String, String>) -> Result<String, EmitError> {
        match expr {
            Expr::Column(col) if col.table.is_empty() && !outputs.is_empty() => outputs
                .get(&col.name)
                .cloned()
                .ok_or_else(|| EmitError::UnknownAlias(col.name.clone())),
            Expr::Column(col) => Ok(emit_column(col)),
            Expr::Literal(lit) => Ok(self.emit_literal(lit)),
            Expr::BinaryOp { left, op, right } => {
                let l = self.emit_expr(left, outputs)?;
                let r = self.emit_expr(right, outputs)?;
                Ok(format!("{} {} {}", l, op.as_str(), r))
            }
            Expr::And(exprs) => {
                if exprs.is_empty() {
                    return Ok("TRUE".to_string());
                }
                let parts = exprs
                    .iter()
                    .map(|e| self.emit_expr(e, outputs))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(format!("({})", parts.join(" AND ")))
            }
            Expr::Coalesce(exprs) => {
                let parts = exprs
                    .iter()
                    .map(|e| self.emit_expr(e, outputs))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(format!("COALESCE({})", parts.join(", ")))
            }
        }
    }

    fn emit_literal(&mut self, lit: &Literal) -> String {
        match lit {
            Literal::Int(i) => i.to_string(),
            Literal::String(s) => self.bind(SqlParam::Text(s.clone())),
            Literal::Timestamp(ts) => self.bind(SqlParam::Timestamp(*ts)),
        }
    }

    fn emit_aggregate_expr(&mut self, agg: &AggregateExpr) -> Result<String, EmitError> {
        let inner = self.emit_expr(&agg.expr, &HashMap::new())?;
        Ok(match agg.func {
            Aggregation::Sum => format!("SUM({})", inner),
            Aggregation::Count => format!("COUNT({})", inner),
            Aggregation::CountDistinct => format!("COUNT(DISTINCT {})", inner),
        })
    }
}

fn emit_column(col: &Column) -> String {
    col.qualified_name()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_scalar_query_at;
    use crate::intent::{Filters, Measure, Metric, QueryIntent, TimeRange};
    use crate::plan::{BinaryOperator, Filter, Project, Scan};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 11, 20, 9, 0, 0).unwrap()
    }

    fn emit(intent: QueryIntent) -> SqlStatement {
        emit_sql(&build_scalar_query_at(&intent, Some(now())).unwrap()).unwrap()
    }

    #[test]
    fn test_sql_final_sum() {
        let stmt = emit(QueryIntent::new(Metric::Views, Measure::Final, TimeRange::Today));
        assert_eq!(
            stmt.sql,
            "SELECT COALESCE(SUM(videos.views_count), 0) AS \"value\"\n\
             FROM videos\n\
             WHERE videos.video_created_at >= $1\n  \
             AND videos.video_created_at < $2"
        );
        assert_eq!(
            stmt.params,
            vec![
                SqlParam::Timestamp(Utc.with_ymd_and_hms(2025, 11, 20, 0, 0, 0).unwrap()),
                SqlParam::Timestamp(Utc.with_ymd_and_hms(2025, 11, 21, 0, 0, 0).unwrap()),
            ]
        );
    }

    #[test]
    fn test_sql_video_count_with_filters() {
        let stmt = emit(
            QueryIntent::new(Metric::Videos, Measure::Final, TimeRange::last_n_days(7)).with_filters(Filters {
                creator_id: Some("aca1061a-9d32-4ae6-8ce3-7c3c2f1e3a55".into()),
                min_views: Some(100000),
                unique_videos: false,
            }),
        );
        assert!(stmt.sql.starts_with("SELECT COALESCE(COUNT(videos.id), 0) AS \"value\""));
        assert!(stmt.sql.contains("AND videos.creator_id = $3"));
        assert!(stmt.sql.contains("AND videos.views_count >= 100000"));
        assert_eq!(stmt.params.len(), 3);
        assert_eq!(
            stmt.params[2],
            SqlParam::Text("aca1061a-9d32-4ae6-8ce3-7c3c2f1e3a55".into())
        );
    }

    #[test]
    fn test_sql_delta_unique_videos_joins() {
        let stmt = emit(
            QueryIntent::new(Metric::Views, Measure::DeltaSum, TimeRange::Yesterday).with_filters(Filters {
                unique_videos: true,
                ..Default::default()
            }),
        );
        assert!(stmt.sql.contains("COUNT(DISTINCT video_snapshots.video_id)"));
        assert!(stmt
            .sql
            .contains("FROM video_snapshots\nJOIN videos ON video_snapshots.video_id = videos.id"));
        assert!(stmt.sql.contains("WHERE video_snapshots.created_at >= $1"));
    }

    #[test]
    fn test_sql_delta_sum_without_join() {
        let stmt = emit(QueryIntent::new(Metric::Likes, Measure::DeltaSum, TimeRange::Today));
        assert!(stmt.sql.contains("COALESCE(SUM(video_snapshots.delta_likes_count), 0)"));
        assert!(!stmt.sql.contains("JOIN"));
    }

    #[test]
    fn test_user_text_is_never_inlined() {
        let stmt = emit(
            QueryIntent::new(Metric::Views, Measure::Final, TimeRange::Today).with_filters(Filters {
                creator_id: Some("x'; DROP TABLE videos; --".into()),
                ..Default::default()
            }),
        );
        assert!(!stmt.sql.contains("DROP"));
        assert_eq!(stmt.params[2], SqlParam::Text("x'; DROP TABLE videos; --".into()));
    }

    #[test]
    fn test_unknown_alias_is_an_error() {
        let plan = PlanNode::Project(Project {
            input: Box::new(PlanNode::Aggregate(Aggregate {
                input: Box::new(PlanNode::Scan(Scan::new("videos"))),
                aggregates: vec![AggregateExpr {
                    func: Aggregation::Count,
                    expr: Expr::column("videos", "id"),
                    alias: "n".into(),
                }],
            })),
            expressions: vec![ProjectExpr {
                expr: Expr::Column(Column::unqualified("missing")),
                alias: "value".into(),
            }],
        });
        let mut writer = SqlWriter::default();
        assert_eq!(
            writer.emit_select(&plan),
            Err(EmitError::UnknownAlias("missing".into()))
        );
    }

    #[test]
    fn test_nested_filter_is_unsupported() {
        let inner = PlanNode::Filter(Filter {
            input: Box::new(PlanNode::Scan(Scan::new("videos"))),
            predicate: Expr::compare(
                Expr::column("videos", "id"),
                BinaryOperator::Eq,
                Expr::Literal(Literal::Int(1)),
            ),
        });
        let outer = PlanNode::Filter(Filter {
            input: Box::new(inner),
            predicate: Expr::And(vec![]),
        });
        let mut writer = SqlWriter::default();
        assert!(matches!(writer.emit_select(&outer), Err(EmitError::UnsupportedNode(_))));
    }

    #[test]
    fn test_param_display() {
        assert_eq!(SqlParam::Text("abc".into()).to_string(), "'abc'");
        assert_eq!(
            SqlParam::Timestamp(Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap()).to_string(),
            "2025-01-02T00:00:00+00:00"
        );
    }
}
