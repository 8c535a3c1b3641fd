//! In-memory reference executor

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::plan::{
    Aggregate, AggregateExpr, Aggregation, BinaryOperator, Column, Expr, Literal,
    PlanNode, ScalarQuery,
};
use crate::relations::{video_snapshots, videos, Dataset, Video, VideoSnapshot};
use super::error::ExecError;
use super::ScalarExecutor;

/// Holds both relations in memory and evaluates plans over them
///
/// Follows the same semantics a relational store would: half-open windows
/// come from the plan's predicates, `SUM` over no rows is `NULL`, `COUNT`
/// over no rows is 0, and `COALESCE` picks the first non-null value.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    videos: Vec<Video>,
    snapshots: Vec<VideoSnapshot>,
}

impl MemoryStore {
    pub fn new(videos: Vec<Video>, snapshots: Vec<VideoSnapshot>) -> Self {
        Self { videos, snapshots }
    }

    fn rows(&self, node: &PlanNode) -> Result<Vec<Row<'_>>, ExecError> {
        match node {
            PlanNode::Scan(scan) => match scan.table.as_str() {
                videos::TABLE => Ok(self.videos.iter().map(Row::video).collect()),
                video_snapshots::TABLE => Ok(self.snapshots.iter().map(Row::snapshot).collect()),
                other => Err(ExecError::UnknownTable(other.to_string())),
            },
            PlanNode::Join(join) => {
                let left = self.rows(&join.left)?;
                let right = self.rows(&join.right)?;
                let mut joined = Vec::new();
                for l in &left {
                    let key = l.get(&join.left_key)?;
                    for r in &right {
                        if compare(&key, BinaryOperator::Eq, &r.get(&join.right_key)?)? {
                            joined.push(l.merge(r));
                        }
                    }
                }
                Ok(joined)
            }
            PlanNode::Filter(filter) => {
                let mut kept = Vec::new();
                for row in self.rows(&filter.input)? {
                    if matches(&filter.predicate, &row)? {
                        kept.push(row);
                    }
                }
                Ok(kept)
            }
            PlanNode::Aggregate(_) => Err(ExecError::UnsupportedNode("nested aggregate")),
            PlanNode::Project(_) => Err(ExecError::UnsupportedNode("nested projection")),
        }
    }

    fn aggregate(&self, agg: &Aggregate) -> Result<HashMap<String, Option<i64>>, ExecError> {
        let rows = self.rows(&agg.input)?;
        agg.aggregates
            .iter()
            .map(|expr| Ok((expr.alias.clone(), aggregate_rows(expr, &rows)?)))
            .collect()
    }
}

impl From<Dataset> for MemoryStore {
    fn from(dataset: Dataset) -> Self {
        Self::new(dataset.videos, dataset.snapshots)
    }
}

impl ScalarExecutor for MemoryStore {
    fn fetch_scalar(&self, query: &ScalarQuery) -> Result<i64, ExecError> {
        let value = match &query.plan {
            PlanNode::Project(project) => {
                let values = match project.input.as_ref() {
                    PlanNode::Aggregate(agg) => self.aggregate(agg)?,
                    _ => return Err(ExecError::UnsupportedNode("projection without aggregate")),
                };
                let output = project
                    .expressions
                    .iter()
                    .find(|p| p.alias == query.output)
                    .ok_or_else(|| ExecError::MissingOutput(query.output.clone()))?;
                eval_output(&output.expr, &values)?
            }
            PlanNode::Aggregate(agg) => self
                .aggregate(agg)?
                .remove(&query.output)
                .ok_or_else(|| ExecError::MissingOutput(query.output.clone()))?,
            _ => return Err(ExecError::UnsupportedNode("query root must aggregate")),
        };

        let value = value.unwrap_or(0);
        debug!(source = query.source_table(), value, "evaluated scalar query in memory");
        Ok(value)
    }
}

/// One row of a scan or join: references into the relations it came from
#[derive(Debug, Clone, Copy, Default)]
struct Row<'a> {
    video: Option<&'a Video>,
    snapshot: Option<&'a VideoSnapshot>,
}

impl<'a> Row<'a> {
    fn video(video: &'a Video) -> Self {
        Self { video: Some(video), snapshot: None }
    }

    fn snapshot(snapshot: &'a VideoSnapshot) -> Self {
        Self { video: None, snapshot: Some(snapshot) }
    }

    fn merge(&self, other: &Row<'a>) -> Self {
        Self {
            video: self.video.or(other.video),
            snapshot: self.snapshot.or(other.snapshot),
        }
    }

    fn get(&self, column: &Column) -> Result<Cell, ExecError> {
        match column.table.as_str() {
            videos::TABLE => match self.video {
                Some(video) => video_cell(video, &column.name),
                None => Ok(Cell::Null),
            },
            video_snapshots::TABLE => match self.snapshot {
                Some(snapshot) => snapshot_cell(snapshot, &column.name),
                None => Ok(Cell::Null),
            },
            other => Err(ExecError::UnknownTable(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Cell {
    Null,
    Int(i64),
    Id(Uuid),
    Text(String),
    Timestamp(DateTime<Utc>),
}

fn video_cell(video: &Video, name: &str) -> Result<Cell, ExecError> {
    match name {
        videos::ID => Ok(Cell::Id(video.id)),
        videos::CREATOR_ID => Ok(Cell::Id(video.creator_id)),
        videos::CREATED_AT => Ok(Cell::Timestamp(video.video_created_at)),
        other => video
            .column(other)
            .map(Cell::Int)
            .ok_or_else(|| ExecError::UnknownColumn(format!("{}.{}", videos::TABLE, other))),
    }
}

fn snapshot_cell(snapshot: &VideoSnapshot, name: &str) -> Result<Cell, ExecError> {
    match name {
        video_snapshots::ID => Ok(Cell::Id(snapshot.id)),
        video_snapshots::VIDEO_ID => Ok(Cell::Id(snapshot.video_id)),
        video_snapshots::CREATED_AT => Ok(Cell::Timestamp(snapshot.created_at)),
        other => snapshot.column(other).map(Cell::Int).ok_or_else(|| {
            ExecError::UnknownColumn(format!("{}.{}", video_snapshots::TABLE, other))
        }),
    }
}

fn eval(expr: &Expr, row: &Row<'_>) -> Result<Cell, ExecError> {
    match expr {
        Expr::Column(column) => row.get(column),
        Expr::Literal(Literal::Int(n)) => Ok(Cell::Int(*n)),
        Expr::Literal(Literal::String(s)) => Ok(Cell::Text(s.clone())),
        Expr::Literal(Literal::Timestamp(ts)) => Ok(Cell::Timestamp(*ts)),
        other => Err(ExecError::TypeMismatch(format!("{other:?} is not a row value"))),
    }
}

fn matches(predicate: &Expr, row: &Row<'_>) -> Result<bool, ExecError> {
    match predicate {
        Expr::And(parts) => {
            for part in parts {
                if !matches(part, row)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        Expr::BinaryOp { left, op, right } => compare(&eval(left, row)?, *op, &eval(right, row)?),
        other => Err(ExecError::TypeMismatch(format!("{other:?} is not a predicate"))),
    }
}

/// SQL comparison: anything against `NULL` is false
///
/// A text value compared with an id is parsed as a UUID first; text that is
/// not a UUID matches nothing.
fn compare(left: &Cell, op: BinaryOperator, right: &Cell) -> Result<bool, ExecError> {
    let ordering = match (left, right) {
        (Cell::Null, _) | (_, Cell::Null) => return Ok(false),
        (Cell::Int(a), Cell::Int(b)) => a.cmp(b),
        (Cell::Timestamp(a), Cell::Timestamp(b)) => a.cmp(b),
        (Cell::Id(a), Cell::Id(b)) => a.cmp(b),
        (Cell::Text(a), Cell::Text(b)) => a.cmp(b),
        (Cell::Id(id), Cell::Text(text)) | (Cell::Text(text), Cell::Id(id))
            if op == BinaryOperator::Eq =>
        {
            return Ok(Uuid::parse_str(text).is_ok_and(|parsed| parsed == *id));
        }
        (l, r) => {
            return Err(ExecError::TypeMismatch(format!(
                "cannot compare {l:?} {} {r:?}",
                op.as_str()
            )))
        }
    };
    Ok(match op {
        BinaryOperator::Eq => ordering.is_eq(),
        BinaryOperator::Lt => ordering.is_lt(),
        BinaryOperator::GtEq => ordering.is_ge(),
    })
}

fn aggregate_rows(agg: &AggregateExpr, rows: &[Row<'_>]) -> Result<Option<i64>, ExecError> {
    let mut cells = Vec::with_capacity(rows.len());
    for row in rows {
        match eval(&agg.expr, row)? {
            Cell::Null => {}
            cell => cells.push(cell),
        }
    }

    match agg.func {
        Aggregation::Count => Ok(Some(cells.len() as i64)),
        Aggregation::CountDistinct => {
            Ok(Some(cells.into_iter().collect::<HashSet<_>>().len() as i64))
        }
        Aggregation::Sum => {
            if cells.is_empty() {
                return Ok(None);
            }
            let sum = cells.iter().try_fold(0i64, |sum, cell| match cell {
                Cell::Int(n) => sum.checked_add(*n).ok_or(ExecError::Overflow),
                other => Err(ExecError::TypeMismatch(format!("cannot sum {other:?}"))),
            })?;
            Ok(Some(sum))
        }
    }
}

/// Evaluate a projection over the aggregate output
fn eval_output(expr: &Expr, values: &HashMap<String, Option<i64>>) -> Result<Option<i64>, ExecError> {
    match expr {
        Expr::Column(column) => values
            .get(&column.name)
            .copied()
            .ok_or_else(|| ExecError::UnknownColumn(column.qualified_name())),
        Expr::Literal(Literal::Int(n)) => Ok(Some(*n)),
        Expr::Coalesce(items) => {
            for item in items {
                if let Some(value) = eval_output(item, values)? {
                    return Ok(Some(value));
                }
            }
            Ok(None)
        }
        other => Err(ExecError::TypeMismatch(format!("{other:?} is not an aggregate output"))),
    }
}
