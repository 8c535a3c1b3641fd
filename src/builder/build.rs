//! Plan building logic

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::intent::{Filters, Measure, Metric, QueryIntent};
use crate::plan::{
    Aggregate, AggregateExpr, Aggregation, BinaryOperator, Column, Expr, Filter, Join,
    Literal, PlanNode, Project, ProjectExpr, ScalarQuery, Scan,
};
use crate::relations::{video_snapshots, videos};
use crate::resolver::{resolve_time_range, UtcInterval};
use super::error::BuildError;

/// Name of the single column every scalar query returns
pub const OUTPUT_COLUMN: &str = "value";

/// Build the scalar query for an intent, resolving time against the current instant
pub fn build_scalar_query(intent: &QueryIntent) -> Result<ScalarQuery, BuildError> {
    build_scalar_query_at(intent, None)
}

/// Build the scalar query for an intent, resolving time against `now` when given
///
/// * `final` aggregates `videos` created in the window: a row count for
///   `videos`, otherwise the sum of the metric's counter column.
/// * `delta_sum` aggregates `video_snapshots` measured in the window: the
///   number of distinct videos when `unique_videos` is set, otherwise the sum
///   of the metric's delta column. `min_views` does not apply here.
///
/// The result is always wrapped in `COALESCE(.., 0)` so an empty window yields 0.
pub fn build_scalar_query_at(
    intent: &QueryIntent,
    now: Option<DateTime<Utc>>,
) -> Result<ScalarQuery, BuildError> {
    let unsupported = || BuildError::UnsupportedCombination {
        metric: intent.metric,
        measure: intent.measure,
    };
    if !intent.is_supported_combination() {
        return Err(unsupported());
    }

    let interval = resolve_time_range(&intent.time_range, now)?;

    let aggregated = match intent.measure {
        Measure::Final => plan_final(intent.metric, &intent.filters, &interval),
        Measure::DeltaSum => {
            let delta_column = intent.metric.delta_column().ok_or_else(unsupported)?;
            plan_delta(delta_column, &intent.filters, &interval)
        }
    };

    let plan = PlanNode::Project(Project {
        input: Box::new(aggregated),
        expressions: vec![ProjectExpr {
            expr: Expr::Coalesce(vec![
                Expr::Column(Column::unqualified(OUTPUT_COLUMN)),
                Expr::Literal(Literal::Int(0)),
            ]),
            alias: OUTPUT_COLUMN.to_string(),
        }],
    });

    debug!(
        metric = %intent.metric,
        measure = %intent.measure,
        source = plan.source_table(),
        join = plan.has_join(),
        "built scalar query"
    );

    Ok(ScalarQuery {
        plan,
        output: OUTPUT_COLUMN.to_string(),
        interval,
        metric: intent.metric,
        measure: intent.measure,
    })
}

fn plan_final(metric: Metric, filters: &Filters, interval: &UtcInterval) -> PlanNode {
    let mut predicates = window_predicates(videos::TABLE, videos::CREATED_AT, interval);
    if let Some(creator_id) = &filters.creator_id {
        predicates.push(creator_predicate(creator_id));
    }
    if let Some(min_views) = filters.min_views {
        predicates.push(Expr::compare(
            Expr::column(videos::TABLE, videos::VIEWS),
            BinaryOperator::GtEq,
            Expr::Literal(Literal::Int(saturating_i64(min_views))),
        ));
    }

    let filtered = filter(PlanNode::Scan(Scan::new(videos::TABLE)), predicates);

    // Rows of `videos` are already distinct per video, so `unique_videos`
    // does not change the count.
    let aggregate = match metric.video_column() {
        None => AggregateExpr {
            func: Aggregation::Count,
            expr: Expr::column(videos::TABLE, videos::ID),
            alias: OUTPUT_COLUMN.to_string(),
        },
        Some(counter) => AggregateExpr {
            func: Aggregation::Sum,
            expr: Expr::column(videos::TABLE, counter),
            alias: OUTPUT_COLUMN.to_string(),
        },
    };

    PlanNode::Aggregate(Aggregate {
        input: Box::new(filtered),
        aggregates: vec![aggregate],
    })
}

fn plan_delta(delta_column: &str, filters: &Filters, interval: &UtcInterval) -> PlanNode {
    let mut source = PlanNode::Scan(Scan::new(video_snapshots::TABLE));

    // The creator lives on `videos`; distinct counts join as well so both
    // variants see the same set of snapshots.
    if filters.unique_videos || filters.creator_id.is_some() {
        source = PlanNode::Join(Join {
            left: Box::new(source),
            right: Box::new(PlanNode::Scan(Scan::new(videos::TABLE))),
            left_key: Column::new(video_snapshots::TABLE, video_snapshots::VIDEO_ID),
            right_key: Column::new(videos::TABLE, videos::ID),
        });
    }

    let mut predicates = window_predicates(video_snapshots::TABLE, video_snapshots::CREATED_AT, interval);
    if let Some(creator_id) = &filters.creator_id {
        predicates.push(creator_predicate(creator_id));
    }

    let filtered = filter(source, predicates);

    let aggregate = if filters.unique_videos {
        AggregateExpr {
            func: Aggregation::CountDistinct,
            expr: Expr::column(video_snapshots::TABLE, video_snapshots::VIDEO_ID),
            alias: OUTPUT_COLUMN.to_string(),
        }
    } else {
        AggregateExpr {
            func: Aggregation::Sum,
            expr: Expr::column(video_snapshots::TABLE, delta_column),
            alias: OUTPUT_COLUMN.to_string(),
        }
    };

    PlanNode::Aggregate(Aggregate {
        input: Box::new(filtered),
        aggregates: vec![aggregate],
    })
}

/// `ts >= start AND ts < end`
fn window_predicates(table: &str, column: &str, interval: &UtcInterval) -> Vec<Expr> {
    vec![
        Expr::compare(
            Expr::column(table, column),
            BinaryOperator::GtEq,
            Expr::Literal(Literal::Timestamp(interval.start)),
        ),
        Expr::compare(
            Expr::column(table, column),
            BinaryOperator::Lt,
            Expr::Literal(Literal::Timestamp(interval.end)),
        ),
    ]
}

fn creator_predicate(creator_id: &str) -> Expr {
    Expr::compare(
        Expr::column(videos::TABLE, videos::CREATOR_ID),
        BinaryOperator::Eq,
        Expr::Literal(Literal::String(creator_id.to_string())),
    )
}

fn filter(input: PlanNode, predicates: Vec<Expr>) -> PlanNode {
    PlanNode::Filter(Filter {
        input: Box::new(input),
        predicate: Expr::And(predicates),
    })
}

fn saturating_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
