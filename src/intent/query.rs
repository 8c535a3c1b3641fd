//! The query intent and its filters

use serde::Serialize;

use super::metric::{Measure, Metric};
use super::time_range::TimeRange;

/// Optional row restrictions
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Filters {
    /// Only videos of this creator
    pub creator_id: Option<String>,
    /// Only videos whose current view count is at least this value (`final` only)
    pub min_views: Option<u64>,
    /// Count distinct videos instead of summing a counter (`delta_sum` only)
    pub unique_videos: bool,
}

impl Filters {
    pub fn is_empty(&self) -> bool {
        self.creator_id.is_none() && self.min_views.is_none() && !self.unique_videos
    }
}

/// A structured single-number question
///
/// Created per request and dropped once the corresponding query has run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryIntent {
    pub metric: Metric,
    pub measure: Measure,
    pub time_range: TimeRange,
    pub filters: Filters,
    /// How sure the producer of the intent is, in `[0, 1]`
    pub confidence: Option<f64>,
}

impl QueryIntent {
    pub fn new(metric: Metric, measure: Measure, time_range: TimeRange) -> Self {
        Self {
            metric,
            measure,
            time_range,
            filters: Filters::default(),
            confidence: None,
        }
    }

    pub fn with_filters(mut self, filters: Filters) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// `videos` can only be counted, never summed as deltas
    pub fn is_supported_combination(&self) -> bool {
        !(self.metric == Metric::Videos && self.measure == Measure::DeltaSum)
    }
}
