//! Metric and measure enumerations

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which counter (or the video count itself) a question is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Views,
    Likes,
    Comments,
    Reports,
    /// Number of videos rather than a counter
    Videos,
}

impl Metric {
    pub const ALL: [Metric; 5] = [
        Metric::Views,
        Metric::Likes,
        Metric::Comments,
        Metric::Reports,
        Metric::Videos,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Views => "views",
            Metric::Likes => "likes",
            Metric::Comments => "comments",
            Metric::Reports => "reports",
            Metric::Videos => "videos",
        }
    }

    /// Whether the metric names a summable counter (everything except `videos`)
    pub fn is_counter(&self) -> bool {
        !matches!(self, Metric::Videos)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the metric is aggregated over the time window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Measure {
    /// Current cumulative counters of videos created in the window
    Final,
    /// Sum of snapshot deltas measured in the window
    DeltaSum,
}

impl Measure {
    pub fn as_str(&self) -> &'static str {
        match self {
            Measure::Final => "final",
            Measure::DeltaSum => "delta_sum",
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_documents() {
        for metric in Metric::ALL {
            let name = serde_json::to_value(metric).unwrap();
            assert_eq!(name, metric.as_str());
        }
        assert_eq!(Measure::DeltaSum.to_string(), "delta_sum");
    }

    #[test]
    fn test_measure_serde_names() {
        assert_eq!(serde_json::to_string(&Measure::DeltaSum).unwrap(), "\"delta_sum\"");
        assert_eq!(serde_json::to_string(&Metric::Reports).unwrap(), "\"reports\"");
    }

    #[test]
    fn test_only_videos_is_not_a_counter() {
        assert!(!Metric::Videos.is_counter());
        assert!(Metric::Likes.is_counter());
    }
}
