//! External relations (noun module)
//!
//! The two read-only relations questions are answered against, their column
//! names, and row types for adapters that hold the data themselves.

mod rows;

pub use rows::{Dataset, Video, VideoSnapshot};

use crate::intent::Metric;

/// The `videos` relation: one row per video with its current counters
pub mod videos {
    pub const TABLE: &str = "videos";
    pub const ID: &str = "id";
    pub const CREATOR_ID: &str = "creator_id";
    pub const CREATED_AT: &str = "video_created_at";
    pub const VIEWS: &str = "views_count";
    pub const LIKES: &str = "likes_count";
    pub const COMMENTS: &str = "comments_count";
    pub const REPORTS: &str = "reports_count";
}

/// The `video_snapshots` relation: periodic measurements with per-period deltas
pub mod video_snapshots {
    pub const TABLE: &str = "video_snapshots";
    pub const ID: &str = "id";
    pub const VIDEO_ID: &str = "video_id";
    pub const CREATED_AT: &str = "created_at";
    pub const VIEWS: &str = "views_count";
    pub const LIKES: &str = "likes_count";
    pub const COMMENTS: &str = "comments_count";
    pub const REPORTS: &str = "reports_count";
    pub const DELTA_VIEWS: &str = "delta_views_count";
    pub const DELTA_LIKES: &str = "delta_likes_count";
    pub const DELTA_COMMENTS: &str = "delta_comments_count";
    pub const DELTA_REPORTS: &str = "delta_reports_count";
}

impl Metric {
    /// Cumulative counter column on `videos`, `None` for `videos`
    pub fn video_column(&self) -> Option<&'static str> {
        match self {
            Metric::Views => Some(videos::VIEWS),
            Metric::Likes => Some(videos::LIKES),
            Metric::Comments => Some(videos::COMMENTS),
            Metric::Reports => Some(videos::REPORTS),
            Metric::Videos => None,
        }
    }

    /// Delta column on `video_snapshots`, `None` for `videos`
    pub fn delta_column(&self) -> Option<&'static str> {
        match self {
            Metric::Views => Some(video_snapshots::DELTA_VIEWS),
            Metric::Likes => Some(video_snapshots::DELTA_LIKES),
            Metric::Comments => Some(video_snapshots::DELTA_COMMENTS),
            Metric::Reports => Some(video_snapshots::DELTA_REPORTS),
            Metric::Videos => None,
        }
    }
}
