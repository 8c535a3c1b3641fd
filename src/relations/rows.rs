//! Row types for the external relations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A row of `videos`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: Uuid,
    pub creator_id: Uuid,
    pub video_created_at: DateTime<Utc>,
    #[serde(default)]
    pub views_count: i64,
    #[serde(default)]
    pub likes_count: i64,
    #[serde(default)]
    pub comments_count: i64,
    #[serde(default)]
    pub reports_count: i64,
}

impl Video {
    /// Read a counter column by name
    pub fn column(&self, name: &str) -> Option<i64> {
        match name {
            "views_count" => Some(self.views_count),
            "likes_count" => Some(self.likes_count),
            "comments_count" => Some(self.comments_count),
            "reports_count" => Some(self.reports_count),
            _ => None,
        }
    }
}

/// A row of `video_snapshots`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoSnapshot {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub video_id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub views_count: i64,
    #[serde(default)]
    pub likes_count: i64,
    #[serde(default)]
    pub comments_count: i64,
    #[serde(default)]
    pub reports_count: i64,
    #[serde(default)]
    pub delta_views_count: i64,
    #[serde(default)]
    pub delta_likes_count: i64,
    #[serde(default)]
    pub delta_comments_count: i64,
    #[serde(default)]
    pub delta_reports_count: i64,
}

impl VideoSnapshot {
    /// Read a counter or delta column by name
    pub fn column(&self, name: &str) -> Option<i64> {
        match name {
            "views_count" => Some(self.views_count),
            "likes_count" => Some(self.likes_count),
            "comments_count" => Some(self.comments_count),
            "reports_count" => Some(self.reports_count),
            "delta_views_count" => Some(self.delta_views_count),
            "delta_likes_count" => Some(self.delta_likes_count),
            "delta_comments_count" => Some(self.delta_comments_count),
            "delta_reports_count" => Some(self.delta_reports_count),
            _ => None,
        }
    }
}

/// Both relations loaded from the JSON export format
///
/// ```json
/// {"videos": [{"id": "...", "creator_id": "...", "video_created_at": "...",
///              "views_count": 10, "snapshots": [{"created_at": "...", "delta_views_count": 3}]}]}
/// ```
///
/// Snapshot `video_id` is taken from the enclosing video.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub videos: Vec<Video>,
    pub snapshots: Vec<VideoSnapshot>,
}

#[derive(Deserialize)]
struct ExportFile {
    videos: Vec<ExportVideo>,
}

#[derive(Deserialize)]
struct ExportVideo {
    #[serde(flatten)]
    video: Video,
    #[serde(default)]
    snapshots: Vec<ExportSnapshot>,
}

#[derive(Deserialize)]
struct ExportSnapshot {
    #[serde(default = "Uuid::new_v4")]
    id: Uuid,
    created_at: DateTime<Utc>,
    #[serde(default)]
    views_count: i64,
    #[serde(default)]
    likes_count: i64,
    #[serde(default)]
    comments_count: i64,
    #[serde(default)]
    reports_count: i64,
    #[serde(default)]
    delta_views_count: i64,
    #[serde(default)]
    delta_likes_count: i64,
    #[serde(default)]
    delta_comments_count: i64,
    #[serde(default)]
    delta_reports_count: i64,
}

impl Dataset {
    /// Parse the JSON export format
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let file: ExportFile = serde_json::from_str(json)?;
        let mut dataset = Dataset::default();
        for entry in file.videos {
            let video_id = entry.video.id;
            dataset.snapshots.extend(entry.snapshots.into_iter().map(|s| VideoSnapshot {
                id: s.id,
                video_id,
                created_at: s.created_at,
                views_count: s.views_count,
                likes_count: s.likes_count,
                comments_count: s.comments_count,
                reports_count: s.reports_count,
                delta_views_count: s.delta_views_count,
                delta_likes_count: s.delta_likes_count,
                delta_comments_count: s.delta_comments_count,
                delta_reports_count: s.delta_reports_count,
            }));
            dataset.videos.push(entry.video);
        }
        Ok(dataset)
    }
}
