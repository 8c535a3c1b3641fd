//! Filter extraction
//!
//! Each filter is extracted independently; any combination may be present.

use crate::intent::Filters;
use super::patterns::{MIN_VIEWS_PATTERN, UNIQUE_VIDEOS_PATTERN, UUID_PATTERN};

/// Extract creator, minimum-views and distinct-videos filters from the text
pub fn extract_filters(text: &str) -> Filters {
    let creator_id = UUID_PATTERN.find(text).map(|m| m.as_str().to_string());

    let min_views = MIN_VIEWS_PATTERN
        .captures(text)
        .and_then(|caps| caps["n"].parse::<u64>().ok());

    let unique_videos = UNIQUE_VIDEOS_PATTERN.is_match(text);

    Filters {
        creator_id,
        min_views,
        unique_videos,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creator_id() {
        let filters = extract_filters("видео креатора aca1061a-9d32-4ae6-8ce3-7c3c2f1e3a55 за ноябрь");
        assert_eq!(
            filters.creator_id.as_deref(),
            Some("aca1061a-9d32-4ae6-8ce3-7c3c2f1e3a55")
        );
    }

    #[test]
    fn test_min_views_phrasings() {
        assert_eq!(extract_filters("видео с больше 100000 просмотров").min_views, Some(100000));
        assert_eq!(extract_filters("более 5 просмотра").min_views, Some(5));
        assert_eq!(extract_filters("videos with more than 500 views").min_views, Some(500));
        assert_eq!(extract_filters("videos with over 20 views").min_views, Some(20));
        assert_eq!(extract_filters("> 10 views").min_views, Some(10));
        assert_eq!(extract_filters("ровно 10 просмотров").min_views, None);
    }

    #[test]
    fn test_unique_videos() {
        assert!(extract_filters("сколько разных видео получали новые просмотры").unique_videos);
        assert!(extract_filters("how many distinct videos grew").unique_videos);
        assert!(!extract_filters("сколько видео").unique_videos);
    }

    #[test]
    fn test_filters_are_independent() {
        let filters = extract_filters(
            "уникальных роликов креатора 8b76e572-635b-400c-a6ec-3f17a3f4f1e4 свыше 1000 просмотров",
        );
        assert!(filters.unique_videos);
        assert_eq!(filters.min_views, Some(1000));
        assert!(filters.creator_id.is_some());
    }

    #[test]
    fn test_no_filters() {
        assert!(extract_filters("лайки вчера").is_empty());
    }
}
