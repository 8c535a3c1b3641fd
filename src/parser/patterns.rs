//! Regex patterns shared by the parser rules

use std::sync::LazyLock;

use regex::Regex;

pub(crate) static UUID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}\b")
        .expect("Invalid regex")
});

/// `2025-11-28`
pub(crate) static ISO_DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?P<y>[0-9]{4})-(?P<m>[0-9]{2})-(?P<d>[0-9]{2})\b").expect("Invalid regex")
});

/// `28.11.2025`, `1.1.2025`
pub(crate) static DMY_DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?P<d>[0-9]{1,2})\.(?P<m>[0-9]{1,2})\.(?P<y>[0-9]{4})\b").expect("Invalid regex")
});

/// `28 ноября 2025`
pub(crate) static NAMED_MONTH_DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?P<d>[0-9]{1,2})\s+(?P<month>января|февраля|марта|апреля|мая|июня|июля|августа|сентября|октября|ноября|декабря)\s+(?P<y>[0-9]{4})\b",
    )
    .expect("Invalid regex")
});

/// `за 7 дней`, `last 30 days`, `последние 3 дня`
pub(crate) static LAST_N_DAYS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:last|за|последние)\s+(?P<n>[0-9]{1,4})\s*(?:days?|дн(?:ей|я)?|день)")
        .expect("Invalid regex")
});

/// `больше 100000 просмотров`, `more than 500 views`, `> 10 views`
pub(crate) static MIN_VIEWS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:\b(?:больше|более|свыше|more\s+than|over)|>)\s*(?P<n>[0-9]{1,9})\s*(?:просмотров|просмотра|просмотр|views?)\b",
    )
    .expect("Invalid regex")
});

/// `разных видео`, `unique videos`
pub(crate) static UNIQUE_VIDEOS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:(?:разных|различных|уникальных)\s+(?:видео|видеоролик|видеороликов|ролик|роликов)|(?:distinct|unique|different)\s+videos?)\b",
    )
    .expect("Invalid regex")
});
