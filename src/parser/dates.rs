//! Explicit date literals
//!
//! Dates are collected family by family, in the fixed order of
//! `DATE_FAMILIES`, not in the order they appear in the text: every ISO date
//! comes before every `dd.mm.yyyy` date, which comes before every named-month
//! date.

use chrono::NaiveDate;
use regex::{Captures, Regex};

use super::error::ParseError;
use super::patterns::{DMY_DATE_PATTERN, ISO_DATE_PATTERN, NAMED_MONTH_DATE_PATTERN};

/// A family of date literal spellings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFamily {
    /// `yyyy-mm-dd`
    Iso,
    /// `dd.mm.yyyy`
    DayMonthYear,
    /// `D <month name> YYYY` with a Russian genitive month name
    NamedMonth,
}

/// Scan order of the date families
pub const DATE_FAMILIES: [DateFamily; 3] = [
    DateFamily::Iso,
    DateFamily::DayMonthYear,
    DateFamily::NamedMonth,
];

const RUSSIAN_MONTHS: [&str; 12] = [
    "января", "февраля", "марта", "апреля", "мая", "июня",
    "июля", "августа", "сентября", "октября", "ноября", "декабря",
];

impl DateFamily {
    fn pattern(&self) -> &'static Regex {
        match self {
            DateFamily::Iso => &ISO_DATE_PATTERN,
            DateFamily::DayMonthYear => &DMY_DATE_PATTERN,
            DateFamily::NamedMonth => &NAMED_MONTH_DATE_PATTERN,
        }
    }

    fn month(&self, caps: &Captures<'_>) -> Option<u32> {
        match self {
            DateFamily::Iso | DateFamily::DayMonthYear => caps["m"].parse().ok(),
            DateFamily::NamedMonth => {
                let name = caps["month"].to_lowercase();
                RUSSIAN_MONTHS
                    .iter()
                    .position(|m| *m == name)
                    .map(|i| i as u32 + 1)
            }
        }
    }

    /// All dates of this family in textual order
    pub fn find_all(&self, text: &str) -> Result<Vec<NaiveDate>, ParseError> {
        self.pattern()
            .captures_iter(text)
            .map(|caps| {
                let literal = caps[0].to_string();
                let year = caps["y"].parse::<i32>().ok();
                let month = self.month(&caps);
                let day = caps["d"].parse::<u32>().ok();
                match (year, month, day) {
                    (Some(y), Some(m), Some(d)) => {
                        NaiveDate::from_ymd_opt(y, m, d).ok_or(ParseError::InvalidDate(literal))
                    }
                    _ => Err(ParseError::InvalidDate(literal)),
                }
            })
            .collect()
    }
}

/// Collect explicit dates from the text, family by family
pub fn collect_dates(text: &str) -> Result<Vec<NaiveDate>, ParseError> {
    let mut dates = Vec::new();
    for family in DATE_FAMILIES {
        dates.extend(family.find_all(text)?);
    }
    Ok(dates)
}
