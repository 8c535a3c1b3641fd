//! Shared test utilities for integration tests

#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use vidnlq::{answer, Dataset, Error, MemoryStore};

pub const CREATOR_A: &str = "aca1061a-9d32-4ae6-8ce3-7c3c2f1e3a55";
pub const CREATOR_B: &str = "8b76e572-635b-400c-a6ec-3f17a3f4f1e4";

/// The instant every time window in these tests is resolved against
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, 28, 12, 0, 0).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Load a dataset from the tests/test_data directory
pub fn load_fixture(name: &str) -> Dataset {
    let path = format!("tests/test_data/{}", name);
    let json = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read test data {}: {}", name, e));
    Dataset::from_json(&json).unwrap_or_else(|e| panic!("Failed to load test data {}: {}", name, e))
}

pub fn catalog_store() -> MemoryStore {
    MemoryStore::from(load_fixture("catalog.json"))
}

/// Run the full pipeline: input → intent → query → value, over the catalog fixture
pub fn run_pipeline(input: &str) -> Result<i64, Error> {
    answer(input, &catalog_store(), Some(fixed_now()))
}
