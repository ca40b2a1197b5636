// Test utility module for scamscan integration tests
#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use scamscan::{ScamscanConfig, ScanResult, Scanner};

/// Fixed clock so replies are reproducible.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

pub fn default_scanner() -> Scanner {
    Scanner::new(&ScamscanConfig::default()).expect("default config is valid")
}

pub fn scan_ok(text: &str) -> ScanResult {
    default_scanner()
        .scan(text)
        .unwrap_or_else(|e| panic!("scan of {text:?} failed: {e}"))
}

pub fn categories_of(result: &ScanResult) -> Vec<&str> {
    result
        .findings
        .keywords
        .iter()
        .map(|f| f.category.as_str())
        .collect()
}

/// Lowercase words that match no keyword, URL, contact or quality rule.
pub const NEUTRAL_WORDS: &[&str] = &[
    "hello", "team", "meeting", "lunch", "tomorrow", "thanks", "notes", "project", "garden",
    "coffee", "weekend", "photos", "recipe", "music", "library", "train", "weather", "dinner",
];
