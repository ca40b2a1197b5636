//! Property-based tests for scan scoring
//!
//! These tests verify invariants that should hold for all inputs:
//! - The total score is the exact sum of analyzer contributions
//! - Scanning is deterministic
//! - Adding keywords never lowers the score, whatever else the text holds
//! - Repeating a keyword never raises the score
//! - Over-length input is always rejected

mod common;

use common::{default_scanner, NEUTRAL_WORDS};
use proptest::prelude::*;
use scamscan::config::default_categories;
use scamscan::{ScamscanConfig, Scanner};

const TEXT_SPEAK: &[&str] = &["u", "ur", "pls"];

fn known_keyword() -> impl Strategy<Value = String> {
    let keywords: Vec<String> = default_categories()
        .into_iter()
        .flat_map(|c| c.normalized_keywords())
        .collect();
    prop::sample::select(keywords)
}

fn capitalized(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn any_case(word: String) -> impl Strategy<Value = String> {
    prop_oneof![
        Just(word.to_lowercase()),
        Just(word.to_uppercase()),
        Just(capitalized(&word)),
    ]
}

/// Shouting, `!` runs, text-speak and keywords mixed into ordinary words.
fn message_token() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => prop::sample::select(NEUTRAL_WORDS)
            .prop_flat_map(|w| any_case(w.to_string())),
        1 => Just("!!!".to_string()),
        1 => prop::sample::select(TEXT_SPEAK).prop_map(str::to_string),
        2 => known_keyword().prop_flat_map(any_case),
    ]
}

fn message() -> impl Strategy<Value = String> {
    prop::collection::vec(message_token(), 1..20).prop_map(|w| w.join(" "))
}

proptest! {
    #[test]
    fn prop_total_is_sum_of_contributions(text in "\\PC{1,300}") {
        prop_assume!(!text.trim().is_empty());
        let result = default_scanner().scan(&text).unwrap();
        let sum: u32 = result.findings.contributions().values().sum();
        prop_assert_eq!(result.total_score, sum);
    }

    #[test]
    fn prop_scan_is_deterministic(text in "\\PC{1,300}") {
        prop_assume!(!text.trim().is_empty());
        let scanner = default_scanner();
        let first = serde_json::to_string(&scanner.scan(&text).unwrap()).unwrap();
        let second = serde_json::to_string(&scanner.scan(&text).unwrap()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_adding_keywords_never_lowers_score(
        base in message(),
        keywords in prop::collection::vec(
            known_keyword().prop_flat_map(|k| prop_oneof![Just(k.to_lowercase()), Just(k.to_uppercase())]),
            1..5,
        ),
    ) {
        let scanner = default_scanner();
        let before = scanner.scan(&base).unwrap();
        let extended = format!("{base} {}", keywords.join(" "));
        let after = scanner.scan(&extended).unwrap();
        prop_assert!(after.total_score >= before.total_score);
        prop_assert!(after.risk_tier >= before.risk_tier);
    }

    #[test]
    fn prop_repeating_a_keyword_does_not_inflate(
        keyword in known_keyword(),
        times in 2usize..50,
    ) {
        let scanner = default_scanner();
        let once = scanner.scan(&keyword).unwrap();
        let repeated = scanner.scan(&vec![keyword.as_str(); times].join(" ")).unwrap();
        prop_assert_eq!(
            once.findings.keywords,
            repeated.findings.keywords
        );
    }

    #[test]
    fn prop_over_length_is_rejected(max in 1usize..200, extra in 1usize..50) {
        let scanner = Scanner::new(&ScamscanConfig::default().with_max_chars(max)).unwrap();
        let err = scanner.scan(&"x".repeat(max + extra)).unwrap_err();
        prop_assert_eq!(err.status(), 400);
    }
}
