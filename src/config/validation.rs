//! Validation with error accumulation for configuration.
//!
//! Each section is checked independently and every problem is collected,
//! so a user fixing `.scamscan.toml` sees all issues in one run instead of
//! one per attempt.

use std::collections::HashSet;

use stillwater::{NonEmptyVec, Validation};

use super::core::ScamscanConfig;
use super::detection::{ContactRules, QualityRules, UrlRules};
use super::keywords::KeywordConfig;
use super::thresholds::{InputLimits, TierThresholds};
use crate::errors::{ConfigError, ConfigProblem};

pub type ConfigValidation = Validation<(), NonEmptyVec<ConfigProblem>>;

/// Validate the whole config, accumulating ALL problems.
pub fn validate_config(config: &ScamscanConfig) -> ConfigValidation {
    let mut problems = [
        validate_limits(&config.limits),
        validate_thresholds(&config.thresholds),
        validate_keywords(&config.keywords),
        validate_url_rules(&config.urls),
        validate_contact_rules(&config.contacts),
        validate_quality_rules(&config.quality),
    ]
    .into_iter()
    .flatten();

    match problems.next() {
        Some(first) => Validation::Failure(NonEmptyVec::new(first, problems.collect())),
        None => Validation::Success(()),
    }
}

/// Validate config with a fail-fast `Result` API.
pub fn validate_config_result(config: &ScamscanConfig) -> Result<(), ConfigError> {
    match validate_config(config) {
        Validation::Success(()) => Ok(()),
        Validation::Failure(problems) => Err(ConfigError::Invalid(problems.into_vec())),
    }
}

fn validate_limits(limits: &InputLimits) -> Vec<ConfigProblem> {
    if limits.max_chars == 0 {
        vec![ConfigProblem::new("limits.max_chars", "must be greater than 0")]
    } else {
        Vec::new()
    }
}

fn validate_thresholds(thresholds: &TierThresholds) -> Vec<ConfigProblem> {
    if thresholds.is_ordered() {
        return Vec::new();
    }
    let mut problems = Vec::new();
    if thresholds.low == 0 {
        problems.push(ConfigProblem::new(
            "thresholds.low",
            "must be at least 1 so that a zero score is Safe",
        ));
    }
    if thresholds.medium < thresholds.low {
        problems.push(ConfigProblem::new(
            "thresholds.medium",
            format!(
                "must be >= low ({}), got {}",
                thresholds.low, thresholds.medium
            ),
        ));
    }
    if thresholds.high < thresholds.medium {
        problems.push(ConfigProblem::new(
            "thresholds.high",
            format!(
                "must be >= medium ({}), got {}",
                thresholds.medium, thresholds.high
            ),
        ));
    }
    problems
}

fn validate_keywords(keywords: &KeywordConfig) -> Vec<ConfigProblem> {
    let mut problems = Vec::new();
    let mut names = HashSet::new();

    if keywords.max_category_score == Some(0) {
        problems.push(ConfigProblem::new(
            "keywords.max_category_score",
            "a cap of 0 disables keyword scoring; remove the cap or raise it",
        ));
    }

    for (index, category) in keywords.categories.iter().enumerate() {
        let field = format!("keywords.categories[{index}]");
        if category.name.trim().is_empty() {
            problems.push(ConfigProblem::new(
                format!("{field}.name"),
                "must not be empty",
            ));
        } else if !names.insert(category.name.as_str()) {
            problems.push(ConfigProblem::new(
                format!("{field}.name"),
                format!("duplicate category '{}'", category.name),
            ));
        }
        if category.normalized_keywords().is_empty() {
            problems.push(ConfigProblem::new(
                format!("{field}.keywords"),
                format!("category '{}' has no usable keywords", category.name),
            ));
        }
        if category.keywords.iter().any(|k| k.trim().is_empty()) {
            problems.push(ConfigProblem::new(
                format!("{field}.keywords"),
                "contains an empty keyword",
            ));
        }
    }
    problems
}

fn validate_url_rules(rules: &UrlRules) -> Vec<ConfigProblem> {
    let mut problems = Vec::new();
    push_if_blank(&mut problems, "urls.shorteners", &rules.shorteners);
    push_if_blank(&mut problems, "urls.domain_keywords", &rules.domain_keywords);
    push_if_blank(&mut problems, "urls.brands", &rules.brands);
    for suffix in &rules.two_level_suffixes {
        if suffix.split('.').count() != 2 {
            problems.push(ConfigProblem::new(
                "urls.two_level_suffixes",
                format!("'{suffix}' must have exactly two labels"),
            ));
        }
    }
    problems
}

fn validate_contact_rules(rules: &ContactRules) -> Vec<ConfigProblem> {
    let mut problems = Vec::new();
    push_if_blank(
        &mut problems,
        "contacts.disposable_domains",
        &rules.disposable_domains,
    );
    problems
}

fn validate_quality_rules(rules: &QualityRules) -> Vec<ConfigProblem> {
    let mut problems = Vec::new();
    if !(rules.caps_ratio_threshold > 0.0 && rules.caps_ratio_threshold <= 1.0) {
        problems.push(ConfigProblem::new(
            "quality.caps_ratio_threshold",
            format!(
                "must be in (0.0, 1.0], got {}",
                rules.caps_ratio_threshold
            ),
        ));
    }
    for (field, value) in [
        ("quality.exclamation_threshold", rules.exclamation_threshold),
        ("quality.misspelling_threshold", rules.misspelling_threshold),
        ("quality.text_speak_threshold", rules.text_speak_threshold),
    ] {
        if value == 0 {
            problems.push(ConfigProblem::new(
                field,
                "must be at least 1, otherwise every text is penalized",
            ));
        }
    }
    push_if_blank(&mut problems, "quality.misspellings", &rules.misspellings);
    push_if_blank(&mut problems, "quality.text_speak", &rules.text_speak);
    problems
}

fn push_if_blank(problems: &mut Vec<ConfigProblem>, field: &str, entries: &[String]) {
    if entries.iter().any(|e| e.trim().is_empty()) {
        problems.push(ConfigProblem::new(field, "contains an empty entry"));
    }
}
