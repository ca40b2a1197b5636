// Sub-modules
mod detection;
mod keywords;
mod thresholds;

// Core configuration types
mod core;
mod loader;
pub mod validation;

pub use core::ScamscanConfig;

pub use thresholds::{InputLimits, TierThresholds, TIER_POLICY_VERSION};

pub use keywords::{default_categories, KeywordCategory, KeywordConfig};

pub use detection::{
    default_brands, default_disposable_domains, default_domain_keywords, default_misspellings,
    default_shorteners, default_text_speak, default_two_level_suffixes, ContactRules,
    QualityRules, UrlRules,
};

pub use loader::{
    directory_ancestors, load_config, load_config_from, load_config_from_path,
    parse_and_validate_config, CONFIG_FILE_NAME,
};

pub use validation::{validate_config, validate_config_result, ConfigValidation};
