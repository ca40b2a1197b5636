use serde::{Deserialize, Serialize};

use super::detection::{ContactRules, QualityRules, UrlRules};
use super::keywords::KeywordConfig;
use super::thresholds::{InputLimits, TierThresholds};

/// Root configuration structure for scamscan.
///
/// Every section is optional in `.scamscan.toml`; missing sections and
/// missing fields fall back to the built-in defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ScamscanConfig {
    /// Input guards
    #[serde(default)]
    pub limits: InputLimits,

    /// Risk tier breakpoints
    #[serde(default)]
    pub thresholds: TierThresholds,

    /// Keyword category tables
    #[serde(default)]
    pub keywords: KeywordConfig,

    /// URL heuristics
    #[serde(default)]
    pub urls: UrlRules,

    /// Contact heuristics
    #[serde(default)]
    pub contacts: ContactRules,

    /// Text quality heuristics
    #[serde(default)]
    pub quality: QualityRules,
}

impl ScamscanConfig {
    pub fn with_thresholds(mut self, thresholds: TierThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.limits.max_chars = max_chars;
        self
    }

    /// Render this configuration as TOML, as written by `scamscan init`.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
