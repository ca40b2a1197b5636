//! The scan pipeline: validate input, run every analyzer, aggregate.

use once_cell::sync::Lazy;

use crate::aggregator::{Findings, ScanResult, ThreatAggregator};
use crate::analyzers::{
    ContactAnalyzer, KeywordAnalyzer, SignalAnalyzer, TextQualityAnalyzer, UrlAnalyzer,
};
use crate::config::{validate_config_result, InputLimits, ScamscanConfig};
use crate::errors::{ConfigError, ScanError};

/// Scanner built from the default configuration on first use and shared by
/// every caller of [`crate::scan`]. Never mutated after construction.
pub static DEFAULT_SCANNER: Lazy<Scanner> = Lazy::new(Scanner::default);

/// Compiled analyzer tables plus the aggregation policy.
///
/// A `Scanner` is immutable once built and holds no per-scan state, so one
/// instance can serve any number of threads.
#[derive(Debug, Clone)]
pub struct Scanner {
    limits: InputLimits,
    keywords: KeywordAnalyzer,
    urls: UrlAnalyzer,
    contacts: ContactAnalyzer,
    quality: TextQualityAnalyzer,
    aggregator: ThreatAggregator,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::build(&ScamscanConfig::default())
    }
}

impl Scanner {
    /// Validate `config` and build a scanner from it.
    pub fn new(config: &ScamscanConfig) -> Result<Self, ConfigError> {
        validate_config_result(config)?;
        Ok(Self::build(config))
    }

    fn build(config: &ScamscanConfig) -> Self {
        Self {
            limits: config.limits,
            keywords: KeywordAnalyzer::new(&config.keywords),
            urls: UrlAnalyzer::new(&config.urls),
            contacts: ContactAnalyzer::new(&config.contacts),
            quality: TextQualityAnalyzer::new(&config.quality, &config.keywords),
            aggregator: ThreatAggregator::new(config.thresholds),
        }
    }

    pub fn limits(&self) -> &InputLimits {
        &self.limits
    }

    /// Reject text that is empty, whitespace only, or over the length cap.
    pub fn validate_input(&self, text: &str) -> Result<(), ScanError> {
        if text.trim().is_empty() {
            return Err(ScanError::empty_text());
        }
        let chars = text.chars().count();
        if chars > self.limits.max_chars {
            return Err(ScanError::too_long(chars, self.limits.max_chars));
        }
        Ok(())
    }

    /// Score `text`. Either the whole result or an error; never partial.
    pub fn scan(&self, text: &str) -> Result<ScanResult, ScanError> {
        self.validate_input(text)?;

        let findings = Findings {
            keywords: self.keywords.analyze(text),
            urls: self.urls.analyze(text),
            contacts: self.contacts.analyze(text),
            quality: self.quality.analyze(text),
        };

        if !findings.urls.malformed.is_empty() {
            log::debug!(
                "{} malformed URL candidate(s) ignored",
                findings.urls.malformed.len()
            );
        }

        let result = self.aggregator.aggregate(findings)?;
        log::debug!(
            "scanned {} chars: score {} ({})",
            text.chars().count(),
            result.total_score,
            result.risk_tier
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::RiskTier;
    use crate::errors::ValidationKind;

    #[test]
    fn test_empty_and_blank_text_rejected() {
        let scanner = Scanner::default();
        for text in ["", "   ", "\n\t"] {
            let err = scanner.scan(text).unwrap_err();
            assert!(matches!(
                err,
                ScanError::InvalidInput {
                    kind: ValidationKind::Empty,
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_length_cap_counts_characters() {
        let scanner = Scanner::new(&ScamscanConfig::default().with_max_chars(5)).unwrap();
        // Five multi-byte characters fit even though they are 10 bytes.
        assert!(scanner.scan("ééééé").is_ok());
        let err = scanner.scan("éééééé").unwrap_err();
        assert!(matches!(
            err,
            ScanError::InvalidInput {
                kind: ValidationKind::TooLong,
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ScamscanConfig::default().with_max_chars(0);
        assert!(Scanner::new(&config).is_err());
    }

    #[test]
    fn test_custom_thresholds_change_tier_only() {
        let text = "Urgent: payment needed";
        let default = Scanner::default().scan(text).unwrap();
        let strict = Scanner::new(
            &ScamscanConfig::default().with_thresholds(crate::config::TierThresholds::strict()),
        )
        .unwrap()
        .scan(text)
        .unwrap();

        assert_eq!(default.total_score, strict.total_score);
        assert_eq!(default.risk_tier, RiskTier::Medium);
        assert_eq!(strict.risk_tier, RiskTier::Medium);
        assert!(strict.risk_tier >= default.risk_tier);
    }

    #[test]
    fn test_scanner_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Scanner>();
    }
}
