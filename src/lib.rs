// Export modules for library usage
pub mod aggregator;
pub mod analyzers;
pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod scanner;

// Re-export commonly used types
pub use crate::aggregator::{Findings, Recommendation, RiskTier, ScanResult, ThreatAggregator};

pub use crate::analyzers::{
    AnalysisFinding, ContactAnalyzer, ContactFinding, Contribution, KeywordAnalyzer,
    QualityFinding, SignalAnalyzer, TextQualityAnalyzer, UrlAnalysis, UrlAnalyzer, UrlFinding,
};

pub use crate::api::{handle_request, respond, ApiReply, ScanOptions, ScanRequest, ScanResponse};

pub use crate::config::{load_config, ScamscanConfig, TierThresholds};

pub use crate::errors::{ConfigError, ErrorCode, ScanError};

pub use crate::scanner::{Scanner, DEFAULT_SCANNER};

/// Scan `text` with the default configuration.
///
/// ```rust
/// use scamscan::RiskTier;
///
/// let result = scamscan::scan("URGENT: verify your account now, click http://bit.ly/xyz")?;
/// assert_eq!(result.risk_tier, RiskTier::High);
/// # Ok::<(), scamscan::ScanError>(())
/// ```
pub fn scan(text: &str) -> Result<ScanResult, ScanError> {
    DEFAULT_SCANNER.scan(text)
}
