//! Independent signal analyzers.
//!
//! Each analyzer takes the raw text and returns its own finding type. None
//! of them reads another's output, and none of them knows about risk tiers;
//! combining contributions is the aggregator's job. Analyzers never fail:
//! malformed fragments degrade to a zero contribution.

pub mod contact;
pub mod keyword;
pub mod quality;
pub mod url;

pub use contact::{ContactAnalyzer, ContactFinding};
pub use keyword::{AnalysisFinding, KeywordAnalyzer};
pub use quality::{QualityFinding, TextQualityAnalyzer};
pub use url::{UrlAnalysis, UrlAnalyzer, UrlFinding};

pub trait SignalAnalyzer: Send + Sync {
    /// Key under which this analyzer's contribution is reported.
    const NAME: &'static str;

    type Output: Contribution;

    fn analyze(&self, text: &str) -> Self::Output;
}

/// Score contributed by one analyzer's output. Always non-negative.
pub trait Contribution {
    fn score(&self) -> u32;

    /// Number of distinct signals behind the score, for explanations.
    fn signal_count(&self) -> usize;
}

/// Lowercased word tokens. Apostrophes stay inside tokens so that
/// contractions are matched whole.
pub(crate) fn word_tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|t| t.trim_matches('\''))
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
}
