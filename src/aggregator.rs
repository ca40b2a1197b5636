//! Combines analyzer output into a final classification.
//!
//! This is the only place that knows about every analyzer and about risk
//! tiers. It is a pure function of its inputs: the same findings and
//! thresholds always produce the same [`ScanResult`].

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analyzers::{
    AnalysisFinding, ContactAnalyzer, ContactFinding, Contribution, KeywordAnalyzer,
    QualityFinding, SignalAnalyzer, TextQualityAnalyzer, UrlAnalysis, UrlAnalyzer,
};
use crate::config::TierThresholds;
use crate::errors::ScanError;

/// Discrete risk classification, ordered from least to most risky.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    Safe,
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn from_score(score: u32, thresholds: &TierThresholds) -> Self {
        if score >= thresholds.high {
            RiskTier::High
        } else if score >= thresholds.medium {
            RiskTier::Medium
        } else if score >= thresholds.low {
            RiskTier::Low
        } else {
            RiskTier::Safe
        }
    }

    pub fn recommendation(self) -> Recommendation {
        match self {
            RiskTier::High => Recommendation::Block,
            RiskTier::Medium => Recommendation::Caution,
            RiskTier::Low => Recommendation::Investigate,
            RiskTier::Safe => Recommendation::LikelySafe,
        }
    }

    /// Three-level threat label used on the wire; Safe reports as Low.
    pub fn threat_level(self) -> &'static str {
        match self {
            RiskTier::High => "High",
            RiskTier::Medium => "Medium",
            RiskTier::Low | RiskTier::Safe => "Low",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskTier::Safe => "Safe",
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recommendation {
    Block,
    Caution,
    Investigate,
    LikelySafe,
}

impl Recommendation {
    pub const ALL: [Recommendation; 4] = [
        Recommendation::Block,
        Recommendation::Caution,
        Recommendation::Investigate,
        Recommendation::LikelySafe,
    ];

    /// One-line verdict shown as the `result` of a scan.
    pub fn verdict(self) -> &'static str {
        match self {
            Recommendation::Block => "Likely Scam",
            Recommendation::Caution => "Suspicious",
            Recommendation::Investigate => "Possibly Suspicious",
            Recommendation::LikelySafe => "Likely Safe",
        }
    }

    pub fn advice(self) -> &'static str {
        match self {
            Recommendation::Block => {
                "Do not respond, click links or share information. Report and delete the message."
            }
            Recommendation::Caution => {
                "Verify the sender through an independent channel before acting."
            }
            Recommendation::Investigate => {
                "A few warning signs were found. Double-check before following any instructions."
            }
            Recommendation::LikelySafe => "No significant warning signs were found.",
        }
    }
}

/// Output of every analyzer for one scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Findings {
    pub keywords: Vec<AnalysisFinding>,
    pub urls: UrlAnalysis,
    pub contacts: ContactFinding,
    pub quality: QualityFinding,
}

impl Findings {
    /// Score contributed by each analyzer, keyed by analyzer name.
    pub fn contributions(&self) -> BTreeMap<&'static str, u32> {
        BTreeMap::from([
            (KeywordAnalyzer::NAME, self.keywords.score()),
            (UrlAnalyzer::NAME, self.urls.score()),
            (ContactAnalyzer::NAME, self.contacts.score()),
            (TextQualityAnalyzer::NAME, self.quality.score()),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub total_score: u32,
    pub risk_tier: RiskTier,
    pub recommendation: Recommendation,
    pub findings: Findings,
    pub explanation: String,
}

impl ScanResult {
    /// Every matched keyword, in category order.
    pub fn keywords_found(&self) -> Vec<String> {
        self.findings
            .keywords
            .iter()
            .flat_map(|f| f.matched_terms.iter().cloned())
            .collect()
    }

    pub fn suspicious_urls(&self) -> Vec<String> {
        self.findings
            .urls
            .suspicious()
            .map(|f| f.url.clone())
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ThreatAggregator {
    thresholds: TierThresholds,
}

impl ThreatAggregator {
    pub fn new(thresholds: TierThresholds) -> Self {
        Self { thresholds }
    }

    pub fn aggregate(&self, findings: Findings) -> Result<ScanResult, ScanError> {
        let total_score = findings
            .contributions()
            .into_iter()
            .try_fold(0u32, |acc, (name, score)| {
                acc.checked_add(score).ok_or_else(|| {
                    ScanError::internal(format!("score overflow adding {name} contribution"))
                })
            })?;

        let risk_tier = RiskTier::from_score(total_score, &self.thresholds);
        let recommendation = risk_tier.recommendation();
        let explanation = explain(total_score, risk_tier, &findings);

        Ok(ScanResult {
            total_score,
            risk_tier,
            recommendation,
            findings,
            explanation,
        })
    }
}

fn explain(total_score: u32, tier: RiskTier, findings: &Findings) -> String {
    let keyword_part = match findings.keywords.len() {
        0 => "no keyword categories matched".to_string(),
        n => format!(
            "{} ({})",
            plural(n, "keyword category matched", "keyword categories matched"),
            findings
                .keywords
                .iter()
                .map(|f| f.category.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        ),
    };
    let url_part = format!(
        "{} of {}",
        plural(findings.urls.signal_count(), "suspicious URL", "suspicious URLs"),
        plural(findings.urls.findings.len(), "link", "links"),
    );
    let contact_part = plural(
        findings.contacts.signal_count(),
        "contact warning",
        "contact warnings",
    );
    let quality_part = plural(
        findings.quality.signal_count(),
        "text quality issue",
        "text quality issues",
    );

    let headline = match tier {
        RiskTier::Safe => format!("No significant risk (score {total_score})"),
        _ => format!("{tier} risk (score {total_score})"),
    };
    format!("{headline}: {keyword_part}; {url_part}; {contact_part}; {quality_part}.")
}

fn plural(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}
