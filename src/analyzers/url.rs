use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use url::{Host, Url};

use super::{Contribution, SignalAnalyzer};
use crate::config::UrlRules;

// Anything after the scheme is a candidate; candidates that fail to parse
// end up in `UrlAnalysis::malformed`.
static URL_CANDIDATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\b(?:https?|ftp)://[^\s<>"'`]*|\bwww\.[^\s<>"'`]+"#)
        .expect("URL candidate pattern compiles")
});

const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')', ']', '}', '>'];

/// Heuristic that flagged a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainSignal {
    Shortener,
    KeywordInDomain,
    Typosquat,
    IpAddressHost,
}

impl DomainSignal {
    pub fn reason(self) -> &'static str {
        match self {
            DomainSignal::Shortener => "URL shortener hides the destination",
            DomainSignal::KeywordInDomain => "domain contains a credential-phishing keyword",
            DomainSignal::Typosquat => "domain imitates a well-known brand",
            DomainSignal::IpAddressHost => "link points at a raw IP address",
        }
    }

    fn points(self, rules: &UrlRules) -> u32 {
        match self {
            DomainSignal::Shortener => rules.shortener_points,
            DomainSignal::KeywordInDomain => rules.keyword_points,
            DomainSignal::Typosquat => rules.typosquat_points,
            DomainSignal::IpAddressHost => rules.ip_host_points,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlFinding {
    pub url: String,
    /// Registrable domain, or the address for IP hosts.
    pub domain: String,
    pub is_suspicious: bool,
    pub reasons: Vec<String>,
    pub score_contribution: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlAnalysis {
    pub findings: Vec<UrlFinding>,
    /// Candidates that looked like URLs but did not parse. They carry no
    /// score.
    pub malformed: Vec<String>,
}

impl UrlAnalysis {
    pub fn suspicious(&self) -> impl Iterator<Item = &UrlFinding> {
        self.findings.iter().filter(|f| f.is_suspicious)
    }
}

impl Contribution for UrlAnalysis {
    fn score(&self) -> u32 {
        self.findings
            .iter()
            .fold(0u32, |acc, f| acc.saturating_add(f.score_contribution))
    }

    fn signal_count(&self) -> usize {
        self.suspicious().count()
    }
}

#[derive(Debug, Clone)]
pub struct UrlAnalyzer {
    rules: UrlRules,
}

impl UrlAnalyzer {
    pub fn new(rules: &UrlRules) -> Self {
        let lower = |items: &[String]| -> Vec<String> {
            items.iter().map(|s| s.trim().to_lowercase()).collect()
        };
        Self {
            rules: UrlRules {
                shorteners: lower(&rules.shorteners),
                domain_keywords: lower(&rules.domain_keywords),
                brands: lower(&rules.brands),
                two_level_suffixes: lower(&rules.two_level_suffixes),
                ..rules.clone()
            },
        }
    }

    fn inspect(&self, candidate: &str) -> Option<UrlFinding> {
        let target = if candidate.to_ascii_lowercase().starts_with("www.") {
            format!("http://{candidate}")
        } else {
            candidate.to_string()
        };

        let parsed = match Url::parse(&target) {
            Ok(parsed) => parsed,
            Err(e) => {
                log::debug!("skipping malformed URL {candidate:?}: {e}");
                return None;
            }
        };

        let (domain, signals) = match parsed.host() {
            Some(Host::Domain(host)) => {
                let host = host.trim_end_matches('.');
                if host.is_empty() || host.split('.').any(str::is_empty) {
                    log::debug!("skipping URL with empty host label {candidate:?}");
                    return None;
                }
                let domain = registrable_domain(host, &self.rules.two_level_suffixes);
                let signals = self.domain_signals(host, &domain);
                (domain, signals)
            }
            Some(Host::Ipv4(addr)) => (addr.to_string(), vec![DomainSignal::IpAddressHost]),
            Some(Host::Ipv6(addr)) => (addr.to_string(), vec![DomainSignal::IpAddressHost]),
            None => {
                log::debug!("skipping URL without host {candidate:?}");
                return None;
            }
        };

        let score_contribution = signals
            .iter()
            .fold(0u32, |acc, s| acc.saturating_add(s.points(&self.rules)));

        Some(UrlFinding {
            url: candidate.to_string(),
            domain,
            is_suspicious: !signals.is_empty(),
            reasons: signals.iter().map(|s| s.reason().to_string()).collect(),
            score_contribution,
        })
    }

    fn domain_signals(&self, host: &str, domain: &str) -> Vec<DomainSignal> {
        let mut signals = Vec::new();

        if self
            .rules
            .shorteners
            .iter()
            .any(|s| s == domain || s == host)
        {
            signals.push(DomainSignal::Shortener);
        }

        if self
            .rules
            .domain_keywords
            .iter()
            .any(|k| host.contains(k.as_str()))
        {
            signals.push(DomainSignal::KeywordInDomain);
        }

        if self.is_typosquat(host, domain) {
            signals.push(DomainSignal::Typosquat);
        }

        signals
    }

    /// A host is a typosquat when one of its labels spells a brand (after
    /// undoing digit lookalikes) but the registrable domain is not the
    /// brand's own, or when it carries a punycode label.
    fn is_typosquat(&self, host: &str, domain: &str) -> bool {
        if host.split('.').any(|label| label.starts_with("xn--")) {
            return true;
        }

        let owner = domain.split('.').next().unwrap_or(domain);
        let normalized = undo_lookalikes(host);
        let tokens: Vec<&str> = normalized.split(['.', '-']).collect();

        self.rules
            .brands
            .iter()
            .any(|brand| owner != brand && tokens.iter().any(|t| t == brand))
    }
}

impl SignalAnalyzer for UrlAnalyzer {
    const NAME: &'static str = "urls";
    type Output = UrlAnalysis;

    fn analyze(&self, text: &str) -> UrlAnalysis {
        let mut seen = HashSet::new();
        let mut analysis = UrlAnalysis::default();

        for m in URL_CANDIDATE.find_iter(text) {
            let candidate = m.as_str().trim_end_matches(TRAILING_PUNCTUATION);
            if !seen.insert(candidate.to_string()) {
                continue;
            }
            match self.inspect(candidate) {
                Some(finding) => analysis.findings.push(finding),
                None => analysis.malformed.push(candidate.to_string()),
            }
        }

        analysis
    }
}

/// Last two labels of `host`, or three when the last two form a known
/// two-level public suffix such as `co.uk`.
pub fn registrable_domain(host: &str, two_level_suffixes: &[String]) -> String {
    let labels: Vec<&str> = host.split('.').collect();
    let n = labels.len();
    if n <= 2 {
        return host.to_string();
    }
    let suffix = labels[n - 2..].join(".");
    if n >= 3 && two_level_suffixes.iter().any(|s| *s == suffix) {
        labels[n - 3..].join(".")
    } else {
        suffix
    }
}

fn undo_lookalikes(host: &str) -> String {
    host.chars()
        .map(|c| match c {
            '0' => 'o',
            '1' => 'l',
            '3' => 'e',
            '4' => 'a',
            '5' => 's',
            '7' => 't',
            other => other,
        })
        .collect()
}
