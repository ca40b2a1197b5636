use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{Contribution, SignalAnalyzer};
use crate::config::ContactRules;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b[a-z0-9._%+-]+@[a-z0-9-]+(?:\.[a-z0-9-]+)*\.[a-z]{2,}\b")
        .expect("email pattern compiles")
});

// Format only: ten digits with optional country code, parentheses and
// separators. Nothing checks that the number is real.
static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+\d{1,3}[\s.-]?)?(?:\(\d{3}\)\s?|\b\d{3}[\s.-]?)\d{3}[\s.-]?\d{4}\b")
        .expect("phone pattern compiles")
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFinding {
    pub phones: Vec<String>,
    pub emails: Vec<String>,
    /// Emails whose domain belongs to a disposable provider.
    pub disposable_emails: Vec<String>,
    pub reasons: Vec<String>,
    pub score_contribution: u32,
}

impl ContactFinding {
    pub fn has_phones(&self) -> bool {
        !self.phones.is_empty()
    }

    pub fn has_emails(&self) -> bool {
        !self.emails.is_empty()
    }
}

impl Contribution for ContactFinding {
    fn score(&self) -> u32 {
        self.score_contribution
    }

    fn signal_count(&self) -> usize {
        self.reasons.len()
    }
}

#[derive(Debug, Clone)]
pub struct ContactAnalyzer {
    disposable_domains: Vec<String>,
    multi_channel_points: u32,
    disposable_email_points: u32,
}

impl ContactAnalyzer {
    pub fn new(rules: &ContactRules) -> Self {
        Self {
            disposable_domains: rules
                .disposable_domains
                .iter()
                .map(|d| d.trim().to_lowercase())
                .collect(),
            multi_channel_points: rules.multi_channel_points,
            disposable_email_points: rules.disposable_email_points,
        }
    }

    fn is_disposable(&self, email: &str) -> bool {
        let Some((_, domain)) = email.rsplit_once('@') else {
            return false;
        };
        let domain = domain.to_lowercase();
        self.disposable_domains.iter().any(|d| {
            domain == *d
                || domain
                    .strip_suffix(d.as_str())
                    .is_some_and(|rest| rest.ends_with('.'))
        })
    }
}

impl SignalAnalyzer for ContactAnalyzer {
    const NAME: &'static str = "contacts";
    type Output = ContactFinding;

    fn analyze(&self, text: &str) -> ContactFinding {
        let emails = unique_matches(&EMAIL, text);
        let phones = unique_matches(&PHONE, text);
        let disposable_emails: Vec<String> = emails
            .iter()
            .filter(|e| self.is_disposable(e))
            .cloned()
            .collect();

        let mut reasons = Vec::new();
        let mut score = 0u32;

        if !phones.is_empty() && !emails.is_empty() {
            reasons.push("phone number and email offered together".to_string());
            score = score.saturating_add(self.multi_channel_points);
        }
        if !disposable_emails.is_empty() {
            reasons.push(format!(
                "disposable email provider: {}",
                disposable_emails.join(", ")
            ));
            score = score.saturating_add(self.disposable_email_points);
        }

        ContactFinding {
            phones,
            emails,
            disposable_emails,
            reasons,
            score_contribution: score,
        }
    }
}

fn unique_matches(pattern: &Regex, text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    pattern
        .find_iter(text)
        .map(|m| m.as_str().trim().to_string())
        .filter(|m| seen.insert(m.to_lowercase()))
        .collect()
}
