//! Keyword category tables.
//!
//! Categories are an ordered sequence, not a map, so that findings come out
//! in a stable order and each category can be tested on its own. The
//! weights below are placeholder defaults; they were never tuned against
//! real-world data.
//!
//! A phrase and a shorter keyword inside it ("click here" and "click") are
//! separate entries and both score when the phrase appears. The longer
//! phrase is the stronger signal and is weighted as the sum of both.

use serde::{Deserialize, Serialize};

/// A named group of keywords sharing one weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCategory {
    pub name: String,
    pub keywords: Vec<String>,
    pub weight: u32,
}

impl KeywordCategory {
    pub fn new(name: &str, weight: u32, keywords: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            weight,
        }
    }

    /// Keywords lowercased and de-duplicated, first occurrence wins.
    pub fn normalized_keywords(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        self.keywords
            .iter()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty() && seen.insert(k.clone()))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordConfig {
    /// Upper bound on a single category's contribution. `None` means
    /// unbounded; distinct-keyword counting already stops repetition from
    /// inflating the score.
    #[serde(default)]
    pub max_category_score: Option<u32>,

    #[serde(default = "default_categories")]
    pub categories: Vec<KeywordCategory>,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            max_category_score: None,
            categories: default_categories(),
        }
    }
}

pub fn default_categories() -> Vec<KeywordCategory> {
    vec![
        KeywordCategory::new(
            "urgency",
            2,
            &[
                "urgent",
                "immediately",
                "act now",
                "right away",
                "asap",
                "limited time",
                "expires today",
                "final notice",
                "last chance",
                "within 24 hours",
                "don't delay",
            ],
        ),
        KeywordCategory::new(
            "authentication",
            3,
            &[
                "verify",
                "verify your account",
                "confirm your identity",
                "password",
                "login",
                "log in",
                "sign in",
                "account locked",
                "unusual activity",
                "security alert",
                "reset your",
            ],
        ),
        KeywordCategory::new(
            "financial",
            2,
            &[
                "bank account",
                "wire transfer",
                "gift card",
                "bitcoin",
                "crypto",
                "payment",
                "refund",
                "invoice",
                "credit card",
                "western union",
            ],
        ),
        KeywordCategory::new(
            "threats",
            3,
            &[
                "suspended",
                "legal action",
                "arrest",
                "warrant",
                "lawsuit",
                "terminated",
                "closed permanently",
                "police",
            ],
        ),
        KeywordCategory::new(
            "rewards",
            2,
            &[
                "congratulations",
                "you have won",
                "you've won",
                "winner",
                "prize",
                "lottery",
                "claim your",
                "free gift",
                "reward",
            ],
        ),
        KeywordCategory::new(
            "personal_info",
            3,
            &[
                "social security",
                "ssn",
                "date of birth",
                "mother's maiden name",
                "pin number",
                "bank details",
                "cvv",
            ],
        ),
        KeywordCategory::new(
            "action",
            1,
            &[
                "click",
                "click here",
                "follow the link",
                "open the attachment",
                "download now",
                "reply with",
                "call now",
            ],
        ),
    ]
}
