use serde::{Deserialize, Serialize};

use super::{Contribution, SignalAnalyzer};
use crate::config::KeywordConfig;

/// Keywords of one category that matched, and what they contributed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisFinding {
    pub category: String,
    pub matched_terms: Vec<String>,
    pub score_contribution: u32,
}

#[derive(Debug, Clone)]
struct CompiledCategory {
    name: String,
    weight: u32,
    keywords: Vec<String>,
}

/// Case-insensitive substring matcher over categorized keyword tables.
///
/// Each distinct keyword counts once, however often it appears, so
/// repeating a word cannot inflate the score. A phrase and a keyword it
/// contains are distinct keywords and both count. An optional cap bounds a
/// category's total.
#[derive(Debug, Clone)]
pub struct KeywordAnalyzer {
    categories: Vec<CompiledCategory>,
    max_category_score: Option<u32>,
}

impl KeywordAnalyzer {
    pub fn new(config: &KeywordConfig) -> Self {
        let categories = config
            .categories
            .iter()
            .map(|category| CompiledCategory {
                name: category.name.clone(),
                weight: category.weight,
                keywords: category.normalized_keywords(),
            })
            .collect();

        Self {
            categories,
            max_category_score: config.max_category_score,
        }
    }

    fn score_category(&self, category: &CompiledCategory, matches: usize) -> u32 {
        let count = u32::try_from(matches).unwrap_or(u32::MAX);
        let raw = category.weight.saturating_mul(count);
        match self.max_category_score {
            Some(cap) => raw.min(cap),
            None => raw,
        }
    }
}

impl SignalAnalyzer for KeywordAnalyzer {
    const NAME: &'static str = "keywords";
    type Output = Vec<AnalysisFinding>;

    fn analyze(&self, text: &str) -> Vec<AnalysisFinding> {
        let haystack = text.to_lowercase();

        self.categories
            .iter()
            .filter_map(|category| {
                let matched_terms: Vec<String> = category
                    .keywords
                    .iter()
                    .filter(|keyword| haystack.contains(keyword.as_str()))
                    .cloned()
                    .collect();

                if matched_terms.is_empty() {
                    return None;
                }

                let score_contribution = self.score_category(category, matched_terms.len());
                log::trace!(
                    "keyword category '{}' matched {:?} (+{})",
                    category.name,
                    matched_terms,
                    score_contribution
                );
                Some(AnalysisFinding {
                    category: category.name.clone(),
                    matched_terms,
                    score_contribution,
                })
            })
            .collect()
    }
}

impl Contribution for Vec<AnalysisFinding> {
    fn score(&self) -> u32 {
        self.iter()
            .fold(0u32, |acc, f| acc.saturating_add(f.score_contribution))
    }

    fn signal_count(&self) -> usize {
        self.len()
    }
}
