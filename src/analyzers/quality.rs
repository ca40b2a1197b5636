use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{word_tokens, Contribution, SignalAnalyzer};
use crate::config::{KeywordConfig, QualityRules};

// Deductions from the 100-point diagnostic quality score. They only affect
// `quality_score`; risk points come from `QualityRules::penalty_points`.
const CAPS_DEDUCTION: u32 = 25;
const EXCLAMATION_DEDUCTION: u32 = 15;
const PER_MISSPELLING_DEDUCTION: u32 = 10;
const PER_TEXT_SPEAK_DEDUCTION: u32 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityFinding {
    /// Uppercase share of the letters outside keyword matches; 0.0 when
    /// there are none.
    pub caps_ratio: f64,
    /// Letters outside keyword matches.
    pub letter_count: usize,
    pub exclamation_count: usize,
    /// Dictionary misspellings in order of appearance, repeats included.
    pub misspellings: Vec<String>,
    pub text_speak: Vec<String>,
    pub reasons: Vec<String>,
    /// 0-100, higher is cleaner. Diagnostic only; not part of the risk total.
    pub quality_score: u32,
    pub score_contribution: u32,
}

impl Contribution for QualityFinding {
    fn score(&self) -> u32 {
        self.score_contribution
    }

    fn signal_count(&self) -> usize {
        self.reasons.len()
    }
}

/// Shouting, punctuation and spelling heuristics.
///
/// Keyword matches are masked out before the caps ratio is taken: adding a
/// keyword to a message can neither dilute nor inflate it, so more keywords
/// never lower the total score.
#[derive(Debug, Clone)]
pub struct TextQualityAnalyzer {
    rules: QualityRules,
    misspellings: HashSet<String>,
    text_speak: HashSet<String>,
    keyword_terms: Vec<String>,
}

impl TextQualityAnalyzer {
    pub fn new(rules: &QualityRules, keywords: &KeywordConfig) -> Self {
        let normalize = |items: &[String]| -> HashSet<String> {
            items.iter().map(|s| s.trim().to_lowercase()).collect()
        };
        let mut keyword_terms: Vec<String> = keywords
            .categories
            .iter()
            .flat_map(|c| c.normalized_keywords())
            .collect();
        keyword_terms.sort();
        keyword_terms.dedup();

        Self {
            misspellings: normalize(&rules.misspellings),
            text_speak: normalize(&rules.text_speak),
            keyword_terms,
            rules: rules.clone(),
        }
    }

    /// `(letters, uppercase letters)` outside keyword matches.
    fn letter_counts(&self, text: &str) -> (usize, usize) {
        let chars: Vec<char> = text.chars().collect();

        // Lowercased text plus, for each of its bytes, the source char index.
        let mut lowered = String::with_capacity(text.len());
        let mut source = Vec::with_capacity(text.len());
        for (index, c) in chars.iter().enumerate() {
            for lower in c.to_lowercase() {
                lowered.push(lower);
                source.resize(lowered.len(), index);
            }
        }

        let mut masked = vec![false; chars.len()];
        for term in &self.keyword_terms {
            for (start, matched) in lowered.match_indices(term.as_str()) {
                for &index in &source[start..start + matched.len()] {
                    masked[index] = true;
                }
            }
        }

        chars
            .iter()
            .zip(&masked)
            .filter(|(c, masked)| !**masked && c.is_alphabetic())
            .fold((0, 0), |(letters, upper), (c, _)| {
                (letters + 1, upper + usize::from(c.is_uppercase()))
            })
    }
}

impl SignalAnalyzer for TextQualityAnalyzer {
    const NAME: &'static str = "quality";
    type Output = QualityFinding;

    fn analyze(&self, text: &str) -> QualityFinding {
        let (letter_count, upper_count) = self.letter_counts(text);
        let caps_ratio = if letter_count == 0 {
            0.0
        } else {
            upper_count as f64 / letter_count as f64
        };
        let exclamation_count = text.matches('!').count();

        let mut misspellings = Vec::new();
        let mut text_speak = Vec::new();
        for token in word_tokens(text) {
            if self.misspellings.contains(&token) {
                misspellings.push(token);
            } else if self.text_speak.contains(&token) {
                text_speak.push(token);
            }
        }

        let rules = &self.rules;
        let mut reasons = Vec::new();
        let mut deductions = 0u32;

        if letter_count >= rules.min_letters_for_caps && caps_ratio > rules.caps_ratio_threshold
        {
            reasons.push(format!(
                "{:.0}% of letters are uppercase",
                caps_ratio * 100.0
            ));
            deductions = deductions.saturating_add(CAPS_DEDUCTION);
        }
        if exclamation_count >= rules.exclamation_threshold {
            reasons.push(format!("{exclamation_count} exclamation marks"));
            deductions = deductions.saturating_add(EXCLAMATION_DEDUCTION);
        }
        if misspellings.len() >= rules.misspelling_threshold {
            reasons.push(format!("misspellings: {}", misspellings.join(", ")));
        }
        if text_speak.len() >= rules.text_speak_threshold {
            reasons.push(format!("text-speak: {}", text_speak.join(", ")));
        }
        deductions = deductions
            .saturating_add(PER_MISSPELLING_DEDUCTION.saturating_mul(count_u32(misspellings.len())))
            .saturating_add(PER_TEXT_SPEAK_DEDUCTION.saturating_mul(count_u32(text_speak.len())));

        let score_contribution =
            rules.penalty_points.saturating_mul(count_u32(reasons.len()));

        QualityFinding {
            caps_ratio,
            letter_count,
            exclamation_count,
            misspellings,
            text_speak,
            reasons,
            quality_score: 100u32.saturating_sub(deductions),
            score_contribution,
        }
    }
}

fn count_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
