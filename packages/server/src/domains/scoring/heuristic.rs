//! Deterministic rule-based scoring, used when the LLM is disabled or fails.
//!
//! Each known criterion is a small sum of signal checks. Unknown criteria
//! get a neutral 5 so every requested name is always present.

use std::collections::BTreeMap;

use super::extract::{extract_signals, PageSignals};
use super::models::{CriterionResult, Criteria, ScoreResult};

pub const HEURISTIC_NOTES: &str = "Mock mode: heuristic scoring";

/// Copy length band rewarded by clarity.
const CONCISE_WORDS: std::ops::RangeInclusive<usize> = 50..=400;

/// Score raw HTML against `criteria` without any external call.
pub fn heuristic_score(html: &str, criteria: &Criteria) -> ScoreResult {
    score_signals(&extract_signals(html), criteria)
}

/// Score already-extracted signals.
pub fn score_signals(signals: &PageSignals, criteria: &Criteria) -> ScoreResult {
    let scores: BTreeMap<String, CriterionResult> = criteria
        .iter()
        .map(|name| (name.to_string(), score_criterion(name, signals)))
        .collect();

    ScoreResult::from_scores(scores, HEURISTIC_NOTES)
}

fn score_criterion(name: &str, signals: &PageSignals) -> CriterionResult {
    match name {
        "clarity" => clarity(signals),
        "credibility" => credibility(signals),
        "cta" => cta(signals),
        _ => CriterionResult::new(5, "OK"),
    }
}

fn points(condition: bool, value: i64) -> i64 {
    if condition {
        value
    } else {
        0
    }
}

fn clarity(s: &PageSignals) -> CriterionResult {
    let score = 4
        + points(s.have_h1, 3)
        + points(s.have_title, 2)
        + points(CONCISE_WORDS.contains(&s.word_count), 1);

    let mut feedback = if s.have_h1 {
        "Clear headline.".to_string()
    } else {
        "Add a clear H1.".to_string()
    };
    if s.word_count > *CONCISE_WORDS.end() {
        feedback.push_str(" Keep copy concise.");
    }

    CriterionResult::new(score, feedback)
}

fn credibility(s: &PageSignals) -> CriterionResult {
    let score = 3 + s.trust_kw_count.min(7) as i64;

    let mut parts = Vec::new();
    if s.trust_kw_count == 0 {
        parts.push("Add testimonials/trust badges.");
    }
    if !s.mentions("https") {
        parts.push("Show security/privacy info.");
    }
    let feedback = if parts.is_empty() {
        "Good trust signals.".to_string()
    } else {
        parts.join(" ")
    };

    CriterionResult::new(score, feedback)
}

fn cta(s: &PageSignals) -> CriterionResult {
    let score = 4 + points(s.have_cta, 4) + points(s.have_h1, 2);
    let feedback = if s.have_cta {
        "CTA visible."
    } else {
        "Add a prominent CTA."
    };

    CriterionResult::new(score, feedback)
}
