use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 10;

/// Delta key holding the change in the aggregate score.
pub const OVERALL_KEY: &str = "overall";

/// Score and feedback for one criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionResult {
    pub score: u8,
    pub feedback: String,
}

impl CriterionResult {
    /// Clamps `score` into [1, 10].
    pub fn new(score: i64, feedback: impl Into<String>) -> Self {
        Self {
            score: score.clamp(MIN_SCORE as i64, MAX_SCORE as i64) as u8,
            feedback: feedback.into(),
        }
    }

    /// Placeholder for a criterion the model did not answer. Score 0 sits
    /// outside the normal range on purpose.
    pub fn unanswered() -> Self {
        Self {
            score: 0,
            feedback: String::new(),
        }
    }
}

/// Scores for one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub scores: BTreeMap<String, CriterionResult>,
    pub overall: f64,
    pub notes: String,
}

impl ScoreResult {
    /// Build a result whose `overall` is the rounded mean of `scores`.
    pub fn from_scores(scores: BTreeMap<String, CriterionResult>, notes: impl Into<String>) -> Self {
        let overall = mean_score(scores.values());
        Self {
            scores,
            overall,
            notes: notes.into(),
        }
    }

    pub fn score_of(&self, criterion: &str) -> Option<u8> {
        self.scores.get(criterion).map(|c| c.score)
    }
}

/// Before/after scores for two variants of a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareResult {
    pub before: ScoreResult,
    pub after: ScoreResult,
    /// after − before per criterion, plus [`OVERALL_KEY`]
    pub delta: BTreeMap<String, f64>,
}

/// Round to two decimal places, exact ties to even.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Rounded mean of criterion scores; 0.0 when there are none.
pub fn mean_score<'a>(results: impl IntoIterator<Item = &'a CriterionResult>) -> f64 {
    let (sum, count) = results
        .into_iter()
        .fold((0u32, 0u32), |(sum, count), r| (sum + r.score as u32, count + 1));

    if count == 0 {
        0.0
    } else {
        round2(sum as f64 / count as f64)
    }
}
