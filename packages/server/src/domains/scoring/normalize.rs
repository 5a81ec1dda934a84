//! Turns the model's raw reply into a [`ScoreResult`] over exactly the
//! requested criteria.

use std::collections::BTreeMap;

use openai_client::strip_code_blocks;
use serde::Deserialize;
use serde_json::Value;

use super::error::ScoringError;
use super::models::{mean_score, round2, CriterionResult, Criteria, ScoreResult};

#[derive(Debug, Deserialize)]
struct RawScoreResponse {
    #[serde(default)]
    scores: BTreeMap<String, RawCriterion>,
    #[serde(default)]
    overall: Option<Value>,
    #[serde(default)]
    notes: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct RawCriterion {
    score: f64,
    #[serde(default)]
    feedback: Option<Value>,
}

impl RawCriterion {
    fn into_result(self) -> CriterionResult {
        let feedback = match self.feedback {
            Some(Value::String(text)) => text,
            _ => String::new(),
        };
        CriterionResult::new(self.score.round() as i64, feedback)
    }
}

/// Parse and repair a model reply.
///
/// Criteria the model skipped get [`CriterionResult::unanswered`]; criteria
/// nobody asked for are dropped. A finite numeric `overall` is kept, anything
/// else is recomputed from the merged scores.
pub fn normalize_response(raw: &str, criteria: &Criteria) -> Result<ScoreResult, ScoringError> {
    let parsed: RawScoreResponse = serde_json::from_str(strip_code_blocks(raw))
        .map_err(|e| ScoringError::MalformedResponse(e.to_string()))?;

    let scores = merge_scores(parsed.scores, criteria);

    let overall = match parsed
        .overall
        .as_ref()
        .and_then(Value::as_f64)
        .map(round2)
        .filter(|o| o.is_finite())
    {
        Some(reported) => reported,
        None => mean_score(scores.values()),
    };

    let notes = match parsed.notes {
        Some(Value::String(notes)) => notes,
        _ => String::new(),
    };

    Ok(ScoreResult {
        scores,
        overall,
        notes,
    })
}

/// Total mapping over `criteria`: model answers where present, the
/// unanswered placeholder elsewhere.
fn merge_scores(
    mut answered: BTreeMap<String, RawCriterion>,
    criteria: &Criteria,
) -> BTreeMap<String, CriterionResult> {
    criteria
        .iter()
        .map(|name| {
            let result = answered
                .remove(name)
                .map(RawCriterion::into_result)
                .unwrap_or_else(CriterionResult::unanswered);
            (name.to_string(), result)
        })
        .collect()
}
