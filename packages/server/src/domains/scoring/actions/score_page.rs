//! Score one page: LLM when enabled, heuristic otherwise or on any failure.

use std::time::Instant;

use tracing::{debug, warn};

use crate::domains::scoring::error::ScoringError;
use crate::domains::scoring::heuristic::heuristic_score;
use crate::domains::scoring::models::{Criteria, ScoreResult};
use crate::domains::scoring::normalize::normalize_response;
use crate::domains::scoring::prompts::build_scoring_prompt;
use crate::kernel::{BaseAI, ClientError, ServerDeps};

/// Prefix of the notes written when the LLM path failed.
pub const FALLBACK_NOTES_PREFIX: &str = "Mock fallback due to error:";

/// Score `html` against `criteria`. Never fails: LLM errors degrade to the
/// heuristic scorer with the error class recorded in `notes`.
pub async fn score_page(
    html: &str,
    url: Option<&str>,
    criteria: &Criteria,
    deps: &ServerDeps,
) -> ScoreResult {
    let Some(ai) = deps.llm() else {
        debug!("LLM disabled, using heuristic scoring");
        return heuristic_score(html, criteria);
    };

    match llm_score(&**ai, html, url, criteria, deps).await {
        Ok(result) => result,
        Err(err) => {
            warn!(
                error = %err,
                class = %err.class(),
                "LLM scoring failed, falling back to heuristic"
            );
            let mut result = heuristic_score(html, criteria);
            result.notes = format!("{} {}", FALLBACK_NOTES_PREFIX, err.class());
            result
        }
    }
}

async fn llm_score(
    ai: &dyn BaseAI,
    html: &str,
    url: Option<&str>,
    criteria: &Criteria,
    deps: &ServerDeps,
) -> Result<ScoreResult, ScoringError> {
    let settings = &deps.settings;
    let prompt = build_scoring_prompt(html, url, criteria);
    let start = Instant::now();

    let raw = tokio::time::timeout(
        settings.llm_timeout,
        ai.complete_json(&prompt.system, &prompt.user, &settings.model),
    )
    .await
    .map_err(|_| ClientError::Timeout(settings.llm_timeout))??;

    debug!(
        model = %settings.model,
        duration_ms = start.elapsed().as_millis(),
        response_length = raw.len(),
        "LLM scoring response received"
    );

    normalize_response(&raw, criteria)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::scoring::heuristic::HEURISTIC_NOTES;
    use crate::domains::scoring::prompts::SCORING_SYSTEM_PROMPT;
    use crate::kernel::{MockAI, ScoringSettings};
    use std::sync::Arc;
    use std::time::Duration;

    fn llm_deps(mock: Arc<MockAI>) -> ServerDeps {
        ServerDeps::new(Some(mock), ScoringSettings::default())
    }

    const GOOD_REPLY: &str = r#"{
        "scores": {
            "clarity": {"score": 8, "feedback": "Clear."},
            "credibility": {"score": 5, "feedback": "Thin."},
            "cta": {"score": 9, "feedback": "Visible."}
        },
        "overall": 7.33,
        "notes": "model"
    }"#;

    #[tokio::test]
    async fn test_heuristic_when_llm_disabled() {
        let result = score_page("", None, &Criteria::default(), &ServerDeps::heuristic_only()).await;

        assert_eq!(result.notes, HEURISTIC_NOTES);
        assert_eq!(result.overall, 3.67);
    }

    #[tokio::test]
    async fn test_force_heuristic_never_calls_llm() {
        let mock = Arc::new(MockAI::new().with_response(GOOD_REPLY));
        let deps = ServerDeps::new(
            Some(mock.clone()),
            ScoringSettings {
                force_heuristic: true,
                ..Default::default()
            },
        );

        let result = score_page("<h1>x</h1>", None, &Criteria::default(), &deps).await;

        assert_eq!(result.notes, HEURISTIC_NOTES);
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_llm_result_used_when_valid() {
        let mock = Arc::new(MockAI::new().with_response(GOOD_REPLY));
        let deps = llm_deps(mock.clone());

        let result = score_page("<h1>x</h1>", Some("https://acme.test"), &Criteria::default(), &deps).await;

        assert_eq!(result.score_of("cta"), Some(9));
        assert_eq!(result.overall, 7.33);
        assert_eq!(result.notes, "model");

        let calls = mock.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].model, deps.settings.model);
        assert_eq!(calls[0].system_prompt, SCORING_SYSTEM_PROMPT);
        assert!(calls[0].user_prompt.contains("URL: https://acme.test"));
        assert!(calls[0].user_prompt.contains("<h1>x</h1>"));
    }

    #[tokio::test]
    async fn test_client_errors_fall_back() {
        let errors = [
            ClientError::Network("connection reset".into()),
            ClientError::Api {
                status: 429,
                message: "rate limited".into(),
            },
            ClientError::Api {
                status: 401,
                message: "bad key".into(),
            },
            ClientError::Protocol("no choices".into()),
            ClientError::Config("bad url".into()),
        ];

        for error in errors {
            let kind = error.kind();
            let deps = llm_deps(Arc::new(MockAI::new().with_error(error)));

            let result = score_page("", None, &Criteria::default(), &deps).await;

            assert_eq!(result.notes, format!("Mock fallback due to error: ClientError::{kind}"));
            assert_eq!(result.overall, 3.67);
            assert!(result.scores.values().all(|c| (1..=10).contains(&c.score)));
        }
    }

    #[tokio::test]
    async fn test_malformed_reply_falls_back() {
        let deps = llm_deps(Arc::new(MockAI::new().with_response("I think it's great!")));

        let result = score_page("", None, &Criteria::default(), &deps).await;

        assert_eq!(result.notes, "Mock fallback due to error: MalformedResponse");
        assert_eq!(result.scores.len(), 3);
    }

    #[tokio::test]
    async fn test_slow_llm_times_out() {
        let mock = Arc::new(MockAI::new().with_delay(Duration::from_millis(200)));
        let deps = ServerDeps::new(
            Some(mock),
            ScoringSettings {
                llm_timeout: Duration::from_millis(20),
                ..Default::default()
            },
        );

        let result = score_page("", None, &Criteria::default(), &deps).await;

        assert_eq!(result.notes, "Mock fallback due to error: ClientError::Timeout");
    }

    #[tokio::test]
    async fn test_single_attempt_no_retry() {
        let mock = Arc::new(
            MockAI::new()
                .with_error(ClientError::Network("down".into()))
                .with_response(GOOD_REPLY),
        );
        let deps = llm_deps(mock.clone());

        let result = score_page("", None, &Criteria::default(), &deps).await;

        assert!(result.notes.starts_with(FALLBACK_NOTES_PREFIX));
        assert_eq!(mock.call_count(), 1);
    }
}
