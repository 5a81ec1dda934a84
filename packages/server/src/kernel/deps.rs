//! Server dependencies for scoring (using traits for testability)
//!
//! Built once at startup from [`Config`] and shared read-only by every
//! request. The LLM client sits behind [`BaseAI`] so tests can inject a mock.

use std::sync::Arc;
use std::time::Duration;

use crate::config::{Config, DEFAULT_MODEL};
use crate::kernel::{BaseAI, OpenAIAdapter};

/// Immutable knobs that decide whether and how the LLM path runs.
#[derive(Debug, Clone)]
pub struct ScoringSettings {
    /// Skip the LLM even when a client is present
    pub force_heuristic: bool,
    pub model: String,
    /// Upper bound on a single LLM call
    pub llm_timeout: Duration,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            force_heuristic: false,
            model: DEFAULT_MODEL.to_string(),
            llm_timeout: Duration::from_secs(30),
        }
    }
}

/// Server dependencies accessible to handlers
#[derive(Clone)]
pub struct ServerDeps {
    /// None when no credential was configured
    pub ai: Option<Arc<dyn BaseAI>>,
    pub settings: ScoringSettings,
}

impl ServerDeps {
    pub fn new(ai: Option<Arc<dyn BaseAI>>, settings: ScoringSettings) -> Self {
        Self { ai, settings }
    }

    /// Dependencies that can only ever produce heuristic scores.
    pub fn heuristic_only() -> Self {
        Self::new(
            None,
            ScoringSettings {
                force_heuristic: true,
                ..Default::default()
            },
        )
    }

    pub fn from_config(config: &Config) -> Self {
        let ai: Option<Arc<dyn BaseAI>> = config.openai_api_key.as_ref().map(|key| {
            let mut adapter = OpenAIAdapter::new(key.clone());
            if let Some(url) = &config.openai_base_url {
                adapter = adapter.with_base_url(url.clone());
            }
            Arc::new(adapter) as Arc<dyn BaseAI>
        });

        Self::new(
            ai,
            ScoringSettings {
                force_heuristic: config.use_mock,
                model: config.openai_model.clone(),
                llm_timeout: config.llm_timeout,
            },
        )
    }

    /// The LLM client to attempt, if the LLM path is enabled at all.
    pub fn llm(&self) -> Option<&Arc<dyn BaseAI>> {
        if self.settings.force_heuristic {
            return None;
        }
        self.ai.as_ref()
    }
}
