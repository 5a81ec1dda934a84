// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// What to prompt for and how to read the answer lives in domains/scoring.
//
// Naming convention: Base* for trait names (e.g., BaseAI)

use async_trait::async_trait;

use super::ClientError;

// =============================================================================
// AI Trait (Infrastructure - Generic LLM capabilities)
// =============================================================================

#[async_trait]
pub trait BaseAI: Send + Sync {
    /// Send a system + user prompt pair and return the model's raw reply,
    /// which the caller expects to be a single JSON object.
    async fn complete_json(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        model: &str,
    ) -> Result<String, ClientError>;
}
