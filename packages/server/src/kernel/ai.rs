// AI implementation using OpenAI
//
// This is the infrastructure implementation of BaseAI.
// Business logic (what to prompt for) lives in domain layers.

use async_trait::async_trait;
use openai_client::{ChatRequest, Message, OpenAIClient};

use super::{BaseAI, ClientError};

/// Sampling temperature for models that accept one.
const SCORING_TEMPERATURE: f32 = 0.2;

/// OpenAI implementation of AI capabilities
#[derive(Clone)]
pub struct OpenAIAdapter {
    client: OpenAIClient,
}

impl OpenAIAdapter {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: OpenAIClient::new(api_key),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.client = self.client.with_base_url(url);
        self
    }

    /// Request body for one scoring call.
    pub fn build_request(system_prompt: &str, user_prompt: &str, model: &str) -> ChatRequest {
        let request = ChatRequest::new(model)
            .message(Message::system(system_prompt))
            .message(Message::user(user_prompt))
            .json_object();

        if ChatRequest::is_reasoning_model(model) {
            request
        } else {
            request.temperature(SCORING_TEMPERATURE)
        }
    }
}

#[async_trait]
impl BaseAI for OpenAIAdapter {
    async fn complete_json(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        model: &str,
    ) -> Result<String, ClientError> {
        tracing::debug!(
            model,
            prompt_length = system_prompt.len() + user_prompt.len(),
            "Calling OpenAI API"
        );

        let request = Self::build_request(system_prompt, user_prompt, model);
        let response = self.client.chat_completion(request).await?;

        if let Some(usage) = &response.usage {
            tracing::debug!(
                model,
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "OpenAI API response received"
            );
        }

        Ok(response.content)
    }
}
