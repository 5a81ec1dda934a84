use std::time::Duration;

use thiserror::Error;

/// Failures of the external LLM service, as seen at the adapter boundary.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("client misconfigured: {0}")]
    Config(String),

    #[error("network failure: {0}")]
    Network(String),

    /// Non-2xx from the service: auth, rate limit, bad request, outage
    #[error("service returned {status}: {message}")]
    Api { status: u16, message: String },

    /// The service answered but its envelope could not be read
    #[error("unreadable service response: {0}")]
    Protocol(String),

    #[error("no response within {0:?}")]
    Timeout(Duration),
}

impl ClientError {
    /// Short variant name, used in fallback provenance notes.
    pub fn kind(&self) -> &'static str {
        match self {
            ClientError::Config(_) => "Config",
            ClientError::Network(_) => "Network",
            ClientError::Api { .. } => "Api",
            ClientError::Protocol(_) => "Protocol",
            ClientError::Timeout(_) => "Timeout",
        }
    }
}

impl From<openai_client::OpenAIError> for ClientError {
    fn from(err: openai_client::OpenAIError) -> Self {
        use openai_client::OpenAIError;

        match err {
            OpenAIError::Config(msg) => ClientError::Config(msg),
            OpenAIError::Network(msg) => ClientError::Network(msg),
            OpenAIError::Api { status, message } => ClientError::Api { status, message },
            OpenAIError::Parse(msg) => ClientError::Protocol(msg),
        }
    }
}
