//! Error types for OpenAI client.

use thiserror::Error;

/// Result type for OpenAI client operations.
pub type Result<T> = std::result::Result<T, OpenAIError>;

/// OpenAI client errors.
#[derive(Debug, Error)]
pub enum OpenAIError {
    /// Configuration error (unusable base URL)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, client-side timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// API error (non-2xx response: auth, rate limit, invalid request)
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Parse error (invalid JSON envelope, missing choices or content)
    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_carries_status() {
        let unauthorized = OpenAIError::Api {
            status: 401,
            message: "bad key".into(),
        };
        assert_eq!(unauthorized.to_string(), "API error (401): bad key");
    }
}
