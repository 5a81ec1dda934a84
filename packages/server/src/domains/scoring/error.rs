use thiserror::Error;

use crate::kernel::ClientError;

/// Why the LLM path could not produce a result. Always recovered by
/// falling back to heuristic scoring.
#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("malformed model response: {0}")]
    MalformedResponse(String),

    #[error(transparent)]
    Client(#[from] ClientError),
}

impl ScoringError {
    /// Error class recorded in fallback notes.
    pub fn class(&self) -> String {
        match self {
            ScoringError::MalformedResponse(_) => "MalformedResponse".to_string(),
            ScoringError::Client(err) => format!("ClientError::{}", err.kind()),
        }
    }
}
