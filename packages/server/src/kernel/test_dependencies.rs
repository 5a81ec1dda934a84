// Mock implementations for testing
//
// Provides a scripted BaseAI that can be injected into ServerDeps for tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::{BaseAI, ClientError};

/// Arguments captured from a complete_json call
#[derive(Debug, Clone)]
pub struct MockCall {
    pub system_prompt: String,
    pub user_prompt: String,
    pub model: String,
}

enum Scripted {
    Reply(String),
    Fail(ClientError),
}

/// Scripted LLM: replays queued replies/failures in order, then falls back
/// to the default reply.
pub struct MockAI {
    script: Arc<Mutex<Vec<Scripted>>>,
    default_reply: String,
    delay: Option<Duration>,
    calls: Arc<Mutex<Vec<MockCall>>>,
}

impl Default for MockAI {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAI {
    pub fn new() -> Self {
        Self {
            script: Arc::new(Mutex::new(Vec::new())),
            default_reply: "{}".to_string(),
            delay: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a raw reply
    pub fn with_response(self, raw: &str) -> Self {
        self.script
            .lock()
            .unwrap()
            .push(Scripted::Reply(raw.to_string()));
        self
    }

    /// Queue a failure
    pub fn with_error(self, error: ClientError) -> Self {
        self.script.lock().unwrap().push(Scripted::Fail(error));
        self
    }

    /// Reply used once the queue is drained
    pub fn with_default_response(mut self, raw: &str) -> Self {
        self.default_reply = raw.to_string();
        self
    }

    /// Sleep before answering (for timeout tests)
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Get all calls made so far
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl BaseAI for MockAI {
    async fn complete_json(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        model: &str,
    ) -> Result<String, ClientError> {
        self.calls.lock().unwrap().push(MockCall {
            system_prompt: system_prompt.to_string(),
            user_prompt: user_prompt.to_string(),
            model: model.to_string(),
        });

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let next = {
            let mut script = self.script.lock().unwrap();
            if script.is_empty() {
                None
            } else {
                Some(script.remove(0))
            }
        };

        match next {
            Some(Scripted::Reply(raw)) => Ok(raw),
            Some(Scripted::Fail(error)) => Err(error),
            None => Ok(self.default_reply.clone()),
        }
    }
}
