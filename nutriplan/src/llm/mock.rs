//! Fixed-reply inference client for tests and offline runs.

use std::sync::Mutex;

use async_trait::async_trait;

use super::InferenceClient;

/// Inference double: returns a fixed reply and records every prompt.
///
/// Use [`prompts`](MockInference::prompts) to assert what was sent, or
/// that nothing was (validation must short-circuit before the client).
pub struct MockInference {
    reply: String,
    prompts: Mutex<Vec<String>>,
}

impl MockInference {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceClient for MockInference {
    async fn generate(&self, prompt: &str) -> String {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone()
    }
}
