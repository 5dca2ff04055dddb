//! In-memory [`LlmClient`] for tests and offline runs.
//!
//! Answers every call with a fixed reply (or a fixed failure) and records each
//! request so tests can assert on call count and prompt content.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{CompletionRequest, LlmClient, LlmResponse};
use crate::error::LlmError;

enum Outcome {
    Reply(String),
    Fail(String),
}

pub struct MockLlm {
    outcome: Outcome,
    calls: Mutex<Vec<CompletionRequest>>,
}

impl MockLlm {
    /// Every call returns `content` as the first choice's text.
    pub fn with_reply(content: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Reply(content.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every call fails with `LlmError::Api(message)`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Fail(message.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or(0)
    }

    /// Requests received so far, oldest first.
    pub fn calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn complete(&self, request: &CompletionRequest) -> Result<LlmResponse, LlmError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(request.clone());
        }
        match &self.outcome {
            Outcome::Reply(content) => Ok(LlmResponse {
                content: content.clone(),
                usage: None,
            }),
            Outcome::Fail(message) => Err(LlmError::Api(message.clone())),
        }
    }

    fn model(&self) -> &str {
        "mock"
    }
}
