//! Completion-service abstraction.
//!
//! The analyzer depends on [`LlmClient`] only; [`ChatOpenAI`] talks to an
//! OpenAI-compatible Chat Completions endpoint and [`MockLlm`] answers from memory
//! for tests.

mod mock;
mod openai;

pub use mock::MockLlm;
pub use openai::ChatOpenAI;

use async_trait::async_trait;

use crate::error::LlmError;
use crate::message::Message;

/// One completion call: prompt plus sampling parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct CompletionRequest {
    pub messages: Vec<Message>,
    /// Sampling temperature (0–2).
    pub temperature: f32,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
}

/// Token usage for one call, when the provider reports it.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct LlmUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Text of the first returned choice.
#[derive(Clone, Debug)]
pub struct LlmResponse {
    pub content: String,
    pub usage: Option<LlmUsage>,
}

/// A completion service: one request in, the first choice's text out.
///
/// Implementations issue exactly one outbound call per `complete` and do not retry.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<LlmResponse, LlmError>;

    /// Model name for logs.
    fn model(&self) -> &str;
}
