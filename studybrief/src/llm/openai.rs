//! OpenAI Chat Completions client implementing [`LlmClient`].
//!
//! Sends one non-streaming `chat/completions` request per call. The API key and an
//! optional base URL come from [`ProviderSettings`]; any OpenAI-compatible proxy works.
//!
//! Each call is a single HTTP attempt: the `async_openai` client is built with a backoff
//! whose elapsed-time budget is zero, so 5xx and 429 responses come back as errors
//! instead of being retried.

use std::time::Duration;

use async_trait::async_trait;
use backoff::ExponentialBackoffBuilder;
use tracing::{debug, trace};

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
        ChatCompletionRequestUserMessage, CreateChatCompletionRequestArgs,
    },
    Client,
};

use super::{CompletionRequest, LlmClient, LlmResponse, LlmUsage};
use crate::error::LlmError;
use crate::message::Message;
use crate::settings::ProviderSettings;

const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

pub struct ChatOpenAI {
    client: Client<OpenAIConfig>,
    model: String,
    api_base: String,
}

impl ChatOpenAI {
    /// Client for an explicit `async_openai` config (tests point `api_base` at unreachable hosts).
    pub fn with_config(config: OpenAIConfig, model: impl Into<String>) -> Self {
        use async_openai::config::Config;
        let api_base = config.api_base().to_string();
        let single_attempt = ExponentialBackoffBuilder::new()
            .with_max_elapsed_time(Some(Duration::ZERO))
            .build();
        Self {
            client: Client::with_config(config).with_backoff(single_attempt),
            model: model.into(),
            api_base,
        }
    }

    /// Client built from startup settings.
    pub fn from_settings(settings: &ProviderSettings) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(settings.api_key.clone())
            .with_api_base(
                settings
                    .api_base
                    .clone()
                    .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            );
        Self::with_config(config, settings.model.clone())
    }

    fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_base.trim_end_matches('/'))
    }

    fn messages_to_request(messages: &[Message]) -> Vec<ChatCompletionRequestMessage> {
        messages
            .iter()
            .map(|m| match m {
                Message::System(s) => ChatCompletionRequestMessage::System(
                    ChatCompletionRequestSystemMessage::from(s.as_str()),
                ),
                Message::User(s) => ChatCompletionRequestMessage::User(
                    ChatCompletionRequestUserMessage::from(s.as_str()),
                ),
            })
            .collect()
    }
}

#[async_trait]
impl LlmClient for ChatOpenAI {
    async fn complete(&self, request: &CompletionRequest) -> Result<LlmResponse, LlmError> {
        let trace_id = uuid::Uuid::new_v4().to_string();
        let url = self.chat_completions_url();

        let mut args = CreateChatCompletionRequestArgs::default();
        args.model(self.model.clone());
        args.messages(Self::messages_to_request(&request.messages));
        args.temperature(request.temperature);
        // Deprecated upstream, but the field OpenAI-compatible servers honor.
        #[allow(deprecated)]
        args.max_tokens(request.max_tokens);
        let body = args
            .build()
            .map_err(|e| LlmError::RequestBuild(e.to_string()))?;

        debug!(
            trace_id = %trace_id,
            url = %url,
            model = %self.model,
            message_count = request.messages.len(),
            temperature = request.temperature,
            max_tokens = request.max_tokens,
            "OpenAI chat create"
        );
        if let Ok(js) = serde_json::to_string_pretty(&body) {
            trace!(trace_id = %trace_id, request = %js, "OpenAI request body");
        }

        let response = self
            .client
            .chat()
            .create(body)
            .await
            .map_err(|e| LlmError::Api(e.to_string()))?;

        if let Ok(js) = serde_json::to_string_pretty(&response) {
            trace!(trace_id = %trace_id, response = %js, "OpenAI response body");
        }

        let usage = response.usage.map(|u| LlmUsage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        });
        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or(LlmError::NoChoices)?;
        let content = choice.message.content.ok_or(LlmError::MissingContent)?;

        debug!(
            trace_id = %trace_id,
            content_len = content.len(),
            usage = ?usage,
            "OpenAI chat done"
        );
        Ok(LlmResponse { content, usage })
    }

    fn model(&self) -> &str {
        &self.model
    }
}
