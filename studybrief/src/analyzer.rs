//! The analysis operation: validate, prompt once, shape the reply.

use std::sync::Arc;

use tracing::debug;

use crate::analysis::{AnalysisRequest, AnalysisResult};
use crate::error::AnalyzeError;
use crate::llm::{ChatOpenAI, CompletionRequest, LlmClient};
use crate::prompts::build_messages;
use crate::settings::ProviderSettings;

pub const TEMPERATURE: f32 = 0.7;
pub const MAX_TOKENS: u32 = 400;

/// Runs analyses against one completion service. Cheap to clone; holds no per-call state.
#[derive(Clone)]
pub struct Analyzer {
    llm: Arc<dyn LlmClient>,
}

impl Analyzer {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    /// Analyzer backed by [`ChatOpenAI`].
    pub fn from_settings(settings: &ProviderSettings) -> Self {
        Self::new(Arc::new(ChatOpenAI::from_settings(settings)))
    }

    /// Validates `request`, makes exactly one completion call, and splits the reply.
    ///
    /// Validation errors return before the call. Provider errors are returned as-is;
    /// nothing is retried.
    pub async fn analyze(
        &self,
        request: &AnalysisRequest,
    ) -> Result<AnalysisResult, AnalyzeError> {
        request.validate()?;

        let completion = CompletionRequest {
            messages: build_messages(&request.text),
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };
        debug!(
            model = %self.llm.model(),
            text_len = request.text.len(),
            "analyze: calling provider"
        );
        let response = self.llm.complete(&completion).await?;

        Ok(AnalysisResult::from_reply(&response.content))
    }
}
