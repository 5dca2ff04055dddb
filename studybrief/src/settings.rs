//! Provider settings, built once at startup from the environment.

use crate::error::SettingsError;

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Credential, endpoint and model for the completion service.
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    pub api_key: String,
    /// `None` means the public OpenAI endpoint.
    pub api_base: Option<String>,
    pub model: String,
}

impl ProviderSettings {
    /// Reads:
    ///
    /// - `OPENAI_API_KEY` (required; blank counts as missing)
    /// - `OPENAI_BASE_URL`, else `OPENAI_API_BASE` (optional)
    /// - `STUDYBRIEF_MODEL` (default [`DEFAULT_MODEL`])
    pub fn from_env() -> Result<Self, SettingsError> {
        let api_key = env_config::var("OPENAI_API_KEY").ok_or(SettingsError::MissingApiKey)?;
        let api_base =
            env_config::var("OPENAI_BASE_URL").or_else(|| env_config::var("OPENAI_API_BASE"));
        let model =
            env_config::var("STUDYBRIEF_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        Ok(Self {
            api_key,
            api_base,
            model,
        })
    }
}

impl std::fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("api_key", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .finish()
    }
}
