use thiserror::Error;

/// Input rejected before any provider call is made.
///
/// `Display` is the exact message returned to callers.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Body is not JSON, not an object, empty, or lacks a `text` key.
    #[error("No text provided")]
    MissingText,
    /// `text` is empty or whitespace only.
    #[error("Empty text provided")]
    EmptyText,
}

/// Failure of the completion call or of its response shape.
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("request build failed: {0}")]
    RequestBuild(String),
    #[error("provider API error: {0}")]
    Api(String),
    #[error("provider returned no choices")]
    NoChoices,
    #[error("provider returned a choice without text content")]
    MissingContent,
}

/// Everything `Analyzer::analyze` can fail with.
#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("provider error: {0}")]
    Provider(#[from] LlmError),
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl AnalyzeError {
    /// Validation failures are reported to the caller; everything else is collapsed.
    pub fn as_validation(&self) -> Option<ValidationError> {
        match self {
            AnalyzeError::Validation(v) => Some(*v),
            _ => None,
        }
    }
}

/// Startup configuration problems. Fatal for the process, never per request.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("No OpenAI API key found. Please set the OPENAI_API_KEY environment variable.")]
    MissingApiKey,
}

/// Annotation file failures. `Display` is the message returned to callers.
#[derive(Error, Debug)]
pub enum AnnotationError {
    #[error("Failed to read annotations.")]
    Read(#[source] std::io::Error),
    #[error("Failed to parse annotations.")]
    Parse(#[source] serde_json::Error),
    #[error("Failed to write annotation.")]
    Write(#[source] std::io::Error),
}
