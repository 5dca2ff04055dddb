//! # studybrief
//!
//! Turns a passage of study material into three labeled sections for a student-facing UI:
//! a simplified **summary**, a few **study tips**, and some memorable **quick facts**.
//!
//! One analysis is one round trip: validate the text, send a fixed instruction plus the
//! text to a completion service ([`LlmClient`]), split the reply on blank lines, and fill
//! any missing section with a fallback string ([`AnalysisResult::from_reply`]).
//!
//! ## Main modules
//!
//! - [`analyzer`]: [`Analyzer::analyze`], the only operation.
//! - [`analysis`]: [`AnalysisRequest`], [`AnalysisResult`], section shaping.
//! - [`llm`]: [`LlmClient`] with [`ChatOpenAI`] and [`MockLlm`].
//! - [`settings`]: [`ProviderSettings`] built once at startup.
//! - [`annotations`]: [`AnnotationStore`], the file-backed annotation list served next to
//!   the analysis endpoint.
//!
//! ```no_run
//! use std::sync::Arc;
//! use studybrief::{AnalysisRequest, Analyzer, MockLlm};
//!
//! # async fn demo() -> Result<(), studybrief::AnalyzeError> {
//! let analyzer = Analyzer::new(Arc::new(MockLlm::with_reply("A\n\nB\n\nC")));
//! let result = analyzer.analyze(&AnalysisRequest::new("Photosynthesis...")).await?;
//! assert_eq!(result.study_tips, "B");
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod analyzer;
pub mod annotations;
pub mod error;
pub mod llm;
pub mod message;
pub mod prompts;
pub mod settings;

pub use analysis::{
    AnalysisRequest, AnalysisResult, QUICK_FACTS_FALLBACK, STUDY_TIPS_FALLBACK, SUMMARY_FALLBACK,
};
pub use analyzer::{Analyzer, MAX_TOKENS, TEMPERATURE};
pub use annotations::AnnotationStore;
pub use error::{AnalyzeError, AnnotationError, LlmError, SettingsError, ValidationError};
pub use llm::{ChatOpenAI, CompletionRequest, LlmClient, LlmResponse, LlmUsage, MockLlm};
pub use message::Message;
pub use prompts::STUDY_SYSTEM_PROMPT;
pub use settings::ProviderSettings;
