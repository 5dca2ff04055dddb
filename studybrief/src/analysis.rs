//! Request and result types of one analysis, and the reply-to-sections shaping.

use serde::{Deserialize, Serialize};

use crate::error::{AnalyzeError, ValidationError};

pub const SUMMARY_FALLBACK: &str = "Here is a simple breakdown of the text...";
pub const STUDY_TIPS_FALLBACK: &str = "Try these study methods...";
pub const QUICK_FACTS_FALLBACK: &str = "Remember these key points...";

/// Blank-line boundary between sections of the model's reply.
pub const SECTION_SEPARATOR: &str = "\n\n";

/// Text submitted for analysis.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub text: String,
}

impl AnalysisRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Reads a raw HTTP body.
    ///
    /// Unparseable JSON, a non-object, an empty object, or a missing `text` key are all
    /// [`ValidationError::MissingText`]. A `text` that is present but not a string is
    /// [`AnalyzeError::Unexpected`]. Emptiness is checked later by [`validate`](Self::validate).
    pub fn from_json_body(body: &[u8]) -> Result<Self, AnalyzeError> {
        let value: serde_json::Value =
            serde_json::from_slice(body).map_err(|_| ValidationError::MissingText)?;
        let text = value
            .as_object()
            .and_then(|obj| obj.get("text"))
            .ok_or(ValidationError::MissingText)?;
        match text {
            serde_json::Value::String(s) => Ok(Self::new(s.clone())),
            other => Err(AnalyzeError::Unexpected(format!(
                "`text` is not a string: {}",
                other
            ))),
        }
    }

    /// Text must be non-empty after trimming.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.text.trim().is_empty() {
            return Err(ValidationError::EmptyText);
        }
        Ok(())
    }
}

/// The three labeled sections shown to the student. Always fully populated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub summary: String,
    pub study_tips: String,
    pub quick_facts: String,
}

impl AnalysisResult {
    /// Splits `reply` on every blank line and assigns sections by position.
    ///
    /// Sections past the third are dropped; missing ones get the fallback strings.
    /// The split is literal: an empty reply is one empty section, and consecutive
    /// separators produce empty sections in between.
    pub fn from_reply(reply: &str) -> Self {
        let mut sections = reply.split(SECTION_SEPARATOR);
        let mut next_or = |fallback: &str| {
            sections
                .next()
                .map(str::to_string)
                .unwrap_or_else(|| fallback.to_string())
        };
        let summary = next_or(SUMMARY_FALLBACK);
        let study_tips = next_or(STUDY_TIPS_FALLBACK);
        let quick_facts = next_or(QUICK_FACTS_FALLBACK);
        Self {
            summary,
            study_tips,
            quick_facts,
        }
    }
}
