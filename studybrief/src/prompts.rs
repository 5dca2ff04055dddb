//! Fixed prompt for the study analysis.

use crate::message::Message;

/// System instruction asking for the three sections, in the order the reply is split.
pub const STUDY_SYSTEM_PROMPT: &str = "You are a helpful educational assistant. For the given text, provide:
1. Easy Summary: Break down the main points in simple terms that a student can understand.
2. Study Tips: Provide 2-3 practical ways to remember and understand this information better.
3. Quick Facts: List 2-3 interesting facts or key points that make this topic memorable.
Keep the language simple and student-friendly.";

/// System instruction followed by the caller's text, verbatim.
pub fn build_messages(text: &str) -> Vec<Message> {
    vec![Message::system(STUDY_SYSTEM_PROMPT), Message::user(text)]
}
