//! Reads of single environment variables.

/// Value of `key`, trimmed. Unset, non-UTF-8 and blank values are all `None`.
pub fn var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
