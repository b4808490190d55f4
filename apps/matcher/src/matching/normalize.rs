//! Resume normalizer: turns extracted resume text into a lookup set.

use std::collections::HashSet;

/// Lowercased whitespace-delimited resume tokens. Only membership is ever
/// queried, so duplicates collapse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResumeTokens(HashSet<String>);

impl ResumeTokens {
    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Lowercases and splits on runs of whitespace. Punctuation stays attached,
/// so "rust," does not match the keyword "rust".
pub fn normalize_resume(text: &str) -> ResumeTokens {
    ResumeTokens(
        text.to_lowercase()
            .split_whitespace()
            .map(String::from)
            .collect(),
    )
}
