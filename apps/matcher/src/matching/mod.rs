// Matching engine: keyword extraction, resume normalization, overlap scoring,
// ranking and gap suggestions. Pure functions only; no I/O in this module.

pub mod keywords;
pub mod normalize;
pub mod pipeline;
pub mod ranking;
pub mod scoring;
pub mod suggestions;

/// Postings surfaced to the user and fed to the suggestion generator.
pub const DISPLAY_LIMIT: usize = 10;
/// Maximum number of keyword suggestions per upload.
pub const SUGGESTION_LIMIT: usize = 10;

/// Truncation limits applied after ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchLimits {
    pub display: usize,
    pub suggestions: usize,
}

impl Default for MatchLimits {
    fn default() -> Self {
        Self {
            display: DISPLAY_LIMIT,
            suggestions: SUGGESTION_LIMIT,
        }
    }
}
