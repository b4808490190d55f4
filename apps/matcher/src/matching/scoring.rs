//! Match scoring: percentage of a posting's keywords present in the resume.
//!
//! Pluggable behind `MatchScorer` so the session never depends on one
//! backend. `KeywordOverlapScorer` is the lexical default.

use crate::matching::normalize::ResumeTokens;

pub trait MatchScorer: Send + Sync {
    /// Integer score in 0 – 100.
    fn score(&self, resume: &ResumeTokens, keywords: &[String]) -> u8;

    /// Backend label, surfaced in logs.
    fn backend(&self) -> &'static str;
}

/// Exact-token overlap: `round(100 * matched / total)`, 0 when there are no keywords.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordOverlapScorer;

impl MatchScorer for KeywordOverlapScorer {
    fn score(&self, resume: &ResumeTokens, keywords: &[String]) -> u8 {
        keyword_overlap_score(resume, keywords)
    }

    fn backend(&self) -> &'static str {
        "keyword"
    }
}

pub fn keyword_overlap_score(resume: &ResumeTokens, keywords: &[String]) -> u8 {
    if keywords.is_empty() {
        return 0;
    }

    let total = keywords.len();
    let matched = keywords.iter().filter(|k| resume.contains(k.as_str())).count();

    // Integer round-half-up of 100 * matched / total; matched <= total keeps it <= 100.
    ((200 * matched + total) / (2 * total)) as u8
}
