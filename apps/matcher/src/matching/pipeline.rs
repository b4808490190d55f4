//! Score → rank → suggest, recomputed wholesale for every processed resume.

use tracing::debug;

use crate::matching::normalize::ResumeTokens;
use crate::matching::ranking::RankedPostings;
use crate::matching::scoring::MatchScorer;
use crate::matching::suggestions::suggest_keywords;
use crate::matching::MatchLimits;
use crate::models::job::JobPosting;

/// Outcome of scoring one resume against the full posting set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchReport {
    ranked: RankedPostings,
    suggestions: Vec<String>,
    display_limit: usize,
}

impl MatchReport {
    /// Top postings surfaced to the user.
    pub fn top(&self) -> &[JobPosting] {
        self.ranked.top(self.display_limit)
    }

    /// Every posting, ranked, for callers that want more than the top view.
    pub fn ranked(&self) -> &[JobPosting] {
        self.ranked.all()
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }
}

/// Scores every posting into a derived copy, ranks the complete set, then
/// draws suggestions from the top view only.
pub fn run_pipeline(
    postings: &[JobPosting],
    resume: &ResumeTokens,
    scorer: &dyn MatchScorer,
    limits: &MatchLimits,
) -> MatchReport {
    let scored: Vec<JobPosting> = postings
        .iter()
        .map(|posting| posting.with_match(scorer.score(resume, &posting.keywords)))
        .collect();

    let ranked = RankedPostings::rank(scored);
    let suggestions = suggest_keywords(ranked.top(limits.display), resume, limits.suggestions);

    debug!(
        "Scored {} postings with '{}' scorer: top match {}%, {} suggestions",
        ranked.all().len(),
        scorer.backend(),
        ranked.all().first().map(JobPosting::display_match).unwrap_or(0),
        suggestions.len()
    );

    MatchReport {
        ranked,
        suggestions,
        display_limit: limits.display,
    }
}
