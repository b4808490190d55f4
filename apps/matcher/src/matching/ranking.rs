//! Ranking: orders scored postings by match, highest first.

use crate::models::job::JobPosting;

/// The full ranked posting set. Truncated views are borrowed from it, so
/// ranking always happens over every posting before any cut.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankedPostings {
    ranked: Vec<JobPosting>,
}

impl RankedPostings {
    /// Sorts by match descending. `sort_by` is stable: equal scores keep
    /// their original relative order.
    pub fn rank(mut postings: Vec<JobPosting>) -> Self {
        postings.sort_by(|a, b| b.display_match().cmp(&a.display_match()));
        Self { ranked: postings }
    }

    /// First `limit` postings, or all of them when there are fewer.
    pub fn top(&self, limit: usize) -> &[JobPosting] {
        &self.ranked[..limit.min(self.ranked.len())]
    }

    pub fn all(&self) -> &[JobPosting] {
        &self.ranked
    }
}
