//! Posting sources, i.e. where the session gets its job postings from.

pub mod fixture;
pub mod search;

use std::collections::HashSet;

use async_trait::async_trait;

use crate::errors::AcquisitionError;
use crate::models::job::JobPosting;

pub use fixture::FixtureSource;
pub use search::SearchSource;

/// Any provider of raw postings. Implementations map provider data into
/// canonical `JobPosting`s and reject payloads they cannot validate.
#[async_trait]
pub trait PostingSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<JobPosting>, AcquisitionError>;

    /// Short label for logs.
    fn describe(&self) -> String;
}

/// Rejects a collection in which two postings share an id.
pub fn ensure_unique_ids(postings: &[JobPosting]) -> Result<(), AcquisitionError> {
    let mut ids = HashSet::new();
    match postings.iter().find(|p| !ids.insert(p.id.as_str())) {
        Some(dup) => Err(AcquisitionError::Malformed(format!(
            "duplicate posting id '{}'",
            dup.id
        ))),
        None => Ok(()),
    }
}
