//! Session orchestrator. Owns postings, scores and error slots for one run.
//!
//! Phases: Loading → Ready | Failed, Ready → Scored on the first applied
//! resume. Every upload recomputes the whole report; nothing is merged.
//!
//! Uploads are ticketed. `begin_upload` hands out a monotonically increasing
//! ticket and only the newest one may change state in `complete_upload`, so
//! an extraction that finishes late cannot overwrite fresher results.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::errors::{AcquisitionError, ResumeError};
use crate::extract::ResumeExtractor;
use crate::matching::normalize::{normalize_resume, ResumeTokens};
use crate::matching::pipeline::{run_pipeline, MatchReport};
use crate::matching::scoring::MatchScorer;
use crate::matching::MatchLimits;
use crate::models::job::JobPosting;
use crate::models::resume::ResumeDocument;
use crate::sources::PostingSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Loading,
    Ready,
    Scored,
    Failed,
}

/// Identifies one upload event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UploadTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadOutcome {
    /// The resume was accepted and is now the active one.
    Applied,
    /// The upload failed; the resume error slot was set, scores kept.
    Rejected,
    /// A newer upload was issued before this one completed; discarded.
    Stale,
}

/// Everything the presentation layer needs, detached from the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    pub phase: Phase,
    pub postings: Vec<JobPosting>,
    pub suggestions: Vec<String>,
    pub load_error: Option<String>,
    pub resume_error: Option<String>,
}

pub struct Session {
    phase: Phase,
    postings: Vec<JobPosting>,
    report: Option<MatchReport>,
    resume: Option<ResumeTokens>,
    load_error: Option<String>,
    resume_error: Option<String>,
    latest_ticket: u64,
    scorer: Arc<dyn MatchScorer>,
    limits: MatchLimits,
}

impl Session {
    pub fn new(scorer: Arc<dyn MatchScorer>, limits: MatchLimits) -> Self {
        Self {
            phase: Phase::Loading,
            postings: Vec::new(),
            report: None,
            resume: None,
            load_error: None,
            resume_error: None,
            latest_ticket: 0,
            scorer,
            limits,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn postings(&self) -> &[JobPosting] {
        &self.postings
    }

    pub fn report(&self) -> Option<&MatchReport> {
        self.report.as_ref()
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn resume_error(&self) -> Option<&str> {
        self.resume_error.as_deref()
    }

    // ────────────────────────────────────────────────────────────────────────
    // Posting acquisition
    // ────────────────────────────────────────────────────────────────────────

    /// Acquires postings from `source`. Also the manual retry path after a failure.
    pub async fn load(&mut self, source: &dyn PostingSource) -> Phase {
        self.phase = Phase::Loading;
        info!("Loading postings from {}", source.describe());

        match source.fetch().await {
            Ok(postings) => self.apply_postings(postings),
            Err(err) => self.record_load_failure(err),
        }
        self.phase
    }

    /// Installs a freshly loaded posting set. A resume processed earlier
    /// (including one uploaded while postings were still loading) is scored
    /// against it straight away.
    pub fn apply_postings(&mut self, postings: Vec<JobPosting>) {
        self.postings = postings;
        self.load_error = None;

        match self.resume.take() {
            Some(resume) => {
                self.rescore(&resume);
                self.resume = Some(resume);
                self.phase = Phase::Scored;
            }
            None => {
                self.report = None;
                self.phase = Phase::Ready;
            }
        }
        info!(
            "Session {:?} with {} postings",
            self.phase,
            self.postings.len()
        );
    }

    /// Moves to `Failed`. The resume error slot and the active resume survive.
    pub fn record_load_failure(&mut self, err: AcquisitionError) {
        warn!("Posting acquisition failed [{}]: {err}", err.code());
        self.postings.clear();
        self.report = None;
        self.load_error = Some(err.user_message());
        self.phase = Phase::Failed;
    }

    // ────────────────────────────────────────────────────────────────────────
    // Resume uploads
    // ────────────────────────────────────────────────────────────────────────

    /// Registers a new upload event, superseding any upload still in flight.
    pub fn begin_upload(&mut self) -> UploadTicket {
        self.latest_ticket += 1;
        UploadTicket(self.latest_ticket)
    }

    /// Applies the result of an upload if `ticket` is still the newest.
    pub fn complete_upload(
        &mut self,
        ticket: UploadTicket,
        result: Result<String, ResumeError>,
    ) -> UploadOutcome {
        if ticket.0 != self.latest_ticket {
            debug!(
                "Discarding stale upload #{} (latest is #{})",
                ticket.0, self.latest_ticket
            );
            return UploadOutcome::Stale;
        }

        match result {
            Ok(text) => {
                let resume = normalize_resume(&text);
                if resume.is_empty() {
                    warn!("Resume #{} has no extractable text; every score will be 0", ticket.0);
                } else {
                    debug!("Resume #{} normalized to {} tokens", ticket.0, resume.len());
                }
                self.resume_error = None;

                if matches!(self.phase, Phase::Ready | Phase::Scored) {
                    self.rescore(&resume);
                    self.phase = Phase::Scored;
                } else {
                    info!("Postings not available yet; resume #{} kept pending", ticket.0);
                }
                self.resume = Some(resume);
                UploadOutcome::Applied
            }
            Err(err) => {
                warn!("Resume upload #{} rejected [{}]: {err}", ticket.0, err.code());
                self.resume_error = Some(err.user_message());
                UploadOutcome::Rejected
            }
        }
    }

    /// Reads, extracts and applies a resume from disk as one upload event.
    pub async fn upload_file(
        &mut self,
        extractor: &dyn ResumeExtractor,
        path: &Path,
    ) -> UploadOutcome {
        let ticket = self.begin_upload();
        let result = match ResumeDocument::read(path).await {
            Ok(document) => extractor.extract(&document).await,
            Err(err) => Err(err),
        };
        self.complete_upload(ticket, result)
    }

    fn rescore(&mut self, resume: &ResumeTokens) {
        self.report = Some(run_pipeline(
            &self.postings,
            resume,
            self.scorer.as_ref(),
            &self.limits,
        ));
    }

    // ────────────────────────────────────────────────────────────────────────
    // Presentation
    // ────────────────────────────────────────────────────────────────────────

    /// Scored sessions show the top ranked postings; otherwise the first
    /// loaded postings are shown with a score of 0.
    pub fn view(&self) -> SessionView {
        let (postings, suggestions) = match &self.report {
            Some(report) => (report.top().to_vec(), report.suggestions().to_vec()),
            None => (
                self.postings
                    .iter()
                    .take(self.limits.display)
                    .map(|posting| posting.with_match(posting.display_match()))
                    .collect(),
                Vec::new(),
            ),
        };

        SessionView {
            phase: self.phase,
            postings,
            suggestions,
            load_error: self.load_error.clone(),
            resume_error: self.resume_error.clone(),
        }
    }
}
