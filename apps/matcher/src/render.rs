//! Terminal and JSON presentation of a `SessionView`.

use std::fmt::Write;

use serde::Serialize;

use crate::models::job::JobPosting;
use crate::session::{Phase, SessionView};

const DESCRIPTION_PREVIEW_CHARS: usize = 160;

/// Visual band for a match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Strong,
    Fair,
    Low,
}

impl MatchTier {
    /// > 75 strong, > 50 fair, anything else low.
    pub fn from_score(score: u8) -> Self {
        if score > 75 {
            MatchTier::Strong
        } else if score > 50 {
            MatchTier::Fair
        } else {
            MatchTier::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchTier::Strong => "strong",
            MatchTier::Fair => "fair",
            MatchTier::Low => "low",
        }
    }
}

#[derive(Serialize)]
struct JsonPosting<'a> {
    #[serde(flatten)]
    posting: &'a JobPosting,
    tier: MatchTier,
}

#[derive(Serialize)]
struct JsonView<'a> {
    phase: Phase,
    postings: Vec<JsonPosting<'a>>,
    suggestions: &'a [String],
    load_error: Option<&'a str>,
    resume_error: Option<&'a str>,
}

pub fn render_json(view: &SessionView) -> serde_json::Result<String> {
    let body = JsonView {
        phase: view.phase,
        postings: view
            .postings
            .iter()
            .map(|posting| JsonPosting {
                posting,
                tier: MatchTier::from_score(posting.display_match()),
            })
            .collect(),
        suggestions: &view.suggestions,
        load_error: view.load_error.as_deref(),
        resume_error: view.resume_error.as_deref(),
    };
    serde_json::to_string_pretty(&body)
}

/// Plain-text report. `show_keywords` appends each posting's keyword list.
pub fn render_text(view: &SessionView, show_keywords: bool) -> String {
    let mut out = String::new();

    if let Some(err) = &view.load_error {
        let _ = writeln!(out, "Job listings error: {err}");
    }
    if let Some(err) = &view.resume_error {
        let _ = writeln!(out, "Resume error: {err}");
    }
    if view.load_error.is_some() || view.resume_error.is_some() {
        out.push('\n');
    }

    if view.phase == Phase::Loading {
        out.push_str("Job listings are still loading.\n");
    }

    if !view.postings.is_empty() {
        out.push_str("Matching Job Opportunities\n\n");
        for (rank, posting) in view.postings.iter().enumerate() {
            render_posting(&mut out, rank + 1, posting, show_keywords);
        }
    } else if view.phase != Phase::Failed && view.phase != Phase::Loading {
        out.push_str("No job postings available.\n");
    }

    if !view.suggestions.is_empty() {
        out.push_str("\nResume Suggestions\n");
        out.push_str(
            "Consider adding these keywords to your resume to better match the top job listings:\n",
        );
        let _ = writeln!(out, "  {}", view.suggestions.join(", "));
    }

    out
}

fn render_posting(out: &mut String, rank: usize, posting: &JobPosting, show_keywords: bool) {
    let score = posting.display_match();
    let _ = writeln!(
        out,
        "{rank:>2}. {} | {}  [{score}% {}]",
        posting.title,
        posting.company,
        MatchTier::from_score(score).label()
    );
    let _ = writeln!(out, "    {}", preview(&posting.description));
    if show_keywords {
        let _ = writeln!(out, "    Keywords: {}", posting.keywords.join(", "));
    }
    let _ = writeln!(out, "    Apply: {}", posting.url);
}

/// Whitespace-collapsed description, cut on a char boundary.
fn preview(description: &str) -> String {
    let flat = description.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= DESCRIPTION_PREVIEW_CHARS {
        return flat;
    }
    let cut: String = flat.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
    format!("{}...", cut.trim_end())
}
