use serde::{Deserialize, Serialize};

/// A job posting in canonical form, whichever source it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub company: String,
    pub description: String,
    pub url: String,
    /// Lowercase, unique, at most 30 entries.
    pub keywords: Vec<String>,
    /// 0 – 100. `None` until a resume has been scored against this posting.
    #[serde(rename = "match", default, skip_serializing_if = "Option::is_none")]
    pub match_score: Option<u8>,
}

impl JobPosting {
    /// Score shown to the user; unscored postings display as 0.
    pub fn display_match(&self) -> u8 {
        self.match_score.unwrap_or(0)
    }

    /// Derived copy carrying a fresh score. The original is left untouched.
    pub fn with_match(&self, score: u8) -> Self {
        Self {
            match_score: Some(score),
            ..self.clone()
        }
    }

    /// Free text the keyword extractor runs over.
    pub fn keyword_source_text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }
}
