//! Static posting collections: the bundled fixture or a user-supplied JSON file.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

use crate::errors::AcquisitionError;
use crate::matching::keywords::{extract_keywords, sanitize_keywords};
use crate::models::job::JobPosting;
use crate::sources::{ensure_unique_ids, PostingSource};

const BUNDLED_JOBS: &str = include_str!("../../fixtures/jobs.json");

/// Fixture ids may be written as JSON strings or integers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FixtureId {
    Text(String),
    Number(i64),
}

impl From<FixtureId> for String {
    fn from(id: FixtureId) -> Self {
        match id {
            FixtureId::Text(s) => s,
            FixtureId::Number(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct FixturePosting {
    id: FixtureId,
    title: String,
    company: String,
    description: String,
    url: String,
    #[serde(default)]
    keywords: Vec<String>,
}

impl From<FixturePosting> for JobPosting {
    fn from(raw: FixturePosting) -> Self {
        let mut posting = JobPosting {
            id: raw.id.into(),
            title: raw.title,
            company: raw.company,
            description: raw.description,
            url: raw.url,
            keywords: sanitize_keywords(&raw.keywords),
            match_score: None,
        };
        if posting.keywords.is_empty() {
            posting.keywords = extract_keywords(&posting.keyword_source_text());
        }
        posting
    }
}

#[derive(Debug, Clone)]
pub enum FixtureSource {
    Bundled,
    File(PathBuf),
}

#[async_trait]
impl PostingSource for FixtureSource {
    async fn fetch(&self) -> Result<Vec<JobPosting>, AcquisitionError> {
        let postings = match self {
            FixtureSource::Bundled => parse_fixture(BUNDLED_JOBS)?,
            FixtureSource::File(path) => {
                let json = tokio::fs::read_to_string(path).await.map_err(|source| {
                    AcquisitionError::Io {
                        path: path.display().to_string(),
                        source,
                    }
                })?;
                parse_fixture(&json)?
            }
        };

        info!("Loaded {} postings from {}", postings.len(), self.describe());
        Ok(postings)
    }

    fn describe(&self) -> String {
        match self {
            FixtureSource::Bundled => "bundled fixture".to_string(),
            FixtureSource::File(path) => format!("fixture file {}", path.display()),
        }
    }
}

/// Parses a fixture array. Ids must be unique across the collection.
pub fn parse_fixture(json: &str) -> Result<Vec<JobPosting>, AcquisitionError> {
    let raw: Vec<FixturePosting> =
        serde_json::from_str(json).map_err(|e| AcquisitionError::Malformed(e.to_string()))?;

    let postings: Vec<JobPosting> = raw.into_iter().map(JobPosting::from).collect();

    ensure_unique_ids(&postings)?;
    Ok(postings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_fixture_parses() {
        let postings = parse_fixture(BUNDLED_JOBS).unwrap();
        assert!(postings.len() > 10);
        for posting in &postings {
            assert!(!posting.keywords.is_empty(), "{} has no keywords", posting.id);
            assert!(posting.keywords.len() <= 30);
            assert!(posting.match_score.is_none());
        }
    }

    #[test]
    fn test_missing_keywords_are_derived() {
        let json = r#"[{"id": 7, "title": "Go Developer", "company": "Acme",
            "description": "Go, gRPC and Postgres.", "url": "https://example.com/7"}]"#;
        let postings = parse_fixture(json).unwrap();
        assert_eq!(postings[0].id, "7");
        assert_eq!(
            postings[0].keywords,
            vec!["go", "developer", "grpc", "and", "postgres"]
        );
    }

    #[test]
    fn test_supplied_keywords_are_sanitized() {
        let json = r#"[{"id": "a", "title": "t", "company": "c", "description": "d",
            "url": "u", "keywords": ["Python", "SQL", "python", " "]}]"#;
        let postings = parse_fixture(json).unwrap();
        assert_eq!(postings[0].keywords, vec!["python", "sql"]);
    }

    #[test]
    fn test_missing_required_field_is_malformed() {
        let json = r#"[{"id": "a", "title": "t", "description": "d", "url": "u"}]"#;
        let err = parse_fixture(json).unwrap_err();
        assert!(matches!(err, AcquisitionError::Malformed(ref m) if m.contains("company")));
    }

    #[test]
    fn test_duplicate_ids_are_malformed() {
        let json = r#"[
            {"id": 1, "title": "t", "company": "c", "description": "d", "url": "u"},
            {"id": "1", "title": "t2", "company": "c", "description": "d", "url": "u"}
        ]"#;
        assert!(matches!(
            parse_fixture(json),
            Err(AcquisitionError::Malformed(_))
        ));
    }

    #[tokio::test]
    async fn test_file_source_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(
            &mut file,
            br#"[{"id": "x", "title": "Rust", "company": "c", "description": "", "url": "u", "keywords": ["rust"]}]"#,
        )
        .unwrap();

        let source = FixtureSource::File(file.path().to_path_buf());
        let postings = source.fetch().await.unwrap();
        assert_eq!(postings.len(), 1);
        assert_eq!(postings[0].keywords, vec!["rust"]);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let source = FixtureSource::File(PathBuf::from("/nonexistent/jobs.json"));
        assert!(matches!(
            source.fetch().await,
            Err(AcquisitionError::Io { .. })
        ));
    }
}
