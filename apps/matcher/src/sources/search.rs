//! Remote job search (JSearch-style API).
//!
//! The response schema is strict: every posting must carry the five fields
//! below as strings, otherwise the whole payload is rejected. Keywords are
//! always derived from title + description.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::config::SearchConfig;
use crate::errors::AcquisitionError;
use crate::matching::keywords::extract_keywords;
use crate::models::job::JobPosting;
use crate::sources::{ensure_unique_ids, PostingSource};

#[derive(Debug, Deserialize)]
struct SearchResponse {
    data: Vec<SearchPosting>,
}

#[derive(Debug, Deserialize)]
struct SearchPosting {
    job_id: String,
    job_title: String,
    employer_name: String,
    job_description: String,
    job_apply_link: String,
}

impl From<SearchPosting> for JobPosting {
    fn from(raw: SearchPosting) -> Self {
        let mut posting = JobPosting {
            id: raw.job_id,
            title: raw.job_title,
            company: raw.employer_name,
            description: raw.job_description,
            url: raw.job_apply_link,
            keywords: Vec::new(),
            match_score: None,
        };
        posting.keywords = extract_keywords(&posting.keyword_source_text());
        posting
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Single-page search against the configured endpoint. No automatic retries;
/// a failed fetch is reported and the caller decides whether to try again.
#[derive(Clone)]
pub struct SearchSource {
    client: Client,
    endpoint: String,
    host: String,
    api_key: String,
    query: String,
    timeout_secs: u64,
}

impl SearchSource {
    pub fn new(config: &SearchConfig, query: impl Into<String>) -> Result<Self, AcquisitionError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or(AcquisitionError::MissingApiKey)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(AcquisitionError::Unavailable)?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            host: config.host.clone(),
            api_key,
            query: query.into(),
            timeout_secs: config.timeout_secs,
        })
    }

    fn classify(&self, err: reqwest::Error) -> AcquisitionError {
        if err.is_timeout() {
            AcquisitionError::Timeout {
                secs: self.timeout_secs,
            }
        } else {
            AcquisitionError::Unavailable(err)
        }
    }
}

#[async_trait]
impl PostingSource for SearchSource {
    async fn fetch(&self) -> Result<Vec<JobPosting>, AcquisitionError> {
        debug!("Searching '{}' at {}", self.query, self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("query", self.query.as_str()), ("page", "1"), ("num_pages", "1")])
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", &self.host)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.classify(e))?;

        if !status.is_success() {
            warn!("Job search API returned {}: {}", status, body);
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(AcquisitionError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let postings = parse_search_response(&body)?;
        info!("Loaded {} postings from {}", postings.len(), self.describe());
        Ok(postings)
    }

    fn describe(&self) -> String {
        format!("job search '{}'", self.query)
    }
}

/// Validates and maps a search payload into canonical postings. Ids must be
/// unique across the page.
pub fn parse_search_response(body: &str) -> Result<Vec<JobPosting>, AcquisitionError> {
    let response: SearchResponse =
        serde_json::from_str(body).map_err(|e| AcquisitionError::Malformed(e.to_string()))?;

    let postings: Vec<JobPosting> = response.data.into_iter().map(JobPosting::from).collect();
    ensure_unique_ids(&postings)?;
    Ok(postings)
}
