use anyhow::{Context, Result};

const DEFAULT_SEARCH_ENDPOINT: &str = "https://jsearch.p.rapidapi.com/search";
const DEFAULT_SEARCH_HOST: &str = "jsearch.p.rapidapi.com";
const DEFAULT_SEARCH_TIMEOUT_SECS: u64 = 10;

/// Application configuration loaded from environment variables.
/// Read once at startup and passed down explicitly.
#[derive(Debug, Clone)]
pub struct Config {
    pub search: SearchConfig,
    pub rust_log: String,
}

/// Settings for the remote job search source.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub endpoint: String,
    pub host: String,
    /// Only required when postings come from the remote search.
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let timeout_secs = match lookup("JOB_SEARCH_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .context("JOB_SEARCH_TIMEOUT_SECS must be a whole number of seconds")?,
            None => DEFAULT_SEARCH_TIMEOUT_SECS,
        };

        Ok(Config {
            search: SearchConfig {
                endpoint: lookup("JOB_SEARCH_API_URL")
                    .unwrap_or_else(|| DEFAULT_SEARCH_ENDPOINT.to_string()),
                host: lookup("JOB_SEARCH_API_HOST")
                    .unwrap_or_else(|| DEFAULT_SEARCH_HOST.to_string()),
                api_key: lookup("JOB_SEARCH_API_KEY").filter(|key| !key.trim().is_empty()),
                timeout_secs,
            },
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.search.endpoint, DEFAULT_SEARCH_ENDPOINT);
        assert_eq!(config.search.host, DEFAULT_SEARCH_HOST);
        assert_eq!(config.search.timeout_secs, 10);
        assert!(config.search.api_key.is_none());
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("JOB_SEARCH_API_URL", "http://localhost:9000/search"),
            ("JOB_SEARCH_API_KEY", "secret"),
            ("JOB_SEARCH_TIMEOUT_SECS", "3"),
            ("RUST_LOG", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.search.endpoint, "http://localhost:9000/search");
        assert_eq!(config.search.api_key.as_deref(), Some("secret"));
        assert_eq!(config.search.timeout_secs, 3);
        assert_eq!(config.rust_log, "debug");
    }

    #[test]
    fn test_blank_api_key_is_unset() {
        let config = Config::from_lookup(lookup_from(&[("JOB_SEARCH_API_KEY", "  ")])).unwrap();
        assert!(config.search.api_key.is_none());
    }

    #[test]
    fn test_invalid_timeout_is_error() {
        let err = Config::from_lookup(lookup_from(&[("JOB_SEARCH_TIMEOUT_SECS", "soon")]))
            .unwrap_err();
        assert!(err.to_string().contains("JOB_SEARCH_TIMEOUT_SECS"));
    }
}
