//! Keyword extractor: derives a bounded keyword list from a posting's free text.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Upper bound on keywords per posting.
pub const MAX_KEYWORDS: usize = 30;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z0-9_]+").unwrap());

/// Lowercases `text`, takes every maximal `[a-z0-9_]` run, dedupes keeping
/// first-seen order and keeps the first 30. No stop-word filtering.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut seen = HashSet::new();

    WORD.find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|token| seen.insert(*token))
        .take(MAX_KEYWORDS)
        .map(String::from)
        .collect()
}

/// Brings pre-supplied keywords in line with the posting invariant:
/// trimmed, lowercase, non-empty, unique, at most 30.
pub fn sanitize_keywords<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut keywords = Vec::new();

    for keyword in raw {
        let keyword = keyword.as_ref().trim().to_lowercase();
        if keyword.is_empty() || !seen.insert(keyword.clone()) {
            continue;
        }
        keywords.push(keyword);
        if keywords.len() == MAX_KEYWORDS {
            break;
        }
    }

    keywords
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_splits_on_punctuation() {
        let keywords = extract_keywords("Senior Rust/Go Engineer: Tokio, gRPC & AWS!");
        assert_eq!(
            keywords,
            vec!["senior", "rust", "go", "engineer", "tokio", "grpc", "aws"]
        );
    }

    #[test]
    fn test_dedupes_preserving_first_seen_order() {
        let keywords = extract_keywords("SQL python sql Python docker sql");
        assert_eq!(keywords, vec!["sql", "python", "docker"]);
    }

    #[test]
    fn test_keeps_underscores_and_digits() {
        let keywords = extract_keywords("snake_case k8s 5+ years <b>html5</b>");
        assert_eq!(
            keywords,
            vec!["snake_case", "k8s", "5", "years", "b", "html5"]
        );
    }

    #[test]
    fn test_truncates_to_first_30_distinct() {
        let text: String = (0..50).map(|i| format!("word{i} word{i} ")).collect();
        let keywords = extract_keywords(&text);
        assert_eq!(keywords.len(), MAX_KEYWORDS);
        assert_eq!(keywords[0], "word0");
        assert_eq!(keywords[29], "word29");
    }

    #[test]
    fn test_empty_input_yields_empty() {
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords("  -- !! ").is_empty());
    }

    #[test]
    fn test_sanitize_normalizes_supplied_keywords() {
        let keywords = sanitize_keywords(["Python", " SQL ", "", "python", "AWS"]);
        assert_eq!(keywords, vec!["python", "sql", "aws"]);
    }

    #[test]
    fn test_sanitize_caps_length() {
        let raw: Vec<String> = (0..40).map(|i| format!("kw{i}")).collect();
        assert_eq!(sanitize_keywords(&raw).len(), MAX_KEYWORDS);
    }
}
