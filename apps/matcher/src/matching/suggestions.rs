//! Suggestion generator: keywords from the top-ranked postings that the
//! resume does not contain.

use std::collections::HashSet;

use crate::matching::normalize::ResumeTokens;
use crate::models::job::JobPosting;

/// Walks `top` in rank order and each posting's keywords in order, collecting
/// keywords missing from `resume` until `limit` distinct ones are found.
/// Returns an empty list (never absent) when `top` is empty.
pub fn suggest_keywords(top: &[JobPosting], resume: &ResumeTokens, limit: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut suggestions = Vec::new();

    let missing = top
        .iter()
        .flat_map(|posting| posting.keywords.iter())
        .filter(|keyword| !resume.contains(keyword.as_str()));

    for keyword in missing {
        if suggestions.len() >= limit {
            break;
        }
        if seen.insert(keyword.as_str()) {
            suggestions.push(keyword.clone());
        }
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::normalize::normalize_resume;

    fn posting(id: &str, keywords: &[&str]) -> JobPosting {
        JobPosting {
            id: id.to_string(),
            title: id.to_string(),
            company: "Acme".to_string(),
            description: String::new(),
            url: String::new(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            match_score: Some(0),
        }
    }

    #[test]
    fn test_collects_missing_in_rank_then_keyword_order() {
        let top = vec![
            posting("first", &["python", "sql", "aws"]),
            posting("second", &["docker", "sql", "kubernetes"]),
        ];
        let resume = normalize_resume("python aws");
        assert_eq!(
            suggest_keywords(&top, &resume, 10),
            vec!["sql", "docker", "kubernetes"]
        );
    }

    #[test]
    fn test_never_suggests_resume_tokens() {
        let top = vec![posting("a", &["rust", "go", "zig"])];
        let resume = normalize_resume("rust zig");
        let suggestions = suggest_keywords(&top, &resume, 10);
        assert_eq!(suggestions, vec!["go"]);
    }

    #[test]
    fn test_capped_at_limit() {
        let words: Vec<String> = (0..25).map(|i| format!("kw{i}")).collect();
        let refs: Vec<&str> = words.iter().map(String::as_str).collect();
        let top = vec![posting("a", &refs)];
        let suggestions = suggest_keywords(&top, &ResumeTokens::default(), 10);
        assert_eq!(suggestions.len(), 10);
        assert_eq!(suggestions[0], "kw0");
        assert_eq!(suggestions[9], "kw9");
    }

    #[test]
    fn test_no_duplicates_across_postings() {
        let top = vec![
            posting("a", &["sql", "docker"]),
            posting("b", &["docker", "sql", "terraform"]),
        ];
        let suggestions = suggest_keywords(&top, &ResumeTokens::default(), 10);
        assert_eq!(suggestions, vec!["sql", "docker", "terraform"]);
    }

    #[test]
    fn test_empty_resume_suggests_first_distinct_keywords() {
        let top = vec![posting("a", &["python", "sql"]), posting("b", &["sql", "go"])];
        let suggestions = suggest_keywords(&top, &normalize_resume(""), 10);
        assert_eq!(suggestions, vec!["python", "sql", "go"]);
    }

    #[test]
    fn test_empty_top_yields_empty_list() {
        let suggestions = suggest_keywords(&[], &normalize_resume("rust"), 10);
        assert!(suggestions.is_empty());
    }
}
