use crate::errors::ResumeError;
use crate::models::resume::ResumeFormat;

/// Extracts text page by page (1..N) and joins the page fragments with single spaces.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ResumeError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| ResumeError::extraction(ResumeFormat::Pdf, e))?;
    Ok(join_pages(&pages))
}

fn join_pages(pages: &[String]) -> String {
    pages
        .iter()
        .map(|page| page.trim())
        .filter(|page| !page.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_PAGE_RESUME: &[u8] = include_bytes!("../../fixtures/two_page_resume.pdf");

    #[test]
    fn test_join_pages_in_order_with_single_space() {
        let pages = vec![
            "Jane Doe\nRust engineer\n".to_string(),
            "\n\nExperience: tokio".to_string(),
        ];
        assert_eq!(
            join_pages(&pages),
            "Jane Doe\nRust engineer Experience: tokio"
        );
    }

    #[test]
    fn test_join_pages_skips_blank_pages() {
        let pages = vec!["one".to_string(), "   ".to_string(), "three".to_string()];
        assert_eq!(join_pages(&pages), "one three");
    }

    #[test]
    fn test_extracts_pages_in_order() {
        let text = extract_pdf_text(TWO_PAGE_RESUME).unwrap();
        let words: Vec<&str> = text.split_whitespace().collect();
        assert_eq!(
            words,
            vec!["Rust", "Tokio", "Engineer", "Kubernetes", "Docker", "Cloud"]
        );
    }
}
