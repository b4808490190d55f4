//! DOCX text: the paragraph runs of `word/document.xml` inside the zip container.

use std::io::{Cursor, Read};

use once_cell::sync::Lazy;
use regex::Regex;
use zip::ZipArchive;

use crate::errors::ResumeError;
use crate::models::resume::ResumeFormat;

const DOCUMENT_PART: &str = "word/document.xml";

static PARAGRAPH_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"</w:p>").unwrap());
static SOFT_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"<w:(?:tab|br|cr)\b[^>]*/>").unwrap());
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

pub fn extract_docx_text(bytes: &[u8]) -> Result<String, ResumeError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ResumeError::extraction(ResumeFormat::Docx, e))?;

    let mut part = archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| ResumeError::extraction(ResumeFormat::Docx, format!("{DOCUMENT_PART}: {e}")))?;

    let mut xml = String::new();
    part.read_to_string(&mut xml)
        .map_err(|e| ResumeError::extraction(ResumeFormat::Docx, e))?;

    Ok(document_xml_to_text(&xml))
}

/// One line per non-empty paragraph; tabs and breaks become spaces.
fn document_xml_to_text(xml: &str) -> String {
    let with_breaks = PARAGRAPH_END.replace_all(xml, "\n");
    let with_spaces = SOFT_BREAK.replace_all(&with_breaks, " ");
    let stripped = TAG.replace_all(&with_spaces, "");

    decode_entities(&stripped)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn decode_entities(text: &str) -> String {
    // &amp; last so "&amp;lt;" stays "&lt;".
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
