//! Resume text extraction: bytes plus a declared format become plain text.
//!
//! Binary containers are decoded on the blocking pool; a decoder panic comes
//! back as a `JoinError` and is reported as an extraction failure for that
//! format instead of taking the session down.

pub mod docx;
pub mod pdf;

use async_trait::async_trait;
use tracing::debug;

use crate::errors::ResumeError;
use crate::models::resume::{ResumeDocument, ResumeFormat};

#[async_trait]
pub trait ResumeExtractor: Send + Sync {
    async fn extract(&self, document: &ResumeDocument) -> Result<String, ResumeError>;
}

/// Default extractor: dispatches on the document's declared format.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatExtractor;

#[async_trait]
impl ResumeExtractor for FormatExtractor {
    async fn extract(&self, document: &ResumeDocument) -> Result<String, ResumeError> {
        debug!(
            "Extracting text from '{}' ({}, {} bytes)",
            document.file_name,
            document.format,
            document.bytes.len()
        );

        let text = match document.format {
            ResumeFormat::Txt => decode_plain_text(&document.bytes),
            ResumeFormat::Docx => decode_blocking(document, docx::extract_docx_text).await?,
            ResumeFormat::Pdf => decode_blocking(document, pdf::extract_pdf_text).await?,
        };

        debug!("Extracted {} chars from '{}'", text.len(), document.file_name);
        Ok(text)
    }
}

/// Plain text is read as UTF-8; invalid sequences are replaced, and a leading
/// byte-order mark is dropped.
pub fn decode_plain_text(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    text.strip_prefix('\u{feff}').unwrap_or(&text).to_string()
}

async fn decode_blocking(
    document: &ResumeDocument,
    decode: fn(&[u8]) -> Result<String, ResumeError>,
) -> Result<String, ResumeError> {
    let bytes = document.bytes.clone();
    let format = document.format;

    tokio::task::spawn_blocking(move || decode(&bytes))
        .await
        .map_err(|e| ResumeError::extraction(format, format!("decoder aborted: {e}")))?
}
