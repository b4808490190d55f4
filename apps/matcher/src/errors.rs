//! Error taxonomy for the matcher.
//!
//! Every variant maps to a stable `code()` and a `user_message()` that the
//! session stores in its error slots. Failures never escape the async
//! boundary that produced them.

use thiserror::Error;

use crate::models::resume::ResumeFormat;

/// The posting collection could not be acquired.
#[derive(Debug, Error)]
pub enum AcquisitionError {
    #[error("Job search request failed: {0}")]
    Unavailable(#[source] reqwest::Error),

    #[error("Job search timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("Job search API error (status {status}): {message}")]
    Status { status: u16, message: String },

    #[error("Malformed postings payload: {0}")]
    Malformed(String),

    #[error("Could not read postings file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JOB_SEARCH_API_KEY is not set")]
    MissingApiKey,
}

impl AcquisitionError {
    pub fn code(&self) -> &'static str {
        match self {
            AcquisitionError::Unavailable(_) => "SOURCE_UNAVAILABLE",
            AcquisitionError::Timeout { .. } => "SOURCE_TIMEOUT",
            AcquisitionError::Status { .. } => "SOURCE_STATUS",
            AcquisitionError::Malformed(_) => "SOURCE_MALFORMED",
            AcquisitionError::Io { .. } => "SOURCE_IO",
            AcquisitionError::MissingApiKey => "SOURCE_NOT_CONFIGURED",
        }
    }

    /// Message shown in the postings-load error slot.
    pub fn user_message(&self) -> String {
        match self {
            AcquisitionError::Unavailable(_) => {
                "Could not reach the job search service. Check your connection and try again."
                    .to_string()
            }
            AcquisitionError::Timeout { secs } => format!(
                "The job search service did not respond within {secs} seconds. Try again."
            ),
            AcquisitionError::Status { status, .. } => {
                format!("The job search service returned an error (status {status}).")
            }
            AcquisitionError::Malformed(_) => {
                "Job listings could not be loaded because they were in an unexpected format."
                    .to_string()
            }
            AcquisitionError::Io { path, .. } => {
                format!("Could not read the job listings file '{path}'.")
            }
            AcquisitionError::MissingApiKey => {
                "Job search is not configured. Set JOB_SEARCH_API_KEY and try again.".to_string()
            }
        }
    }
}

/// A resume upload could not be turned into text.
#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("Unsupported resume file type: '{file_name}'")]
    UnsupportedFormat { file_name: String },

    #[error("Could not read resume file '{file_name}': {source}")]
    Read {
        file_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to extract text from {format} resume: {reason}")]
    Extraction {
        format: ResumeFormat,
        reason: String,
    },
}

impl ResumeError {
    pub fn extraction(format: ResumeFormat, reason: impl std::fmt::Display) -> Self {
        ResumeError::Extraction {
            format,
            reason: reason.to_string(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ResumeError::UnsupportedFormat { .. } => "UNSUPPORTED_FORMAT",
            ResumeError::Read { .. } => "RESUME_READ_ERROR",
            ResumeError::Extraction { .. } => "EXTRACTION_ERROR",
        }
    }

    /// Message shown in the resume error slot. Extraction failures get a
    /// distinct message per format.
    pub fn user_message(&self) -> String {
        match self {
            ResumeError::UnsupportedFormat { .. } => {
                "Unsupported file type. Please upload a .txt, .docx or .pdf resume.".to_string()
            }
            ResumeError::Read { file_name, .. } => {
                format!("Could not open '{file_name}'. Check the file and try again.")
            }
            ResumeError::Extraction { format, .. } => match format {
                ResumeFormat::Txt => {
                    "Could not read text from this file. Try saving it as plain UTF-8 text."
                        .to_string()
                }
                ResumeFormat::Docx => {
                    "Could not read text from this Word document. Try re-saving it as .docx or upload a PDF."
                        .to_string()
                }
                ResumeFormat::Pdf => {
                    "Could not read text from this PDF. Scanned PDFs are not supported; try a text-based export."
                        .to_string()
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_messages_differ_per_format() {
        let pdf = ResumeError::extraction(ResumeFormat::Pdf, "bad xref").user_message();
        let docx = ResumeError::extraction(ResumeFormat::Docx, "bad zip").user_message();
        assert_ne!(pdf, docx);
        assert!(pdf.contains("PDF"));
        assert!(docx.contains("Word"));
    }

    #[test]
    fn test_unsupported_format_message() {
        let err = ResumeError::UnsupportedFormat {
            file_name: "cv.rtf".to_string(),
        };
        assert_eq!(err.code(), "UNSUPPORTED_FORMAT");
        assert!(err.user_message().contains("Unsupported file type"));
    }

    #[test]
    fn test_timeout_message_mentions_seconds() {
        let err = AcquisitionError::Timeout { secs: 10 };
        assert_eq!(err.code(), "SOURCE_TIMEOUT");
        assert!(err.user_message().contains("10 seconds"));
    }

    #[test]
    fn test_malformed_hides_internal_detail() {
        let err = AcquisitionError::Malformed("missing field `job_title`".to_string());
        assert!(!err.user_message().contains("job_title"));
        assert!(err.to_string().contains("job_title"));
    }
}
