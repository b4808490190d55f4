use std::ffi::OsStr;
use std::fmt;
use std::path::Path;

use bytes::Bytes;

use crate::errors::ResumeError;

/// Resume container formats accepted for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResumeFormat {
    Txt,
    Docx,
    Pdf,
}

impl ResumeFormat {
    /// Resolves the format from a file name's extension (case-insensitive).
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let ext = Path::new(file_name)
            .extension()
            .and_then(OsStr::to_str)?
            .to_ascii_lowercase();

        match ext.as_str() {
            "txt" => Some(ResumeFormat::Txt),
            "docx" => Some(ResumeFormat::Docx),
            "pdf" => Some(ResumeFormat::Pdf),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ResumeFormat::Txt => "txt",
            ResumeFormat::Docx => "docx",
            ResumeFormat::Pdf => "pdf",
        }
    }
}

impl fmt::Display for ResumeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ".{}", self.extension())
    }
}

/// An uploaded resume: raw bytes plus the declared format.
/// Ephemeral; dropped once its text has been extracted.
#[derive(Debug, Clone)]
pub struct ResumeDocument {
    pub file_name: String,
    pub format: ResumeFormat,
    pub bytes: Bytes,
}

impl ResumeDocument {
    /// Reads a resume from disk. Unsupported extensions fail without touching the file.
    pub async fn read(path: &Path) -> Result<Self, ResumeError> {
        let file_name = path
            .file_name()
            .and_then(OsStr::to_str)
            .unwrap_or_default()
            .to_string();

        let format = ResumeFormat::from_file_name(&file_name)
            .ok_or_else(|| ResumeError::UnsupportedFormat {
                file_name: file_name.clone(),
            })?;

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| ResumeError::Read {
                file_name: file_name.clone(),
                source,
            })?;

        Ok(Self {
            file_name,
            format,
            bytes: Bytes::from(bytes),
        })
    }
}
