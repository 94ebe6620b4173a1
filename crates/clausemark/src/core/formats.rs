//! Supported document formats and extension mapping.
//!
//! The dispatcher picks an extractor purely from the file extension (compared
//! case-insensitively). Anything outside the four supported extensions is an
//! `UnsupportedFileType` error.

use crate::{ClausemarkError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Document formats the extraction pipeline understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Eml,
    Msg,
}

impl DocumentFormat {
    pub const ALL: [DocumentFormat; 4] = [Self::Pdf, Self::Docx, Self::Eml, Self::Msg];

    /// Resolve a format from a bare extension, with or without the leading dot.
    pub fn from_extension(extension: &str) -> Option<Self> {
        let ext = extension.trim_start_matches('.').to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "eml" => Some(Self::Eml),
            "msg" => Some(Self::Msg),
            _ => None,
        }
    }

    /// Resolve the format of a file path from its extension.
    ///
    /// # Errors
    ///
    /// Returns `ClausemarkError::UnsupportedFileType` when the path has no
    /// extension or the extension is not supported. The error message carries
    /// the dotted, lowercased extension (empty when there is none).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let extension = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
            .unwrap_or_default();

        Self::from_extension(&extension)
            .ok_or_else(|| ClausemarkError::UnsupportedFileType(format!("Unsupported file extension: {}", extension)))
    }

    /// Cargo feature that provides the backend for this format.
    pub fn feature(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "office",
            Self::Eml | Self::Msg => "email",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Pdf => "PDF",
            Self::Docx => "DOCX",
            Self::Eml => "EML",
            Self::Msg => "MSG",
        };
        f.write_str(label)
    }
}
