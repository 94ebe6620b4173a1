//! Error types for Clausemark.
//!
//! Every fallible operation in the crate returns [`ClausemarkError`]. The variants
//! mirror the failure modes of the extraction pipeline:
//!
//! - `Io` - file system errors, always bubbled up unchanged
//! - `MissingDependency` - a format backend was not compiled in
//! - `FileNotFound` - the input path does not exist
//! - `UnsupportedFileType` - the extension is not one of pdf/docx/eml/msg
//! - `InvalidPageRange` - requested PDF page bounds are out of range or inverted
//! - `ExtractionFailed` - a format parser rejected the document
//! - `Validation` - invalid configuration
//! - `Serialization` - JSON encoding of results
//!
//! Cleaning, segmentation, span finding and rendering never fail.
//!
//! # Example
//!
//! ```rust
//! use clausemark::{ClausemarkError, Result};
//!
//! fn read_policy(path: &str) -> Result<String> {
//!     // IO errors bubble up automatically via ?
//!     let content = std::fs::read_to_string(path)?;
//!
//!     if content.is_empty() {
//!         return Err(ClausemarkError::extraction_failed(format!("Document is empty: {}", path)));
//!     }
//!
//!     Ok(content)
//! }
//! ```
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ClausemarkError`.
pub type Result<T> = std::result::Result<T, ClausemarkError>;

/// Main error type for all Clausemark operations.
#[derive(Debug, Error)]
pub enum ClausemarkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing dependency: {0}")]
    MissingDependency(String),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Invalid page range {start}-{end} for PDF with {page_count} pages")]
    InvalidPageRange { start: u32, end: u32, page_count: u32 },

    #[error("Extraction failed: {message}")]
    ExtractionFailed {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

macro_rules! error_constructor {
    ($name:ident, $with_source:ident, $variant:ident) => {
        #[doc = concat!("Create a `", stringify!($variant), "` error")]
        pub fn $name<S: Into<String>>(message: S) -> Self {
            Self::$variant {
                message: message.into(),
                source: None,
            }
        }

        #[doc = concat!("Create a `", stringify!($variant), "` error with source")]
        pub fn $with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
            message: S,
            source: E,
        ) -> Self {
            Self::$variant {
                message: message.into(),
                source: Some(Box::new(source)),
            }
        }
    };
}

impl ClausemarkError {
    error_constructor!(extraction_failed, extraction_failed_with_source, ExtractionFailed);
    error_constructor!(validation, validation_with_source, Validation);
    error_constructor!(serialization, serialization_with_source, Serialization);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ClausemarkError = io_err.into();
        assert!(matches!(err, ClausemarkError::Io(_)));
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_extraction_failed_error() {
        let err = ClausemarkError::extraction_failed("corrupt xref table");
        assert_eq!(err.to_string(), "Extraction failed: corrupt xref table");
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn test_extraction_failed_with_source() {
        let source = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad data");
        let err = ClausemarkError::extraction_failed_with_source("Failed to open DOCX", source);
        assert_eq!(err.to_string(), "Extraction failed: Failed to open DOCX");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_validation_error() {
        let err = ClausemarkError::validation("page range start must be >= 1");
        assert_eq!(err.to_string(), "Validation error: page range start must be >= 1");
    }

    #[test]
    fn test_missing_dependency_error() {
        let err = ClausemarkError::MissingDependency("PDF support requires the `pdf` feature".to_string());
        assert_eq!(err.to_string(), "Missing dependency: PDF support requires the `pdf` feature");
    }

    #[test]
    fn test_file_not_found_error() {
        let err = ClausemarkError::FileNotFound(PathBuf::from("/tmp/missing.pdf"));
        assert_eq!(err.to_string(), "File not found: /tmp/missing.pdf");
    }

    #[test]
    fn test_unsupported_file_type_error() {
        let err = ClausemarkError::UnsupportedFileType(".txt".to_string());
        assert_eq!(err.to_string(), "Unsupported file type: .txt");
    }

    #[test]
    fn test_invalid_page_range_error() {
        let err = ClausemarkError::InvalidPageRange {
            start: 3,
            end: 2,
            page_count: 5,
        };
        assert_eq!(err.to_string(), "Invalid page range 3-2 for PDF with 5 pages");
    }

    #[test]
    fn test_serialization_error_keeps_source() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err = ClausemarkError::serialization_with_source("Failed to serialize clauses", json_err);
        assert!(matches!(err, ClausemarkError::Serialization { .. }));
        assert_eq!(err.to_string(), "Serialization error: Failed to serialize clauses");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_io_error_bubbles_unchanged() {
        fn read_file() -> Result<String> {
            let content = std::fs::read_to_string("/nonexistent/policy.txt")?;
            Ok(content)
        }

        assert!(matches!(read_file().unwrap_err(), ClausemarkError::Io(_)));
    }
}
