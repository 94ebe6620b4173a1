//! Format extractors and the format dispatcher.
//!
//! Every supported format has one [`FormatExtractor`] implementation. Each
//! backend is a Cargo feature; an extractor whose feature is disabled still
//! exists, reports `is_available() == false`, and fails with
//! `MissingDependency` when called.
//!
//! Preconditions are checked in a fixed order before any file I/O:
//! backend availability, then file existence.
//!
//! # Example
//!
//! ```rust,no_run
//! use clausemark::extractors::{ExtractOptions, extract_file};
//! use clausemark::types::PageRange;
//!
//! # fn example() -> clausemark::Result<()> {
//! let options = ExtractOptions {
//!     page_range: Some(PageRange::new(1, 3)),
//! };
//! let document = extract_file("policy.pdf", &options)?;
//! println!("{} characters of {} text", document.content.len(), document.format);
//! # Ok(())
//! # }
//! ```

mod docx;
mod email;
mod pdf;

pub use docx::DocxExtractor;
pub use email::{EmlExtractor, MsgExtractor};
pub use pdf::PdfExtractor;

use crate::core::formats::DocumentFormat;
use crate::types::{ExtractedDocument, PageRange};
use crate::{ClausemarkError, Result};
use std::path::Path;

/// Per-call extraction options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// PDF pages to read, 1-indexed and inclusive. Ignored by other formats.
    pub page_range: Option<PageRange>,
}

/// A reader that turns one document format into plain text.
pub trait FormatExtractor: Send + Sync {
    /// Extractor name for logs and diagnostics.
    fn name(&self) -> &str;

    /// The format this extractor reads.
    fn format(&self) -> DocumentFormat;

    /// Whether the backend for this format was compiled in.
    fn is_available(&self) -> bool;

    /// Extract text from in-memory document bytes.
    fn extract_bytes(&self, content: &[u8], options: &ExtractOptions) -> Result<ExtractedDocument>;

    /// Verify the backend is available and the file exists.
    ///
    /// # Errors
    ///
    /// - `MissingDependency` if the backend feature is disabled
    /// - `FileNotFound` if `path` does not exist
    fn check_preconditions(&self, path: &Path) -> Result<()> {
        if !self.is_available() {
            return Err(missing_dependency(self.format()));
        }
        if !path.exists() {
            return Err(ClausemarkError::FileNotFound(path.to_path_buf()));
        }
        Ok(())
    }

    /// Check preconditions, read the whole file, then extract.
    ///
    /// The file handle is closed before parsing begins.
    fn extract_file(&self, path: &Path, options: &ExtractOptions) -> Result<ExtractedDocument> {
        self.check_preconditions(path)?;
        let bytes = std::fs::read(path)?;

        tracing::debug!(
            extractor = self.name(),
            path = %path.display(),
            size_bytes = bytes.len(),
            "Extracting document"
        );

        self.extract_bytes(&bytes, options)
    }
}

/// The extractor responsible for `format`.
pub fn extractor_for(format: DocumentFormat) -> &'static dyn FormatExtractor {
    match format {
        DocumentFormat::Pdf => &PdfExtractor,
        DocumentFormat::Docx => &DocxExtractor,
        DocumentFormat::Eml => &EmlExtractor,
        DocumentFormat::Msg => &MsgExtractor,
    }
}

/// All extractors, in [`DocumentFormat::ALL`] order.
pub fn all_extractors() -> [&'static dyn FormatExtractor; 4] {
    DocumentFormat::ALL.map(extractor_for)
}

/// Detect the format from the file extension and extract the file.
///
/// # Errors
///
/// - `UnsupportedFileType` if the extension is not pdf, docx, eml or msg
/// - any precondition or extraction error from the selected extractor
pub fn extract_file(path: impl AsRef<Path>, options: &ExtractOptions) -> Result<ExtractedDocument> {
    let path = path.as_ref();
    let format = DocumentFormat::from_path(path)?;
    let extractor = extractor_for(format);

    tracing::debug!(
        format = %format,
        extractor = extractor.name(),
        "Dispatching document"
    );

    extractor.extract_file(path, options)
}

/// Extract in-memory bytes of a known format.
pub fn extract_bytes(content: &[u8], format: DocumentFormat, options: &ExtractOptions) -> Result<ExtractedDocument> {
    let extractor = extractor_for(format);
    if !extractor.is_available() {
        return Err(missing_dependency(format));
    }
    extractor.extract_bytes(content, options)
}

pub(crate) fn missing_dependency(format: DocumentFormat) -> ClausemarkError {
    ClausemarkError::MissingDependency(format!(
        "{} extraction requires the '{}' feature of clausemark",
        format,
        format.feature()
    ))
}
