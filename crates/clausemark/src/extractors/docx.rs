//! DOCX document extractor.

use super::{ExtractOptions, FormatExtractor};
use crate::Result;
use crate::core::formats::DocumentFormat;
use crate::types::ExtractedDocument;

/// Word document extractor backed by zip and roxmltree.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxExtractor;

impl FormatExtractor for DocxExtractor {
    fn name(&self) -> &str {
        "docx-extractor"
    }

    fn format(&self) -> DocumentFormat {
        DocumentFormat::Docx
    }

    fn is_available(&self) -> bool {
        cfg!(feature = "office")
    }

    #[cfg(feature = "office")]
    fn extract_bytes(&self, content: &[u8], options: &ExtractOptions) -> Result<ExtractedDocument> {
        if options.page_range.is_some() {
            tracing::debug!("Page range ignored for DOCX documents");
        }
        let text = crate::extraction::docx::extract_text(content)?;
        Ok(ExtractedDocument::new(DocumentFormat::Docx, text))
    }

    #[cfg(not(feature = "office"))]
    fn extract_bytes(&self, _content: &[u8], _options: &ExtractOptions) -> Result<ExtractedDocument> {
        Err(super::missing_dependency(DocumentFormat::Docx))
    }
}
