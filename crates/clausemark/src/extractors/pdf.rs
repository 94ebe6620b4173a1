//! PDF document extractor.

use super::{ExtractOptions, FormatExtractor};
use crate::Result;
use crate::core::formats::DocumentFormat;
use crate::types::ExtractedDocument;

/// PDF extractor backed by lopdf.
///
/// Honors [`ExtractOptions::page_range`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

impl FormatExtractor for PdfExtractor {
    fn name(&self) -> &str {
        "pdf-extractor"
    }

    fn format(&self) -> DocumentFormat {
        DocumentFormat::Pdf
    }

    fn is_available(&self) -> bool {
        cfg!(feature = "pdf")
    }

    #[cfg(feature = "pdf")]
    fn extract_bytes(&self, content: &[u8], options: &ExtractOptions) -> Result<ExtractedDocument> {
        let text = crate::extraction::pdf::extract_text(content, options.page_range)?;
        Ok(ExtractedDocument::new(DocumentFormat::Pdf, text))
    }

    #[cfg(not(feature = "pdf"))]
    fn extract_bytes(&self, _content: &[u8], _options: &ExtractOptions) -> Result<ExtractedDocument> {
        Err(super::missing_dependency(DocumentFormat::Pdf))
    }
}
