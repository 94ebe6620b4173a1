//! Email message extractors.

use super::{ExtractOptions, FormatExtractor};
use crate::Result;
use crate::core::formats::DocumentFormat;
use crate::types::ExtractedDocument;

/// RFC822 (.eml) extractor backed by mail-parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmlExtractor;

/// Outlook (.msg) extractor backed by msg_parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct MsgExtractor;

impl FormatExtractor for EmlExtractor {
    fn name(&self) -> &str {
        "eml-extractor"
    }

    fn format(&self) -> DocumentFormat {
        DocumentFormat::Eml
    }

    fn is_available(&self) -> bool {
        cfg!(feature = "email")
    }

    #[cfg(feature = "email")]
    fn extract_bytes(&self, content: &[u8], _options: &ExtractOptions) -> Result<ExtractedDocument> {
        let text = crate::extraction::email::extract_eml_text(content)?;
        Ok(ExtractedDocument::new(DocumentFormat::Eml, text))
    }

    #[cfg(not(feature = "email"))]
    fn extract_bytes(&self, _content: &[u8], _options: &ExtractOptions) -> Result<ExtractedDocument> {
        Err(super::missing_dependency(DocumentFormat::Eml))
    }
}

impl FormatExtractor for MsgExtractor {
    fn name(&self) -> &str {
        "msg-extractor"
    }

    fn format(&self) -> DocumentFormat {
        DocumentFormat::Msg
    }

    fn is_available(&self) -> bool {
        cfg!(feature = "email")
    }

    #[cfg(feature = "email")]
    fn extract_bytes(&self, content: &[u8], _options: &ExtractOptions) -> Result<ExtractedDocument> {
        let text = crate::extraction::email::extract_msg_text(content)?;
        Ok(ExtractedDocument::new(DocumentFormat::Msg, text))
    }

    #[cfg(not(feature = "email"))]
    fn extract_bytes(&self, _content: &[u8], _options: &ExtractOptions) -> Result<ExtractedDocument> {
        Err(super::missing_dependency(DocumentFormat::Msg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_extractors_interface() {
        assert_eq!(EmlExtractor.name(), "eml-extractor");
        assert_eq!(MsgExtractor.name(), "msg-extractor");
        assert_eq!(EmlExtractor.format(), DocumentFormat::Eml);
        assert_eq!(MsgExtractor.format(), DocumentFormat::Msg);
        assert_eq!(EmlExtractor.is_available(), cfg!(feature = "email"));
    }

    #[cfg(feature = "email")]
    #[test]
    fn test_eml_extractor_renders_headers() {
        let eml = b"From: broker@example.com\r\nSubject: Quote\r\nContent-Type: text/plain\r\n\r\nPremium attached.\r\n";
        let document = EmlExtractor.extract_bytes(eml, &ExtractOptions::default()).unwrap();
        assert_eq!(document.format, DocumentFormat::Eml);
        assert!(document.content.starts_with("Subject: Quote\nFrom: broker@example.com\n"));
        assert!(document.content.ends_with("Body:\nPremium attached."));
    }
}
