//! PDF text extraction using lopdf.
//!
//! Text is extracted page by page. Each page's text has trailing whitespace
//! trimmed, pages with no text are skipped, and the remaining pages are joined
//! with a blank line so page boundaries read as paragraph boundaries.

use crate::error::{ClausemarkError, Result};
use crate::types::PageRange;
use lopdf::Document;
use std::ops::RangeInclusive;

/// Separator placed between the text of consecutive pages.
pub const PAGE_SEPARATOR: &str = "\n\n";

/// Extract text from PDF bytes, optionally restricted to a 1-indexed,
/// inclusive page range.
///
/// # Errors
///
/// - `InvalidPageRange` if the range is inverted, starts at 0, or ends past
///   the last page
/// - `ExtractionFailed` if the bytes are not a readable PDF
pub fn extract_text(bytes: &[u8], page_range: Option<PageRange>) -> Result<String> {
    let document = load_document(bytes)?;
    let pages = document.get_pages();
    let page_count = pages.len() as u32;
    let selected = resolve_pages(page_range, page_count)?;

    tracing::debug!(
        page_count,
        first = selected.start(),
        last = selected.end(),
        "Extracting PDF text"
    );

    let mut page_texts = Vec::new();
    for page_number in selected {
        let text = document.extract_text(&[page_number]).map_err(|e| {
            ClausemarkError::extraction_failed_with_source(
                format!("Failed to extract text from PDF page {}", page_number),
                e,
            )
        })?;

        let text = text.trim_end();
        if text.trim().is_empty() {
            tracing::debug!(page_number, "Skipping blank PDF page");
            continue;
        }
        page_texts.push(text.to_string());
    }

    Ok(page_texts.join(PAGE_SEPARATOR))
}

fn load_document(bytes: &[u8]) -> Result<Document> {
    let document = Document::load_mem(bytes)
        .map_err(|e| ClausemarkError::extraction_failed_with_source("Failed to parse PDF", e))?;

    if document.is_encrypted() {
        return Err(ClausemarkError::extraction_failed("PDF is password-protected"));
    }

    Ok(document)
}

/// Turn an optional requested range into the concrete pages to read.
fn resolve_pages(page_range: Option<PageRange>, page_count: u32) -> Result<RangeInclusive<u32>> {
    let Some(range) = page_range else {
        return Ok(1..=page_count);
    };

    if range.start < 1 || range.start > range.end || range.end > page_count {
        return Err(ClausemarkError::InvalidPageRange {
            start: range.start,
            end: range.end,
            page_count,
        });
    }

    Ok(range.start..=range.end)
}
