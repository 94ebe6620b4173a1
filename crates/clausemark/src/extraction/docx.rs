//! DOCX (Microsoft Word) text extraction.
//!
//! Reads `word/document.xml` from the OOXML package and returns the text of the
//! body-level paragraphs, one per line. Paragraphs nested in tables, text
//! boxes, headers and footers are not part of the body paragraph sequence and
//! are left out. Paragraphs containing only whitespace are dropped.

use crate::error::{ClausemarkError, Result};
use roxmltree::Node;
use std::io::{Cursor, Read};
use zip::ZipArchive;

/// WordprocessingML main namespace.
pub const WORDPROCESSING_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

const DOCUMENT_PART: &str = "word/document.xml";

/// Extract body paragraph text from DOCX bytes.
///
/// # Errors
///
/// Returns `ExtractionFailed` if the bytes are not a ZIP archive, the archive
/// has no `word/document.xml`, or that part is not well-formed XML.
pub fn extract_text(bytes: &[u8]) -> Result<String> {
    let xml = read_document_part(bytes)?;
    let paragraphs = body_paragraphs(&xml)?;

    tracing::debug!(paragraph_count = paragraphs.len(), "Extracted DOCX paragraphs");

    Ok(paragraphs.join("\n"))
}

fn read_document_part(bytes: &[u8]) -> Result<String> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ClausemarkError::extraction_failed_with_source("Failed to open DOCX archive", e))?;

    let mut part = archive.by_name(DOCUMENT_PART).map_err(|e| {
        ClausemarkError::extraction_failed_with_source(format!("DOCX archive has no {}", DOCUMENT_PART), e)
    })?;

    let mut xml = String::new();
    part.read_to_string(&mut xml)
        .map_err(|e| ClausemarkError::extraction_failed_with_source(format!("Failed to read {}", DOCUMENT_PART), e))?;

    Ok(xml)
}

/// Text of each non-blank `w:p` that is a direct child of `w:body`.
fn body_paragraphs(xml: &str) -> Result<Vec<String>> {
    let doc = roxmltree::Document::parse(xml)
        .map_err(|e| ClausemarkError::extraction_failed_with_source(format!("Failed to parse {}", DOCUMENT_PART), e))?;

    let Some(body) = doc.root_element().children().find(|n| is_w(n, "body")) else {
        return Ok(Vec::new());
    };

    Ok(body
        .children()
        .filter(|n| is_w(n, "p"))
        .map(paragraph_text)
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .collect())
}

/// Text of the runs that belong to the paragraph itself.
///
/// Only runs directly under `w:p` or a `w:hyperlink` are read, so drawings
/// and text boxes anchored in a run (including both branches of an
/// `mc:AlternateContent`) contribute nothing.
fn paragraph_text(paragraph: Node<'_, '_>) -> String {
    let mut text = String::new();
    for child in paragraph.children() {
        if is_w(&child, "r") {
            push_run_text(child, &mut text);
        } else if is_w(&child, "hyperlink") {
            for run in child.children().filter(|n| is_w(n, "r")) {
                push_run_text(run, &mut text);
            }
        }
    }
    text
}

fn push_run_text(run: Node<'_, '_>, text: &mut String) {
    for node in run.children() {
        if is_w(&node, "t") {
            text.push_str(node.text().unwrap_or_default());
        } else if is_w(&node, "tab") {
            text.push('\t');
        } else if is_w(&node, "br") || is_w(&node, "cr") {
            text.push('\n');
        }
    }
}

fn is_w(node: &Node<'_, '_>, local_name: &str) -> bool {
    node.is_element() && node.has_tag_name((WORDPROCESSING_NS, local_name))
}
