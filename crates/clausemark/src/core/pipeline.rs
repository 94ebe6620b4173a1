//! Document-to-clause pipeline.
//!
//! `path -> extractor -> raw text -> strip_control_chars -> clean -> segment -> clauses`
//!
//! Each stage owns its input for the duration of the call and returns a new
//! value. Only extraction can fail; cleaning and segmentation degrade to empty
//! output.

use crate::clauses::segment_with;
use crate::core::config::PipelineConfig;
use crate::extractors::{self, ExtractOptions};
use crate::text::{clean_with, strip_control_chars};
use crate::types::{Clause, ExtractedDocument, PageRange};
use crate::{ClausemarkError, Result};
use std::path::Path;

/// Separator between clauses in the LLM context block.
pub const CONTEXT_SEPARATOR: &str = "\n\n";

/// Extract raw text from a document, dispatching on its extension.
///
/// `page_range` applies to PDF files only.
///
/// # Errors
///
/// `UnsupportedFileType`, `MissingDependency`, `FileNotFound`,
/// `InvalidPageRange`, `ExtractionFailed` or `Io`.
pub fn extract_text(path: impl AsRef<Path>, page_range: Option<PageRange>) -> Result<String> {
    let options = ExtractOptions { page_range };
    Ok(extractors::extract_file(path, &options)?.content)
}

/// Extract a document using the PDF options from `config`.
pub fn extract_document(path: impl AsRef<Path>, config: &PipelineConfig) -> Result<ExtractedDocument> {
    let options = ExtractOptions {
        page_range: config.pdf.page_range,
    };
    extractors::extract_file(path, &options)
}

/// Strip non-printable characters, then apply the configured cleaning.
pub fn clean_document_text(text: &str, config: &PipelineConfig) -> String {
    clean_with(&strip_control_chars(text), &config.cleaning)
}

/// Extract and clean a document without segmenting it.
pub fn extract_cleaned_text(path: impl AsRef<Path>, config: &PipelineConfig) -> Result<String> {
    let document = extract_document(path, config)?;
    Ok(clean_document_text(&document.content, config))
}

/// Clean and segment already-extracted text.
pub fn clauses_from_text(text: &str, config: &PipelineConfig) -> Vec<Clause> {
    let cleaned = clean_document_text(text, config);
    segment_with(&cleaned, &config.segmentation)
}

/// Run the full pipeline on a file.
///
/// # Example
///
/// ```rust,no_run
/// use clausemark::{PipelineConfig, build_context, extract_clauses};
///
/// # fn example() -> clausemark::Result<()> {
/// let clauses = extract_clauses("policy.pdf", &PipelineConfig::default())?;
/// println!("{}", build_context(&clauses));
/// # Ok(())
/// # }
/// ```
pub fn extract_clauses(path: impl AsRef<Path>, config: &PipelineConfig) -> Result<Vec<Clause>> {
    let document = extract_document(path, config)?;
    let clauses = clauses_from_text(&document.content, config);

    tracing::debug!(
        format = %document.format,
        raw_chars = document.content.len(),
        clause_count = clauses.len(),
        "Extracted clauses"
    );

    Ok(clauses)
}

/// Join clause texts with blank lines, the context block handed to a
/// question-answering model.
pub fn build_context(clauses: &[Clause]) -> String {
    clauses
        .iter()
        .map(|clause| clause.text.as_str())
        .collect::<Vec<_>>()
        .join(CONTEXT_SEPARATOR)
}

/// Pretty-printed JSON array of `{id, text, confidence}` records.
///
/// # Errors
///
/// `Serialization` if encoding fails.
pub fn clauses_to_json(clauses: &[Clause]) -> Result<String> {
    serde_json::to_string_pretty(clauses)
        .map_err(|e| ClausemarkError::serialization_with_source("Failed to serialize clauses", e))
}
