//! Clausemark - document-to-clause extraction and keyword highlighting.
//!
//! Clausemark turns PDF, DOCX, EML and MSG documents into an ordered sequence
//! of clauses ready to be used as question-answering context, and marks
//! domain keywords (legal and insurance terms by default) in any text.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use clausemark::{PipelineConfig, extract_clauses, find_spans, render_markdown, DEFAULT_KEYWORDS};
//!
//! # fn main() -> clausemark::Result<()> {
//! let config = PipelineConfig::default();
//! let clauses = extract_clauses("policy.pdf", &config)?;
//!
//! for clause in &clauses {
//!     let spans = find_spans(&clause.text, DEFAULT_KEYWORDS, true);
//!     println!("[{}] {}", clause.id, render_markdown(&clause.text, &spans));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - **Extractors** (`extractors`): one `FormatExtractor` per format plus the
//!   extension-based dispatcher; parsers live in `extraction`
//! - **Text cleaning** (`text`): NFKC, case folding, ASCII filtering,
//!   punctuation removal, whitespace collapsing
//! - **Segmentation** (`clauses`): paragraph or line fragments with a minimum length
//! - **Keyword spans** (`keywords`): whole-word matching with overlap resolution
//! - **Rendering** (`highlight`): HTML, Markdown and context snippets
//!
//! # Features
//!
//! - `pdf` (lopdf), `office` (zip + roxmltree), `email` (mail-parser +
//!   msg_parser), `html` (scraper). All are enabled by default. A disabled
//!   backend surfaces as `ClausemarkError::MissingDependency` at call time.

#![deny(unsafe_code)]

pub mod clauses;
pub mod core;
pub mod error;
pub mod extraction;
pub mod extractors;
pub mod highlight;
pub mod keywords;
pub mod text;
pub mod types;

pub use error::{ClausemarkError, Result};
pub use types::*;

pub use core::config::{CleaningConfig, HighlightConfig, PdfConfig, PipelineConfig, SegmentationConfig};
pub use core::formats::DocumentFormat;
pub use core::pipeline::{
    build_context, clauses_from_text, clauses_to_json, clean_document_text, extract_clauses, extract_cleaned_text,
    extract_document, extract_text,
};

pub use clauses::{SegmentationMode, segment, segment_with};
pub use extractors::{ExtractOptions, FormatExtractor, extractor_for};
pub use highlight::{
    extract_default_snippets, extract_snippets, highlight_html, highlight_markdown, render_html, render_markdown,
    snippets_to_json,
};
pub use keywords::{DEFAULT_KEYWORDS, KeywordMatcher, OverlapPolicy, find_spans, find_spans_with_policy};
pub use text::{clean, clean_with, strip_control_chars};
