use serde::{Deserialize, Serialize};

use crate::core::formats::DocumentFormat;

/// A segmented unit of document text.
///
/// Clauses are produced by the segmenter in document order and never mutated
/// afterwards. `id` is unique within one extraction run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clause {
    /// 1-based sequential identifier rendered as a string.
    pub id: String,

    /// Trimmed clause text.
    pub text: String,

    /// Optional relevance confidence. The segmenter never sets it; it
    /// serializes as `null` so downstream consumers see a stable shape.
    pub confidence: Option<f64>,
}

impl Clause {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            confidence: None,
        }
    }
}

/// Plain-text output of a format extractor.
///
/// Ephemeral: exists only between extraction and cleaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedDocument {
    pub format: DocumentFormat,
    pub content: String,
}

impl ExtractedDocument {
    pub fn new(format: DocumentFormat, content: String) -> Self {
        Self { format, content }
    }
}

/// 1-indexed, inclusive PDF page range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRange {
    pub start: u32,
    pub end: u32,
}

impl PageRange {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }
}

impl From<(u32, u32)> for PageRange {
    fn from((start, end): (u32, u32)) -> Self {
        Self { start, end }
    }
}

/// A keyword occurrence in a specific text buffer.
///
/// `start` and `end` are UTF-8 byte offsets on char boundaries with
/// `start < end <= text.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeywordSpan {
    /// The configured keyword this match is attributed to.
    pub keyword: String,
    pub start: usize,
    pub end: usize,
    /// The substring of the text that matched, in its original casing.
    pub matched_text: String,
}

impl KeywordSpan {
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// True when the half-open ranges share at least one position.
    pub fn overlaps(&self, other: &KeywordSpan) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// True when `other` lies entirely within this span.
    pub fn contains(&self, other: &KeywordSpan) -> bool {
        other.start >= self.start && other.end <= self.end
    }
}

/// A bounded window of context around one keyword span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub keyword: String,
    pub matched_text: String,
    pub snippet: String,
    pub span_start: usize,
    pub span_end: usize,
}
