//! Clause segmentation.
//!
//! Splits cleaned document text into an ordered sequence of [`Clause`]s.
//!
//! # Segmentation Modes
//!
//! - **Paragraph**: fragments are separated by blank lines (two or more newlines,
//!   optionally with horizontal whitespace between them)
//! - **Line**: every line is a fragment
//!
//! In both modes a fragment survives only when its trimmed length is strictly
//! greater than the configured minimum (30 characters by default). Survivors get
//! sequential 1-based ids in document order; the counter only advances on
//! acceptance, so filtered fragments leave no gaps.
//!
//! # Example
//!
//! ```rust
//! use clausemark::clauses::{segment, SegmentationMode};
//!
//! let text = "The policy covers accidental damage to the insured vehicle.\n\nshort\n\n\
//!             Claims must be filed within thirty days of the incident.";
//! let clauses = segment(text, SegmentationMode::Paragraph);
//!
//! assert_eq!(clauses.len(), 2);
//! assert_eq!(clauses[1].id, "2");
//! ```
use crate::core::config::SegmentationConfig;
use crate::types::Clause;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Default minimum clause length, in characters.
pub const DEFAULT_MIN_CLAUSE_CHARS: usize = 30;

static PARAGRAPH_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n(?:[ \t\r\f\v]*\n)+").expect("Paragraph break regex pattern is valid and should compile"));

/// How fragments are cut out of the document text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentationMode {
    /// Split on blank lines.
    #[default]
    Paragraph,
    /// Split on single newlines.
    Line,
}

/// Segment `text` with the default minimum length.
pub fn segment(text: &str, mode: SegmentationMode) -> Vec<Clause> {
    segment_with_min_chars(text, mode, DEFAULT_MIN_CLAUSE_CHARS)
}

/// Segment `text` according to `config`.
pub fn segment_with(text: &str, config: &SegmentationConfig) -> Vec<Clause> {
    segment_with_min_chars(text, config.mode, config.min_chars)
}

/// Segment `text`, keeping fragments whose trimmed length exceeds `min_chars`.
pub fn segment_with_min_chars(text: &str, mode: SegmentationMode, min_chars: usize) -> Vec<Clause> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let fragments: Box<dyn Iterator<Item = &str>> = match mode {
        SegmentationMode::Paragraph => Box::new(PARAGRAPH_BREAK.split(text)),
        SegmentationMode::Line => Box::new(text.split('\n')),
    };

    let mut clauses = Vec::new();
    let mut next_id = 1usize;

    for fragment in fragments {
        let trimmed = fragment.trim();
        if trimmed.chars().count() <= min_chars {
            continue;
        }

        clauses.push(Clause::new(next_id.to_string(), trimmed));
        next_id += 1;
    }

    tracing::debug!(
        mode = ?mode,
        min_chars,
        clause_count = clauses.len(),
        "Segmented document into clauses"
    );

    clauses
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_mode_filters_short_fragments() {
        let a = "A".repeat(32);
        let b = "B".repeat(32);
        let text = format!("{}\n\nshort\n\n{}", a, b);

        let clauses = segment(&text, SegmentationMode::Paragraph);

        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses[0].id, "1");
        assert_eq!(clauses[0].text, a);
        assert_eq!(clauses[1].id, "2");
        assert_eq!(clauses[1].text, b);
        assert!(clauses.iter().all(|c| c.confidence.is_none()));
    }

    #[test]
    fn test_paragraph_mode_keeps_single_newlines_inside_clause() {
        let text = "The insurer shall pay the benefit\nwithin thirty days of approval.\n\n  \n\
                    The insured shall cooperate with any investigation.";
        let clauses = segment(text, SegmentationMode::Paragraph);

        assert_eq!(clauses.len(), 2);
        assert_eq!(
            clauses[0].text,
            "The insurer shall pay the benefit\nwithin thirty days of approval."
        );
    }

    #[test]
    fn test_line_mode_splits_every_line() {
        let text = "This line is long enough to be a clause.\nshort line\n\
                    Another line that is definitely long enough.\r\n";
        let clauses = segment(text, SegmentationMode::Line);

        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses[0].text, "This line is long enough to be a clause.");
        assert_eq!(clauses[1].id, "2");
        assert_eq!(clauses[1].text, "Another line that is definitely long enough.");
    }

    #[test]
    fn test_min_chars_is_strict() {
        let exactly_30 = "x".repeat(30);
        let thirty_one = "y".repeat(31);
        let text = format!("{}\n\n{}", exactly_30, thirty_one);

        let clauses = segment(&text, SegmentationMode::Paragraph);
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].text, thirty_one);
    }

    #[test]
    fn test_min_chars_counts_characters_not_bytes() {
        let text = "é".repeat(20);
        assert!(segment_with_min_chars(&text, SegmentationMode::Line, 25).is_empty());
        assert_eq!(segment_with_min_chars(&text, SegmentationMode::Line, 19).len(), 1);
    }

    #[test]
    fn test_empty_and_short_input_yield_nothing() {
        assert!(segment("", SegmentationMode::Paragraph).is_empty());
        assert!(segment("   \n\n  ", SegmentationMode::Line).is_empty());
        assert!(segment("tiny\n\nbits", SegmentationMode::Paragraph).is_empty());
    }

    #[test]
    fn test_segment_with_config() {
        let config = SegmentationConfig {
            mode: SegmentationMode::Line,
            min_chars: 3,
        };
        let clauses = segment_with("abcd\nab\nwxyz", &config);
        let texts: Vec<&str> = clauses.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["abcd", "wxyz"]);
    }

    #[test]
    fn test_ids_are_unique_and_sequential() {
        let text = (0..10)
            .map(|i| format!("Paragraph number {} has enough characters in it.", i))
            .collect::<Vec<_>>()
            .join("\n\n");
        let clauses = segment(&text, SegmentationMode::Paragraph);

        let ids: Vec<String> = clauses.iter().map(|c| c.id.clone()).collect();
        let expected: Vec<String> = (1..=10).map(|i| i.to_string()).collect();
        assert_eq!(ids, expected);
    }
}
