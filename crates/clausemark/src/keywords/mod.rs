//! Keyword span finding.
//!
//! Locates whole-word occurrences of a keyword list in text and resolves
//! overlapping matches into a sorted span list suitable for rendering.
//!
//! # Algorithm
//!
//! 1. Deduplicate keywords, keeping the first occurrence
//! 2. Compile each keyword to `\b<escaped keyword>\b`, optionally case-insensitive
//! 3. Collect all matches, dropping duplicates of the same range
//! 4. Sort by start ascending, then length descending (longest match first)
//! 5. Sweep greedily, consulting the [`OverlapPolicy`]
//!
//! Offsets are byte offsets into the UTF-8 text and always fall on character
//! boundaries.
//!
//! # Example
//!
//! ```rust
//! use clausemark::keywords::{find_spans, DEFAULT_KEYWORDS};
//!
//! let spans = find_spans("section 1. this agreement governs the insurance policy.", DEFAULT_KEYWORDS, true);
//! let keywords: Vec<&str> = spans.iter().map(|s| s.keyword.as_str()).collect();
//!
//! assert_eq!(keywords, vec!["Section", "agreement", "Insurance", "Policy"]);
//! ```

pub mod spans;
pub mod types;

pub use spans::KeywordMatcher;
pub use types::OverlapPolicy;

use crate::types::KeywordSpan;

/// Legal and insurance terms highlighted when no keyword list is configured.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "agreement",
    "party",
    "indemnify",
    "warranty",
    "liability",
    "confidential",
    "termination",
    "governing law",
    "force majeure",
    "intellectual property",
    "Section",
    "Clause",
    "Policy",
    "Insurance",
];

/// Find keyword spans using the strict overlap policy.
pub fn find_spans<S: AsRef<str>>(text: &str, keywords: &[S], case_insensitive: bool) -> Vec<KeywordSpan> {
    find_spans_with_policy(text, keywords, case_insensitive, OverlapPolicy::Strict)
}

/// Find keyword spans with an explicit overlap policy.
///
/// Compiles the keyword set on every call; build a [`KeywordMatcher`] once
/// when scanning many texts with the same keywords.
pub fn find_spans_with_policy<S: AsRef<str>>(
    text: &str,
    keywords: &[S],
    case_insensitive: bool,
    policy: OverlapPolicy,
) -> Vec<KeywordSpan> {
    KeywordMatcher::new(keywords, case_insensitive, policy).find_spans(text)
}
