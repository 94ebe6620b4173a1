//! Whole-word keyword span finding with overlap resolution.

use super::types::OverlapPolicy;
use crate::core::config::HighlightConfig;
use crate::types::KeywordSpan;
use regex::{Regex, RegexBuilder};
use std::collections::HashSet;

/// Compiled keyword set, reusable across many texts.
///
/// Keywords are deduplicated (exact string match, first occurrence wins) and
/// each one is compiled into a `\b<keyword>\b` pattern. The regex engine
/// guarantees linear-time scanning per keyword.
///
/// # Example
///
/// ```rust
/// use clausemark::keywords::{KeywordMatcher, OverlapPolicy};
///
/// let matcher = KeywordMatcher::new(["governing law", "law"], true, OverlapPolicy::Strict);
/// let spans = matcher.find_spans("The Governing Law of this agreement");
///
/// assert_eq!(spans.len(), 1);
/// assert_eq!(spans[0].keyword, "governing law");
/// assert_eq!(spans[0].matched_text, "Governing Law");
/// ```
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    patterns: Vec<(String, Regex)>,
    case_insensitive: bool,
    policy: OverlapPolicy,
}

impl KeywordMatcher {
    pub fn new<I, S>(keywords: I, case_insensitive: bool, policy: OverlapPolicy) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut patterns = Vec::new();

        for keyword in keywords {
            let keyword = keyword.as_ref();
            if keyword.trim().is_empty() || !seen.insert(keyword.to_string()) {
                continue;
            }

            let pattern = format!(r"\b{}\b", regex::escape(keyword));
            match RegexBuilder::new(&pattern).case_insensitive(case_insensitive).build() {
                Ok(regex) => patterns.push((keyword.to_string(), regex)),
                Err(e) => tracing::warn!("Skipping keyword '{}': {}", keyword, e),
            }
        }

        Self {
            patterns,
            case_insensitive,
            policy,
        }
    }

    pub fn from_config(config: &HighlightConfig) -> Self {
        Self::new(&config.keywords, config.case_insensitive, config.overlap_policy)
    }

    /// Deduplicated keywords in configured order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|(keyword, _)| keyword.as_str())
    }

    pub fn policy(&self) -> OverlapPolicy {
        self.policy
    }

    /// Find keyword spans in `text`, sorted by start offset.
    ///
    /// Under [`OverlapPolicy::Strict`] the result contains no two overlapping
    /// spans. When several keywords match the exact same range, the span is
    /// attributed to the keyword configured first.
    pub fn find_spans(&self, text: &str) -> Vec<KeywordSpan> {
        if text.is_empty() || self.patterns.is_empty() {
            return Vec::new();
        }

        let mut seen: HashSet<(usize, usize, String)> = HashSet::new();
        let mut candidates = Vec::new();

        for (keyword, regex) in &self.patterns {
            for found in regex.find_iter(text) {
                if found.is_empty() {
                    continue;
                }

                let matched_text = found.as_str();
                let normalized = if self.case_insensitive {
                    matched_text.to_lowercase()
                } else {
                    matched_text.to_string()
                };
                if !seen.insert((found.start(), found.end(), normalized)) {
                    continue;
                }

                candidates.push(KeywordSpan {
                    keyword: keyword.clone(),
                    start: found.start(),
                    end: found.end(),
                    matched_text: matched_text.to_string(),
                });
            }
        }

        // Stable: equal (start, len) keeps keyword order.
        candidates.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| b.len().cmp(&a.len())));

        let candidate_count = candidates.len();
        let mut accepted: Vec<KeywordSpan> = Vec::with_capacity(candidate_count);
        for candidate in candidates {
            match accepted.last() {
                Some(last) if !self.policy.accepts(last, &candidate) => continue,
                _ => accepted.push(candidate),
            }
        }

        tracing::debug!(
            candidates = candidate_count,
            accepted = accepted.len(),
            policy = ?self.policy,
            "Resolved keyword spans"
        );

        accepted
    }
}
