//! Shared types for keyword span finding.

use crate::types::KeywordSpan;
use serde::{Deserialize, Serialize};

/// How overlapping candidate spans are resolved.
///
/// Candidates are swept in `(start ascending, length descending)` order and
/// compared against the last accepted span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapPolicy {
    /// Accept a span only if it starts at or after the end of the last
    /// accepted span. Output never overlaps.
    #[default]
    Strict,

    /// Reject a span only if it lies entirely inside the last accepted span.
    /// Partial overlaps survive.
    DropNested,
}

impl OverlapPolicy {
    /// Whether `candidate` may follow `last` in the accepted sequence.
    pub fn accepts(&self, last: &KeywordSpan, candidate: &KeywordSpan) -> bool {
        match self {
            Self::Strict => candidate.start >= last.end,
            Self::DropNested => !last.contains(candidate),
        }
    }
}
