//! Text normalization for extracted document text.
//!
//! [`clean_with`] runs the configured steps in a fixed order:
//!
//! 1. NFKC normalization
//! 2. lowercase
//! 3. drop non-ASCII code points
//! 4. drop ASCII punctuation
//! 5. collapse whitespace and trim
//!
//! Every step is deterministic and the whole pass is idempotent for a fixed
//! configuration. [`strip_control_chars`] is a separate post-pass.

use crate::core::config::CleaningConfig;
use std::borrow::Cow;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::{IsNormalized, is_nfkc_quick};

/// Clean `text` with explicit switches.
///
/// Whitespace collapsing folds all whitespace (including newlines) into single
/// spaces. Use [`clean_with`] and `preserve_line_breaks` to keep line structure.
///
/// # Example
///
/// ```rust
/// use clausemark::text::clean;
///
/// let cleaned = clean("  The INSURED\tshall   notify!\n", true, true, true, true);
/// assert_eq!(cleaned, "the insured shall notify");
/// ```
pub fn clean(
    text: &str,
    lowercase: bool,
    remove_non_ascii: bool,
    remove_punctuation: bool,
    collapse_whitespace: bool,
) -> String {
    let config = CleaningConfig {
        lowercase,
        remove_non_ascii,
        remove_punctuation,
        collapse_whitespace,
        preserve_line_breaks: false,
    };
    clean_with(text, &config)
}

/// Clean `text` according to `config`.
pub fn clean_with(text: &str, config: &CleaningConfig) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut current: Cow<'_, str> = match is_nfkc_quick(text.chars()) {
        IsNormalized::Yes => Cow::Borrowed(text),
        _ => Cow::Owned(text.nfkc().collect()),
    };

    if config.lowercase {
        current = Cow::Owned(current.to_lowercase());
    }

    if config.remove_non_ascii && !current.is_ascii() {
        current = Cow::Owned(current.chars().filter(char::is_ascii).collect());
    }

    if config.remove_punctuation && current.contains(|c: char| c.is_ascii_punctuation()) {
        current = Cow::Owned(current.chars().filter(|c| !c.is_ascii_punctuation()).collect());
    }

    if config.collapse_whitespace {
        if config.preserve_line_breaks {
            collapse_preserving_lines(&current)
        } else {
            collapse_whitespace(&current)
        }
    } else {
        current.trim().to_string()
    }
}

/// Remove non-printable characters while keeping all whitespace.
///
/// Drops control characters (except whitespace controls such as `\n` and
/// `\t`), invisible format characters (zero-width spaces, bidi marks, BOM,
/// soft hyphen) and private-use code points.
pub fn strip_control_chars(text: &str) -> String {
    text.chars().filter(|&c| c.is_whitespace() || !is_non_printable(c)).collect()
}

/// Collapse every whitespace run into one space and trim.
fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Collapse whitespace inside each line, trim lines, and reduce blank-line
/// runs to a single blank line. Leading and trailing blank lines are dropped.
fn collapse_preserving_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_blank = false;

    for line in text.split('\n') {
        let collapsed = collapse_whitespace(line);
        if collapsed.is_empty() {
            pending_blank = true;
            continue;
        }

        if !out.is_empty() {
            out.push_str(if pending_blank { "\n\n" } else { "\n" });
        }
        out.push_str(&collapsed);
        pending_blank = false;
    }

    out
}

fn is_non_printable(c: char) -> bool {
    c.is_control() || is_format_char(c) || is_private_use(c)
}

fn is_format_char(c: char) -> bool {
    matches!(
        c,
        '\u{00AD}'
            | '\u{0600}'..='\u{0605}'
            | '\u{061C}'
            | '\u{06DD}'
            | '\u{070F}'
            | '\u{180E}'
            | '\u{200B}'..='\u{200F}'
            | '\u{202A}'..='\u{202E}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{206F}'
            | '\u{FEFF}'
            | '\u{FFF9}'..='\u{FFFB}'
            | '\u{110BD}'
            | '\u{E0001}'
            | '\u{E0020}'..='\u{E007F}'
    )
}

fn is_private_use(c: char) -> bool {
    matches!(
        c,
        '\u{E000}'..='\u{F8FF}' | '\u{F0000}'..='\u{FFFFD}' | '\u{100000}'..='\u{10FFFD}'
    )
}
