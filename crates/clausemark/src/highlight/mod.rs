//! Highlight rendering and snippet extraction.
//!
//! Renderers walk the text once, copying untouched segments verbatim and
//! wrapping each span. Matched text is never escaped, so removing the inserted
//! markers reproduces the input exactly.
//!
//! Spans may arrive in any order; they are sorted by start offset. Spans that
//! cannot be rendered (empty, out of bounds, not on a char boundary, or
//! overlapping an already rendered span) are skipped with a warning.
//!
//! # Example
//!
//! ```rust
//! use clausemark::highlight::{render_html, render_markdown};
//! use clausemark::keywords::{find_spans, DEFAULT_KEYWORDS};
//!
//! let text = "The Policy excludes flood damage.";
//! let spans = find_spans(text, DEFAULT_KEYWORDS, true);
//!
//! assert_eq!(render_html(text, &spans, "mark", ""), "The <mark>Policy</mark> excludes flood damage.");
//! assert_eq!(render_markdown(text, &spans), "The **Policy** excludes flood damage.");
//! ```

use crate::core::config::HighlightConfig;
use crate::error::{ClausemarkError, Result};
use crate::keywords::{DEFAULT_KEYWORDS, KeywordMatcher, OverlapPolicy};
use crate::types::{KeywordSpan, Snippet};

/// Default HTML tag used by the convenience entry points.
pub const DEFAULT_TAG: &str = "mark";

/// Default snippet context, in characters on each side.
pub const DEFAULT_SNIPPET_WINDOW: usize = 40;

/// Wrap each span in `<tag attrs>...</tag>`.
///
/// Attributes are omitted entirely when `extra_attrs` is blank.
pub fn render_html(text: &str, spans: &[KeywordSpan], tag: &str, extra_attrs: &str) -> String {
    let attrs = extra_attrs.trim();
    let open = if attrs.is_empty() {
        format!("<{}>", tag)
    } else {
        format!("<{} {}>", tag, attrs)
    };
    let close = format!("</{}>", tag);
    wrap_spans(text, spans, &open, &close)
}

/// Wrap each span in `**` bold markers.
pub fn render_markdown(text: &str, spans: &[KeywordSpan]) -> String {
    wrap_spans(text, spans, "**", "**")
}

/// Cut a context window of `window` characters on each side of every span.
///
/// Windows are clamped to the text bounds and trimmed. Snippets are
/// independent views, so neighbouring snippets may overlap.
pub fn extract_snippets(text: &str, spans: &[KeywordSpan], window: usize) -> Vec<Snippet> {
    let mut ordered: Vec<&KeywordSpan> = spans.iter().collect();
    ordered.sort_by_key(|span| span.start);

    let mut snippets = Vec::with_capacity(ordered.len());
    for span in ordered {
        if !is_renderable(text, span) {
            tracing::warn!(
                start = span.start,
                end = span.end,
                keyword = %span.keyword,
                "Skipping span outside text or off char boundary"
            );
            continue;
        }

        let from = window_start(text, span.start, window);
        let to = window_end(text, span.end, window);

        snippets.push(Snippet {
            keyword: span.keyword.clone(),
            matched_text: text[span.start..span.end].to_string(),
            snippet: text[from..to].trim().to_string(),
            span_start: span.start,
            span_end: span.end,
        });
    }

    snippets
}

/// Render `text` as HTML, finding spans with [`DEFAULT_KEYWORDS`].
pub fn highlight_html(text: &str) -> String {
    let spans = default_spans(text);
    render_html(text, &spans, DEFAULT_TAG, "")
}

/// Render `text` as Markdown, finding spans with [`DEFAULT_KEYWORDS`].
pub fn highlight_markdown(text: &str) -> String {
    let spans = default_spans(text);
    render_markdown(text, &spans)
}

/// Snippets around every [`DEFAULT_KEYWORDS`] match in `text`.
pub fn extract_default_snippets(text: &str, window: usize) -> Vec<Snippet> {
    let spans = default_spans(text);
    extract_snippets(text, &spans, window)
}

/// Find spans and render HTML using the keywords and tag from `config`.
pub fn highlight_html_with(text: &str, config: &HighlightConfig) -> String {
    let spans = KeywordMatcher::from_config(config).find_spans(text);
    render_html(text, &spans, &config.tag, &config.extra_attrs)
}

/// Find spans and render Markdown using the keywords from `config`.
pub fn highlight_markdown_with(text: &str, config: &HighlightConfig) -> String {
    let spans = KeywordMatcher::from_config(config).find_spans(text);
    render_markdown(text, &spans)
}

/// Find spans and cut snippets using the keywords and window from `config`.
pub fn extract_snippets_with(text: &str, config: &HighlightConfig) -> Vec<Snippet> {
    let spans = KeywordMatcher::from_config(config).find_spans(text);
    extract_snippets(text, &spans, config.snippet_window)
}

/// Pretty-printed JSON array of snippet records.
pub fn snippets_to_json(snippets: &[Snippet]) -> Result<String> {
    serde_json::to_string_pretty(snippets)
        .map_err(|e| ClausemarkError::serialization_with_source("Failed to serialize snippets", e))
}

fn default_spans(text: &str) -> Vec<KeywordSpan> {
    KeywordMatcher::new(DEFAULT_KEYWORDS, true, OverlapPolicy::Strict).find_spans(text)
}

fn wrap_spans(text: &str, spans: &[KeywordSpan], open: &str, close: &str) -> String {
    if spans.is_empty() {
        return text.to_string();
    }

    let mut ordered: Vec<&KeywordSpan> = spans.iter().collect();
    ordered.sort_by_key(|span| span.start);

    let mut out = String::with_capacity(text.len() + spans.len() * (open.len() + close.len()));
    let mut cursor = 0usize;

    for span in ordered {
        if !is_renderable(text, span) {
            tracing::warn!(
                start = span.start,
                end = span.end,
                keyword = %span.keyword,
                "Skipping span outside text or off char boundary"
            );
            continue;
        }
        if span.start < cursor {
            tracing::warn!(
                start = span.start,
                end = span.end,
                rendered_until = cursor,
                "Skipping span overlapping a rendered span"
            );
            continue;
        }

        out.push_str(&text[cursor..span.start]);
        out.push_str(open);
        out.push_str(&text[span.start..span.end]);
        out.push_str(close);
        cursor = span.end;
    }

    out.push_str(&text[cursor..]);
    out
}

fn is_renderable(text: &str, span: &KeywordSpan) -> bool {
    span.start < span.end
        && span.end <= text.len()
        && text.is_char_boundary(span.start)
        && text.is_char_boundary(span.end)
}

/// Byte offset `window` characters before `start`, clamped to 0.
fn window_start(text: &str, start: usize, window: usize) -> usize {
    text[..start]
        .char_indices()
        .rev()
        .take(window)
        .last()
        .map_or(start, |(idx, _)| idx)
}

/// Byte offset `window` characters after `end`, clamped to the text length.
fn window_end(text: &str, end: usize, window: usize) -> usize {
    text[end..]
        .char_indices()
        .nth(window)
        .map_or(text.len(), |(idx, _)| end + idx)
}
