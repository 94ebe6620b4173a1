//! HTML to plain text conversion for email bodies.
//!
//! With the `html` feature the markup is parsed with `scraper` (html5ever), so
//! malformed nesting and comments are handled by a real parser. Without it a
//! regex-based stripper is used. Both variants agree on simple markup: they
//! drop `head`, `script` and `style` content, break lines around block
//! elements, join inline elements without adding spaces, decode the full HTML
//! entity table, and tidy whitespace the same way.

use once_cell::sync::Lazy;
use regex::Regex;

/// Elements whose content is never visible text.
const SKIPPED_ELEMENTS: &[&str] = &["head", "script", "style", "noscript", "template"];

/// Elements that start and end a line of text.
const BLOCK_ELEMENTS: &[&str] = &[
    "address",
    "article",
    "blockquote",
    "br",
    "dd",
    "div",
    "dl",
    "dt",
    "footer",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "hr",
    "li",
    "ol",
    "p",
    "pre",
    "section",
    "table",
    "tr",
    "ul",
];

static SKIPPED_CONTENT_RE: Lazy<Regex> = Lazy::new(|| {
    let alternatives: Vec<String> = SKIPPED_ELEMENTS
        .iter()
        .map(|name| format!(r"<{name}\b[^>]*>.*?</{name}\s*>"))
        .collect();
    Regex::new(&format!("(?is){}", alternatives.join("|")))
        .expect("Skipped content regex pattern is valid and should compile")
});
static COMMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").expect("Comment regex pattern is valid and should compile"));
static BLOCK_TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)</?(?:{})\b[^>]*>", BLOCK_ELEMENTS.join("|")))
        .expect("Block tag regex pattern is valid and should compile")
});
static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("Tag regex pattern is valid and should compile"));
static MARKUP_HINT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<\s*(?:html|body|!doctype\s+html)\b").expect("Markup hint regex pattern is valid and should compile")
});

/// Whether a body string is HTML markup rather than plain text.
pub fn looks_like_html(body: &str) -> bool {
    MARKUP_HINT_RE.is_match(body)
}

/// Convert an HTML document or fragment to plain text.
pub fn html_to_text(html: &str) -> String {
    #[cfg(feature = "html")]
    {
        parsed::html_to_text(html)
    }
    #[cfg(not(feature = "html"))]
    {
        strip_html_naive(html)
    }
}

/// Regex-based HTML stripping with entity decoding.
pub fn strip_html_naive(html: &str) -> String {
    let visible = SKIPPED_CONTENT_RE.replace_all(html, "");
    let without_comments = COMMENT_RE.replace_all(&visible, "");
    let with_breaks = BLOCK_TAG_RE.replace_all(&without_comments, "\n");
    let without_tags = TAG_RE.replace_all(&with_breaks, "");
    let decoded = html_escape::decode_html_entities(&without_tags);
    tidy_lines(&decoded)
}

/// Collapse whitespace within each line and drop blank lines.
fn tidy_lines(text: &str) -> String {
    text.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(feature = "html")]
mod parsed {
    use super::{BLOCK_ELEMENTS, SKIPPED_ELEMENTS};
    use scraper::{Html, Node};

    fn is_one_of(node: &Node, names: &[&str]) -> bool {
        node.as_element().is_some_and(|element| names.contains(&element.name()))
    }

    pub(super) fn html_to_text(html: &str) -> String {
        let document = Html::parse_document(html);
        let mut out = String::with_capacity(html.len() / 2);

        for node in document.root_element().descendants() {
            // A closed block element ends its line.
            if node.prev_sibling().is_some_and(|prev| is_one_of(prev.value(), BLOCK_ELEMENTS)) {
                out.push('\n');
            }

            let value = node.value();
            match value {
                Node::Element(_) if is_one_of(value, BLOCK_ELEMENTS) => out.push('\n'),
                Node::Text(text) => {
                    let skipped = node.ancestors().any(|ancestor| is_one_of(ancestor.value(), SKIPPED_ELEMENTS));
                    if !skipped {
                        out.push_str(text);
                    }
                }
                _ => {}
            }
        }

        super::tidy_lines(&out)
    }
}
