//! Email extraction functions.
//!
//! Parses .eml (RFC822) files with `mail-parser` and .msg (Outlook) files with
//! `msg_parser`. Both render to the same plain-text layout:
//!
//! ```text
//! Subject: <subject>
//! From: <sender>
//! To: <recipients>
//! Date: <date>
//!
//! Body:
//! <body>
//! ```
//!
//! The body is the first plain-text part that is not an attachment. When
//! there is none, the first HTML part is converted to text. Attachments are
//! never read.

use super::html::{html_to_text, looks_like_html};
use crate::error::{ClausemarkError, Result};
use mail_parser::{Address, HeaderName, MessageParser, MimeHeaders, PartType};

/// Header fields and body of a parsed email.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailContent {
    pub subject: String,
    pub from: String,
    pub to: String,
    pub date: String,
    pub body: String,
}

impl EmailContent {
    /// Render the fixed header block followed by the body.
    pub fn to_text(&self) -> String {
        format!(
            "Subject: {}\nFrom: {}\nTo: {}\nDate: {}\n\nBody:\n{}",
            self.subject,
            self.from,
            self.to,
            self.date,
            self.body.trim()
        )
    }
}

/// Parse .eml content (RFC822 format).
pub fn parse_eml_content(data: &[u8]) -> Result<EmailContent> {
    let message = MessageParser::default()
        .parse(data)
        .ok_or_else(|| ClausemarkError::extraction_failed("Failed to parse EML file: invalid email format"))?;

    let mut plain_text: Option<String> = None;
    let mut html_content: Option<String> = None;

    for part in &message.parts {
        let is_attachment = part
            .content_disposition()
            .is_some_and(|disposition| disposition.ctype().eq_ignore_ascii_case("attachment"));
        if is_attachment {
            continue;
        }

        match &part.body {
            PartType::Text(text) if plain_text.is_none() => plain_text = Some(text.to_string()),
            PartType::Html(html) if html_content.is_none() => html_content = Some(html.to_string()),
            _ => {}
        }
    }

    let body = match (plain_text, html_content) {
        (Some(plain), _) if !plain.trim().is_empty() => plain,
        (_, Some(html)) => html_to_text(&html),
        (Some(plain), None) => plain,
        (None, None) => {
            tracing::debug!("EML message has no text or HTML body part");
            String::new()
        }
    };

    Ok(EmailContent {
        subject: message.subject().unwrap_or_default().to_string(),
        from: format_addresses(message.from()),
        to: format_addresses(message.to()),
        date: raw_date(&message),
        body,
    })
}

/// Parse .msg content (Outlook format).
///
/// The Outlook reader exposes a single body field; when it holds HTML markup
/// the markup is converted to text.
pub fn parse_msg_content(data: &[u8]) -> Result<EmailContent> {
    let outlook = msg_parser::Outlook::from_slice(data)
        .map_err(|e| ClausemarkError::extraction_failed(format!("Failed to parse MSG file: {}", e)))?;

    let from = format_person(&outlook.sender.name, &outlook.sender.email);
    let to = outlook
        .to
        .iter()
        .map(|person| format_person(&person.name, &person.email))
        .filter(|person| !person.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    Ok(EmailContent {
        subject: outlook.subject.clone(),
        from,
        to,
        date: outlook.headers.date.trim().to_string(),
        body: msg_body(&outlook.body),
    })
}

/// The Outlook body as plain text, converting it when it holds HTML markup.
fn msg_body(body: &str) -> String {
    if looks_like_html(body) {
        html_to_text(body)
    } else {
        body.to_string()
    }
}

/// The `Date` header exactly as written, unfolded onto one line.
fn raw_date(message: &mail_parser::Message<'_>) -> String {
    message
        .header_raw(HeaderName::Date)
        .map(|raw| raw.split_whitespace().collect::<Vec<_>>().join(" "))
        .unwrap_or_default()
}

/// Parse .eml bytes and render them as text.
pub fn extract_eml_text(data: &[u8]) -> Result<String> {
    Ok(parse_eml_content(data)?.to_text())
}

/// Parse .msg bytes and render them as text.
pub fn extract_msg_text(data: &[u8]) -> Result<String> {
    Ok(parse_msg_content(data)?.to_text())
}

fn format_addresses(address: Option<&Address<'_>>) -> String {
    let Some(address) = address else {
        return String::new();
    };

    address
        .iter()
        .map(|addr| format_person(addr.name().unwrap_or_default(), addr.address().unwrap_or_default()))
        .filter(|person| !person.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_person(name: &str, email: &str) -> String {
    let name = name.trim();
    let email = email.trim();
    match (name.is_empty(), email.is_empty()) {
        (false, false) => format!("{} <{}>", name, email),
        (false, true) => name.to_string(),
        (true, _) => email.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN_EML: &[u8] = b"From: Claims Desk <claims@insurer.example>\r\n\
To: Jane Holder <jane@example.com>, ops@example.com\r\n\
Subject: Policy renewal\r\n\
Date: Tue, 1 Jul 2025 10:30:00 +0000\r\n\
Content-Type: text/plain; charset=utf-8\r\n\
\r\n\
Your insurance policy renews on 1 August.\r\n\
\r\n\
The deductible remains unchanged.\r\n";

    #[test]
    fn test_parse_plain_eml() {
        let email = parse_eml_content(PLAIN_EML).unwrap();
        assert_eq!(email.subject, "Policy renewal");
        assert_eq!(email.from, "Claims Desk <claims@insurer.example>");
        assert_eq!(email.to, "Jane Holder <jane@example.com>, ops@example.com");
        assert_eq!(email.date, "Tue, 1 Jul 2025 10:30:00 +0000");
        assert!(email.body.contains("renews on 1 August."));
    }

    #[test]
    fn test_eml_text_layout() {
        let text = extract_eml_text(PLAIN_EML).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Subject: Policy renewal"));
        assert_eq!(lines.next(), Some("From: Claims Desk <claims@insurer.example>"));
        assert!(lines.next().unwrap().starts_with("To: Jane Holder"));
        assert_eq!(lines.next(), Some("Date: Tue, 1 Jul 2025 10:30:00 +0000"));
        assert_eq!(lines.next(), Some(""));
        assert_eq!(lines.next(), Some("Body:"));
        assert!(text.ends_with("The deductible remains unchanged."));
    }

    #[test]
    fn test_multipart_prefers_plain_and_skips_attachments() {
        let eml = b"From: a@example.com\r\n\
Subject: Mixed\r\n\
MIME-Version: 1.0\r\n\
Content-Type: multipart/mixed; boundary=\"outer\"\r\n\
\r\n\
--outer\r\n\
Content-Type: text/plain; charset=utf-8\r\n\
Content-Disposition: attachment; filename=\"notes.txt\"\r\n\
\r\n\
Attachment text must not appear.\r\n\
--outer\r\n\
Content-Type: multipart/alternative; boundary=\"inner\"\r\n\
\r\n\
--inner\r\n\
Content-Type: text/plain; charset=utf-8\r\n\
\r\n\
Plain body wins.\r\n\
--inner\r\n\
Content-Type: text/html; charset=utf-8\r\n\
\r\n\
<p>HTML body loses.</p>\r\n\
--inner--\r\n\
--outer--\r\n";

        let email = parse_eml_content(eml).unwrap();
        assert_eq!(email.body.trim(), "Plain body wins.");
    }

    #[test]
    fn test_html_only_eml_is_stripped() {
        let eml = b"From: a@example.com\r\n\
Subject: HTML only\r\n\
Content-Type: text/html; charset=utf-8\r\n\
\r\n\
<html><body><p>The <b>liability</b> cap is &pound;1M.</p><script>x()</script></body></html>\r\n";

        let email = parse_eml_content(eml).unwrap();
        assert!(email.body.contains("The liability cap is"));
        assert!(!email.body.contains('<'));
        assert!(!email.body.contains("x()"));
    }

    #[test]
    fn test_missing_headers_render_empty() {
        let eml = b"Content-Type: text/plain\r\n\r\nJust a body.\r\n";
        let text = extract_eml_text(eml).unwrap();
        assert!(text.starts_with("Subject: \nFrom: \nTo: \nDate: \n\nBody:\nJust a body."));
    }

    #[test]
    fn test_invalid_msg_fails() {
        let err = parse_msg_content(b"not an OLE compound file").unwrap_err();
        assert!(matches!(err, ClausemarkError::ExtractionFailed { .. }));
        assert!(err.to_string().contains("Failed to parse MSG file"));
    }

    #[test]
    fn test_msg_plain_body_is_kept() {
        let body = "Dear holder,\r\n\r\nYour <policy> number is unchanged.";
        assert_eq!(msg_body(body), body);
    }

    #[test]
    fn test_msg_html_body_is_converted() {
        let body = "<html><head><title>Notice</title></head><body><p>Your <b>insurance</b> renews.</p><p>Premium &pound;90.</p></body></html>";
        assert_eq!(msg_body(body), "Your insurance renews.\nPremium \u{00A3}90.");
    }

    #[test]
    fn test_msg_header_block_with_html_body() {
        let email = EmailContent {
            subject: "Renewal".to_string(),
            from: format_person("Claims Desk", "claims@insurer.example"),
            to: format_person("", "holder@example.com"),
            date: "Mon, 3 Mar 2025 09:15:00 +0000".to_string(),
            body: msg_body("<!DOCTYPE html><html><body><div>Cover continues.</div></body></html>"),
        };
        assert_eq!(
            email.to_text(),
            "Subject: Renewal\nFrom: Claims Desk <claims@insurer.example>\nTo: holder@example.com\n\
             Date: Mon, 3 Mar 2025 09:15:00 +0000\n\nBody:\nCover continues."
        );
    }

    #[test]
    fn test_folded_date_header_is_unfolded() {
        let eml = b"Subject: Folded\r\nDate: Tue, 1 Jul 2025\r\n 10:30:00 +0000\r\nContent-Type: text/plain\r\n\r\nBody.\r\n";
        let email = parse_eml_content(eml).unwrap();
        assert_eq!(email.date, "Tue, 1 Jul 2025 10:30:00 +0000");
    }

    #[test]
    fn test_format_person() {
        assert_eq!(format_person("Jane", "jane@example.com"), "Jane <jane@example.com>");
        assert_eq!(format_person("", "jane@example.com"), "jane@example.com");
        assert_eq!(format_person("Jane", ""), "Jane");
        assert_eq!(format_person(" ", " "), "");
    }

    #[test]
    fn test_to_text_trims_body() {
        let email = EmailContent {
            subject: "S".to_string(),
            body: "\n\n  body text  \n".to_string(),
            ..Default::default()
        };
        assert_eq!(email.to_text(), "Subject: S\nFrom: \nTo: \nDate: \n\nBody:\nbody text");
    }
}
