pub mod html;

#[cfg(feature = "pdf")]
pub mod pdf;

#[cfg(feature = "office")]
pub mod docx;

#[cfg(feature = "email")]
pub mod email;

pub use html::{html_to_text, looks_like_html, strip_html_naive};

#[cfg(feature = "email")]
pub use email::{EmailContent, extract_eml_text, extract_msg_text, parse_eml_content, parse_msg_content};
