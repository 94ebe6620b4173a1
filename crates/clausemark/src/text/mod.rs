//! Text normalization utilities.
//!
//! - [`clean`] / [`clean_with`]: NFKC normalization, case folding, ASCII filtering,
//!   punctuation removal and whitespace collapsing
//! - [`strip_control_chars`]: drop non-printable characters, keep whitespace

pub mod cleaner;

pub use cleaner::{clean, clean_with, strip_control_chars};
