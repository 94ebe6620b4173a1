//! Configuration loading and management.
//!
//! A [`PipelineConfig`] is an explicit value handed to every pipeline entry
//! point. It can be loaded from TOML, YAML, or JSON files, discovered from a
//! `clausemark.toml` in the directory hierarchy, or built programmatically.

use crate::clauses::SegmentationMode;
use crate::keywords::{DEFAULT_KEYWORDS, OverlapPolicy};
use crate::types::PageRange;
use crate::{ClausemarkError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name searched for by [`PipelineConfig::discover`].
pub const CONFIG_FILE_NAME: &str = "clausemark.toml";

/// Main pipeline configuration.
///
/// # Example
///
/// ```rust
/// use clausemark::core::config::PipelineConfig;
/// use clausemark::clauses::SegmentationMode;
///
/// let mut config = PipelineConfig::default();
/// config.segmentation.mode = SegmentationMode::Line;
/// assert_eq!(config.segmentation.min_chars, 30);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Text cleaning applied to the extracted document before segmentation
    #[serde(default)]
    pub cleaning: CleaningConfig,

    /// Clause segmentation policy
    #[serde(default)]
    pub segmentation: SegmentationConfig,

    /// Keyword span finding and rendering
    #[serde(default)]
    pub highlight: HighlightConfig,

    /// PDF-specific options
    #[serde(default)]
    pub pdf: PdfConfig,
}

/// Text cleaning switches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningConfig {
    /// Fold to lowercase
    #[serde(default = "default_true")]
    pub lowercase: bool,

    /// Drop every non-ASCII code point (no transliteration)
    #[serde(default = "default_true")]
    pub remove_non_ascii: bool,

    /// Drop ASCII punctuation
    #[serde(default)]
    pub remove_punctuation: bool,

    /// Collapse whitespace runs and trim
    #[serde(default = "default_true")]
    pub collapse_whitespace: bool,

    /// When collapsing, keep line breaks and reduce blank-line runs to a single
    /// blank line instead of folding everything onto one line
    #[serde(default = "default_true")]
    pub preserve_line_breaks: bool,
}

/// Clause segmentation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentationConfig {
    #[serde(default)]
    pub mode: SegmentationMode,

    /// A fragment is kept only when its trimmed length exceeds this many characters
    #[serde(default = "default_min_chars")]
    pub min_chars: usize,
}

/// Keyword highlighting configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightConfig {
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,

    #[serde(default = "default_true")]
    pub case_insensitive: bool,

    #[serde(default)]
    pub overlap_policy: OverlapPolicy,

    /// HTML tag wrapped around each match
    #[serde(default = "default_tag")]
    pub tag: String,

    /// Extra attributes placed inside the opening tag, e.g. `class="kw"`
    #[serde(default)]
    pub extra_attrs: String,

    /// Characters of context on each side of a snippet
    #[serde(default = "default_snippet_window")]
    pub snippet_window: usize,
}

/// PDF-specific configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdfConfig {
    /// Pages to read, 1-indexed and inclusive (None = all pages)
    #[serde(default)]
    pub page_range: Option<PageRange>,
}

fn default_true() -> bool {
    true
}
fn default_min_chars() -> usize {
    30
}
fn default_keywords() -> Vec<String> {
    DEFAULT_KEYWORDS.iter().map(|kw| kw.to_string()).collect()
}
fn default_tag() -> String {
    "mark".to_string()
}
fn default_snippet_window() -> usize {
    40
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            remove_non_ascii: true,
            remove_punctuation: false,
            collapse_whitespace: true,
            preserve_line_breaks: true,
        }
    }
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            mode: SegmentationMode::default(),
            min_chars: default_min_chars(),
        }
    }
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            keywords: default_keywords(),
            case_insensitive: true,
            overlap_policy: OverlapPolicy::default(),
            tag: default_tag(),
            extra_attrs: String::new(),
            snippet_window: default_snippet_window(),
        }
    }
}

impl PipelineConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `ClausemarkError::Validation` if the file can't be read, is
    /// invalid TOML, or fails [`PipelineConfig::validate`].
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = read_config(path.as_ref())?;
        let config: Self = toml::from_str(&content).map_err(|e| {
            ClausemarkError::validation(format!("Invalid TOML in {}: {}", path.as_ref().display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = read_config(path.as_ref())?;
        let config: Self = serde_yaml_ng::from_str(&content).map_err(|e| {
            ClausemarkError::validation(format!("Invalid YAML in {}: {}", path.as_ref().display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = read_config(path.as_ref())?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            ClausemarkError::validation(format!("Invalid JSON in {}: {}", path.as_ref().display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration, choosing the parser from the file extension
    /// (`.toml`, `.yaml`/`.yml`, `.json`).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "toml" => Self::from_toml_file(path),
            "yaml" | "yml" => Self::from_yaml_file(path),
            "json" => Self::from_json_file(path),
            other => Err(ClausemarkError::validation(format!(
                "Unsupported config format '{}' for {}",
                other,
                path.display()
            ))),
        }
    }

    /// Discover configuration file in parent directories.
    ///
    /// Searches for `clausemark.toml` in the current directory and its parents.
    ///
    /// # Returns
    ///
    /// - `Some(config)` if found
    /// - `None` if no config file found
    pub fn discover() -> Result<Option<Self>> {
        let mut current = std::env::current_dir().map_err(ClausemarkError::Io)?;

        loop {
            let candidate = current.join(CONFIG_FILE_NAME);
            if candidate.exists() {
                tracing::debug!("Using configuration from {}", candidate.display());
                return Ok(Some(Self::from_toml_file(candidate)?));
            }

            if let Some(parent) = current.parent() {
                current = parent.to_path_buf();
            } else {
                break;
            }
        }

        Ok(None)
    }

    /// Check invariants serde can't express.
    pub fn validate(&self) -> Result<()> {
        if let Some(range) = self.pdf.page_range {
            if range.start < 1 {
                return Err(ClausemarkError::validation(format!(
                    "PDF page range start must be >= 1, got {}",
                    range.start
                )));
            }
            if range.start > range.end {
                return Err(ClausemarkError::validation(format!(
                    "PDF page range start ({}) must not exceed end ({})",
                    range.start, range.end
                )));
            }
        }

        let tag = &self.highlight.tag;
        if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ClausemarkError::validation(format!(
                "Highlight tag must be a non-empty ASCII alphanumeric name, got '{}'",
                tag
            )));
        }

        Ok(())
    }
}

fn read_config(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| ClausemarkError::validation(format!("Failed to read config file {}: {}", path.display(), e)))
}
