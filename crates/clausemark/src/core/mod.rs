//! Core orchestration: formats, configuration and the extraction pipeline.
//!
//! - **Formats** (`formats`): the supported document formats and their
//!   extension and MIME mappings
//! - **Configuration** (`config`): `PipelineConfig`, loaded from TOML, YAML or
//!   JSON, or discovered as `clausemark.toml`
//! - **Pipeline** (`pipeline`): file to clauses, and clauses to context

pub mod config;
pub mod formats;
pub mod pipeline;

pub use config::{CleaningConfig, HighlightConfig, PdfConfig, PipelineConfig, SegmentationConfig};
pub use formats::DocumentFormat;
pub use pipeline::{
    build_context, clauses_from_text, clauses_to_json, clean_document_text, extract_clauses, extract_cleaned_text,
    extract_document, extract_text,
};
