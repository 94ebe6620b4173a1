//! Clausemark CLI
//!
//! Turns a document into clauses, highlighted text, or an LLM context block.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use clausemark::core::config::PipelineConfig;
use clausemark::highlight::{extract_snippets_with, highlight_html_with, highlight_markdown_with, snippets_to_json};
use clausemark::{
    PageRange, SegmentationMode, build_context, clauses_to_json, extract_clauses, extract_cleaned_text,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "clausemark", version)]
#[command(about = "Extract clauses from PDF, DOCX, EML and MSG documents and highlight keywords", long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the clause sequence of a document
    Extract {
        #[command(flatten)]
        document: DocumentArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,
    },

    /// Print the cleaned document text with keywords marked, or keyword snippets
    Highlight {
        #[command(flatten)]
        document: DocumentArgs,

        /// Keyword to mark (repeatable, replaces the configured list)
        #[arg(short, long = "keyword")]
        keywords: Vec<String>,

        /// Rendering style
        #[arg(short, long, value_enum, default_value = "html")]
        style: HighlightStyle,

        /// Characters of context on each side of a snippet
        #[arg(short, long)]
        window: Option<usize>,
    },

    /// Print clause texts joined by blank lines
    Context {
        #[command(flatten)]
        document: DocumentArgs,
    },
}

#[derive(Args)]
struct DocumentArgs {
    /// Document to read (.pdf, .docx, .eml, .msg)
    file: PathBuf,

    /// PDF pages to read, 1-indexed and inclusive (e.g. 2-5 or 3)
    #[arg(short, long, value_parser = parse_page_range)]
    pages: Option<PageRange>,

    /// Clause segmentation mode
    #[arg(short, long, value_enum)]
    mode: Option<CliMode>,

    /// Configuration file (.toml, .yaml, .yml, .json)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliMode {
    /// Split on blank lines
    Paragraph,
    /// Split on every line
    Line,
}

impl From<CliMode> for SegmentationMode {
    fn from(mode: CliMode) -> Self {
        match mode {
            CliMode::Paragraph => SegmentationMode::Paragraph,
            CliMode::Line => SegmentationMode::Line,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// JSON array of {id, text, confidence}
    Json,
    /// One block per clause
    Text,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HighlightStyle {
    Html,
    Markdown,
    /// JSON array of snippet records
    Snippets,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Extract { document, format } => {
            let config = load_config(&document)?;
            let clauses = extract_clauses(&document.file, &config)
                .with_context(|| format!("Failed to extract clauses from {}", document.file.display()))?;

            match format {
                OutputFormat::Json => println!("{}", clauses_to_json(&clauses)?),
                OutputFormat::Text => {
                    let blocks: Vec<String> = clauses
                        .iter()
                        .map(|clause| format!("[{}] {}", clause.id, clause.text))
                        .collect();
                    println!("{}", blocks.join("\n\n"));
                }
            }
        }

        Commands::Highlight {
            document,
            keywords,
            style,
            window,
        } => {
            let mut config = load_config(&document)?;
            if !keywords.is_empty() {
                config.highlight.keywords = keywords;
            }
            if let Some(window) = window {
                config.highlight.snippet_window = window;
            }

            let text = extract_cleaned_text(&document.file, &config)
                .with_context(|| format!("Failed to extract text from {}", document.file.display()))?;

            match style {
                HighlightStyle::Html => println!("{}", highlight_html_with(&text, &config.highlight)),
                HighlightStyle::Markdown => println!("{}", highlight_markdown_with(&text, &config.highlight)),
                HighlightStyle::Snippets => {
                    let snippets = extract_snippets_with(&text, &config.highlight);
                    tracing::debug!(snippet_count = snippets.len(), "Extracted snippets");
                    println!("{}", snippets_to_json(&snippets)?);
                }
            }
        }

        Commands::Context { document } => {
            let config = load_config(&document)?;
            let clauses = extract_clauses(&document.file, &config)
                .with_context(|| format!("Failed to extract clauses from {}", document.file.display()))?;
            println!("{}", build_context(&clauses));
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Explicit `--config`, then a discovered `clausemark.toml`, then defaults.
/// Command-line flags override whatever was loaded.
fn load_config(args: &DocumentArgs) -> Result<PipelineConfig> {
    let mut config = match &args.config {
        Some(path) => {
            tracing::debug!("Using configuration from {}", path.display());
            load_config_file(path)?
        }
        None => PipelineConfig::discover()
            .context("Failed to discover clausemark.toml")?
            .unwrap_or_else(|| {
                tracing::debug!("No clausemark.toml found, using defaults");
                PipelineConfig::default()
            }),
    };

    if let Some(pages) = args.pages {
        config.pdf.page_range = Some(pages);
    }
    if let Some(mode) = args.mode {
        config.segmentation.mode = mode.into();
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn load_config_file(path: &Path) -> Result<PipelineConfig> {
    PipelineConfig::from_file(path).with_context(|| format!("Failed to load config from {}", path.display()))
}

fn parse_page_range(value: &str) -> std::result::Result<PageRange, String> {
    let parse = |part: &str| {
        part.trim()
            .parse::<u32>()
            .map_err(|_| format!("'{}' is not a page number", part.trim()))
    };

    match value.split_once('-') {
        Some((start, end)) => Ok(PageRange::new(parse(start)?, parse(end)?)),
        None => {
            let page = parse(value)?;
            Ok(PageRange::new(page, page))
        }
    }
}
