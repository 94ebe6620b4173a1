//! DOCX extraction integration tests.

#![cfg(feature = "office")]

use clausemark::{ClausemarkError, PipelineConfig, SegmentationMode, extract_clauses, extract_text};
use tempfile::tempdir;

mod helpers;
use helpers::{build_docx, write_fixture};

#[test]
fn test_paragraphs_one_per_line() {
    let dir = tempdir().unwrap();
    let path = write_fixture(
        dir.path(),
        "contract.docx",
        &build_docx(&["Master Services Agreement", "   ", "1. Scope of work.", "2. Payment terms."]),
    );

    let text = extract_text(&path, None).unwrap();
    assert_eq!(text, "Master Services Agreement\n1. Scope of work.\n2. Payment terms.");
}

#[test]
fn test_line_mode_segments_docx_paragraphs() {
    let dir = tempdir().unwrap();
    let path = write_fixture(
        dir.path(),
        "contract.docx",
        &build_docx(&[
            "Confidential information must not be disclosed to third parties.",
            "Short heading",
            "Either party may terminate with ninety days written notice.",
        ]),
    );

    let mut config = PipelineConfig::default();
    config.segmentation.mode = SegmentationMode::Line;

    let clauses = extract_clauses(&path, &config).unwrap();
    let texts: Vec<&str> = clauses.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "confidential information must not be disclosed to third parties.",
            "either party may terminate with ninety days written notice.",
        ]
    );
    assert_eq!(clauses[1].id, "2");
}

#[test]
fn test_page_range_is_ignored_for_docx() {
    let dir = tempdir().unwrap();
    let path = write_fixture(dir.path(), "memo.docx", &build_docx(&["Only paragraph."]));

    let text = extract_text(&path, Some(clausemark::PageRange::new(5, 9))).unwrap();
    assert_eq!(text, "Only paragraph.");
}

#[test]
fn test_corrupt_docx_fails() {
    let dir = tempdir().unwrap();
    let path = write_fixture(dir.path(), "broken.docx", b"PK\x03\x04 truncated archive");

    let err = extract_text(&path, None).unwrap_err();
    assert!(matches!(err, ClausemarkError::ExtractionFailed { .. }));
    assert!(std::error::Error::source(&err).is_some(), "zip error should be preserved as source");
}
