//! Integration tests for outline import.

use pdfmerge::Metadata;
use pdfmerge::merge::{Merger, merge_pdfs};
use tempfile::TempDir;

use crate::common::{bookmark_targets, bookmarks, width, write_pdf};

#[test]
fn test_outlines_are_concatenated_in_merge_order() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(dir.path(), "a.pdf", 1, 2, &["A: intro", "A: body"]);
    let b = write_pdf(dir.path(), "b.pdf", 2, 1, &[]);
    let c = write_pdf(dir.path(), "c.pdf", 3, 2, &["C: appendix"]);
    let output = dir.path().join("out.pdf");

    let report = merge_pdfs(&[c, a, b], &Metadata::default(), &output).unwrap();

    assert_eq!(report.outline_entries, 3);
    assert_eq!(
        bookmarks(&output),
        [
            ("C: appendix".to_string(), width(3, 1)),
            ("A: intro".to_string(), width(1, 1)),
            ("A: body".to_string(), width(1, 2)),
        ]
    );
}

#[test]
fn test_duplicate_source_keeps_separate_targets() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(dir.path(), "a.pdf", 1, 1, &["A"]);
    let output = dir.path().join("out.pdf");

    merge_pdfs(&[a.clone(), a], &Metadata::default(), &output).unwrap();

    let (pages, targets) = bookmark_targets(&output);
    assert_eq!(pages.len(), 2);
    assert_ne!(pages[0], pages[1]);
    // Each copy of the bookmark points at its own copy of the page.
    assert_eq!(targets, pages);
}

#[test]
fn test_no_outline_when_sources_have_none() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(dir.path(), "a.pdf", 1, 1, &[]);
    let b = write_pdf(dir.path(), "b.pdf", 2, 1, &[]);
    let output = dir.path().join("out.pdf");

    let report = merge_pdfs(&[a, b], &Metadata::default(), &output).unwrap();

    assert_eq!(report.outline_entries, 0);
    assert!(bookmarks(&output).is_empty());
}

#[test]
fn test_outline_import_can_be_disabled() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(dir.path(), "a.pdf", 1, 1, &["A"]);
    let output = dir.path().join("out.pdf");

    Merger::new()
        .without_outlines()
        .merge(&[a], &Metadata::default(), &output)
        .unwrap();

    assert!(bookmarks(&output).is_empty());
}
