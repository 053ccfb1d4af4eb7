//! Integration tests for error handling and edge cases.

use pdfmerge::MergeError;
use pdfmerge::merge::{Metadata, merge_pdfs};
use std::path::PathBuf;
use tempfile::TempDir;

use crate::common::write_pdf;

#[test]
fn test_empty_input_touches_nothing() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("missing-dir").join("out.pdf");

    let err = merge_pdfs(&[], &Metadata::default(), &output).unwrap_err();

    assert!(matches!(err, MergeError::EmptyInput));
    assert_eq!(err.exit_code(), 1);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_unreadable_source_leaves_no_output() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(dir.path(), "a.pdf", 1, 1, &[]);
    let bad = dir.path().join("bad.pdf");
    std::fs::write(&bad, b"%PDF-1.4\nthis is not really a pdf").unwrap();
    let b = write_pdf(dir.path(), "b.pdf", 2, 1, &[]);
    let output = dir.path().join("out.pdf");

    let err = merge_pdfs(&[a, bad.clone(), b], &Metadata::default(), &output).unwrap_err();

    match err {
        MergeError::UnreadableSource { ref path, .. } => assert_eq!(path, &bad),
        ref other => panic!("expected UnreadableSource, got {other:?}"),
    }
    assert_eq!(err.user_message(), "Could not read files.");
    assert!(!output.exists());
}

#[test]
fn test_unreadable_source_keeps_existing_output() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("bad.pdf");
    std::fs::write(&bad, b"garbage").unwrap();
    let output = dir.path().join("out.pdf");
    std::fs::write(&output, b"previous result").unwrap();

    assert!(merge_pdfs(&[bad], &Metadata::default(), &output).is_err());

    assert_eq!(std::fs::read(&output).unwrap(), b"previous result");
}

#[test]
fn test_missing_source_is_unexpected() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(dir.path(), "a.pdf", 1, 1, &[]);
    let missing = dir.path().join("missing.pdf");
    let output = dir.path().join("out.pdf");

    let err = merge_pdfs(&[a, missing], &Metadata::default(), &output).unwrap_err();

    assert!(matches!(err, MergeError::UnexpectedError { .. }));
    assert_eq!(err.exit_code(), 5);
    assert!(!output.exists());
}

#[test]
fn test_unwritable_output_is_unexpected() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(dir.path(), "a.pdf", 1, 1, &[]);
    let output = dir.path().join("no-such-dir").join("out.pdf");

    let err = merge_pdfs(&[a], &Metadata::default(), &output).unwrap_err();

    assert!(matches!(err, MergeError::UnexpectedError { .. }));
    assert!(!output.exists());
}

#[test]
fn test_source_without_pages_is_unreadable() {
    let dir = TempDir::new().unwrap();
    let empty = write_pdf(dir.path(), "empty.pdf", 1, 0, &[]);
    let output = dir.path().join("out.pdf");

    let err = merge_pdfs(&[empty], &Metadata::default(), &output).unwrap_err();
    assert!(matches!(err, MergeError::UnreadableSource { .. }));
}

#[test]
fn test_directory_as_source_is_unexpected() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.pdf");

    let err = merge_pdfs(&[PathBuf::from(dir.path())], &Metadata::default(), &output).unwrap_err();
    assert!(matches!(err, MergeError::UnexpectedError { .. }));
}
