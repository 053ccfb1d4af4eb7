//! Integration tests for the Info dictionary of merged files.

use lopdf::{Document, Object, dictionary};
use pdfmerge::merge::{Metadata, PRODUCER, merge_pdfs, read_info};
use rstest::rstest;
use tempfile::TempDir;

use crate::common::write_pdf;

#[rstest]
#[case(None, None)]
#[case(Some(""), Some(""))]
#[case(Some("  "), Some("\t"))]
fn test_blank_metadata_only_sets_producer(
    #[case] title: Option<&str>,
    #[case] author: Option<&str>,
) {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(dir.path(), "a.pdf", 1, 1, &[]);
    let output = dir.path().join("out.pdf");

    let metadata = Metadata::new(title.map(String::from), author.map(String::from));
    merge_pdfs(&[a], &metadata, &output).unwrap();

    let info = read_info(&Document::load(&output).unwrap());
    assert_eq!(info.keys, ["Producer"]);
    assert_eq!(info.producer.as_deref(), Some(PRODUCER));
}

#[test]
fn test_title_and_author_are_written() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(dir.path(), "a.pdf", 1, 1, &[]);
    let output = dir.path().join("out.pdf");

    let metadata = Metadata::new(Some("Report".into()), Some("Sarah".into()));
    merge_pdfs(&[a], &metadata, &output).unwrap();

    let info = read_info(&Document::load(&output).unwrap());
    assert_eq!(info.title.as_deref(), Some("Report"));
    assert_eq!(info.author.as_deref(), Some("Sarah"));
    assert_eq!(info.producer.as_deref(), Some(PRODUCER));
    assert_eq!(info.keys.len(), 3);
}

#[test]
fn test_non_ascii_title_round_trips() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(dir.path(), "a.pdf", 1, 1, &[]);
    let output = dir.path().join("out.pdf");

    let metadata = Metadata::new(Some("Jahresbericht Zürich".into()), None);
    merge_pdfs(&[a], &metadata, &output).unwrap();

    let info = read_info(&Document::load(&output).unwrap());
    assert_eq!(info.title.as_deref(), Some("Jahresbericht Zürich"));
}

#[test]
fn test_source_info_is_not_inherited() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(dir.path(), "a.pdf", 1, 1, &[]);

    let mut source = Document::load(&a).unwrap();
    let info_id = source.add_object(dictionary! {
        "Title" => Object::string_literal("Old title"),
        "Author" => Object::string_literal("Old author"),
        "Subject" => Object::string_literal("Old subject"),
    });
    source.trailer.set("Info", info_id);
    source.save(&a).unwrap();

    let output = dir.path().join("out.pdf");
    merge_pdfs(&[a], &Metadata::default(), &output).unwrap();

    let info = read_info(&Document::load(&output).unwrap());
    assert_eq!(info.keys, ["Producer"]);
}
