//! Integration tests driving a session through its text commands.

use pdfmerge::collect::FileFilter;
use pdfmerge::opener::NoopOpener;
use pdfmerge::session::{Action, Outcome, Session};
use std::path::Path;
use tempfile::TempDir;

use crate::common::{page_widths, width, write_pdf};

fn session() -> Session {
    Session::new(FileFilter::Pdf).unwrap().with_opener(NoopOpener)
}

fn run(session: &mut Session, line: &str) -> Outcome {
    let action = Action::parse(line).unwrap().unwrap();
    session.dispatch(action).unwrap()
}

fn quoted(path: &Path) -> String {
    format!("\"{}\"", path.display())
}

#[test]
fn test_removed_file_is_excluded_from_next_merge() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(dir.path(), "a.pdf", 1, 1, &[]);
    let b = write_pdf(dir.path(), "b.pdf", 2, 1, &[]);
    let output = dir.path().join("out.pdf");

    let mut session = session();
    run(&mut session, &format!("add {} {}", quoted(&a), quoted(&b)));
    run(&mut session, "remove 1");
    run(&mut session, &format!("merge {}", quoted(&output)));

    assert_eq!(page_widths(&output), [width(2, 1)]);
}

#[test]
fn test_list_is_unchanged_by_merge() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(dir.path(), "a.pdf", 1, 1, &[]);
    let b = write_pdf(dir.path(), "b.pdf", 2, 1, &[]);
    let output = dir.path().join("out.pdf");

    let mut session = session();
    run(&mut session, &format!("add {} {}", quoted(&a), quoted(&b)));
    let before = session.files().clone();
    run(&mut session, &format!("merge {}", quoted(&output)));

    assert_eq!(session.files(), &before);
    // A second merge sees the same list.
    run(&mut session, &format!("merge {}", quoted(&output)));
    assert_eq!(page_widths(&output), [width(1, 1), width(2, 1)]);
}

#[test]
fn test_directory_add_and_move() {
    let dir = TempDir::new().unwrap();
    let chapters = dir.path().join("chapters");
    std::fs::create_dir(&chapters).unwrap();
    write_pdf(&chapters, "01.pdf", 1, 1, &[]);
    write_pdf(&chapters, "02.pdf", 2, 1, &[]);
    write_pdf(&chapters, "03.pdf", 3, 1, &[]);
    std::fs::write(chapters.join("notes.txt"), b"skip me").unwrap();
    let output = dir.path().join("book.pdf");

    let mut session = session();
    assert_eq!(
        run(&mut session, &format!("add {}", quoted(&chapters))),
        Outcome::Added { added: 3, total: 3 }
    );
    run(&mut session, "move 3 1");
    run(&mut session, "title Book");
    let outcome = run(&mut session, &format!("merge {}", quoted(&output)));

    let Outcome::Merged { report, .. } = outcome else {
        panic!("expected a merge, got {outcome:?}");
    };
    assert_eq!(report.metadata.title.as_deref(), Some("Book"));
    assert_eq!(page_widths(&output), [width(3, 1), width(1, 1), width(2, 1)]);
}
