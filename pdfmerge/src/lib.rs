//! pdfmerge - Merge PDF files into a single document.
//!
//! The library keeps an ordered list of input files, expands patterns and
//! directories into that list, and merges it into one PDF with:
//!
//! - Pages in list order
//! - Source outlines carried over under one root
//! - A fresh Info dictionary with optional title and author
//! - Atomic writes (the output only appears once it is complete)
//!
//! # Examples
//!
//! ## Basic Merge
//!
//! ```no_run
//! use pdfmerge::merge::{self, Metadata};
//! use std::path::{Path, PathBuf};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let inputs = vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")];
//! let metadata = Metadata::new(Some("Report".into()), Some("Sarah".into()));
//!
//! let report = merge::merge_pdfs(&inputs, &metadata, Path::new("merged.pdf"))?;
//! println!("Created {} page document", report.total_pages);
//! # Ok(())
//! # }
//! ```
//!
//! ## Driving a Session
//!
//! ```no_run
//! use pdfmerge::collect::FileFilter;
//! use pdfmerge::opener::NoopOpener;
//! use pdfmerge::session::{Action, Session};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = Session::new(FileFilter::Pdf)?.with_opener(NoopOpener);
//! for line in ["add scans/", "move 3 1", "title Scans", "merge scans.pdf"] {
//!     if let Some(action) = Action::parse(line)? {
//!         session.dispatch(action)?;
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all)]

pub mod collect;
pub mod error;
pub mod io;
pub mod list;
pub mod merge;
pub mod opener;
pub mod output;
pub mod session;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use error::{MergeError, Result};
pub use list::InputFileList;
pub use merge::{MergeReport, Merger, Metadata};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
