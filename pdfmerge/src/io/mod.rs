//! I/O operations for pdfmerge.
//!
//! This module handles all file I/O of a merge:
//! - Loading source documents from disk
//! - Writing the merged document atomically
//!
//! # Examples
//!
//! ```no_run
//! use pdfmerge::io::{PdfReader, PdfWriter};
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut loaded = PdfReader::new().load(Path::new("input.pdf"))?;
//! PdfWriter::new().write(&mut loaded.document, Path::new("copy.pdf"))?;
//! # Ok(())
//! # }
//! ```

pub mod reader;
pub mod writer;

pub use reader::{LoadedPdf, PdfReader, SourceSummary};
pub use writer::PdfWriter;
