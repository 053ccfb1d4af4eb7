//! PDF merging operations.
//!
//! This module provides the merge orchestrator and the pieces it assembles
//! the output from:
//! - Page tree concatenation
//! - Outline import
//! - Document information
//!
//! # Examples
//!
//! ```no_run
//! use pdfmerge::merge::{Merger, Metadata};
//! use std::path::{Path, PathBuf};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let inputs = vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")];
//! let metadata = Metadata::new(Some("Quarterly report".into()), None);
//!
//! let report = Merger::new().merge(&inputs, &metadata, Path::new("merged.pdf"))?;
//! println!("Merged {} pages", report.total_pages);
//! # Ok(())
//! # }
//! ```

pub mod merger;
pub mod metadata;
pub mod outlines;
pub mod pages;

pub use merger::{MergeReport, Merger};
pub use metadata::{DocumentInfo, Metadata, PRODUCER, read_info};
pub use outlines::{OutlineBuilder, SourceOutline};
pub use pages::{PageTreeBuilder, PageTreeRoot};

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Merge `inputs` into `output` with a default [`Merger`].
///
/// # Errors
///
/// See [`Merger::merge`].
pub fn merge_pdfs(inputs: &[PathBuf], metadata: &Metadata, output: &Path) -> Result<MergeReport> {
    Merger::new().merge(inputs, metadata, output)
}
