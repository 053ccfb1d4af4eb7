//! Loading of merge sources.
//!
//! Each source is read into memory in one call, so its file handle is
//! closed before parsing starts. Failures are classified for the merge:
//! the file could not be read at all (`UnexpectedError`), or it was read
//! but is not a usable PDF (`UnreadableSource`).

use lopdf::Document;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::{MergeError, Result};

/// A parsed source document.
#[derive(Debug)]
pub struct LoadedPdf {
    /// The PDF document.
    pub document: Document,

    /// Path to the source file.
    pub path: PathBuf,

    /// Number of pages in the document.
    pub page_count: usize,

    /// File size in bytes.
    pub file_size: u64,
}

impl LoadedPdf {
    pub fn summary(&self) -> SourceSummary {
        SourceSummary {
            path: self.path.clone(),
            page_count: self.page_count,
            file_size: self.file_size,
        }
    }
}

/// Per-source line of a merge report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceSummary {
    pub path: PathBuf,
    pub page_count: usize,
    pub file_size: u64,
}

/// Reader for merge sources.
#[derive(Debug, Clone, Default)]
pub struct PdfReader;

impl PdfReader {
    pub fn new() -> Self {
        Self
    }

    /// Load a single PDF document.
    ///
    /// # Errors
    ///
    /// - `UnexpectedError` if the file cannot be read (missing, permissions)
    /// - `UnreadableSource` if the bytes do not parse as a PDF, the document
    ///   is encrypted, or it has no pages
    pub fn load(&self, path: &Path) -> Result<LoadedPdf> {
        let bytes = std::fs::read(path)
            .map_err(|err| MergeError::io(format!("Cannot open {}", path.display()), err))?;

        let document =
            Document::load_mem(&bytes).map_err(|err| MergeError::unreadable(path, err.to_string()))?;

        if document.trailer.has(b"Encrypt") {
            return Err(MergeError::unreadable(path, "PDF is encrypted"));
        }

        let page_count = document.get_pages().len();
        if page_count == 0 {
            return Err(MergeError::unreadable(path, "PDF has no pages"));
        }

        tracing::debug!(path = %path.display(), page_count, bytes = bytes.len(), "loaded source");

        Ok(LoadedPdf {
            document,
            path: path.to_path_buf(),
            page_count,
            file_size: bytes.len() as u64,
        })
    }

    /// Load documents in order, stopping at the first failure.
    pub fn load_all(&self, paths: &[PathBuf]) -> Result<Vec<LoadedPdf>> {
        paths.iter().map(|path| self.load(path)).collect()
    }
}
