//! Atomic PDF writing.
//!
//! The document is serialized into a temporary file next to the output and
//! renamed over it only once everything has been flushed. On any failure
//! the temporary file is removed and an existing output is left as it was.

use lopdf::Document;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{MergeError, Result};

/// Writer that persists documents atomically.
#[derive(Debug, Clone)]
pub struct PdfWriter {
    /// Buffer size for writing (in bytes).
    buffer_size: usize,
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self { buffer_size: 8192 }
    }
}

impl PdfWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write `doc` to `path`, returning the size of the written file.
    ///
    /// # Errors
    ///
    /// Returns `UnexpectedError` if the path is empty, the directory is not
    /// writable, serialization fails, or the final rename fails.
    pub fn write(&self, doc: &mut Document, path: &Path) -> Result<u64> {
        if path.as_os_str().is_empty() {
            return Err(MergeError::unexpected("No output file selected"));
        }

        let dir = staging_dir(path);
        let mut staged = tempfile::Builder::new()
            .prefix(".pdfmerge-")
            .suffix(".tmp")
            .tempfile_in(&dir)
            .map_err(|err| {
                MergeError::io(format!("Cannot create a file in {}", dir.display()), err)
            })?;

        {
            let mut writer = BufWriter::with_capacity(self.buffer_size, staged.as_file_mut());
            doc.save_to(&mut writer).map_err(|err| {
                MergeError::unexpected(format!("Failed to serialize merged PDF: {err}"))
            })?;
            writer
                .flush()
                .map_err(|err| MergeError::io("Failed to flush merged PDF", err))?;
        }

        staged
            .as_file()
            .sync_all()
            .map_err(|err| MergeError::io("Failed to sync merged PDF", err))?;

        let file = staged.persist(path).map_err(|err| {
            MergeError::io(format!("Failed to write {}", path.display()), err.error)
        })?;
        let size = file
            .metadata()
            .map_err(|err| MergeError::io(format!("Cannot stat {}", path.display()), err))?
            .len();

        tracing::debug!(path = %path.display(), size, "persisted merged document");
        Ok(size)
    }
}

/// Directory that receives the temporary file: the output's own
/// directory, so the final rename never crosses filesystems.
fn staging_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
