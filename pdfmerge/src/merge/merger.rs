//! Core PDF merging implementation.
//!
//! Sources are loaded in list order, appended to a fresh document one after
//! another and written out atomically. Nothing reaches the output path
//! unless every source loaded and the merged document serialized.

use lopdf::{Document, Object, dictionary};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::error::{MergeError, Result};
use crate::io::{LoadedPdf, PdfReader, PdfWriter, SourceSummary};
use crate::merge::metadata::{Metadata, write_info};
use crate::merge::outlines::{OutlineBuilder, SourceOutline};
use crate::merge::pages::{PageTreeBuilder, page_tree_root};

/// Summary of a successful merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeReport {
    /// Path the merged document was written to.
    pub output: PathBuf,

    /// Every source, in merge order.
    pub sources: Vec<SourceSummary>,

    /// Number of pages in the merged document.
    pub total_pages: usize,

    /// Outline items carried over from the sources, at every level.
    pub outline_entries: usize,

    /// Metadata written to the Info dictionary.
    pub metadata: Metadata,

    /// Size of the written file.
    pub bytes_written: u64,
}

impl MergeReport {
    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Merged document before it is written.
struct Assembled {
    document: Document,
    outline_entries: usize,
}

/// PDF merger that combines multiple documents.
#[derive(Debug, Clone)]
pub struct Merger {
    /// Reader for loading PDFs.
    reader: PdfReader,

    /// Writer for the merged output.
    writer: PdfWriter,

    /// Carry source outlines into the output.
    import_outlines: bool,

    /// Compress streams before writing.
    compress: bool,
}

impl Merger {
    /// Create a merger that imports outlines and compresses the output.
    pub fn new() -> Self {
        Self {
            reader: PdfReader::new(),
            writer: PdfWriter::new(),
            import_outlines: true,
            compress: true,
        }
    }

    /// Leave source outlines behind.
    pub fn without_outlines(mut self) -> Self {
        self.import_outlines = false;
        self
    }

    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Merge `inputs`, in order, into `output`.
    ///
    /// # Errors
    ///
    /// - `EmptyInput` if `inputs` is empty; the filesystem is not touched
    /// - `UnreadableSource` for the first input that is not a usable PDF
    /// - `UnexpectedError` for any other failure, including a missing input
    ///   and a failed write
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use pdfmerge::merge::{Merger, Metadata};
    /// # use std::path::{Path, PathBuf};
    /// # fn example() -> Result<(), pdfmerge::MergeError> {
    /// let inputs = [PathBuf::from("a.pdf"), PathBuf::from("b.pdf")];
    /// let metadata = Metadata::new(Some("Report".into()), None);
    /// let report = Merger::new().merge(&inputs, &metadata, Path::new("out.pdf"))?;
    /// println!("{} pages", report.total_pages);
    /// # Ok(())
    /// # }
    /// ```
    pub fn merge(
        &self,
        inputs: &[PathBuf],
        metadata: &Metadata,
        output: &Path,
    ) -> Result<MergeReport> {
        if inputs.is_empty() {
            return Err(MergeError::EmptyInput);
        }
        if output.as_os_str().is_empty() {
            return Err(MergeError::unexpected("No output file selected"));
        }

        let started = Instant::now();
        let sources = self.reader.load_all(inputs)?;
        let summaries: Vec<SourceSummary> = sources.iter().map(LoadedPdf::summary).collect();

        let Assembled {
            mut document,
            outline_entries,
        } = self.assemble(sources)?;

        write_info(&mut document, metadata);
        document.prune_objects();
        document.renumber_objects();
        if self.compress {
            document.compress();
        }

        let total_pages = document.get_pages().len();
        let bytes_written = self.writer.write(&mut document, output)?;

        tracing::info!(
            output = %output.display(),
            sources = summaries.len(),
            total_pages,
            outline_entries,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "merge complete"
        );

        Ok(MergeReport {
            output: output.to_path_buf(),
            sources: summaries,
            total_pages,
            outline_entries,
            metadata: metadata.clone(),
            bytes_written,
        })
    }

    /// Append every source to a fresh document, in order.
    fn assemble(&self, sources: Vec<LoadedPdf>) -> Result<Assembled> {
        let version = sources
            .iter()
            .map(|source| source.document.version.as_str())
            .max()
            .unwrap_or("1.5")
            .to_string();

        let mut merged = Document::with_version(version);
        let mut pages = PageTreeBuilder::new();
        let mut outlines = OutlineBuilder::new();

        for source in sources {
            let mut document = source.document;

            // Renumber objects to avoid ID conflicts
            document.renumber_objects_with(merged.max_id + 1);
            let root = page_tree_root(&document)?;

            if self.import_outlines {
                let outline = SourceOutline::read(&mut document);
                if !outline.is_empty() {
                    tracing::debug!(
                        path = %source.path.display(),
                        entries = outline.entries,
                        "importing outline"
                    );
                }
                outlines.push(outline);
            }

            if let Some(&(last_id, _)) = document.objects.keys().next_back() {
                merged.max_id = merged.max_id.max(last_id);
            }
            merged.objects.extend(document.objects);
            pages.push(root);
        }

        let outline_entries = outlines.entries();
        let pages_id = pages.attach(&mut merged)?;
        let outline_id = outlines.attach(&mut merged)?;

        let mut catalog = dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        };
        if let Some(outline_id) = outline_id {
            catalog.set("Outlines", Object::Reference(outline_id));
            catalog.set("PageMode", Object::Name(b"UseOutlines".to_vec()));
        }
        let catalog_id = merged.add_object(catalog);
        merged.trailer.set("Root", Object::Reference(catalog_id));

        Ok(Assembled {
            document: merged,
            outline_entries,
        })
    }
}

impl Default for Merger {
    fn default() -> Self {
        Self::new()
    }
}
