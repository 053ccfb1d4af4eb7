//! Dispatch of user actions against a single file list.
//!
//! A [`Session`] owns the ordered file list and the current metadata. Every
//! front end (one-shot or interactive) turns user input into [`Action`]s
//! and hands them to [`Session::dispatch`].
//!
//! # Examples
//!
//! ```no_run
//! use pdfmerge::collect::FileFilter;
//! use pdfmerge::session::{Action, Outcome, Session};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = Session::new(FileFilter::Pdf)?;
//! session.dispatch(Action::Add(vec!["chapters/*.pdf".into()]))?;
//! if let Outcome::Merged { report, .. } = session.dispatch(Action::Merge(Some("book.pdf".into())))? {
//!     println!("{} pages", report.total_pages);
//! }
//! # Ok(())
//! # }
//! ```

pub mod action;

pub use action::{Action, COMMANDS, ParseError};

use std::path::PathBuf;

use crate::collect::{FileFilter, InputCollector};
use crate::error::{CollectError, ListError, MergeError};
use crate::list::InputFileList;
use crate::merge::{MergeReport, Merger, Metadata};
use crate::opener::{Opener, SystemOpener};

/// Failure of a dispatched action. None of these end the session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Merge(#[from] MergeError),

    #[error(transparent)]
    List(#[from] ListError),

    #[error(transparent)]
    Collect(#[from] CollectError),
}

/// What a dispatched action did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added { added: usize, total: usize },
    Removed(Vec<PathBuf>),
    Moved { from: usize, to: usize },
    Swapped { a: usize, b: usize },
    Listed(Vec<PathBuf>),
    Cleared(usize),
    TitleSet(Option<String>),
    AuthorSet(Option<String>),
    /// The merge succeeded. `open_error` is set if the output could not be
    /// opened afterwards.
    Merged {
        report: MergeReport,
        open_error: Option<String>,
    },
    /// A merge without a destination; nothing happened.
    Cancelled,
    Help,
    Quit,
}

/// The file list, the metadata and the collaborators a merge needs.
pub struct Session {
    files: InputFileList,
    metadata: Metadata,
    collector: InputCollector,
    merger: Merger,
    opener: Box<dyn Opener>,
    open_after: bool,
}

impl Session {
    /// Create an empty session that opens merged files with the system
    /// handler.
    pub fn new(filter: FileFilter) -> Result<Self, CollectError> {
        Ok(Self {
            files: InputFileList::new(),
            metadata: Metadata::default(),
            collector: InputCollector::new(filter)?,
            merger: Merger::new(),
            opener: Box::new(SystemOpener::new()),
            open_after: true,
        })
    }

    pub fn with_opener(mut self, opener: impl Opener + 'static) -> Self {
        self.opener = Box::new(opener);
        self
    }

    pub fn with_merger(mut self, merger: Merger) -> Self {
        self.merger = merger;
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Whether to open the output after a successful merge.
    pub fn open_after(mut self, open_after: bool) -> Self {
        self.open_after = open_after;
        self
    }

    pub fn files(&self) -> &InputFileList {
        &self.files
    }

    pub fn files_mut(&mut self) -> &mut InputFileList {
        &mut self.files
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Run the handler for `action`.
    pub fn dispatch(&mut self, action: Action) -> Result<Outcome, SessionError> {
        let outcome = match action {
            Action::Add(patterns) => {
                let paths = self.collector.collect(&patterns)?;
                let added = self.files.extend(paths);
                Outcome::Added {
                    added,
                    total: self.files.len(),
                }
            }
            Action::Remove(indices) => Outcome::Removed(self.files.remove(&indices)?),
            Action::Move { from, to } => {
                self.files.move_item(from, to)?;
                Outcome::Moved { from, to }
            }
            Action::Swap { a, b } => {
                self.files.swap(a, b)?;
                Outcome::Swapped { a, b }
            }
            Action::List => Outcome::Listed(self.files.paths().to_vec()),
            Action::Clear => Outcome::Cleared(self.files.clear()),
            Action::Title(title) => {
                self.metadata.set_title(title);
                Outcome::TitleSet(self.metadata.title.clone())
            }
            Action::Author(author) => {
                self.metadata.set_author(author);
                Outcome::AuthorSet(self.metadata.author.clone())
            }
            Action::Merge(None) => Outcome::Cancelled,
            Action::Merge(Some(output)) => self.merge(output)?,
            Action::Help => Outcome::Help,
            Action::Quit => Outcome::Quit,
        };

        Ok(outcome)
    }

    fn merge(&self, output: PathBuf) -> Result<Outcome, MergeError> {
        let report = self
            .merger
            .merge(self.files.paths(), &self.metadata, &output)?;

        let open_error = if self.open_after {
            tracing::debug!(path = %report.output.display(), "opening merged file");
            self.opener.open(&report.output).err().map(|err| {
                tracing::warn!(path = %report.output.display(), error = %err, "could not open merged file");
                err.to_string()
            })
        } else {
            None
        };

        Ok(Outcome::Merged { report, open_error })
    }
}
