//! Error types for pdfmerge.
//!
//! A merge ends in exactly one of three failures, mirrored by
//! [`MergeError`]. Anything the PDF library or the filesystem reports that
//! is not a parse failure of an input collapses into
//! [`MergeError::UnexpectedError`].
//!
//! The file list and input collection have their own small error types;
//! none of them are fatal to an interactive session.

use std::io;
use std::path::PathBuf;

/// Result type alias for merge operations.
pub type Result<T, E = MergeError> = std::result::Result<T, E>;

/// How loudly an error should be reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The user can fix this without anything having been attempted.
    Warning,
    /// The operation was attempted and failed.
    Critical,
}

/// Failure of a merge operation.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    /// The merge was requested with an empty file list.
    #[error("No input files specified for merging")]
    EmptyInput,

    /// An input could not be parsed as a PDF document.
    #[error("Failed to read PDF: {}\n  Reason: {reason}", path.display())]
    UnreadableSource {
        /// Path of the first input that failed to parse.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },

    /// Any other failure while reading, appending or writing.
    #[error("Merge failed: {reason}")]
    UnexpectedError {
        /// Description of what went wrong.
        reason: String,
        /// Underlying I/O error, if there was one.
        #[source]
        source: Option<io::Error>,
    },
}

impl MergeError {
    /// Create an UnreadableSource error.
    pub fn unreadable(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::UnreadableSource {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnexpectedError without an underlying I/O error.
    pub fn unexpected(reason: impl Into<String>) -> Self {
        Self::UnexpectedError {
            reason: reason.into(),
            source: None,
        }
    }

    /// Create an UnexpectedError wrapping an I/O error.
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::UnexpectedError {
            reason: format!("{}: {source}", context.into()),
            source: Some(source),
        }
    }

    /// Severity used when presenting this error.
    pub fn severity(&self) -> Severity {
        match self {
            Self::EmptyInput => Severity::Warning,
            Self::UnreadableSource { .. } | Self::UnexpectedError { .. } => Severity::Critical,
        }
    }

    /// Short message suitable for a dialog or a status line.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::EmptyInput => "No files selected",
            Self::UnreadableSource { .. } => "Could not read files.",
            Self::UnexpectedError { .. } => {
                "Something unexpected happened.\nCould not merge files."
            }
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::EmptyInput => 1,
            Self::UnreadableSource { .. } => 3,
            Self::UnexpectedError { .. } => 5,
        }
    }
}

impl From<io::Error> for MergeError {
    fn from(err: io::Error) -> Self {
        Self::UnexpectedError {
            reason: err.to_string(),
            source: Some(err),
        }
    }
}

impl From<lopdf::Error> for MergeError {
    fn from(err: lopdf::Error) -> Self {
        Self::unexpected(err.to_string())
    }
}

/// Failure of an operation on the input file list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// A position does not refer to an entry.
    #[error("No file at position {} (the list has {len} file(s))", index + 1)]
    IndexOutOfRange {
        /// Zero-based index that was requested.
        index: usize,
        /// Length of the list at the time.
        len: usize,
    },
}

/// Failure while expanding user-supplied inputs into file paths.
#[derive(Debug, thiserror::Error)]
pub enum CollectError {
    /// A glob pattern could not be parsed.
    #[error("Invalid pattern '{pattern}': {source}")]
    Pattern {
        /// The offending pattern.
        pattern: String,
        /// Parser error.
        #[source]
        source: glob::PatternError,
    },

    /// The file-type filter could not be compiled.
    #[error("Invalid file filter: {0}")]
    Filter(#[from] globset::Error),

    /// A directory entry or glob match could not be read.
    #[error("Cannot read {}: {reason}", path.display())]
    Unreadable {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying error message.
        reason: String,
    },
}
