//! Expansion of user-supplied inputs into file paths.
//!
//! Each argument is one of:
//! - a directory, walked recursively (sorted by name) for files passing the filter
//! - an existing file, kept exactly as given even if its name contains `*`, `?` or `[`
//! - a glob pattern such as `"chapters/*.pdf"`, whose matches pass through the filter
//! - any other plain path, kept exactly as given
//!
//! Results keep argument order. Plain paths are not checked for existence;
//! an unreadable input is reported by the merge.

use globset::{GlobBuilder, GlobMatcher};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::CollectError;

/// File-type filter applied to directory walks and glob matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileFilter {
    /// Only `*.pdf` files, compared case-insensitively.
    #[default]
    Pdf,
    /// Every regular file.
    All,
}

impl FileFilter {
    /// Label in the style of a file dialog filter.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pdf => "PDF Files (*.pdf)",
            Self::All => "All Files (*)",
        }
    }
}

/// Expands patterns and directories according to a [`FileFilter`].
#[derive(Debug, Clone)]
pub struct InputCollector {
    filter: FileFilter,
    matcher: Option<GlobMatcher>,
}

impl InputCollector {
    /// Create a collector for the given filter.
    pub fn new(filter: FileFilter) -> Result<Self, CollectError> {
        let matcher = match filter {
            FileFilter::Pdf => Some(
                GlobBuilder::new("*.pdf")
                    .case_insensitive(true)
                    .build()?
                    .compile_matcher(),
            ),
            FileFilter::All => None,
        };

        Ok(Self { filter, matcher })
    }

    /// Check whether a file name passes the filter.
    pub fn accepts(&self, path: &Path) -> bool {
        match (&self.matcher, path.file_name()) {
            (None, _) => true,
            (Some(matcher), Some(name)) => matcher.is_match(name),
            (Some(_), None) => false,
        }
    }

    /// Expand every argument, in order, into a flat list of paths.
    pub fn collect<T>(&self, inputs: T) -> Result<Vec<PathBuf>, CollectError>
    where
        T: IntoIterator,
        T::Item: AsRef<str>,
    {
        let mut resolved = Vec::new();

        for input in inputs {
            let input = input.as_ref();
            let before = resolved.len();

            let path = Path::new(input);
            if path.is_dir() {
                self.walk_directory(path, &mut resolved)?;
            } else if path.exists() {
                resolved.push(path.to_path_buf());
            } else if is_glob(input) {
                self.expand_glob(input, &mut resolved)?;
            } else {
                resolved.push(path.to_path_buf());
            }

            if resolved.len() == before {
                tracing::warn!(input, filter = self.filter.label(), "input matched no files");
            }
        }

        Ok(resolved)
    }

    fn walk_directory(&self, dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), CollectError> {
        for entry in WalkDir::new(dir).min_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|err| CollectError::Unreadable {
                path: err.path().unwrap_or(dir).to_path_buf(),
                reason: err.to_string(),
            })?;

            if entry.file_type().is_file() && self.accepts(entry.path()) {
                out.push(entry.into_path());
            }
        }
        Ok(())
    }

    fn expand_glob(&self, pattern: &str, out: &mut Vec<PathBuf>) -> Result<(), CollectError> {
        let paths = glob::glob(pattern).map_err(|source| CollectError::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;

        for entry in paths {
            let path = entry.map_err(|err| CollectError::Unreadable {
                path: err.path().to_path_buf(),
                reason: err.error().to_string(),
            })?;

            if path.is_file() && self.accepts(&path) {
                out.push(path);
            }
        }
        Ok(())
    }
}

/// Expand inputs with a freshly built collector.
pub fn collect_inputs<T>(inputs: T, filter: FileFilter) -> Result<Vec<PathBuf>, CollectError>
where
    T: IntoIterator,
    T::Item: AsRef<str>,
{
    InputCollector::new(filter)?.collect(inputs)
}

fn is_glob(input: &str) -> bool {
    input.contains(['*', '?', '['])
}
