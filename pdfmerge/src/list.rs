//! The ordered list of files to merge.
//!
//! Order is chosen by the user and is the merge order. Duplicates are
//! allowed and the list is never cleared implicitly.

use std::path::{Path, PathBuf};

use crate::error::ListError;

/// Ordered sequence of input file paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputFileList {
    entries: Vec<PathBuf>,
}

impl InputFileList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single path.
    pub fn push(&mut self, path: impl Into<PathBuf>) {
        self.entries.push(path.into());
    }

    /// Append paths in the order they are yielded.
    ///
    /// Returns how many entries were added.
    pub fn extend<I, P>(&mut self, paths: I) -> usize
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let before = self.entries.len();
        self.entries.extend(paths.into_iter().map(Into::into));
        self.entries.len() - before
    }

    /// Remove the entries at the given zero-based positions.
    ///
    /// Positions may be given in any order and may repeat. Either all of
    /// them are removed or, if any is out of range, none is. The removed
    /// paths are returned in list order.
    pub fn remove(&mut self, indices: &[usize]) -> Result<Vec<PathBuf>, ListError> {
        self.check(indices)?;

        let mut indices = indices.to_vec();
        indices.sort_unstable();
        indices.dedup();

        let mut removed: Vec<PathBuf> = indices
            .iter()
            .rev()
            .map(|&index| self.entries.remove(index))
            .collect();
        removed.reverse();

        Ok(removed)
    }

    /// Move the entry at `from` so that it ends up at `to`.
    ///
    /// Entries in between shift by one, as with a drag-and-drop reorder.
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<(), ListError> {
        self.check(&[from, to])?;

        let entry = self.entries.remove(from);
        self.entries.insert(to, entry);
        Ok(())
    }

    /// Exchange two entries.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), ListError> {
        self.check(&[a, b])?;
        self.entries.swap(a, b);
        Ok(())
    }

    /// Remove every entry, returning how many there were.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        count
    }

    /// Current order of the list.
    pub fn paths(&self) -> &[PathBuf] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&Path> {
        self.entries.get(index).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.entries.iter()
    }

    fn check(&self, indices: &[usize]) -> Result<(), ListError> {
        let len = self.entries.len();
        match indices.iter().find(|&&index| index >= len) {
            Some(&index) => Err(ListError::IndexOutOfRange { index, len }),
            None => Ok(()),
        }
    }
}

impl<P: Into<PathBuf>> FromIterator<P> for InputFileList {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a InputFileList {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
