//! Page tree assembly for merged documents.
//!
//! Every source keeps its own page tree. The merged document gets a new
//! root `Pages` node whose kids are the sources' root nodes, in merge
//! order, so attributes a source's pages inherit (MediaBox, Resources,
//! Rotate) stay scoped to that source.

use lopdf::{Dictionary, Document, Object, ObjectId};

use crate::error::{MergeError, Result};

/// Root of one source's page tree inside the merged document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTreeRoot {
    pub id: ObjectId,
    pub page_count: usize,
}

/// Find the root `Pages` node of a document.
pub fn page_tree_root(doc: &Document) -> Result<PageTreeRoot> {
    let id = doc
        .catalog()
        .and_then(|catalog| catalog.get(b"Pages"))
        .and_then(Object::as_reference)
        .map_err(|err| MergeError::unexpected(format!("Document has no page tree: {err}")))?;

    Ok(PageTreeRoot {
        id,
        page_count: doc.get_pages().len(),
    })
}

/// Collects source page trees and links them under a single root.
#[derive(Debug, Default)]
pub struct PageTreeBuilder {
    roots: Vec<PageTreeRoot>,
}

impl PageTreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a source tree. Trees are attached in the order they are pushed.
    pub fn push(&mut self, root: PageTreeRoot) {
        self.roots.push(root);
    }

    pub fn page_count(&self) -> usize {
        self.roots.iter().map(|root| root.page_count).sum()
    }

    /// Create the merged root node and re-parent every queued tree under it.
    ///
    /// The source trees must already be part of `doc`.
    pub fn attach(self, doc: &mut Document) -> Result<ObjectId> {
        let root_id = doc.new_object_id();

        for root in &self.roots {
            let node = doc.get_dictionary_mut(root.id).map_err(|err| {
                MergeError::unexpected(format!("Page tree node {:?} is missing: {err}", root.id))
            })?;
            node.set("Parent", Object::Reference(root_id));
        }

        let kids: Vec<Object> = self
            .roots
            .iter()
            .map(|root| Object::Reference(root.id))
            .collect();

        let mut pages = Dictionary::new();
        pages.set("Type", Object::Name(b"Pages".to_vec()));
        pages.set("Kids", Object::Array(kids));
        pages.set("Count", Object::Integer(self.page_count() as i64));

        doc.objects.insert(root_id, Object::Dictionary(pages));
        Ok(root_id)
    }
}
