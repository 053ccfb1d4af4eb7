//! Outline (bookmark) import for merged documents.
//!
//! Sources keep their outline items. The top-level items of every source are
//! re-parented under one new `Outlines` root and chained in merge order.
//!
//! A destination may be given by name, looked up in the source catalog's
//! `Dests` dictionary or its `Names/Dests` name tree. Those tables are not
//! carried into the merged document, so named destinations are rewritten to
//! explicit destination arrays while the source catalog is still available.

use lopdf::{Dictionary, Document, Object, ObjectId};
use std::collections::HashSet;

use crate::error::{MergeError, Result};

/// Name trees deeper than this are treated as malformed.
const MAX_NAME_TREE_DEPTH: usize = 32;

/// Outline items taken from one source document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceOutline {
    /// Top-level items, in outline order.
    pub items: Vec<ObjectId>,
    /// Number of items at every level.
    pub entries: usize,
}

impl SourceOutline {
    /// Read the outline of `doc`, rewriting named destinations in place.
    ///
    /// A document without an outline yields an empty value.
    pub fn read(doc: &mut Document) -> Self {
        let Some(root) = outline_root(doc) else {
            return Self::default();
        };

        let items = sibling_chain(doc, root);
        let nodes = outline_nodes(doc, &items);

        let rewrites: Vec<(DestSlot, Option<Object>)> = nodes
            .iter()
            .filter_map(|&id| named_destination(doc, id))
            .map(|(slot, name)| {
                let resolved = resolve_name(doc, &name);
                if resolved.is_none() {
                    tracing::debug!(
                        name = %String::from_utf8_lossy(&name),
                        "dropping unresolved outline destination"
                    );
                }
                (slot, resolved)
            })
            .collect();

        for (slot, resolved) in rewrites {
            slot.apply(doc, resolved);
        }

        Self {
            items,
            entries: nodes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Collects source outlines and links them under a single root.
#[derive(Debug, Default)]
pub struct OutlineBuilder {
    items: Vec<ObjectId>,
    entries: usize,
}

impl OutlineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the items of one source. Sources are chained in push order.
    pub fn push(&mut self, outline: SourceOutline) {
        self.entries += outline.entries;
        self.items.extend(outline.items);
    }

    /// Total number of queued items at every level.
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Create the merged `Outlines` root, or `None` if no source had one.
    ///
    /// The queued items must already be part of `doc`.
    pub fn attach(self, doc: &mut Document) -> Result<Option<ObjectId>> {
        let (Some(&first), Some(&last)) = (self.items.first(), self.items.last()) else {
            return Ok(None);
        };

        let root_id = doc.new_object_id();
        let mut visible = 0i64;

        for (position, &id) in self.items.iter().enumerate() {
            let item = doc.get_dictionary_mut(id).map_err(|err| {
                MergeError::unexpected(format!("Outline item {id:?} is missing: {err}"))
            })?;

            item.set("Parent", Object::Reference(root_id));
            item.remove(b"Prev");
            item.remove(b"Next");
            if position > 0 {
                item.set("Prev", Object::Reference(self.items[position - 1]));
            }
            if let Some(&next) = self.items.get(position + 1) {
                item.set("Next", Object::Reference(next));
            }

            // Open items count their visible descendants, closed ones are negative.
            let open_descendants = item
                .get(b"Count")
                .and_then(Object::as_i64)
                .unwrap_or(0)
                .max(0);
            visible += 1 + open_descendants;
        }

        let mut root = Dictionary::new();
        root.set("Type", Object::Name(b"Outlines".to_vec()));
        root.set("First", Object::Reference(first));
        root.set("Last", Object::Reference(last));
        root.set("Count", Object::Integer(visible));
        doc.objects.insert(root_id, Object::Dictionary(root));

        tracing::debug!(
            top_level = self.items.len(),
            entries = self.entries,
            "attached outline"
        );
        Ok(Some(root_id))
    }
}

/// Where a named destination was found on an outline item.
#[derive(Debug, Clone, Copy)]
enum DestSlot {
    /// `/Dest` of the item.
    Dest(ObjectId),
    /// `/D` of a GoTo action stored inline as the item's `/A`.
    InlineAction(ObjectId),
    /// `/D` of a GoTo action stored as its own object.
    Action(ObjectId),
}

impl DestSlot {
    fn apply(self, doc: &mut Document, resolved: Option<Object>) {
        let (dict, key) = match self {
            Self::Dest(item) => (doc.get_dictionary_mut(item).ok(), &b"Dest"[..]),
            Self::Action(action) => (doc.get_dictionary_mut(action).ok(), &b"D"[..]),
            Self::InlineAction(item) => {
                let action = doc
                    .get_dictionary_mut(item)
                    .ok()
                    .and_then(|item| item.get_mut(b"A").ok())
                    .and_then(|action| action.as_dict_mut().ok());
                (action, &b"D"[..])
            }
        };

        let Some(dict) = dict else { return };
        match resolved {
            Some(dest) => dict.set(key.to_vec(), dest),
            None => {
                dict.remove(key);
            }
        }
    }
}

fn outline_root(doc: &Document) -> Option<ObjectId> {
    doc.catalog()
        .ok()?
        .get(b"Outlines")
        .ok()?
        .as_reference()
        .ok()
}

/// Follow `First` and then `Next` links from `parent`, stopping at a cycle.
fn sibling_chain(doc: &Document, parent: ObjectId) -> Vec<ObjectId> {
    let mut chain = Vec::new();
    let mut seen = HashSet::new();

    let mut current = doc
        .get_dictionary(parent)
        .ok()
        .and_then(|dict| dict.get(b"First").ok())
        .and_then(|first| first.as_reference().ok());

    while let Some(id) = current {
        if !seen.insert(id) {
            break;
        }
        let Ok(item) = doc.get_dictionary(id) else {
            break;
        };
        chain.push(id);
        current = item.get(b"Next").and_then(Object::as_reference).ok();
    }

    chain
}

/// Every outline item reachable from `top_level`, depth first.
fn outline_nodes(doc: &Document, top_level: &[ObjectId]) -> Vec<ObjectId> {
    let mut nodes = Vec::new();
    let mut seen = HashSet::new();
    let mut stack: Vec<ObjectId> = top_level.iter().rev().copied().collect();

    while let Some(id) = stack.pop() {
        if !seen.insert(id) {
            continue;
        }
        nodes.push(id);
        stack.extend(sibling_chain(doc, id).into_iter().rev());
    }

    nodes
}

/// The named destination of an outline item, if it has one.
fn named_destination(doc: &Document, item_id: ObjectId) -> Option<(DestSlot, Vec<u8>)> {
    let item = doc.get_dictionary(item_id).ok()?;

    if let Ok(dest) = item.get(b"Dest") {
        return destination_name(deref(doc, dest)?).map(|name| (DestSlot::Dest(item_id), name));
    }

    let (slot, action) = match item.get(b"A").ok()? {
        Object::Reference(id) => (DestSlot::Action(*id), doc.get_dictionary(*id).ok()?),
        Object::Dictionary(action) => (DestSlot::InlineAction(item_id), action),
        _ => return None,
    };

    let is_goto = matches!(action.get(b"S"), Ok(Object::Name(kind)) if kind == b"GoTo");
    if !is_goto {
        return None;
    }

    let dest = deref(doc, action.get(b"D").ok()?)?;
    destination_name(dest).map(|name| (slot, name))
}

fn destination_name(dest: &Object) -> Option<Vec<u8>> {
    match dest {
        Object::Name(name) | Object::String(name, _) => Some(name.clone()),
        _ => None,
    }
}

/// Look `name` up in the catalog's `Dests` dictionary, then its name tree.
fn resolve_name(doc: &Document, name: &[u8]) -> Option<Object> {
    let catalog = doc.catalog().ok()?;

    let from_dests = catalog
        .get(b"Dests")
        .ok()
        .and_then(|dests| deref(doc, dests))
        .and_then(|dests| dests.as_dict().ok())
        .and_then(|dests| dests.get(name).ok());

    let from_names = || {
        let names = deref(doc, catalog.get(b"Names").ok()?)?.as_dict().ok()?;
        let tree = deref(doc, names.get(b"Dests").ok()?)?.as_dict().ok()?;
        name_tree_lookup(doc, tree, name, 0)
    };

    let value = from_dests.or_else(from_names)?;
    explicit_destination(doc, value)
}

fn name_tree_lookup<'a>(
    doc: &'a Document,
    node: &'a Dictionary,
    name: &[u8],
    depth: usize,
) -> Option<&'a Object> {
    if depth > MAX_NAME_TREE_DEPTH {
        return None;
    }

    if let Some(pairs) = node
        .get(b"Names")
        .ok()
        .and_then(|names| deref(doc, names))
        .and_then(|names| names.as_array().ok())
    {
        let found = pairs.chunks_exact(2).find_map(|pair| match &pair[0] {
            Object::String(key, _) if key == name => Some(&pair[1]),
            _ => None,
        });
        if found.is_some() {
            return found;
        }
    }

    let kids = deref(doc, node.get(b"Kids").ok()?)?.as_array().ok()?;
    kids.iter().find_map(|kid| {
        let kid = deref(doc, kid)?.as_dict().ok()?;
        name_tree_lookup(doc, kid, name, depth + 1)
    })
}

/// A destination value is an array, or a dictionary holding it under `D`.
fn explicit_destination(doc: &Document, value: &Object) -> Option<Object> {
    match deref(doc, value)? {
        array @ Object::Array(_) => Some(array.clone()),
        Object::Dictionary(dict) => match deref(doc, dict.get(b"D").ok()?)? {
            array @ Object::Array(_) => Some(array.clone()),
            _ => None,
        },
        _ => None,
    }
}

/// Follow a reference chain to its target object.
fn deref<'a>(doc: &'a Document, object: &'a Object) -> Option<&'a Object> {
    let mut current = object;
    for _ in 0..MAX_NAME_TREE_DEPTH {
        match current {
            Object::Reference(id) => current = doc.get_object(*id).ok()?,
            other => return Some(other),
        }
    }
    None
}
