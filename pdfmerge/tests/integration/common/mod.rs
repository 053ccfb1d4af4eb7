//! Shared helpers for the integration tests.
//!
//! Test PDFs are generated on the fly. Every page's MediaBox width encodes
//! where the page came from: `source * 100 + page`, with pages counted
//! from 1, so the page order of a merged file can be read back.

#![allow(dead_code)]

use lopdf::{Document, Object, ObjectId, dictionary};
use std::path::{Path, PathBuf};

/// Width of page `page` (1-based) of source `source`.
pub fn width(source: i64, page: i64) -> i64 {
    source * 100 + page
}

/// Write a PDF with `pages` pages for source number `source`.
///
/// Each title in `outline` becomes a top-level bookmark; bookmark `i`
/// points at page `i` (wrapping around).
pub fn write_pdf(dir: &Path, name: &str, source: i64, pages: usize, outline: &[&str]) -> PathBuf {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let page_ids: Vec<ObjectId> = (1..=pages as i64)
        .map(|page| {
            doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), width(source, page).into(), 792.into()],
            })
        })
        .collect();

    doc.objects.insert(
        pages_id,
        dictionary! {
            "Type" => "Pages",
            "Kids" => page_ids.iter().map(|&id| Object::Reference(id)).collect::<Vec<_>>(),
            "Count" => pages as i64,
        }
        .into(),
    );

    let mut catalog = dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    };
    if !outline.is_empty() && !page_ids.is_empty() {
        let outline_id = add_outline(&mut doc, &page_ids, outline);
        catalog.set("Outlines", outline_id);
    }

    let catalog_id = doc.add_object(catalog);
    doc.trailer.set("Root", catalog_id);

    let path = dir.join(name);
    doc.save(&path).unwrap();
    path
}

fn add_outline(doc: &mut Document, page_ids: &[ObjectId], titles: &[&str]) -> ObjectId {
    let root_id = doc.new_object_id();
    let item_ids: Vec<ObjectId> = titles.iter().map(|_| doc.new_object_id()).collect();

    for (i, title) in titles.iter().enumerate() {
        let target = page_ids[i % page_ids.len()];
        let mut item = dictionary! {
            "Title" => Object::string_literal(*title),
            "Parent" => root_id,
            "Dest" => vec![target.into(), "XYZ".into(), Object::Null, Object::Null, Object::Null],
        };
        if i > 0 {
            item.set("Prev", item_ids[i - 1]);
        }
        if i + 1 < item_ids.len() {
            item.set("Next", item_ids[i + 1]);
        }
        doc.objects.insert(item_ids[i], item.into());
    }

    doc.objects.insert(
        root_id,
        dictionary! {
            "Type" => "Outlines",
            "First" => item_ids[0],
            "Last" => item_ids[item_ids.len() - 1],
            "Count" => item_ids.len() as i64,
        }
        .into(),
    );
    root_id
}

/// Page widths of the PDF at `path`, in page order.
pub fn page_widths(path: &Path) -> Vec<i64> {
    let doc = Document::load(path).unwrap();
    doc.get_pages()
        .values()
        .map(|&id| page_width(&doc, id))
        .collect()
}

fn page_width(doc: &Document, page_id: ObjectId) -> i64 {
    let page = doc.get_dictionary(page_id).unwrap();
    let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
    media_box[2].as_float().unwrap().round() as i64
}

/// Top-level bookmarks of the PDF at `path` as (title, width of target page).
pub fn bookmarks(path: &Path) -> Vec<(String, i64)> {
    let doc = Document::load(path).unwrap();
    top_level_items(&doc)
        .into_iter()
        .map(|id| {
            let item = doc.get_dictionary(id).unwrap();
            let title =
                String::from_utf8_lossy(item.get(b"Title").unwrap().as_str().unwrap()).into_owned();
            (title, page_width(&doc, dest_page(&doc, id)))
        })
        .collect()
}

/// Page ids of the PDF at `path`, in page order, and the page id each
/// top-level bookmark points at.
pub fn bookmark_targets(path: &Path) -> (Vec<ObjectId>, Vec<ObjectId>) {
    let doc = Document::load(path).unwrap();
    let pages = doc.get_pages().into_values().collect();
    let targets = top_level_items(&doc)
        .into_iter()
        .map(|id| dest_page(&doc, id))
        .collect();
    (pages, targets)
}

fn dest_page(doc: &Document, item_id: ObjectId) -> ObjectId {
    let item = doc.get_dictionary(item_id).unwrap();
    item.get(b"Dest").unwrap().as_array().unwrap()[0]
        .as_reference()
        .unwrap()
}

fn top_level_items(doc: &Document) -> Vec<ObjectId> {
    let Ok(root) = doc
        .catalog()
        .and_then(|catalog| catalog.get(b"Outlines"))
        .and_then(Object::as_reference)
    else {
        return Vec::new();
    };

    let mut items = Vec::new();
    let mut current = doc
        .get_dictionary(root)
        .unwrap()
        .get(b"First")
        .and_then(Object::as_reference)
        .ok();

    while let Some(id) = current {
        items.push(id);
        current = doc
            .get_dictionary(id)
            .unwrap()
            .get(b"Next")
            .and_then(Object::as_reference)
            .ok();
    }
    items
}
