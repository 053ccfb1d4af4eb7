//! Sample documents for unit tests.

use lopdf::{Document, Object, ObjectId, dictionary};
use std::path::{Path, PathBuf};

/// Build a document with one page per entry of `widths`.
///
/// Each page's MediaBox width is taken from `widths`, so page order can be
/// checked after a merge. Every title in `outline` becomes a top-level
/// outline item pointing at the first page.
pub fn sample_document(widths: &[i64], outline: &[&str]) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let page_ids: Vec<ObjectId> = widths
        .iter()
        .map(|&width| {
            doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), width.into(), 792.into()],
            })
        })
        .collect();

    doc.objects.insert(
        pages_id,
        dictionary! {
            "Type" => "Pages",
            "Kids" => page_ids.iter().map(|&id| Object::Reference(id)).collect::<Vec<_>>(),
            "Count" => widths.len() as i64,
        }
        .into(),
    );

    let mut catalog = dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    };

    if let (false, Some(&first_page)) = (outline.is_empty(), page_ids.first()) {
        let root_id = doc.new_object_id();
        let item_ids: Vec<ObjectId> = outline.iter().map(|_| doc.new_object_id()).collect();

        for (i, title) in outline.iter().enumerate() {
            let mut item = dictionary! {
                "Title" => Object::string_literal(*title),
                "Parent" => root_id,
                "Dest" => vec![first_page.into(), "Fit".into()],
            };
            if i > 0 {
                item.set("Prev", item_ids[i - 1]);
            }
            if let Some(&next) = item_ids.get(i + 1) {
                item.set("Next", next);
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
        catalog.set("Outlines", root_id);
    }

    let catalog_id = doc.add_object(catalog);
    doc.trailer.set("Root", catalog_id);
    doc
}

/// Save a [`sample_document`] as `dir/name`.
pub fn write_sample(dir: &Path, name: &str, widths: &[i64], outline: &[&str]) -> PathBuf {
    let path = dir.join(name);
    sample_document(widths, outline).save(&path).unwrap();
    path
}

/// MediaBox widths of a document's pages, in page order.
pub fn page_widths(doc: &Document) -> Vec<i64> {
    doc.get_pages()
        .values()
        .map(|&id| {
            let page = doc.get_dictionary(id).unwrap();
            let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
            media_box[2].as_float().unwrap().round() as i64
        })
        .collect()
}

/// Titles of the top-level outline items, in outline order.
pub fn outline_titles(doc: &Document) -> Vec<String> {
    let Ok(root) = doc
        .catalog()
        .and_then(|catalog| catalog.get(b"Outlines"))
        .and_then(Object::as_reference)
    else {
        return Vec::new();
    };

    let mut titles = Vec::new();
    let mut current = doc
        .get_dictionary(root)
        .unwrap()
        .get(b"First")
        .and_then(Object::as_reference)
        .ok();

    while let Some(id) = current {
        let item = doc.get_dictionary(id).unwrap();
        let title = item.get(b"Title").unwrap().as_str().unwrap();
        titles.push(String::from_utf8_lossy(title).into_owned());
        current = item.get(b"Next").and_then(Object::as_reference).ok();
    }
    titles
}
