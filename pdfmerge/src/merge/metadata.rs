//! Document information (Info dictionary) for merged PDFs.
//!
//! The merged document gets a fresh Info dictionary. `Producer` is always
//! set; `Title` and `Author` only when the user supplied a non-blank value.
//! Nothing is inherited from the source documents.

use lopdf::{Dictionary, Document, Object, ObjectId, StringFormat};
use serde::Serialize;

/// Producer tag written to every merged document.
pub const PRODUCER: &str = "pdfmerge";

/// User-supplied metadata for the merged document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Metadata {
    /// Document title.
    pub title: Option<String>,
    /// Document author.
    pub author: Option<String>,
}

impl Metadata {
    /// Create metadata from optional strings, trimming whitespace.
    ///
    /// Empty and whitespace-only values become `None`.
    pub fn new(title: Option<String>, author: Option<String>) -> Self {
        Self {
            title: normalize(title),
            author: normalize(author),
        }
    }

    /// Check if neither field is set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none()
    }

    pub fn set_title(&mut self, title: Option<String>) {
        self.title = normalize(title);
    }

    pub fn set_author(&mut self, author: Option<String>) {
        self.author = normalize(author);
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Info dictionary fields as read back from a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub author: Option<String>,
    pub producer: Option<String>,
    /// Every key present in the dictionary, in dictionary order.
    pub keys: Vec<String>,
}

/// Replace the document's Info dictionary with one built from `metadata`.
///
/// Returns the id of the new Info object.
pub fn write_info(doc: &mut Document, metadata: &Metadata) -> ObjectId {
    let mut info = Dictionary::new();
    info.set("Producer", text_string(PRODUCER));

    if let Some(ref title) = metadata.title {
        info.set("Title", text_string(title));
    }

    if let Some(ref author) = metadata.author {
        info.set("Author", text_string(author));
    }

    let info_id = doc.add_object(info);
    doc.trailer.set("Info", Object::Reference(info_id));
    info_id
}

/// Read the Info dictionary of a document.
///
/// Missing or malformed dictionaries read as [`DocumentInfo::default`].
pub fn read_info(doc: &Document) -> DocumentInfo {
    let info = match doc.trailer.get(b"Info") {
        Ok(Object::Reference(id)) => doc.get_dictionary(*id).ok(),
        Ok(Object::Dictionary(dict)) => Some(dict),
        _ => None,
    };

    let Some(info) = info else {
        return DocumentInfo::default();
    };

    DocumentInfo {
        title: text_field(info, b"Title"),
        author: text_field(info, b"Author"),
        producer: text_field(info, b"Producer"),
        keys: info
            .iter()
            .map(|(key, _)| String::from_utf8_lossy(key).into_owned())
            .collect(),
    }
}

fn text_field(dict: &Dictionary, key: &[u8]) -> Option<String> {
    match dict.get(key) {
        Ok(Object::String(bytes, _)) => Some(decode_text(bytes)),
        _ => None,
    }
}

/// Encode a PDF text string.
///
/// ASCII goes out as a literal string, anything else as UTF-16BE with a
/// byte order mark.
pub fn text_string(text: &str) -> Object {
    if text.is_ascii() {
        return Object::String(text.as_bytes().to_vec(), StringFormat::Literal);
    }

    let mut bytes = vec![0xFE, 0xFF];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, StringFormat::Hexadecimal)
}

/// Decode a PDF text string written as UTF-16BE (with BOM) or as bytes.
pub fn decode_text(bytes: &[u8]) -> String {
    match bytes {
        [0xFE, 0xFF, rest @ ..] => {
            let units: Vec<u16> = rest
                .chunks_exact(2)
                .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
                .collect();
            String::from_utf16_lossy(&units)
        }
        // PDFDocEncoding agrees with Latin-1 for printable text.
        _ => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}
