//! Shared helpers for the conversion test suites.

use prosedown::{
    document_to_markdown, markdown_to_document, DocToMdOptions, Document, MdToDocOptions,
};
use std::path::PathBuf;

/// Markdown text → document tree with default options.
pub fn to_doc(text: &str) -> Document {
    markdown_to_document(text, &MdToDocOptions::default())
}

/// Document tree → Markdown text with default options.
pub fn to_md(doc: &Document) -> String {
    document_to_markdown(doc, &DocToMdOptions::default()).expect("document should print")
}

/// One full round trip: text → document → text.
pub fn round_trip(text: &str) -> String {
    to_md(&to_doc(text))
}

/// Load a fixture from tests/fixtures.
pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}
