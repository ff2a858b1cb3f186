//! Canonicalization for equivalence comparison and round-trip stability
//!
//! Document normalization dedupes and orders marks, fixes line endings in
//! text runs, and makes attribute defaults explicit. Markdown text
//! normalization reparses the text and reprints it in the canonical
//! style, so every stylistic variant of the same content collapses to one
//! form. Both are pure; equivalence is structural equality of normalized
//! values.

use crate::doc::{DocNode, Document, Mark, OrderedListAttrs};
use crate::error::ConvertError;
use crate::md::{parse_markdown, print_markdown, PrintStyle};

/// Canonicalize a document tree. Idempotent.
pub fn normalize_document(doc: &Document) -> Document {
    Document::new(doc.content.iter().map(normalize_node).collect())
}

/// Whether two documents are equivalent under normalization.
pub fn are_documents_equivalent(a: &Document, b: &Document) -> bool {
    normalize_document(a) == normalize_document(b)
}

/// Reprint Markdown text in the canonical style.
pub fn normalize_markdown(text: &str) -> Result<String, ConvertError> {
    print_markdown(&parse_markdown(text), &PrintStyle::default())
}

/// Whether two Markdown texts are equivalent under normalization.
pub fn are_markdown_equivalent(a: &str, b: &str) -> Result<bool, ConvertError> {
    Ok(normalize_markdown(a)? == normalize_markdown(b)?)
}

fn normalize_node(node: &DocNode) -> DocNode {
    match node {
        // Empty text stays as "" so sibling indices are preserved.
        DocNode::Text { text, marks } => DocNode::Text {
            text: text.replace("\r\n", "\n").replace('\r', "\n"),
            marks: normalize_marks(marks),
        },
        DocNode::Paragraph { content } => DocNode::Paragraph {
            content: normalize_children(content),
        },
        DocNode::Heading { attrs, content } => DocNode::Heading {
            attrs: attrs.clone(),
            content: normalize_children(content),
        },
        DocNode::Blockquote { content } => DocNode::Blockquote {
            content: normalize_children(content),
        },
        DocNode::BulletList { content } => DocNode::BulletList {
            content: normalize_children(content),
        },
        // The default is dropped, then re-injected: normalized ordered
        // lists always carry an explicit start.
        DocNode::OrderedList { attrs, content } => DocNode::OrderedList {
            attrs: OrderedListAttrs {
                start: Some(attrs.start.unwrap_or(1)),
            },
            content: normalize_children(content),
        },
        DocNode::ListItem { content } => DocNode::ListItem {
            content: normalize_children(content),
        },
        DocNode::TaskList { content } => DocNode::TaskList {
            content: normalize_children(content),
        },
        DocNode::TaskItem { attrs, content } => DocNode::TaskItem {
            attrs: attrs.clone(),
            content: normalize_children(content),
        },
        DocNode::CodeBlock { attrs, content } => DocNode::CodeBlock {
            attrs: attrs.clone(),
            content: normalize_children(content),
        },
        DocNode::Table { content } => DocNode::Table {
            content: normalize_children(content),
        },
        DocNode::TableRow { content } => DocNode::TableRow {
            content: normalize_children(content),
        },
        DocNode::TableCell { content } => DocNode::TableCell {
            content: normalize_children(content),
        },
        DocNode::HorizontalRule => DocNode::HorizontalRule,
    }
}

fn normalize_children(content: &[DocNode]) -> Vec<DocNode> {
    content.iter().map(normalize_node).collect()
}

/// Dedupe marks by type (first occurrence wins), then sort by the fixed
/// precedence so equivalent content serializes identically.
fn normalize_marks(marks: &[Mark]) -> Vec<Mark> {
    let mut deduped: Vec<Mark> = Vec::new();
    for mark in marks {
        if !deduped.iter().any(|kept| kept.name() == mark.name()) {
            deduped.push(mark.clone());
        }
    }
    deduped.sort_by_key(Mark::rank);
    deduped
}
