//! Table-family plugins: table, tableRow, tableCell
//!
//! Structural passthrough in both directions. Header-row-ness is never
//! computed here; the printer renders the first row of a table as the GFM
//! header row, and alignment is style the document model does not carry.

use crate::convert::{DocContext, MdContext};
use crate::doc::DocNode;
use crate::md::MdNode;
use crate::plugin::Plugin;

/// Cells hold inline content on the Markdown side; editor documents wrap
/// cell content in paragraphs, which are spliced away here.
fn splice_paragraphs(nodes: Vec<MdNode>) -> Vec<MdNode> {
    nodes
        .into_iter()
        .flat_map(|node| match node {
            MdNode::Paragraph { children } => children,
            other => vec![other],
        })
        .collect()
}

fn cell_to_md(cell: &DocNode, cx: &DocContext) -> MdNode {
    MdNode::TableCell {
        children: splice_paragraphs(cx.convert_children(cell.content())),
    }
}

pub struct Table;

impl Plugin for Table {
    fn name(&self) -> &'static str {
        "table"
    }

    fn supports_md(&self, node: &MdNode) -> bool {
        matches!(node, MdNode::Table { .. })
    }

    fn to_doc(&self, node: &MdNode, cx: &MdContext) -> Option<Vec<DocNode>> {
        match node {
            MdNode::Table { children, .. } => {
                let rows = children
                    .iter()
                    .map(|row| DocNode::TableRow {
                        content: row
                            .children()
                            .iter()
                            .map(|cell| DocNode::TableCell {
                                content: cx.convert_children(cell.children()),
                            })
                            .collect(),
                    })
                    .collect();
                Some(vec![DocNode::Table { content: rows }])
            }
            _ => None,
        }
    }

    fn supports_doc(&self, node: &DocNode) -> Option<bool> {
        Some(matches!(node, DocNode::Table { .. }))
    }

    fn from_doc(&self, node: &DocNode, cx: &DocContext) -> Option<Vec<MdNode>> {
        match node {
            DocNode::Table { content } => {
                let rows = content
                    .iter()
                    .map(|row| MdNode::TableRow {
                        children: row
                            .content()
                            .iter()
                            .map(|cell| cell_to_md(cell, cx))
                            .collect(),
                    })
                    .collect();
                Some(vec![MdNode::Table {
                    alignments: Vec::new(),
                    children: rows,
                }])
            }
            _ => None,
        }
    }
}

pub struct TableRow;

impl Plugin for TableRow {
    fn name(&self) -> &'static str {
        "tableRow"
    }

    fn supports_md(&self, node: &MdNode) -> bool {
        matches!(node, MdNode::TableRow { .. })
    }

    fn to_doc(&self, node: &MdNode, cx: &MdContext) -> Option<Vec<DocNode>> {
        match node {
            MdNode::TableRow { children } => Some(vec![DocNode::TableRow {
                content: children
                    .iter()
                    .map(|cell| DocNode::TableCell {
                        content: cx.convert_children(cell.children()),
                    })
                    .collect(),
            }]),
            _ => None,
        }
    }

    fn supports_doc(&self, node: &DocNode) -> Option<bool> {
        Some(matches!(node, DocNode::TableRow { .. }))
    }

    fn from_doc(&self, node: &DocNode, cx: &DocContext) -> Option<Vec<MdNode>> {
        match node {
            DocNode::TableRow { content } => Some(vec![MdNode::TableRow {
                children: content.iter().map(|cell| cell_to_md(cell, cx)).collect(),
            }]),
            _ => None,
        }
    }
}

pub struct TableCell;

impl Plugin for TableCell {
    fn name(&self) -> &'static str {
        "tableCell"
    }

    fn supports_md(&self, node: &MdNode) -> bool {
        matches!(node, MdNode::TableCell { .. })
    }

    fn to_doc(&self, node: &MdNode, cx: &MdContext) -> Option<Vec<DocNode>> {
        match node {
            MdNode::TableCell { children } => Some(vec![DocNode::TableCell {
                content: cx.convert_children(children),
            }]),
            _ => None,
        }
    }

    fn supports_doc(&self, node: &DocNode) -> Option<bool> {
        Some(matches!(node, DocNode::TableCell { .. }))
    }

    fn from_doc(&self, node: &DocNode, cx: &DocContext) -> Option<Vec<MdNode>> {
        match node {
            DocNode::TableCell { .. } => Some(vec![cell_to_md(node, cx)]),
            _ => None,
        }
    }
}
