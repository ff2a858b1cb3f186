//! Inline-mark plugins: bold, italic, strike, inline code, link
//!
//! Each plugin owns exactly one mark type in both directions.
//! Markdown → Document converts the construct's children first and then
//! stamps the mark onto every resulting text node, composing with marks
//! already present — nested emphasis accumulates marks on a single run
//! instead of nesting wrapper elements. Document → Markdown takes one
//! marked text node, strips it to literal text and wraps it in the owning
//! construct; adjacent identically-marked runs are wrapped independently.

use crate::convert::{DocContext, MdContext};
use crate::doc::{DocNode, Mark};
use crate::md::MdNode;
use crate::plugin::Plugin;

/// Append a mark to every text node in a converted child list.
fn apply_mark(nodes: Vec<DocNode>, mark: &Mark) -> Vec<DocNode> {
    nodes
        .into_iter()
        .map(|node| match node {
            DocNode::Text { text, mut marks } => {
                marks.push(mark.clone());
                DocNode::Text { text, marks }
            }
            other => other,
        })
        .collect()
}

/// Whether a node is a text node carrying the named mark.
fn has_mark(node: &DocNode, name: &str) -> bool {
    matches!(node, DocNode::Text { marks, .. } if marks.iter().any(|mark| mark.name() == name))
}

/// The literal text of a marked text node, stripped of its marks.
fn literal_of(node: &DocNode) -> Option<MdNode> {
    match node {
        DocNode::Text { text, .. } => Some(MdNode::Text {
            value: text.clone(),
        }),
        _ => None,
    }
}

pub struct Bold;

impl Plugin for Bold {
    fn name(&self) -> &'static str {
        "bold"
    }

    fn supports_md(&self, node: &MdNode) -> bool {
        matches!(node, MdNode::Strong { .. })
    }

    fn to_doc(&self, node: &MdNode, cx: &MdContext) -> Option<Vec<DocNode>> {
        match node {
            MdNode::Strong { children } => {
                Some(apply_mark(cx.convert_children(children), &Mark::Bold))
            }
            _ => None,
        }
    }

    fn supports_doc(&self, node: &DocNode) -> Option<bool> {
        Some(has_mark(node, "bold"))
    }

    fn from_doc(&self, node: &DocNode, _cx: &DocContext) -> Option<Vec<MdNode>> {
        Some(vec![MdNode::Strong {
            children: vec![literal_of(node)?],
        }])
    }
}

pub struct Italic;

impl Plugin for Italic {
    fn name(&self) -> &'static str {
        "italic"
    }

    fn supports_md(&self, node: &MdNode) -> bool {
        matches!(node, MdNode::Emphasis { .. })
    }

    fn to_doc(&self, node: &MdNode, cx: &MdContext) -> Option<Vec<DocNode>> {
        match node {
            MdNode::Emphasis { children } => {
                Some(apply_mark(cx.convert_children(children), &Mark::Italic))
            }
            _ => None,
        }
    }

    fn supports_doc(&self, node: &DocNode) -> Option<bool> {
        Some(has_mark(node, "italic"))
    }

    fn from_doc(&self, node: &DocNode, _cx: &DocContext) -> Option<Vec<MdNode>> {
        Some(vec![MdNode::Emphasis {
            children: vec![literal_of(node)?],
        }])
    }
}

pub struct Strike;

impl Plugin for Strike {
    fn name(&self) -> &'static str {
        "strike"
    }

    fn supports_md(&self, node: &MdNode) -> bool {
        matches!(node, MdNode::Strikethrough { .. })
    }

    fn to_doc(&self, node: &MdNode, cx: &MdContext) -> Option<Vec<DocNode>> {
        match node {
            MdNode::Strikethrough { children } => {
                Some(apply_mark(cx.convert_children(children), &Mark::Strike))
            }
            _ => None,
        }
    }

    fn supports_doc(&self, node: &DocNode) -> Option<bool> {
        Some(has_mark(node, "strike"))
    }

    fn from_doc(&self, node: &DocNode, _cx: &DocContext) -> Option<Vec<MdNode>> {
        Some(vec![MdNode::Strikethrough {
            children: vec![literal_of(node)?],
        }])
    }
}

pub struct Link;

impl Plugin for Link {
    fn name(&self) -> &'static str {
        "link"
    }

    fn supports_md(&self, node: &MdNode) -> bool {
        matches!(node, MdNode::Link { .. })
    }

    fn to_doc(&self, node: &MdNode, cx: &MdContext) -> Option<Vec<DocNode>> {
        match node {
            MdNode::Link { url, children, .. } => Some(apply_mark(
                cx.convert_children(children),
                &Mark::link(url.clone()),
            )),
            _ => None,
        }
    }

    fn supports_doc(&self, node: &DocNode) -> Option<bool> {
        Some(has_mark(node, "link"))
    }

    fn from_doc(&self, node: &DocNode, _cx: &DocContext) -> Option<Vec<MdNode>> {
        let href = match node {
            DocNode::Text { marks, .. } => marks.iter().find_map(|mark| match mark {
                Mark::Link { attrs } => attrs.href.clone(),
                _ => None,
            }),
            _ => None,
        };
        Some(vec![MdNode::Link {
            url: href.unwrap_or_default(),
            title: None,
            children: vec![literal_of(node)?],
        }])
    }
}

pub struct Code;

impl Plugin for Code {
    fn name(&self) -> &'static str {
        "code"
    }

    fn supports_md(&self, node: &MdNode) -> bool {
        matches!(node, MdNode::InlineCode { .. })
    }

    fn to_doc(&self, node: &MdNode, _cx: &MdContext) -> Option<Vec<DocNode>> {
        match node {
            MdNode::InlineCode { literal } => Some(vec![DocNode::Text {
                text: literal.clone(),
                marks: vec![Mark::Code],
            }]),
            _ => None,
        }
    }

    fn supports_doc(&self, node: &DocNode) -> Option<bool> {
        Some(has_mark(node, "code"))
    }

    fn from_doc(&self, node: &DocNode, _cx: &DocContext) -> Option<Vec<MdNode>> {
        match node {
            DocNode::Text { text, .. } => Some(vec![MdNode::InlineCode {
                literal: text.clone(),
            }]),
            _ => None,
        }
    }
}
