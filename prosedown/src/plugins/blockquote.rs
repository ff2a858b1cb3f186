//! Blockquote plugin: pure children passthrough in both directions.

use crate::convert::{DocContext, MdContext};
use crate::doc::DocNode;
use crate::md::MdNode;
use crate::plugin::Plugin;

pub struct Blockquote;

impl Plugin for Blockquote {
    fn name(&self) -> &'static str {
        "blockquote"
    }

    fn supports_md(&self, node: &MdNode) -> bool {
        matches!(node, MdNode::Blockquote { .. })
    }

    fn to_doc(&self, node: &MdNode, cx: &MdContext) -> Option<Vec<DocNode>> {
        match node {
            MdNode::Blockquote { children } => Some(vec![DocNode::Blockquote {
                content: cx.convert_children(children),
            }]),
            _ => None,
        }
    }

    fn supports_doc(&self, node: &DocNode) -> Option<bool> {
        Some(matches!(node, DocNode::Blockquote { .. }))
    }

    fn from_doc(&self, node: &DocNode, cx: &DocContext) -> Option<Vec<MdNode>> {
        match node {
            DocNode::Blockquote { content } => Some(vec![MdNode::Blockquote {
                children: cx.convert_children(content),
            }]),
            _ => None,
        }
    }
}
