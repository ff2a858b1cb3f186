//! Text plugin: literal text passthrough.
//!
//! Marked text never reaches this plugin's document side — the picker's
//! mark tier routes it to the owning mark plugin first.

use crate::convert::{DocContext, MdContext};
use crate::doc::DocNode;
use crate::md::MdNode;
use crate::plugin::Plugin;

pub struct Text;

impl Plugin for Text {
    fn name(&self) -> &'static str {
        "text"
    }

    fn supports_md(&self, node: &MdNode) -> bool {
        matches!(node, MdNode::Text { .. })
    }

    fn to_doc(&self, node: &MdNode, _cx: &MdContext) -> Option<Vec<DocNode>> {
        match node {
            MdNode::Text { value } => Some(vec![DocNode::text(value.clone())]),
            _ => None,
        }
    }

    fn supports_doc(&self, node: &DocNode) -> Option<bool> {
        Some(matches!(node, DocNode::Text { .. }))
    }

    fn from_doc(&self, node: &DocNode, _cx: &DocContext) -> Option<Vec<MdNode>> {
        match node {
            DocNode::Text { text, .. } => Some(vec![MdNode::Text {
                value: text.clone(),
            }]),
            _ => None,
        }
    }
}
