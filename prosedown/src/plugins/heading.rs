//! Heading plugin: `#`-prefixed headings ↔ heading elements.

use crate::convert::{DocContext, MdContext};
use crate::doc::{DocNode, HeadingAttrs};
use crate::md::MdNode;
use crate::plugin::Plugin;

pub struct Heading;

impl Plugin for Heading {
    fn name(&self) -> &'static str {
        "heading"
    }

    fn supports_md(&self, node: &MdNode) -> bool {
        matches!(node, MdNode::Heading { .. })
    }

    fn to_doc(&self, node: &MdNode, cx: &MdContext) -> Option<Vec<DocNode>> {
        match node {
            MdNode::Heading { depth, children } => Some(vec![DocNode::Heading {
                // Out-of-range depths are clamped, never rejected.
                attrs: HeadingAttrs {
                    level: (*depth).clamp(1, 6),
                },
                content: cx.convert_children(children),
            }]),
            _ => None,
        }
    }

    fn supports_doc(&self, node: &DocNode) -> Option<bool> {
        Some(matches!(node, DocNode::Heading { .. }))
    }

    fn from_doc(&self, node: &DocNode, cx: &DocContext) -> Option<Vec<MdNode>> {
        match node {
            DocNode::Heading { attrs, content } => Some(vec![MdNode::Heading {
                depth: attrs.level.clamp(1, 6),
                children: cx.convert_children(content),
            }]),
            _ => None,
        }
    }
}
