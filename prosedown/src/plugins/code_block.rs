//! Code-block plugin: fenced code ↔ codeBlock elements.

use crate::convert::{DocContext, MdContext};
use crate::doc::{CodeBlockAttrs, DocNode};
use crate::md::MdNode;
use crate::plugin::Plugin;

pub struct CodeBlock;

impl Plugin for CodeBlock {
    fn name(&self) -> &'static str {
        "codeBlock"
    }

    fn supports_md(&self, node: &MdNode) -> bool {
        matches!(node, MdNode::CodeBlock { .. })
    }

    fn to_doc(&self, node: &MdNode, _cx: &MdContext) -> Option<Vec<DocNode>> {
        match node {
            MdNode::CodeBlock { lang, literal } => Some(vec![DocNode::CodeBlock {
                attrs: CodeBlockAttrs {
                    language: lang.clone(),
                },
                content: if literal.is_empty() {
                    Vec::new()
                } else {
                    vec![DocNode::text(literal.clone())]
                },
            }]),
            _ => None,
        }
    }

    fn supports_doc(&self, node: &DocNode) -> Option<bool> {
        Some(matches!(node, DocNode::CodeBlock { .. }))
    }

    fn from_doc(&self, node: &DocNode, _cx: &DocContext) -> Option<Vec<MdNode>> {
        match node {
            DocNode::CodeBlock { attrs, content } => {
                let literal: String = content
                    .iter()
                    .map(|child| match child {
                        DocNode::Text { text, .. } => text.as_str(),
                        _ => "",
                    })
                    .collect();
                Some(vec![MdNode::CodeBlock {
                    lang: attrs.language.clone(),
                    literal,
                }])
            }
            _ => None,
        }
    }
}
