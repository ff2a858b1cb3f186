//! Markdown parsing (text → generic Markdown tree)
//!
//! Wraps comrak as the commonmark+GFM front end.
//! Pipeline: Markdown string → comrak AST → MdNode tree.

use crate::md::ast::{Alignment, MdNode};
use comrak::nodes::{AstNode, ListType, NodeValue, TableAlignment};
use comrak::{parse_document, Arena, ComrakOptions};

/// Extension set shared by the parser and the printer.
pub(crate) fn comrak_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options
}

/// Parse Markdown text into a generic Markdown tree.
///
/// comrak accepts every input string, so this cannot fail; adapter-level
/// parse failures are a contract of the boundary, not a live path.
pub fn parse_markdown(source: &str) -> MdNode {
    let arena = Arena::new();
    let options = comrak_options();
    let root = parse_document(&arena, source, &options);
    MdNode::Root {
        children: convert_children(root),
    }
}

fn convert_children<'a>(node: &'a AstNode<'a>) -> Vec<MdNode> {
    node.children().filter_map(convert_node).collect()
}

fn convert_node<'a>(node: &'a AstNode<'a>) -> Option<MdNode> {
    let converted = match &node.data.borrow().value {
        NodeValue::Document => MdNode::Root {
            children: convert_children(node),
        },

        NodeValue::Paragraph => MdNode::Paragraph {
            children: convert_children(node),
        },

        NodeValue::Heading(heading) => MdNode::Heading {
            depth: heading.level,
            children: convert_children(node),
        },

        NodeValue::BlockQuote => MdNode::Blockquote {
            children: convert_children(node),
        },

        NodeValue::List(list) => MdNode::List {
            ordered: matches!(list.list_type, ListType::Ordered),
            start: list.start as u64,
            tight: list.tight,
            children: convert_children(node),
        },

        NodeValue::Item(_) => MdNode::ListItem {
            checked: None,
            children: convert_children(node),
        },

        // Tasklist items replace plain items under the tasklist extension;
        // the symbol is present exactly when the box is checked.
        NodeValue::TaskItem(symbol) => MdNode::ListItem {
            checked: Some(symbol.is_some()),
            children: convert_children(node),
        },

        NodeValue::CodeBlock(code) => MdNode::CodeBlock {
            lang: if code.info.is_empty() {
                None
            } else {
                Some(code.info.clone())
            },
            literal: code
                .literal
                .strip_suffix('\n')
                .unwrap_or(&code.literal)
                .to_string(),
        },

        NodeValue::ThematicBreak => MdNode::ThematicBreak,

        NodeValue::HtmlBlock(html) => MdNode::HtmlBlock {
            literal: html.literal.clone(),
        },

        NodeValue::Table(table) => MdNode::Table {
            alignments: table.alignments.iter().map(convert_alignment).collect(),
            children: convert_children(node),
        },

        NodeValue::TableRow(_) => MdNode::TableRow {
            children: convert_children(node),
        },

        NodeValue::TableCell => MdNode::TableCell {
            children: convert_children(node),
        },

        NodeValue::Text(text) => MdNode::Text {
            value: text.clone(),
        },

        NodeValue::SoftBreak | NodeValue::LineBreak => MdNode::Text {
            value: " ".to_string(),
        },

        NodeValue::Emph => MdNode::Emphasis {
            children: convert_children(node),
        },

        NodeValue::Strong => MdNode::Strong {
            children: convert_children(node),
        },

        NodeValue::Strikethrough => MdNode::Strikethrough {
            children: convert_children(node),
        },

        NodeValue::Code(code) => MdNode::InlineCode {
            literal: code.literal.clone(),
        },

        NodeValue::HtmlInline(html) => MdNode::HtmlInline {
            literal: html.clone(),
        },

        NodeValue::Link(link) => MdNode::Link {
            url: link.url.clone(),
            title: if link.title.is_empty() {
                None
            } else {
                Some(link.title.clone())
            },
            children: convert_children(node),
        },

        NodeValue::Image(link) => MdNode::Image {
            url: link.url.clone(),
            title: if link.title.is_empty() {
                None
            } else {
                Some(link.title.clone())
            },
            alt: collect_text(node),
        },

        // Extensions we do not enable; skip
        _ => return None,
    };

    Some(converted)
}

/// Collect plain text from a subtree (used for image alt text).
fn collect_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut out = String::new();
    collect_text_into(node, &mut out);
    out
}

fn collect_text_into<'a>(node: &'a AstNode<'a>, out: &mut String) {
    for child in node.children() {
        match &child.data.borrow().value {
            NodeValue::Text(text) => out.push_str(text),
            NodeValue::Code(code) => out.push_str(&code.literal),
            NodeValue::SoftBreak | NodeValue::LineBreak => out.push(' '),
            _ => collect_text_into(child, out),
        }
    }
}

fn convert_alignment(alignment: &TableAlignment) -> Alignment {
    match alignment {
        TableAlignment::None => Alignment::None,
        TableAlignment::Left => Alignment::Left,
        TableAlignment::Center => Alignment::Center,
        TableAlignment::Right => Alignment::Right,
    }
}
