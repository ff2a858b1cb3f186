//! Core data structures for the generic Markdown tree.
//!
//! This mirrors the shape the parser hands us: literal leaves, ordered
//! child lists, and a handful of construct-specific fields. The engine
//! treats parser output as immutable input and builds fresh trees on the
//! way out.

/// A node in the generic Markdown tree.
#[derive(Debug, Clone, PartialEq)]
pub enum MdNode {
    Root {
        children: Vec<MdNode>,
    },
    Paragraph {
        children: Vec<MdNode>,
    },
    Heading {
        depth: u8,
        children: Vec<MdNode>,
    },
    Blockquote {
        children: Vec<MdNode>,
    },
    List {
        ordered: bool,
        start: u64,
        tight: bool,
        children: Vec<MdNode>,
    },
    /// `checked` is present only for task-list items.
    ListItem {
        checked: Option<bool>,
        children: Vec<MdNode>,
    },
    CodeBlock {
        lang: Option<String>,
        literal: String,
    },
    ThematicBreak,
    HtmlBlock {
        literal: String,
    },
    Table {
        alignments: Vec<Alignment>,
        children: Vec<MdNode>,
    },
    TableRow {
        children: Vec<MdNode>,
    },
    TableCell {
        children: Vec<MdNode>,
    },
    Text {
        value: String,
    },
    Emphasis {
        children: Vec<MdNode>,
    },
    Strong {
        children: Vec<MdNode>,
    },
    Strikethrough {
        children: Vec<MdNode>,
    },
    InlineCode {
        literal: String,
    },
    HtmlInline {
        literal: String,
    },
    Link {
        url: String,
        title: Option<String>,
        children: Vec<MdNode>,
    },
    Image {
        url: String,
        title: Option<String>,
        alt: String,
    },
}

impl MdNode {
    /// The node's construct name, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            MdNode::Root { .. } => "root",
            MdNode::Paragraph { .. } => "paragraph",
            MdNode::Heading { .. } => "heading",
            MdNode::Blockquote { .. } => "blockquote",
            MdNode::List { .. } => "list",
            MdNode::ListItem { .. } => "listItem",
            MdNode::CodeBlock { .. } => "code",
            MdNode::ThematicBreak => "thematicBreak",
            MdNode::HtmlBlock { .. } => "html",
            MdNode::Table { .. } => "table",
            MdNode::TableRow { .. } => "tableRow",
            MdNode::TableCell { .. } => "tableCell",
            MdNode::Text { .. } => "text",
            MdNode::Emphasis { .. } => "emphasis",
            MdNode::Strong { .. } => "strong",
            MdNode::Strikethrough { .. } => "strikethrough",
            MdNode::InlineCode { .. } => "inlineCode",
            MdNode::HtmlInline { .. } => "htmlInline",
            MdNode::Link { .. } => "link",
            MdNode::Image { .. } => "image",
        }
    }

    /// Ordered children; empty for literal and leaf nodes.
    pub fn children(&self) -> &[MdNode] {
        match self {
            MdNode::Root { children }
            | MdNode::Paragraph { children }
            | MdNode::Heading { children, .. }
            | MdNode::Blockquote { children }
            | MdNode::List { children, .. }
            | MdNode::ListItem { children, .. }
            | MdNode::Table { children, .. }
            | MdNode::TableRow { children }
            | MdNode::TableCell { children }
            | MdNode::Emphasis { children }
            | MdNode::Strong { children }
            | MdNode::Strikethrough { children }
            | MdNode::Link { children, .. } => children,
            MdNode::CodeBlock { .. }
            | MdNode::ThematicBreak
            | MdNode::HtmlBlock { .. }
            | MdNode::Text { .. }
            | MdNode::InlineCode { .. }
            | MdNode::HtmlInline { .. }
            | MdNode::Image { .. } => &[],
        }
    }

    fn children_mut(&mut self) -> Option<&mut Vec<MdNode>> {
        match self {
            MdNode::Root { children }
            | MdNode::Paragraph { children }
            | MdNode::Heading { children, .. }
            | MdNode::Blockquote { children }
            | MdNode::List { children, .. }
            | MdNode::ListItem { children, .. }
            | MdNode::Table { children, .. }
            | MdNode::TableRow { children }
            | MdNode::TableCell { children }
            | MdNode::Emphasis { children }
            | MdNode::Strong { children }
            | MdNode::Strikethrough { children }
            | MdNode::Link { children, .. } => Some(children),
            _ => None,
        }
    }
}

/// Column alignment carried by a table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Alignment {
    None,
    Left,
    Center,
    Right,
}

/// Force tight semantics on every list and list item in the subtree.
///
/// The document model has no loose-list concept, so tight is the only
/// canonical form Document-derived Markdown can take.
pub fn tighten(node: &mut MdNode) {
    if let MdNode::List { tight, .. } = node {
        *tight = true;
    }
    if let Some(children) = node.children_mut() {
        for child in children {
            tighten(child);
        }
    }
}
