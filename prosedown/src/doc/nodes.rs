//! Core data structures for the document tree.
//!
//! The document side mirrors the JSON the editor framework works with:
//! a `doc` root, element nodes carrying a type tag plus optional attributes
//! and ordered children, and text nodes carrying an ordered mark set.
//! The conversion engine only produces and consumes this plain data; it
//! never reaches into live editor state.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Root of a document tree.
///
/// Serializes as `{"type": "doc", "content": [...]}`. Deserializing a value
/// whose `type` is not `"doc"` yields the empty document rather than an
/// error, so malformed editor payloads degrade to a blank canvas.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub content: Vec<DocNode>,
}

impl Document {
    pub fn new(content: Vec<DocNode>) -> Self {
        Document { content }
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Document", 2)?;
        state.serialize_field("type", "doc")?;
        state.serialize_field("content", &self.content)?;
        state.end()
    }
}

#[derive(Deserialize)]
struct RawDocument {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    content: Vec<DocNode>,
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawDocument::deserialize(deserializer)?;
        if raw.kind != "doc" {
            return Ok(Document::default());
        }
        Ok(Document { content: raw.content })
    }
}

/// A node in the document tree: a text run or an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DocNode {
    Text {
        text: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        marks: Vec<Mark>,
    },
    Paragraph {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        content: Vec<DocNode>,
    },
    Heading {
        attrs: HeadingAttrs,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        content: Vec<DocNode>,
    },
    Blockquote {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        content: Vec<DocNode>,
    },
    BulletList {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        content: Vec<DocNode>,
    },
    OrderedList {
        #[serde(default, skip_serializing_if = "OrderedListAttrs::is_default")]
        attrs: OrderedListAttrs,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        content: Vec<DocNode>,
    },
    ListItem {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        content: Vec<DocNode>,
    },
    TaskList {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        content: Vec<DocNode>,
    },
    TaskItem {
        #[serde(default)]
        attrs: TaskItemAttrs,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        content: Vec<DocNode>,
    },
    CodeBlock {
        #[serde(default, skip_serializing_if = "CodeBlockAttrs::is_default")]
        attrs: CodeBlockAttrs,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        content: Vec<DocNode>,
    },
    Table {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        content: Vec<DocNode>,
    },
    TableRow {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        content: Vec<DocNode>,
    },
    TableCell {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        content: Vec<DocNode>,
    },
    HorizontalRule,
}

impl DocNode {
    /// Plain text node without marks.
    pub fn text(value: impl Into<String>) -> Self {
        DocNode::Text {
            text: value.into(),
            marks: Vec::new(),
        }
    }

    /// The node's type tag as it appears in the serialized form.
    ///
    /// Document-side plugin dispatch matches plugin names against this tag.
    pub fn tag(&self) -> &'static str {
        match self {
            DocNode::Text { .. } => "text",
            DocNode::Paragraph { .. } => "paragraph",
            DocNode::Heading { .. } => "heading",
            DocNode::Blockquote { .. } => "blockquote",
            DocNode::BulletList { .. } => "bulletList",
            DocNode::OrderedList { .. } => "orderedList",
            DocNode::ListItem { .. } => "listItem",
            DocNode::TaskList { .. } => "taskList",
            DocNode::TaskItem { .. } => "taskItem",
            DocNode::CodeBlock { .. } => "codeBlock",
            DocNode::Table { .. } => "table",
            DocNode::TableRow { .. } => "tableRow",
            DocNode::TableCell { .. } => "tableCell",
            DocNode::HorizontalRule => "horizontalRule",
        }
    }

    /// Ordered children of an element node; empty for text and leaf nodes.
    pub fn content(&self) -> &[DocNode] {
        match self {
            DocNode::Text { .. } | DocNode::HorizontalRule => &[],
            DocNode::Paragraph { content }
            | DocNode::Heading { content, .. }
            | DocNode::Blockquote { content }
            | DocNode::BulletList { content }
            | DocNode::OrderedList { content, .. }
            | DocNode::ListItem { content }
            | DocNode::TaskList { content }
            | DocNode::TaskItem { content, .. }
            | DocNode::CodeBlock { content, .. }
            | DocNode::Table { content }
            | DocNode::TableRow { content }
            | DocNode::TableCell { content } => content,
        }
    }
}

/// Inline formatting annotation carried by a text node.
///
/// At most one mark per type; the canonical order is link, code, bold,
/// italic, strike (see [`Mark::rank`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Mark {
    Link {
        #[serde(default, skip_serializing_if = "LinkAttrs::is_empty")]
        attrs: LinkAttrs,
    },
    Code,
    Bold,
    Italic,
    Strike,
}

impl Mark {
    /// Convenience constructor for a link mark.
    pub fn link(href: impl Into<String>) -> Self {
        Mark::Link {
            attrs: LinkAttrs {
                href: Some(href.into()),
            },
        }
    }

    /// The mark's type name as it appears in the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            Mark::Link { .. } => "link",
            Mark::Code => "code",
            Mark::Bold => "bold",
            Mark::Italic => "italic",
            Mark::Strike => "strike",
        }
    }

    /// Canonical precedence used when sorting a text node's marks.
    pub fn rank(&self) -> u8 {
        match self {
            Mark::Link { .. } => 0,
            Mark::Code => 1,
            Mark::Bold => 2,
            Mark::Italic => 3,
            Mark::Strike => 4,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkAttrs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl LinkAttrs {
    pub fn is_empty(&self) -> bool {
        self.href.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingAttrs {
    pub level: u8,
}

impl Default for HeadingAttrs {
    fn default() -> Self {
        HeadingAttrs { level: 1 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderedListAttrs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<u64>,
}

impl OrderedListAttrs {
    pub fn is_default(&self) -> bool {
        self.start.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskItemAttrs {
    #[serde(default)]
    pub checked: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeBlockAttrs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl CodeBlockAttrs {
    pub fn is_default(&self) -> bool {
        self.language.is_none()
    }
}
