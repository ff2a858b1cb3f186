//! The two recursive tree walkers and the public conversion entry points
//!
//! Both directions share the same shape: per node, ask the picker for an
//! owner; an owner that returns a conversion wins; everything else goes
//! through a small default converter that degrades to content rather than
//! dropping leaf text. Results are flattened and compacted as they bubble
//! up, so plugins may return one node, several, or nothing.
//!
//! Contexts are per-direction and per-call: they hold the plugin-set
//! snapshot and the optional warning hook, nothing else. Conversions never
//! mutate their inputs and build fresh trees throughout.

use crate::doc::{DocNode, Document};
use crate::md::{parse_markdown, print_markdown, MdNode, PrintStyle};
use crate::picker::{pick_for_document, pick_for_markdown};
use crate::plugin::PluginSet;
use crate::registry;
use crate::ConvertError;

/// Per-occurrence diagnostic hook for silent-omission and
/// degrade-to-content events.
pub type WarnFn = fn(&str);

/// Options for [`markdown_to_document`].
#[derive(Debug, Clone, Default)]
pub struct MdToDocOptions {
    /// Explicit plugin set; defaults to the process-wide active set.
    pub plugins: Option<PluginSet>,
    /// Called once per dropped or flattened node.
    pub on_warn: Option<WarnFn>,
}

/// Options for [`document_to_markdown`].
#[derive(Debug, Clone)]
pub struct DocToMdOptions {
    /// Explicit plugin set; defaults to the process-wide active set.
    pub plugins: Option<PluginSet>,
    /// Print style; defaults to the canonical style.
    pub style: PrintStyle,
    /// Called once per dropped or flattened node.
    pub on_warn: Option<WarnFn>,
}

impl Default for DocToMdOptions {
    fn default() -> Self {
        DocToMdOptions {
            plugins: None,
            style: PrintStyle::default(),
            on_warn: None,
        }
    }
}

/// Convert Markdown text into a document tree.
///
/// The adapter accepts every input string, so this is total; unrecognized
/// constructs degrade per the default-converter rules instead of failing.
pub fn markdown_to_document(text: &str, options: &MdToDocOptions) -> Document {
    let plugins = options
        .plugins
        .clone()
        .unwrap_or_else(registry::active);
    let root = parse_markdown(text);
    let cx = MdContext::new(&plugins, options.on_warn);
    Document::new(cx.convert(&root))
}

/// Convert a document tree into Markdown text.
pub fn document_to_markdown(
    doc: &Document,
    options: &DocToMdOptions,
) -> Result<String, ConvertError> {
    let plugins = options
        .plugins
        .clone()
        .unwrap_or_else(registry::active);
    let cx = DocContext::new(&plugins, options.on_warn);
    let children = cx.convert_children(&doc.content);
    print_markdown(&MdNode::Root { children }, &options.style)
}

/// Markdown → Document conversion context.
pub struct MdContext<'a> {
    plugins: &'a PluginSet,
    on_warn: Option<WarnFn>,
}

impl<'a> MdContext<'a> {
    fn new(plugins: &'a PluginSet, on_warn: Option<WarnFn>) -> Self {
        MdContext { plugins, on_warn }
    }

    /// Convert one Markdown node into zero or more document nodes.
    pub fn convert(&self, node: &MdNode) -> Vec<DocNode> {
        if let Some(plugin) = pick_for_markdown(node, self.plugins) {
            if let Some(converted) = plugin.to_doc(node, self) {
                return converted;
            }
        }
        self.default_convert(node)
    }

    /// Convert a child list, flattening and compacting the results.
    pub fn convert_children(&self, nodes: &[MdNode]) -> Vec<DocNode> {
        nodes.iter().flat_map(|node| self.convert(node)).collect()
    }

    fn warn(&self, message: &str) {
        if let Some(warn) = self.on_warn {
            warn(message);
        }
    }

    fn default_convert(&self, node: &MdNode) -> Vec<DocNode> {
        match node {
            MdNode::Root { children } => self.convert_children(children),
            MdNode::Paragraph { children } => vec![DocNode::Paragraph {
                content: self.convert_children(children),
            }],
            MdNode::Text { value } => vec![DocNode::text(value.clone())],
            other => {
                let children = other.children();
                if children.is_empty() {
                    self.warn(&format!("dropping unowned markdown node '{}'", other.kind()));
                    Vec::new()
                } else {
                    self.warn(&format!(
                        "flattening unowned markdown node '{}' to its content",
                        other.kind()
                    ));
                    self.convert_children(children)
                }
            }
        }
    }
}

/// Document → Markdown conversion context.
pub struct DocContext<'a> {
    plugins: &'a PluginSet,
    on_warn: Option<WarnFn>,
}

impl<'a> DocContext<'a> {
    fn new(plugins: &'a PluginSet, on_warn: Option<WarnFn>) -> Self {
        DocContext { plugins, on_warn }
    }

    /// Convert one document node into zero or more Markdown nodes.
    pub fn convert(&self, node: &DocNode) -> Vec<MdNode> {
        if let Some(plugin) = pick_for_document(node, self.plugins) {
            if let Some(converted) = plugin.from_doc(node, self) {
                return converted;
            }
        }
        self.default_convert(node)
    }

    /// Convert a child list, flattening and compacting the results.
    pub fn convert_children(&self, nodes: &[DocNode]) -> Vec<MdNode> {
        nodes.iter().flat_map(|node| self.convert(node)).collect()
    }

    fn warn(&self, message: &str) {
        if let Some(warn) = self.on_warn {
            warn(message);
        }
    }

    fn default_convert(&self, node: &DocNode) -> Vec<MdNode> {
        match node {
            // Marks are consumed by mark-owning plugins; only bare text
            // reaches this path.
            DocNode::Text { text, .. } => vec![MdNode::Text {
                value: text.clone(),
            }],
            DocNode::Paragraph { content } => vec![MdNode::Paragraph {
                children: self.convert_children(content),
            }],
            other => {
                let content = other.content();
                if content.is_empty() {
                    self.warn(&format!("dropping unowned document node '{}'", other.tag()));
                    Vec::new()
                } else {
                    self.warn(&format!(
                        "flattening unowned document node '{}' to its content",
                        other.tag()
                    ));
                    self.convert_children(content)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc::{HeadingAttrs, Mark};

    fn to_doc(text: &str) -> Document {
        markdown_to_document(text, &MdToDocOptions::default())
    }

    fn to_md(doc: &Document) -> String {
        document_to_markdown(doc, &DocToMdOptions::default()).unwrap()
    }

    #[test]
    fn test_bold_run_splits_paragraph_into_three_text_nodes() {
        let doc = to_doc("A **bold** move\n");
        match &doc.content[0] {
            DocNode::Paragraph { content } => {
                assert_eq!(content.len(), 3);
                assert_eq!(content[0], DocNode::text("A "));
                assert_eq!(
                    content[1],
                    DocNode::Text {
                        text: "bold".to_string(),
                        marks: vec![Mark::Bold],
                    }
                );
                assert_eq!(content[2], DocNode::text(" move"));
            }
            other => panic!("Expected paragraph, got {other:?}"),
        }
    }

    #[test]
    fn test_heading_level() {
        let doc = to_doc("# Hello\n");
        match &doc.content[0] {
            DocNode::Heading { attrs, content } => {
                assert_eq!(attrs.level, 1);
                assert_eq!(content[0], DocNode::text("Hello"));
            }
            other => panic!("Expected heading, got {other:?}"),
        }
    }

    #[test]
    fn test_marked_runs_print_their_construct() {
        let doc = Document::new(vec![DocNode::Paragraph {
            content: vec![
                DocNode::text("A "),
                DocNode::Text {
                    text: "bold".to_string(),
                    marks: vec![Mark::Bold],
                },
                DocNode::text(" move"),
            ],
        }]);
        assert_eq!(to_md(&doc), "A **bold** move\n");
    }

    #[test]
    fn test_heading_depth_clamps() {
        let doc = Document::new(vec![DocNode::Heading {
            attrs: HeadingAttrs { level: 9 },
            content: vec![DocNode::text("deep")],
        }]);
        assert_eq!(to_md(&doc), "###### deep\n");
    }

    #[test]
    fn test_unknown_childless_node_drops_silently() {
        let doc = to_doc("***\n");
        assert!(doc.content.is_empty());
    }

    #[test]
    fn test_horizontal_rule_drops_on_the_way_out() {
        let doc = Document::new(vec![
            DocNode::Paragraph {
                content: vec![DocNode::text("a")],
            },
            DocNode::HorizontalRule,
            DocNode::Paragraph {
                content: vec![DocNode::text("b")],
            },
        ]);
        assert_eq!(to_md(&doc), "a\n\nb\n");
    }

    #[test]
    fn test_empty_plugin_set_degrades_to_content() {
        let options = MdToDocOptions {
            plugins: Some(PluginSet::empty()),
            on_warn: None,
        };
        let doc = markdown_to_document("# Heading text\n", &options);
        // No heading plugin: the heading flattens to its inline content.
        assert_eq!(doc.content, vec![DocNode::text("Heading text")]);
    }

    #[test]
    fn test_empty_input_yields_empty_document() {
        assert_eq!(to_doc(""), Document::default());
    }
}
