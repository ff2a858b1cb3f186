//! Markdown printing (generic Markdown tree → text)
//!
//! Builds a comrak AST from the generic tree and lets comrak's commonmark
//! serializer produce the text. Pipeline: MdNode tree → comrak AST →
//! Markdown string → post-processing.
//!
//! comrak does not expose options for every knob of the canonical style
//! (ordered-marker increment, rule repetition, resource-form links), so
//! those are enforced structurally during AST construction and by a
//! fence-aware post-processing pass over the serialized text.

use crate::error::ConvertError;
use crate::md::ast::{Alignment, MdNode};
use crate::md::parser::comrak_options;
use comrak::nodes::{
    Ast, AstNode, ListDelimType, ListType, NodeCode, NodeCodeBlock, NodeHeading, NodeHtmlBlock,
    NodeLink, NodeList, NodeTable, NodeValue, TableAlignment,
};
use comrak::{format_commonmark, Arena, ListStyleType};
use std::cell::RefCell;

/// Canonical print style, overridable per call.
///
/// Emphasis and strong delimiters are fixed by the serializer (`*text*`
/// and `**text**`), which is already the canonical form. Headings are
/// always printed `#`-prefixed and code blocks always fenced.
#[derive(Debug, Clone)]
pub struct PrintStyle {
    /// Unordered list bullet (`-`, `+` or `*`).
    pub bullet: char,
    /// Code fence character (backtick or tilde).
    pub fence: char,
    /// Number of dashes in a horizontal rule.
    pub rule_repetition: usize,
    /// When false (canonical), every item of an ordered list repeats the
    /// run's first marker instead of counting up.
    pub increment_ordered: bool,
}

impl Default for PrintStyle {
    fn default() -> Self {
        PrintStyle {
            bullet: '-',
            fence: '`',
            rule_repetition: 3,
            increment_ordered: false,
        }
    }
}

/// Print a generic Markdown tree to text in the given style.
pub fn print_markdown(root: &MdNode, style: &PrintStyle) -> Result<String, ConvertError> {
    let arena = Arena::new();
    let ast = build_node(&arena, root, style);

    let mut options = comrak_options();
    // Raw HTML carried by the tree is passed through verbatim.
    options.render.unsafe_ = true;
    options.render.list_style = match style.bullet {
        '+' => ListStyleType::Plus,
        '*' => ListStyleType::Star,
        _ => ListStyleType::Dash,
    };

    let mut output = Vec::new();
    format_commonmark(ast, &options, &mut output)
        .map_err(|e| ConvertError::Print(format!("comrak serialization failed: {e}")))?;
    let markdown = String::from_utf8(output)
        .map_err(|e| ConvertError::Print(format!("UTF-8 conversion failed: {e}")))?;

    Ok(postprocess(&markdown, style))
}

fn make<'a>(arena: &'a Arena<AstNode<'a>>, value: NodeValue) -> &'a AstNode<'a> {
    arena.alloc(AstNode::new(RefCell::new(Ast::new(value, (0, 0).into()))))
}

fn build_children<'a>(
    arena: &'a Arena<AstNode<'a>>,
    parent: &'a AstNode<'a>,
    children: &[MdNode],
    style: &PrintStyle,
) {
    for child in children {
        parent.append(build_node(arena, child, style));
    }
}

fn node_list(ordered: bool, start: u64, tight: bool, style: &PrintStyle) -> NodeList {
    NodeList {
        list_type: if ordered {
            ListType::Ordered
        } else {
            ListType::Bullet
        },
        marker_offset: 0,
        padding: 0,
        start: start as usize,
        delimiter: ListDelimType::Period,
        bullet_char: style.bullet as u8,
        tight,
    }
}

fn build_node<'a>(
    arena: &'a Arena<AstNode<'a>>,
    md: &MdNode,
    style: &PrintStyle,
) -> &'a AstNode<'a> {
    match md {
        MdNode::Root { children } => {
            let node = make(arena, NodeValue::Document);
            build_children(arena, node, children, style);
            node
        }

        MdNode::Paragraph { children } => {
            let node = make(arena, NodeValue::Paragraph);
            build_children(arena, node, children, style);
            node
        }

        MdNode::Heading { depth, children } => {
            let node = make(
                arena,
                NodeValue::Heading(NodeHeading {
                    level: (*depth).clamp(1, 6),
                    setext: false,
                }),
            );
            build_children(arena, node, children, style);
            node
        }

        MdNode::Blockquote { children } => {
            let node = make(arena, NodeValue::BlockQuote);
            build_children(arena, node, children, style);
            node
        }

        MdNode::List {
            ordered,
            start,
            tight,
            children,
        } => {
            let node = make(
                arena,
                NodeValue::List(node_list(*ordered, *start, *tight, style)),
            );
            build_children(arena, node, children, style);
            node
        }

        MdNode::ListItem { checked, children } => {
            let value = match checked {
                None => NodeValue::Item(node_list(false, 1, true, style)),
                Some(checked) => NodeValue::TaskItem(if *checked { Some('x') } else { None }),
            };
            let node = make(arena, value);
            build_children(arena, node, children, style);
            node
        }

        MdNode::CodeBlock { lang, literal } => {
            let mut literal = literal.clone();
            if !literal.is_empty() && !literal.ends_with('\n') {
                literal.push('\n');
            }
            make(
                arena,
                NodeValue::CodeBlock(NodeCodeBlock {
                    fenced: true,
                    fence_char: style.fence as u8,
                    fence_length: 3,
                    fence_offset: 0,
                    info: lang.clone().unwrap_or_default(),
                    literal,
                }),
            )
        }

        MdNode::ThematicBreak => make(arena, NodeValue::ThematicBreak),

        MdNode::HtmlBlock { literal } => make(
            arena,
            NodeValue::HtmlBlock(NodeHtmlBlock {
                block_type: 0,
                literal: literal.clone(),
            }),
        ),

        MdNode::Table {
            alignments,
            children,
        } => {
            let columns = children
                .first()
                .map(|row| row.children().len())
                .unwrap_or(0);
            let mut aligned: Vec<TableAlignment> =
                alignments.iter().map(build_alignment).collect();
            aligned.resize(columns, TableAlignment::None);

            let table = make(
                arena,
                NodeValue::Table(NodeTable {
                    alignments: aligned,
                    num_columns: columns,
                    num_rows: children.len(),
                    num_nonempty_cells: 0,
                }),
            );
            // GFM tables have exactly one header row: the first.
            for (index, row) in children.iter().enumerate() {
                let row_node = make(arena, NodeValue::TableRow(index == 0));
                build_children(arena, row_node, row.children(), style);
                table.append(row_node);
            }
            table
        }

        // A row outside a table; only reachable on malformed trees.
        MdNode::TableRow { children } => {
            let node = make(arena, NodeValue::TableRow(false));
            build_children(arena, node, children, style);
            node
        }

        MdNode::TableCell { children } => {
            let node = make(arena, NodeValue::TableCell);
            build_children(arena, node, children, style);
            node
        }

        MdNode::Text { value } => make(arena, NodeValue::Text(value.replace('\n', " "))),

        MdNode::Emphasis { children } => {
            let node = make(arena, NodeValue::Emph);
            build_children(arena, node, children, style);
            node
        }

        MdNode::Strong { children } => {
            let node = make(arena, NodeValue::Strong);
            build_children(arena, node, children, style);
            node
        }

        MdNode::Strikethrough { children } => {
            let node = make(arena, NodeValue::Strikethrough);
            build_children(arena, node, children, style);
            node
        }

        MdNode::InlineCode { literal } => make(
            arena,
            NodeValue::Code(NodeCode {
                num_backticks: 1,
                literal: literal.clone(),
            }),
        ),

        MdNode::HtmlInline { literal } => make(arena, NodeValue::HtmlInline(literal.clone())),

        MdNode::Link {
            url,
            title,
            children,
        } => {
            let node = make(
                arena,
                NodeValue::Link(NodeLink {
                    url: url.clone(),
                    title: title.clone().unwrap_or_default(),
                }),
            );
            // comrak prints a link whose single text child equals its url in
            // angle-bracket autolink form; split the literal so the resource
            // form `[text](url)` is kept.
            if let [MdNode::Text { value }] = children.as_slice() {
                let autolink = value == url || *url == format!("mailto:{value}");
                if autolink && value.chars().count() > 1 {
                    let split = value
                        .char_indices()
                        .nth(1)
                        .map(|(i, _)| i)
                        .unwrap_or(value.len());
                    node.append(make(arena, NodeValue::Text(value[..split].to_string())));
                    node.append(make(arena, NodeValue::Text(value[split..].to_string())));
                    return node;
                }
            }
            build_children(arena, node, children, style);
            node
        }

        MdNode::Image { url, title, alt } => {
            let node = make(
                arena,
                NodeValue::Image(NodeLink {
                    url: url.clone(),
                    title: title.clone().unwrap_or_default(),
                }),
            );
            node.append(make(arena, NodeValue::Text(alt.clone())));
            node
        }
    }
}

fn build_alignment(alignment: &Alignment) -> TableAlignment {
    match alignment {
        Alignment::None => TableAlignment::None,
        Alignment::Left => TableAlignment::Left,
        Alignment::Center => TableAlignment::Center,
        Alignment::Right => TableAlignment::Right,
    }
}

/// Clean up serializer output into the canonical text form: canonical
/// ordered markers and rules, comrak's list separator comments removed,
/// CRLF → LF, trailing whitespace stripped, one trailing newline.
fn postprocess(output: &str, style: &PrintStyle) -> String {
    let text = output.replace("\r\n", "\n").replace('\r', "\n");
    let text = if style.increment_ordered {
        text
    } else {
        renumber_ordered_markers(&text)
    };
    let text = normalize_rules(&text, style.rule_repetition);
    let text = text
        .replace("<!-- end list -->\n\n", "")
        .replace("<!-- end list -->\n", "");

    let mut cleaned = text
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n");
    let content_len = cleaned.trim_end_matches('\n').len();
    cleaned.truncate(content_len);
    if !cleaned.is_empty() {
        cleaned.push('\n');
    }
    cleaned
}

fn toggles_fence(trimmed: &str) -> bool {
    trimmed.starts_with("```") || trimmed.starts_with("~~~")
}

/// Split off the leading indentation and blockquote markers, so marker and
/// rule handling sees the line content regardless of quoting depth.
fn split_lead(line: &str) -> (&str, &str) {
    let content_start = line
        .find(|c: char| c != ' ' && c != '>')
        .unwrap_or(line.len());
    line.split_at(content_start)
}

/// Rewrite ordered-list markers so every item in a run repeats the run's
/// first number, with canonical one-space spacing. Runs are tracked per
/// lead width; a non-blank line at or above a run's lead that is not a
/// marker ends the run.
fn renumber_ordered_markers(text: &str) -> String {
    let mut runs: Vec<(usize, String)> = Vec::new();
    let mut in_fence = false;
    let mut out: Vec<String> = Vec::new();

    for line in text.lines() {
        let (lead, content) = split_lead(line);
        if toggles_fence(content) {
            in_fence = !in_fence;
            out.push(line.to_string());
            continue;
        }
        if in_fence || content.is_empty() {
            out.push(line.to_string());
            continue;
        }

        let indent = lead.len();
        if let Some((number, rest)) = split_ordered_marker(content) {
            while runs.last().map_or(false, |(run_indent, _)| *run_indent > indent) {
                runs.pop();
            }
            let first = match runs.last() {
                Some((run_indent, first)) if *run_indent == indent => first.clone(),
                _ => {
                    runs.push((indent, number.to_string()));
                    number.to_string()
                }
            };
            out.push(format!("{lead}{first}. {rest}"));
        } else {
            while runs.last().map_or(false, |(run_indent, _)| *run_indent >= indent) {
                runs.pop();
            }
            out.push(line.to_string());
        }
    }

    out.join("\n") + if text.ends_with('\n') { "\n" } else { "" }
}

/// Split `12.  rest` into the digits and the content after the marker.
/// The serializer only emits period delimiters.
fn split_ordered_marker(content: &str) -> Option<(&str, &str)> {
    let digits_end = content.find(|c: char| !c.is_ascii_digit())?;
    if digits_end == 0 {
        return None;
    }
    let rest = content[digits_end..].strip_prefix('.')?;
    if !rest.starts_with(' ') {
        return None;
    }
    Some((&content[..digits_end], rest.trim_start()))
}

/// Rewrite thematic-break lines to the canonical dash rule.
fn normalize_rules(text: &str, repetition: usize) -> String {
    let mut in_fence = false;
    let mut out: Vec<String> = Vec::new();

    for line in text.lines() {
        let (lead, content) = split_lead(line);
        if toggles_fence(content) {
            in_fence = !in_fence;
            out.push(line.to_string());
            continue;
        }
        if !in_fence && is_rule_line(content) {
            out.push(format!("{lead}{}", "-".repeat(repetition)));
        } else {
            out.push(line.to_string());
        }
    }

    out.join("\n") + if text.ends_with('\n') { "\n" } else { "" }
}

fn is_rule_line(trimmed: &str) -> bool {
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first @ ('-' | '*' | '_')) => {
            trimmed.len() >= 3 && chars.all(|c| c == first)
        }
        _ => false,
    }
}
