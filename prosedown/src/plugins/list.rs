//! List-family plugins: bulletList, orderedList, taskList, listItem,
//! taskItem
//!
//! A Markdown list is claimed by exactly one of the three list plugins.
//! Task semantics take precedence (priority 100) over ordered (10) and
//! plain bullets (0), so a list where any item declares a checkbox
//! classifies entirely as a task list. On the way back to Markdown each
//! item's children are cleaned of empty leftovers, a leading paragraph is
//! spliced into the item to keep single-paragraph items from gaining an
//! indent level, and the whole result is forced tight — the document
//! model has no loose-list concept.

use crate::convert::{DocContext, MdContext};
use crate::doc::{DocNode, OrderedListAttrs, TaskItemAttrs};
use crate::md::{tighten, MdNode};
use crate::plugin::Plugin;

/// Whether any direct item carries task semantics.
fn has_task_item(items: &[MdNode]) -> bool {
    items
        .iter()
        .any(|item| matches!(item, MdNode::ListItem { checked: Some(_), .. }))
}

/// Markdown items → document listItem elements.
fn items_to_doc(items: &[MdNode], cx: &MdContext) -> Vec<DocNode> {
    items
        .iter()
        .map(|item| DocNode::ListItem {
            content: cx.convert_children(item.children()),
        })
        .collect()
}

/// Drop children that would make a generated list read as loose:
/// whitespace-only literal text and paragraphs with no real content.
fn drop_empty_children(nodes: Vec<MdNode>) -> Vec<MdNode> {
    nodes
        .into_iter()
        .filter(|node| match node {
            MdNode::Text { value } => !value.trim().is_empty(),
            MdNode::Paragraph { children } => children.iter().any(|child| {
                !matches!(child, MdNode::Text { value } if value.trim().is_empty())
            }),
            _ => true,
        })
        .collect()
}

/// If the first child is a paragraph, splice its children into the item.
fn splice_leading_paragraph(mut nodes: Vec<MdNode>) -> Vec<MdNode> {
    if matches!(nodes.first(), Some(MdNode::Paragraph { .. })) {
        if let MdNode::Paragraph { children } = nodes.remove(0) {
            let mut spliced = children;
            spliced.extend(nodes);
            return spliced;
        }
    }
    nodes
}

/// Document items → one tight Markdown list.
///
/// `task` selects whether items carry a `checked` flag; plain and ordered
/// lists never leak one.
fn build_md_list(
    ordered: bool,
    start: u64,
    items: &[DocNode],
    cx: &DocContext,
    task: bool,
) -> MdNode {
    let children = items
        .iter()
        .map(|item| {
            let mapped = cx.convert_children(item.content());
            let cleaned = drop_empty_children(mapped);
            let compacted = splice_leading_paragraph(cleaned);
            let checked = if task {
                match item {
                    DocNode::TaskItem { attrs, .. } => Some(attrs.checked),
                    _ => Some(false),
                }
            } else {
                None
            };
            MdNode::ListItem {
                checked,
                children: compacted,
            }
        })
        .collect();

    let mut list = MdNode::List {
        ordered,
        start,
        tight: true,
        children,
    };
    tighten(&mut list);
    list
}

pub struct BulletList;

impl Plugin for BulletList {
    fn name(&self) -> &'static str {
        "bulletList"
    }

    // Refuses lists that contain task items so taskList can claim them.
    fn supports_md(&self, node: &MdNode) -> bool {
        match node {
            MdNode::List {
                ordered, children, ..
            } => !ordered && !has_task_item(children),
            _ => false,
        }
    }

    fn to_doc(&self, node: &MdNode, cx: &MdContext) -> Option<Vec<DocNode>> {
        match node {
            MdNode::List { children, .. } => Some(vec![DocNode::BulletList {
                content: items_to_doc(children, cx),
            }]),
            _ => None,
        }
    }

    fn supports_doc(&self, node: &DocNode) -> Option<bool> {
        Some(matches!(node, DocNode::BulletList { .. }))
    }

    fn from_doc(&self, node: &DocNode, cx: &DocContext) -> Option<Vec<MdNode>> {
        match node {
            DocNode::BulletList { content } => {
                Some(vec![build_md_list(false, 1, content, cx, false)])
            }
            _ => None,
        }
    }
}

pub struct OrderedList;

impl Plugin for OrderedList {
    fn name(&self) -> &'static str {
        "orderedList"
    }

    fn priority(&self) -> i32 {
        10
    }

    fn supports_md(&self, node: &MdNode) -> bool {
        matches!(node, MdNode::List { ordered: true, .. })
    }

    fn to_doc(&self, node: &MdNode, cx: &MdContext) -> Option<Vec<DocNode>> {
        match node {
            MdNode::List {
                start, children, ..
            } => Some(vec![DocNode::OrderedList {
                // start defaults to 1 and is carried only when it differs.
                attrs: OrderedListAttrs {
                    start: if *start > 1 { Some(*start) } else { None },
                },
                content: items_to_doc(children, cx),
            }]),
            _ => None,
        }
    }

    fn supports_doc(&self, node: &DocNode) -> Option<bool> {
        Some(matches!(node, DocNode::OrderedList { .. }))
    }

    fn from_doc(&self, node: &DocNode, cx: &DocContext) -> Option<Vec<MdNode>> {
        match node {
            DocNode::OrderedList { attrs, content } => Some(vec![build_md_list(
                true,
                attrs.start.unwrap_or(1),
                content,
                cx,
                false,
            )]),
            _ => None,
        }
    }
}

pub struct TaskList;

impl Plugin for TaskList {
    fn name(&self) -> &'static str {
        "taskList"
    }

    fn priority(&self) -> i32 {
        100
    }

    // Any item with a checkbox turns the whole list into a task list.
    fn supports_md(&self, node: &MdNode) -> bool {
        match node {
            MdNode::List { children, .. } => has_task_item(children),
            _ => false,
        }
    }

    fn to_doc(&self, node: &MdNode, cx: &MdContext) -> Option<Vec<DocNode>> {
        match node {
            MdNode::List { children, .. } => {
                let items = children
                    .iter()
                    .map(|item| {
                        let checked = match item {
                            MdNode::ListItem { checked, .. } => *checked == Some(true),
                            _ => false,
                        };
                        DocNode::TaskItem {
                            attrs: TaskItemAttrs { checked },
                            content: cx.convert_children(item.children()),
                        }
                    })
                    .collect();
                Some(vec![DocNode::TaskList { content: items }])
            }
            _ => None,
        }
    }

    fn supports_doc(&self, node: &DocNode) -> Option<bool> {
        Some(matches!(node, DocNode::TaskList { .. }))
    }

    fn from_doc(&self, node: &DocNode, cx: &DocContext) -> Option<Vec<MdNode>> {
        match node {
            DocNode::TaskList { content } => Some(vec![build_md_list(false, 1, content, cx, true)]),
            _ => None,
        }
    }
}

pub struct ListItem;

impl Plugin for ListItem {
    fn name(&self) -> &'static str {
        "listItem"
    }

    fn supports_md(&self, node: &MdNode) -> bool {
        matches!(node, MdNode::ListItem { .. })
    }

    fn to_doc(&self, node: &MdNode, cx: &MdContext) -> Option<Vec<DocNode>> {
        match node {
            MdNode::ListItem { children, .. } => Some(vec![DocNode::ListItem {
                content: cx.convert_children(children),
            }]),
            _ => None,
        }
    }

    fn supports_doc(&self, node: &DocNode) -> Option<bool> {
        Some(matches!(node, DocNode::ListItem { .. }))
    }

    fn from_doc(&self, node: &DocNode, cx: &DocContext) -> Option<Vec<MdNode>> {
        match node {
            DocNode::ListItem { content } => Some(vec![MdNode::ListItem {
                checked: None,
                children: cx.convert_children(content),
            }]),
            _ => None,
        }
    }
}

pub struct TaskItem;

impl Plugin for TaskItem {
    fn name(&self) -> &'static str {
        "taskItem"
    }

    fn supports_md(&self, node: &MdNode) -> bool {
        matches!(node, MdNode::ListItem { checked: Some(_), .. })
    }

    fn to_doc(&self, node: &MdNode, cx: &MdContext) -> Option<Vec<DocNode>> {
        match node {
            MdNode::ListItem { checked, children } => Some(vec![DocNode::TaskItem {
                attrs: TaskItemAttrs {
                    checked: *checked == Some(true),
                },
                content: cx.convert_children(children),
            }]),
            _ => None,
        }
    }

    fn supports_doc(&self, node: &DocNode) -> Option<bool> {
        Some(matches!(node, DocNode::TaskItem { .. }))
    }

    fn from_doc(&self, node: &DocNode, cx: &DocContext) -> Option<Vec<MdNode>> {
        match node {
            DocNode::TaskItem { attrs, content } => Some(vec![MdNode::ListItem {
                checked: Some(attrs.checked),
                children: cx.convert_children(content),
            }]),
            _ => None,
        }
    }
}
