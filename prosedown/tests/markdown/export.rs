//! Export tests (document tree → Markdown)
//!
//! These verify the printed text for documents built the way the editor
//! builds them, including the canonical print style.

use crate::common::{to_doc, to_md};
use insta::assert_snapshot;
use prosedown::doc::{
    CodeBlockAttrs, DocNode, HeadingAttrs, OrderedListAttrs, TaskItemAttrs,
};
use prosedown::{document_to_markdown, DocToMdOptions, Document, Mark, PrintStyle};

fn paragraph(text: &str) -> DocNode {
    DocNode::Paragraph {
        content: vec![DocNode::text(text)],
    }
}

#[test]
fn test_marked_run_prints_strong() {
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
fn test_heading_prints_hash_prefixed() {
    let doc = Document::new(vec![DocNode::Heading {
        attrs: HeadingAttrs { level: 2 },
        content: vec![DocNode::text("Title")],
    }]);
    assert_snapshot!(to_md(&doc), @"## Title\n");
}

#[test]
fn test_task_list_round_trip_preserves_boxes() {
    assert_eq!(
        to_md(&to_doc("- [ ] todo\n- [x] done\n")),
        "- [ ] todo\n- [x] done\n"
    );
}

#[test]
fn test_ordered_markers_never_increment() {
    assert_eq!(to_md(&to_doc("1. one\n2. two\n")), "1. one\n1. two\n");
}

#[test]
fn test_list_tightness_is_forced() {
    assert_eq!(to_md(&to_doc("- a\n\n- b\n")), "- a\n- b\n");
}

#[test]
fn test_link_prints_resource_form() {
    let doc = Document::new(vec![DocNode::Paragraph {
        content: vec![DocNode::Text {
            text: "here".to_string(),
            marks: vec![Mark::link("https://example.com")],
        }],
    }]);
    assert_snapshot!(to_md(&doc), @"[here](https://example.com)\n");
}

#[test]
fn test_code_block_prints_backtick_fences() {
    let doc = Document::new(vec![DocNode::CodeBlock {
        attrs: CodeBlockAttrs {
            language: Some("rust".to_string()),
        },
        content: vec![DocNode::text("fn main() {}")],
    }]);
    assert_eq!(to_md(&doc), "```rust\nfn main() {}\n```\n");
}

#[test]
fn test_ordered_start_above_one_is_kept() {
    let doc = Document::new(vec![DocNode::OrderedList {
        attrs: OrderedListAttrs { start: Some(3) },
        content: vec![
            DocNode::ListItem {
                content: vec![paragraph("three")],
            },
            DocNode::ListItem {
                content: vec![paragraph("four")],
            },
        ],
    }]);
    assert_eq!(to_md(&doc), "3. three\n3. four\n");
}

#[test]
fn test_task_item_without_attrs_prints_unchecked() {
    let doc = Document::new(vec![DocNode::TaskList {
        content: vec![DocNode::TaskItem {
            attrs: TaskItemAttrs::default(),
            content: vec![paragraph("later")],
        }],
    }]);
    assert_eq!(to_md(&doc), "- [ ] later\n");
}

#[test]
fn test_empty_item_children_do_not_loosen_the_list() {
    let doc = Document::new(vec![DocNode::BulletList {
        content: vec![
            DocNode::ListItem {
                content: vec![paragraph("a"), DocNode::Paragraph { content: vec![] }],
            },
            DocNode::ListItem {
                content: vec![DocNode::text(""), paragraph("b")],
            },
        ],
    }]);
    assert_eq!(to_md(&doc), "- a\n- b\n");
}

#[test]
fn test_plus_bullet_style_override() {
    let options = DocToMdOptions {
        style: PrintStyle {
            bullet: '+',
            ..PrintStyle::default()
        },
        ..DocToMdOptions::default()
    };
    let doc = to_doc("- a\n- b\n");
    assert_eq!(
        document_to_markdown(&doc, &options).unwrap(),
        "+ a\n+ b\n"
    );
}

#[test]
fn test_incrementing_style_override() {
    let options = DocToMdOptions {
        style: PrintStyle {
            increment_ordered: true,
            ..PrintStyle::default()
        },
        ..DocToMdOptions::default()
    };
    let doc = to_doc("1. one\n2. two\n");
    let printed = document_to_markdown(&doc, &options).unwrap();
    assert!(printed
        .lines()
        .any(|line| line.trim_start().starts_with("2.")));
}

#[test]
fn test_empty_document_prints_empty() {
    assert_eq!(to_md(&Document::default()), "");
}

#[test]
fn test_blockquote_export() {
    let doc = Document::new(vec![DocNode::Blockquote {
        content: vec![paragraph("quoted")],
    }]);
    assert_snapshot!(to_md(&doc), @"> quoted\n");
}
