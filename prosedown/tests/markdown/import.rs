//! Import tests (Markdown → document tree)
//!
//! These verify the document trees produced for each covered construct,
//! including the dispatch rules that decide which plugin owns a node.

use crate::common::to_doc;
use prosedown::doc::{DocNode, HeadingAttrs};
use prosedown::{markdown_to_document, Document, Mark, MdToDocOptions, PluginSet};

#[test]
fn test_bold_move_paragraph_has_three_runs() {
    let doc = to_doc("A **bold** move\n");

    assert_eq!(
        doc,
        Document::new(vec![DocNode::Paragraph {
            content: vec![
                DocNode::text("A "),
                DocNode::Text {
                    text: "bold".to_string(),
                    marks: vec![Mark::Bold],
                },
                DocNode::text(" move"),
            ],
        }])
    );
}

#[test]
fn test_heading_level_one() {
    let doc = to_doc("# Hello\n");

    assert_eq!(
        doc.content[0],
        DocNode::Heading {
            attrs: HeadingAttrs { level: 1 },
            content: vec![DocNode::text("Hello")],
        }
    );
}

#[test]
fn test_all_heading_levels() {
    for level in 1..=6u8 {
        let source = format!("{} title\n", "#".repeat(level as usize));
        let doc = to_doc(&source);
        match &doc.content[0] {
            DocNode::Heading { attrs, .. } => assert_eq!(attrs.level, level),
            other => panic!("Expected heading for level {level}, got {other:?}"),
        }
    }
}

#[test]
fn test_table_first_child() {
    let doc = to_doc("| a | b |\n|---|---|\n| 1 | 2 |\n");
    assert!(matches!(doc.content[0], DocNode::Table { .. }));
}

#[test]
fn test_blockquote_nests_converted_children() {
    let doc = to_doc("> # Quoted title\n>\n> Body\n");
    match &doc.content[0] {
        DocNode::Blockquote { content } => {
            assert!(matches!(content[0], DocNode::Heading { .. }));
            assert!(matches!(content[1], DocNode::Paragraph { .. }));
        }
        other => panic!("Expected blockquote, got {other:?}"),
    }
}

#[test]
fn test_strike_and_italic_marks() {
    let doc = to_doc("~~gone~~ and *slanted*\n");
    match &doc.content[0] {
        DocNode::Paragraph { content } => {
            assert_eq!(
                content[0],
                DocNode::Text {
                    text: "gone".to_string(),
                    marks: vec![Mark::Strike],
                }
            );
            assert_eq!(
                content[2],
                DocNode::Text {
                    text: "slanted".to_string(),
                    marks: vec![Mark::Italic],
                }
            );
        }
        other => panic!("Expected paragraph, got {other:?}"),
    }
}

#[test]
fn test_nested_list_structure() {
    let doc = to_doc("- outer\n  - inner\n");
    match &doc.content[0] {
        DocNode::BulletList { content } => match &content[0] {
            DocNode::ListItem { content } => {
                assert!(matches!(content[0], DocNode::Paragraph { .. }));
                assert!(matches!(content[1], DocNode::BulletList { .. }));
            }
            other => panic!("Expected list item, got {other:?}"),
        },
        other => panic!("Expected bullet list, got {other:?}"),
    }
}

#[test]
fn test_task_list_claims_mixed_list() {
    // Task semantics take precedence even when only one item is checked.
    let doc = to_doc("- plain\n- [x] done\n");
    assert!(matches!(doc.content[0], DocNode::TaskList { .. }));
}

#[test]
fn test_ordered_list_carries_no_default_start() {
    let doc = to_doc("1. one\n2. two\n");
    let json = serde_json::to_value(&doc).unwrap();
    assert_eq!(json["content"][0]["type"], "orderedList");
    assert!(json["content"][0].get("attrs").is_none());
}

#[test]
fn test_thematic_break_vanishes() {
    let doc = to_doc("before\n\n---\n\nafter\n");
    assert_eq!(doc.content.len(), 2);
    assert!(doc
        .content
        .iter()
        .all(|node| matches!(node, DocNode::Paragraph { .. })));
}

#[test]
fn test_image_alt_text_is_dropped_with_the_image() {
    // No image plugin: the node is childless on the Markdown side and is
    // silently omitted.
    let doc = to_doc("![alt](image.png)\n");
    assert_eq!(
        doc,
        Document::new(vec![DocNode::Paragraph { content: vec![] }])
    );
}

#[test]
fn test_gap_warning_hook_fires() {
    // The hook is a plain fn, so it records through a static.
    use std::sync::atomic::{AtomicUsize, Ordering};
    static CALLS: AtomicUsize = AtomicUsize::new(0);

    fn record(_message: &str) {
        CALLS.fetch_add(1, Ordering::SeqCst);
    }

    let options = MdToDocOptions {
        plugins: None,
        on_warn: Some(record),
    };
    markdown_to_document("---\n", &options);
    assert!(CALLS.load(Ordering::SeqCst) > 0);
}

#[test]
fn test_override_plugins_are_used_for_the_call() {
    let options = MdToDocOptions {
        plugins: Some(PluginSet::empty()),
        on_warn: None,
    };
    let doc = markdown_to_document("# flattened\n", &options);
    assert_eq!(doc.content, vec![DocNode::text("flattened")]);
}

#[test]
fn test_parser_failure_policy_reference() {
    // The documented caller-side policy for unparseable payloads is to
    // substitute the empty document; the typed boundary applies it when
    // document JSON does not carry a doc root.
    let doc: Document = serde_json::from_str(r#"{"type":"bogus","content":[]}"#).unwrap();
    assert_eq!(doc, Document::default());
}
