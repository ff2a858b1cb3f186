//! Normalization and equivalence tests.

use crate::common::to_doc;
use proptest::prelude::*;
use prosedown::doc::{DocNode, OrderedListAttrs};
use prosedown::{
    are_documents_equivalent, are_markdown_equivalent, normalize_document, normalize_markdown,
    Document, Mark,
};

#[test]
fn test_mark_canonical_order() {
    let doc = Document::new(vec![DocNode::Text {
        text: "x".to_string(),
        marks: vec![Mark::Italic, Mark::Bold, Mark::Italic],
    }]);
    let normalized = normalize_document(&doc);
    assert_eq!(
        normalized.content[0],
        DocNode::Text {
            text: "x".to_string(),
            marks: vec![Mark::Bold, Mark::Italic],
        }
    );
}

#[test]
fn test_normalize_is_idempotent_on_parsed_documents() {
    let doc = to_doc("# h\n\n- [x] task\n\n1. one\n2. two\n");
    let once = normalize_document(&doc);
    let twice = normalize_document(&once);
    assert_eq!(once, twice);
}

#[test]
fn test_documents_with_default_spelling_differences_are_equivalent() {
    let explicit = Document::new(vec![DocNode::OrderedList {
        attrs: OrderedListAttrs { start: Some(1) },
        content: vec![],
    }]);
    let implicit = Document::new(vec![DocNode::OrderedList {
        attrs: OrderedListAttrs { start: None },
        content: vec![],
    }]);
    assert!(are_documents_equivalent(&explicit, &implicit));
    assert!(!are_documents_equivalent(
        &explicit,
        &Document::new(vec![DocNode::OrderedList {
            attrs: OrderedListAttrs { start: Some(2) },
            content: vec![],
        }])
    ));
}

#[test]
fn test_markdown_spelling_variants_normalize_together() {
    let pairs = [
        ("* a\n* b\n", "- a\n- b\n"),
        ("_soft_\n", "*soft*\n"),
        ("__hard__\n", "**hard**\n"),
        ("Title\n=====\n", "# Title\n"),
        ("***\n", "---\n"),
        ("1) one\n2) two\n", "1. one\n1. two\n"),
    ];
    for (left, right) in pairs {
        assert!(
            are_markdown_equivalent(left, right).unwrap(),
            "expected {left:?} == {right:?} after normalization"
        );
    }
}

#[test]
fn test_normalize_markdown_cleans_whitespace() {
    let normalized = normalize_markdown("a   \r\nb\n\n\n").unwrap();
    assert_eq!(normalized, "a b\n");
}

#[test]
fn test_markdown_equivalence_is_not_trivial() {
    assert!(!are_markdown_equivalent("# one\n", "# two\n").unwrap());
    assert!(!are_markdown_equivalent("- a\n", "1. a\n").unwrap());
}

// Properties over arbitrary mark soup: normalization is idempotent and
// produces unique, canonically ordered marks.

fn mark() -> impl Strategy<Value = Mark> {
    prop_oneof![
        Just(Mark::Bold),
        Just(Mark::Italic),
        Just(Mark::Strike),
        Just(Mark::Code),
        Just(Mark::link("https://example.com")),
    ]
}

fn marked_text() -> impl Strategy<Value = DocNode> {
    ("[a-z]{0,8}", prop::collection::vec(mark(), 0..6)).prop_map(|(text, marks)| DocNode::Text {
        text,
        marks,
    })
}

proptest! {
    #[test]
    fn prop_normalize_document_is_idempotent(runs in prop::collection::vec(marked_text(), 0..5)) {
        let doc = Document::new(runs);
        let once = normalize_document(&doc);
        let twice = normalize_document(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_normalized_marks_are_unique_and_ordered(node in marked_text()) {
        let doc = normalize_document(&Document::new(vec![node]));
        match &doc.content[0] {
            DocNode::Text { marks, .. } => {
                let ranks: Vec<u8> = marks.iter().map(Mark::rank).collect();
                let mut sorted = ranks.clone();
                sorted.sort();
                sorted.dedup();
                prop_assert_eq!(ranks, sorted);
            }
            other => prop_assert!(false, "expected text node, got {:?}", other),
        }
    }
}
