//! The editor-side document tree model.

pub mod nodes;

pub use nodes::{
    CodeBlockAttrs, DocNode, Document, HeadingAttrs, LinkAttrs, Mark, OrderedListAttrs,
    TaskItemAttrs,
};
