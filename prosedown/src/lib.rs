//! Bidirectional Markdown ↔ rich-document conversion
//!
//!     This crate converts Markdown text to and from the tree model used by a
//!     block/inline rich-text editing surface, losslessly for the covered
//!     construct set, through an extensible plugin set.
//!
//!     TLDR: For plugin authors:
//!         - The engine never parses or prints Markdown itself; comrak is the
//!           commonmark+GFM implementation and is consumed as a black box.
//!         - A plugin owns one construct (or one mark) and converts it in one or
//!           both directions; everything it does not own falls through to small
//!           default converters that degrade to content rather than dropping text.
//!         - Conversions take an explicit PluginSet; the process-wide registry is
//!           only the default-set holder for callers that do not pass one.
//!
//! Architecture
//!
//!     The core is two cooperating recursive-descent transducers over two closed
//!     tree grammars, with a priority-based dispatch rule and idempotent
//!     normalization on top. The goal is that a round trip through the document
//!     model is stable: normalize(print(convert_back(convert(parse(text))))) is
//!     the same text as normalize(text) for the covered constructs.
//!
//!     The file structure :
//!     .
//!     ├── error.rs            # ConvertError
//!     ├── md                  # Markdown-side tree + comrak adapter
//!     │   ├── ast.rs
//!     │   ├── parser.rs
//!     │   └── printer.rs
//!     ├── doc                 # Document-side tree (editor model)
//!     │   └── nodes.rs
//!     ├── plugin.rs           # Plugin trait + PluginSet value
//!     ├── registry.rs         # Process-wide default-set holder
//!     ├── picker.rs           # Ownership resolution per node
//!     ├── convert.rs          # The two walkers + public entry points
//!     ├── normalize.rs        # Canonicalization + equivalence
//!     ├── plugins             # Built-in construct set
//!     └── lib.rs
//!
//! Dispatch
//!
//!     Per node the picker selects at most one owning plugin. Markdown-side this
//!     is the highest-priority claimant; document-side three tiers apply: mark
//!     names first (a text node may be generically tagged and semantically
//!     marked; marks win), exposed predicates second, exact tag match last. Ties
//!     always resolve by registration order.
//!
//! Canonical style
//!
//!     Printed Markdown uses one style regardless of input spelling: `-`
//!     bullets, `1.` ordered markers that never auto-increment, `*`/`**`
//!     emphasis, backtick fences, three-dash rules, resource-form links and ATX
//!     headings. Lists derived from documents are always tight. The same
//!     printer backs text normalization, so equivalence comparison and
//!     conversion output cannot drift apart.

pub mod convert;
pub mod doc;
pub mod error;
pub mod md;
pub mod normalize;
pub mod picker;
pub mod plugin;
pub mod plugins;
pub mod registry;

pub use convert::{
    document_to_markdown, markdown_to_document, DocContext, DocToMdOptions, MdContext,
    MdToDocOptions,
};
pub use doc::{DocNode, Document, Mark};
pub use error::ConvertError;
pub use md::{MdNode, PrintStyle};
pub use normalize::{
    are_documents_equivalent, are_markdown_equivalent, normalize_document, normalize_markdown,
};
pub use plugin::{Plugin, PluginSet};
