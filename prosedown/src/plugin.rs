//! Plugin trait definition and the plugin-set value
//!
//! A plugin is a named, prioritized unit owning one Markdown construct or
//! document tag/mark in one or both directions. Conversions never consult
//! plugins directly; the picker resolves at most one owner per node.

use crate::convert::{DocContext, MdContext};
use crate::doc::DocNode;
use crate::md::MdNode;
use std::fmt;
use std::sync::Arc;

/// Trait for conversion plugins
///
/// Implementors claim nodes on one or both sides and produce the converted
/// subtree for the nodes they own. All methods default to "not involved",
/// so a plugin only overrides the direction(s) it supports.
pub trait Plugin: Send + Sync {
    /// Unique name. Block plugins align it with the document tag they own
    /// (e.g. "heading"), mark plugins with their mark type (e.g. "bold").
    fn name(&self) -> &'static str;

    /// Higher wins when several plugins claim a node; ties resolve by
    /// registration order.
    fn priority(&self) -> i32 {
        0
    }

    /// Markdown-side claim.
    fn supports_md(&self, _node: &MdNode) -> bool {
        false
    }

    /// Markdown → Document conversion for an owned node. `None` falls
    /// through to the default converter.
    fn to_doc(&self, _node: &MdNode, _cx: &MdContext) -> Option<Vec<DocNode>> {
        None
    }

    /// Document-side predicate. `None` means the plugin does not expose a
    /// predicate at all and participates only in mark-name and tag
    /// matching (picker tiers 1 and 3).
    fn supports_doc(&self, _node: &DocNode) -> Option<bool> {
        None
    }

    /// Document → Markdown conversion for an owned node. `None` falls
    /// through to the default converter.
    fn from_doc(&self, _node: &DocNode, _cx: &DocContext) -> Option<Vec<MdNode>> {
        None
    }
}

/// An explicit, immutable, ordered set of plugins.
///
/// The set is a value: conversions take a snapshot and never observe later
/// registry changes. Cloning is cheap (shared plugin instances).
#[derive(Clone)]
pub struct PluginSet {
    plugins: Vec<Arc<dyn Plugin>>,
}

impl PluginSet {
    /// A set with the given plugins, in registration order.
    pub fn new(plugins: Vec<Arc<dyn Plugin>>) -> Self {
        PluginSet { plugins }
    }

    /// The empty set; every conversion falls through to the defaults.
    pub fn empty() -> Self {
        PluginSet { plugins: Vec::new() }
    }

    /// The built-in construct set in canonical registration order.
    pub fn builtin() -> Self {
        crate::plugins::builtin()
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Plugins in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Plugin> {
        self.plugins.iter().map(|plugin| plugin.as_ref())
    }

    /// Plugin names in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.plugins.iter().map(|plugin| plugin.name()).collect()
    }
}

impl fmt::Debug for PluginSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PluginSet").field(&self.names()).finish()
    }
}
