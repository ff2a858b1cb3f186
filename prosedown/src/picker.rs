//! Plugin selection
//!
//! Resolves which plugin, if any, owns a node. At most one plugin owns a
//! node per conversion call, and ownership is re-evaluated per node.

use crate::doc::DocNode;
use crate::md::MdNode;
use crate::plugin::{Plugin, PluginSet};
use std::cmp::Reverse;

/// Plugins ordered by descending priority. The sort is stable, so equal
/// priorities keep registration order.
fn ranked(plugins: &PluginSet) -> Vec<&dyn Plugin> {
    let mut ranked: Vec<&dyn Plugin> = plugins.iter().collect();
    ranked.sort_by_key(|plugin| Reverse(plugin.priority()));
    ranked
}

/// Markdown-side selection: the highest-priority plugin whose
/// `supports_md` claims the node.
pub fn pick_for_markdown<'a>(node: &MdNode, plugins: &'a PluginSet) -> Option<&'a dyn Plugin> {
    ranked(plugins)
        .into_iter()
        .find(|plugin| plugin.supports_md(node))
}

/// Document-side selection, three tiers, first match wins.
///
/// A node may be simultaneously generically tagged ("text") and
/// semantically marked; marks must win, so inline-formatting plugins
/// outrank generic text handling.
pub fn pick_for_document<'a>(node: &DocNode, plugins: &'a PluginSet) -> Option<&'a dyn Plugin> {
    let ranked = ranked(plugins);

    // 1) Text with marks: a plugin named after one of the mark types.
    if let DocNode::Text { marks, .. } = node {
        if !marks.is_empty() {
            let mark_names: Vec<&str> = marks.iter().map(|mark| mark.name()).collect();
            if let Some(plugin) = ranked
                .iter()
                .find(|plugin| mark_names.contains(&plugin.name()))
            {
                return Some(*plugin);
            }
        }
    }

    // 2) Exposed predicates, honored in priority order.
    if let Some(plugin) = ranked
        .iter()
        .find(|plugin| plugin.supports_doc(node) == Some(true))
    {
        return Some(*plugin);
    }

    // 3) Exact tag match keys block constructs (heading, lists, table).
    ranked
        .into_iter()
        .find(|plugin| plugin.name() == node.tag())
}
