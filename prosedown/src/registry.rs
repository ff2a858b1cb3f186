//! Process-wide default plugin set
//!
//! Conversions take an explicit [`PluginSet`]; this module is the thin
//! holder consulted when a caller does not pass one. The set is replaced
//! wholesale or cleared by the embedder, and every conversion reads a
//! fresh snapshot at call start — there is no cross-call caching, and a
//! replacement mid-conversion cannot corrupt an in-flight call.

use crate::plugin::PluginSet;
use once_cell::sync::Lazy;
use std::sync::RwLock;

static ACTIVE: Lazy<RwLock<PluginSet>> = Lazy::new(|| RwLock::new(PluginSet::builtin()));

/// Snapshot of the currently active default set.
pub fn active() -> PluginSet {
    match ACTIVE.read() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Atomically replace the active set. Visible to conversions started
/// afterward; already-running conversions keep their snapshot.
pub fn register(set: PluginSet) {
    match ACTIVE.write() {
        Ok(mut guard) => *guard = set,
        Err(poisoned) => *poisoned.into_inner() = set,
    }
}

/// Empty the active set. Conversions then fall through to the default
/// converters for every node.
pub fn clear() {
    register(PluginSet::empty());
}

/// Names of the active plugins, in registration order.
pub fn list_active() -> Vec<&'static str> {
    active().names()
}
