//! Built-in conversion plugins
//!
//! One plugin per Markdown construct or document tag/mark, following the
//! convention the picker is built around. The registration order below is
//! part of the contract: the picker breaks priority ties by position.

pub mod blockquote;
pub mod code_block;
pub mod heading;
pub mod list;
pub mod marks;
pub mod table;
pub mod text;

use crate::plugin::PluginSet;
use std::sync::Arc;

/// The built-in construct set in canonical registration order.
pub fn builtin() -> PluginSet {
    PluginSet::new(vec![
        Arc::new(heading::Heading),
        Arc::new(marks::Bold),
        Arc::new(marks::Italic),
        Arc::new(marks::Strike),
        Arc::new(marks::Link),
        Arc::new(marks::Code),
        Arc::new(code_block::CodeBlock),
        Arc::new(blockquote::Blockquote),
        Arc::new(list::BulletList),
        Arc::new(list::OrderedList),
        Arc::new(list::ListItem),
        Arc::new(table::Table),
        Arc::new(table::TableRow),
        Arc::new(table::TableCell),
        Arc::new(list::TaskList),
        Arc::new(list::TaskItem),
        Arc::new(text::Text),
    ])
}
