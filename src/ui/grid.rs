//! Options Grid
//!
//! Pure text layout of the bindings available at the current position.
//!
//! Options are laid out in three columns, filled top to bottom and then
//! left to right. Every cell is `"  k: description"` padded to a fixed width,
//! with descriptions cut to [`MAX_DESCRIPTION_CHARS`] (ellipsis included).

use crate::bindings::{ActionNode, NodeSet};
use crate::input::NavigationState;

pub const COLUMNS: usize = 3;
pub const MAX_DESCRIPTION_CHARS: usize = 22;
pub const ELLIPSIS: &str = "...";
/// `"  k: "` plus the longest description.
pub const CELL_WIDTH: usize = 5 + MAX_DESCRIPTION_CHARS;
pub const COLUMN_SEPARATOR: &str = "  ";

pub const NOTHING_CONFIGURED: &str = "  (No key bindings loaded or root is empty)\n";
pub const NO_FURTHER_OPTIONS: &str = "  (No further actions defined for this sequence)\n";
pub const INVALID_SEQUENCE: &str = "  (Invalid key sequence - no matching options)\n";

/// Render the options for a navigation state.
pub fn format_state(state: &NavigationState<'_>) -> String {
    format_options(state.node_set(), state.sequence().is_empty())
}

/// Render a node set. `at_root` picks the message for an empty set.
pub fn format_options(node_set: NodeSet<'_>, at_root: bool) -> String {
    let nodes = node_set.nodes();
    if !nodes.is_empty() {
        return format_grid(nodes);
    }

    let message = if at_root {
        NOTHING_CONFIGURED
    } else if node_set.is_invalid() {
        INVALID_SEQUENCE
    } else {
        NO_FURTHER_OPTIONS
    };
    message.to_string()
}

/// Column-major grid of `ceil(n / 3)` newline-terminated rows.
///
/// A separator follows a cell only when the next column has an item in the
/// same row. Blank cells are padded but never followed by a separator, even
/// if a later column in that row is filled.
pub fn format_grid(nodes: &[ActionNode]) -> String {
    let rows = nodes.len().div_ceil(COLUMNS);
    let mut text = String::new();

    for row in 0..rows {
        let mut line = String::new();
        for column in 0..COLUMNS {
            let index = column * rows + row;
            let Some(node) = nodes.get(index) else {
                line.push_str(&" ".repeat(CELL_WIDTH));
                continue;
            };

            let cell = format!("  {}: {}", node.key, truncate_description(&node.description));
            line.push_str(&format!("{:<width$}", cell, width = CELL_WIDTH));

            let next = (column + 1) * rows + row;
            if column + 1 < COLUMNS && next < nodes.len() {
                line.push_str(COLUMN_SEPARATOR);
            }
        }
        text.push_str(&line);
        text.push('\n');
    }

    text
}

/// Cut a description to [`MAX_DESCRIPTION_CHARS`] characters, ending in
/// [`ELLIPSIS`] when shortened.
pub fn truncate_description(description: &str) -> String {
    if description.chars().count() <= MAX_DESCRIPTION_CHARS {
        return description.to_string();
    }

    let keep = MAX_DESCRIPTION_CHARS - ELLIPSIS.len();
    let mut truncated: String = description.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}
