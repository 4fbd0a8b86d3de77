//! Indented rendering of the node hierarchy.

use crate::models::Node;
use crate::utils::time::format_total_seconds;

/// One printable line of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    pub depth: usize,
    pub name: String,
    pub hidden: bool,
    pub days: usize,
    /// Active time of the node and its descendants, `HH:MM:SS`.
    pub total_active: String,
}

impl TreeLine {
    pub fn render(&self, indent: &str) -> String {
        let hidden = if self.hidden { " [hidden]" } else { "" };
        format!(
            "{}{}{}  ({} days, {})",
            indent.repeat(self.depth),
            self.name,
            hidden,
            self.days,
            self.total_active
        )
    }
}

/// Lines in pre-order. Nodes deeper than `max_depth` are left out.
pub fn tree_lines(root: &Node, max_depth: Option<usize>) -> Vec<TreeLine> {
    let mut lines = Vec::new();
    let mut stack = vec![(root, 0usize)];

    while let Some((node, depth)) = stack.pop() {
        if max_depth.is_some_and(|max| depth > max) {
            continue;
        }

        lines.push(TreeLine {
            depth,
            name: node.display_name().to_string(),
            hidden: node.is_hidden,
            days: node.days.len(),
            total_active: format_total_seconds(node.total_active_seconds()),
        });

        stack.extend(node.children.iter().rev().map(|c| (c, depth + 1)));
    }

    lines
}
