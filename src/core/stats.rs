//! Aggregate figures over a decoded tree.

use crate::models::{Node, PackedDate};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub nodes: usize,
    pub hidden_nodes: usize,
    pub days: usize,
    /// Depth of the deepest node; the root is at depth 0.
    pub max_depth: usize,
    pub active_seconds: u64,
    pub semi_idle_seconds: u64,
    pub first_date: Option<PackedDate>,
    pub last_date: Option<PackedDate>,
}

impl TreeStats {
    pub fn collect(root: &Node) -> Self {
        let mut stats = Self::default();
        let mut stack = vec![(root, 0usize)];

        while let Some((node, depth)) = stack.pop() {
            stats.nodes += 1;
            if node.is_hidden {
                stats.hidden_nodes += 1;
            }
            stats.max_depth = stats.max_depth.max(depth);

            for day in &node.days {
                stats.days += 1;
                stats.active_seconds += day.active_seconds as u64;
                stats.semi_idle_seconds += day.semi_idle_seconds as u64;

                stats.first_date = Some(match stats.first_date {
                    Some(d) => d.min(day.date),
                    None => day.date,
                });
                stats.last_date = Some(match stats.last_date {
                    Some(d) => d.max(day.date),
                    None => day.date,
                });
            }

            stack.extend(node.children.iter().map(|c| (c, depth + 1)));
        }

        stats
    }
}
