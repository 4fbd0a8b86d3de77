//! Tree → rows.

use crate::export::ExportRow;
use crate::models::Database;

#[derive(Debug, Clone, Copy, Default)]
pub struct FlattenOptions {
    /// Leave out hidden nodes together with their whole subtree.
    pub skip_hidden: bool,
}

/// Flatten the whole tree: pre-order, depth-first, children in stored order.
///
/// A node with days yields one row per day; a node without days yields a
/// single placeholder row carrying only its name.
pub fn flatten(db: &Database) -> Vec<ExportRow> {
    flatten_with(db, FlattenOptions::default())
}

pub fn flatten_with(db: &Database, opts: FlattenOptions) -> Vec<ExportRow> {
    let mut rows = Vec::new();
    let mut stack = vec![&db.root];

    while let Some(node) = stack.pop() {
        if opts.skip_hidden && node.is_hidden {
            continue;
        }

        let name = node.display_name();

        if node.days.is_empty() {
            rows.push(ExportRow::placeholder(name));
        } else {
            let tag = db.tag_name(node.tagindex).unwrap_or_default();
            rows.extend(
                node.days
                    .iter()
                    .map(|day| ExportRow::from_day(day, name, &tag)),
            );
        }

        // reversed so the first child is popped first
        stack.extend(node.children.iter().rev());
    }

    rows
}
