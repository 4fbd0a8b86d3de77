use crate::models::day::Day;

/// A tracked entity (application, window title, ...) in the activity tree.
/// Owns its days and children; the tree has no back references.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Node {
    pub name: String,
    pub tagindex: u32,
    pub is_hidden: bool,
    pub days: Vec<Day>,
    pub children: Vec<Node>,
}

impl Node {
    /// Name with everything from the first NUL onward removed.
    pub fn display_name(&self) -> &str {
        match self.name.find('\0') {
            Some(pos) => &self.name[..pos],
            None => &self.name,
        }
    }

    /// Active seconds of this node and all of its descendants.
    pub fn total_active_seconds(&self) -> u64 {
        let mut total = 0u64;
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            total += node
                .days
                .iter()
                .map(|d| d.active_seconds as u64)
                .sum::<u64>();
            stack.extend(node.children.iter());
        }

        total
    }
}

// Unlinks children iteratively so dropping a very deep tree cannot
// overflow the stack.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut child) = pending.pop() {
            pending.append(&mut child.children);
        }
    }
}
