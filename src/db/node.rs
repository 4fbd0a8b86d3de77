//! Node hierarchy.
//!
//! On disk every node is laid out as
//! `name\0 | tagindex u32 | ishidden u8 | day block | child count u32 | children...`
//! and each child is complete (days and its own children) before the next
//! sibling starts. The decoder walks that layout with an explicit stack so
//! deeply nested files cannot exhaust the call stack.

use crate::db::cursor::ByteCursor;
use crate::db::day::decode_days;
use crate::errors::{DecodeResult, ValidationError};
use crate::models::Node;

/// A node whose own fields are decoded, waiting for `pending` children.
struct Frame {
    node: Node,
    pending: u32,
}

impl Frame {
    fn read(cur: &mut ByteCursor<'_>, numtags: u32) -> DecodeResult<Self> {
        let name = cur.read_cstring()?;
        let tagindex = cur.read_u32_le()?;
        let is_hidden = cur.read_u8()? != 0;

        if tagindex >= numtags {
            return Err(ValidationError::TagIndexOutOfRange {
                node: name,
                index: tagindex,
                numtags,
            }
            .into());
        }

        let days = decode_days(cur)?;
        let pending = cur.read_u32_le()?;

        Ok(Self {
            node: Node {
                name,
                tagindex,
                is_hidden,
                days,
                children: Vec::new(),
            },
            pending,
        })
    }
}

/// Decode the node tree starting at the cursor. `numtags` bounds every
/// node's tag index.
pub fn decode_tree(cur: &mut ByteCursor<'_>, numtags: u32) -> DecodeResult<Node> {
    let mut ancestors: Vec<Frame> = Vec::new();
    let mut current = Frame::read(cur, numtags)?;

    loop {
        if current.pending > 0 {
            current.pending -= 1;
            let child = Frame::read(cur, numtags)?;
            ancestors.push(std::mem::replace(&mut current, child));
            continue;
        }

        match ancestors.pop() {
            Some(mut parent) => {
                parent.node.children.push(current.node);
                current = parent;
            }
            None => return Ok(current.node),
        }
    }
}
