use crate::models::node::Node;

/// Length of the fixed-width tag name field.
pub const TAG_NAME_LEN: usize = 32;

/// Number of preference values stored after the tag table.
pub const PREFS_LEN: usize = 10;

/// A tag category. Nodes refer to tags by their index in `Database::tags`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Raw name field, NUL-padded.
    pub raw_name: [u8; TAG_NAME_LEN],
    pub id: u32,
}

impl Tag {
    /// Tag name with NUL padding stripped.
    pub fn name(&self) -> String {
        let bytes: Vec<u8> = self.raw_name.iter().copied().filter(|b| *b != 0).collect();
        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub fn id_hex(&self) -> String {
        format!("{:#x}", self.id)
    }
}

/// A fully decoded ProcrastiTracker database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Database {
    pub version: u32,
    pub magic: String,
    pub numtags: u32,
    pub tags: Vec<Tag>,
    pub minifilter: u32,
    pub foldlevel: u32,
    pub prefs: [u32; PREFS_LEN],
    pub root: Node,
}

impl Database {
    pub fn tag_name(&self, index: u32) -> Option<String> {
        self.tags.get(index as usize).map(Tag::name)
    }
}
