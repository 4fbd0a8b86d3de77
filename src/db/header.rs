//! File header, tag table and preference block.

use crate::db::cursor::ByteCursor;
use crate::errors::{DecodeResult, ValidationError};
use crate::models::database::{PREFS_LEN, TAG_NAME_LEN};
use crate::models::Tag;

/// Oldest database layout this decoder understands.
pub const MIN_VERSION: u32 = 13;
pub const MAGIC: &str = "PTFF";

/// Size of one tag entry on disk.
const TAG_ENTRY_LEN: usize = TAG_NAME_LEN + 4;

/// Everything that precedes the root node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub version: u32,
    pub magic: String,
    pub numtags: u32,
    pub tags: Vec<Tag>,
    pub minifilter: u32,
    pub foldlevel: u32,
    pub prefs: [u32; PREFS_LEN],
}

/// Decode the header. Version and magic are checked as soon as they are
/// read, so an old or foreign file fails before anything else is parsed.
pub fn decode_header(cur: &mut ByteCursor<'_>) -> DecodeResult<Header> {
    let version = cur.read_u32_le()?;
    if version < MIN_VERSION {
        return Err(ValidationError::UnsupportedVersion(version).into());
    }

    let magic = read_magic(cur)?;
    if magic != MAGIC {
        return Err(ValidationError::BadMagic(magic).into());
    }

    let numtags = cur.read_u32_le()?;
    let tags = read_tags(cur, numtags)?;

    let minifilter = cur.read_u32_le()?;
    let foldlevel = cur.read_u32_le()?;

    let mut prefs = [0u32; PREFS_LEN];
    for pref in prefs.iter_mut() {
        *pref = cur.read_u32_le()?;
    }

    Ok(Header {
        version,
        magic,
        numtags,
        tags,
        minifilter,
        foldlevel,
        prefs,
    })
}

// Stored as a little-endian integer, so the characters appear reversed.
fn read_magic(cur: &mut ByteCursor<'_>) -> DecodeResult<String> {
    let mut raw = cur.read_array::<4>()?;
    raw.reverse();
    Ok(String::from_utf8_lossy(&raw).into_owned())
}

fn read_tags(cur: &mut ByteCursor<'_>, numtags: u32) -> DecodeResult<Vec<Tag>> {
    let hint = (numtags as usize).min(cur.remaining() / TAG_ENTRY_LEN);
    let mut tags = Vec::with_capacity(hint);

    for _ in 0..numtags {
        let raw_name = cur.read_array::<TAG_NAME_LEN>()?;
        let id = cur.read_u32_le()?;
        tags.push(Tag { raw_name, id });
    }

    Ok(tags)
}
