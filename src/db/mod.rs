//! Decoding of ProcrastiTracker database files.
//!
//! `raw file bytes -> decompress -> header -> node tree -> Database`.
//! The whole decode either succeeds or returns a `DecodeError`; nothing
//! partial is ever handed back.

pub mod cursor;
pub mod day;
pub mod decompress;
pub mod header;
pub mod node;

use crate::errors::{AppError, AppResult, DecodeResult};
use crate::models::Database;
use crate::utils::path::expand_tilde;
use cursor::ByteCursor;
use std::fs;

/// Decode an already decompressed buffer.
pub fn decode_buffer(buf: &[u8]) -> DecodeResult<Database> {
    let mut cur = ByteCursor::new(buf);

    let header::Header {
        version,
        magic,
        numtags,
        tags,
        minifilter,
        foldlevel,
        prefs,
    } = header::decode_header(&mut cur)?;

    let root = node::decode_tree(&mut cur, numtags)?;

    Ok(Database {
        version,
        magic,
        numtags,
        tags,
        minifilter,
        foldlevel,
        prefs,
        root,
    })
}

/// Decode the raw (compressed) contents of a `db.PT` file.
pub fn decode(raw: &[u8]) -> DecodeResult<Database> {
    let buf = decompress::decompress(raw)?;
    decode_buffer(&buf)
}

/// Read and decode a database file from disk.
pub fn load_db(path: &str) -> AppResult<Database> {
    let path = expand_tilde(path);
    if !path.exists() {
        return Err(AppError::DatabaseNotFound(path.display().to_string()));
    }

    let raw = fs::read(&path)?;
    Ok(decode(&raw)?)
}
