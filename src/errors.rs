//! Unified error types.
//! The decoding core returns `DecodeError`; everything above it (config,
//! export, cli) returns `AppError` so the handling stays consistent.

use std::io;
use thiserror::Error;

/// Structural problems found in an otherwise readable buffer.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("unsupported database version {0} (minimum is 13)")]
    UnsupportedVersion(u32),

    #[error("not a ProcrastiTracker database (magic {0:?}, expected \"PTFF\")")]
    BadMagic(String),

    #[error("node '{node}' references tag {index}, but only {numtags} tags exist")]
    TagIndexOutOfRange {
        node: String,
        index: u32,
        numtags: u32,
    },
}

/// Errors of the decoding pipeline. Any of them aborts the whole decode.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("decompression failed: {0}")]
    Decompression(#[source] io::Error),

    #[error("read past end of buffer at offset {offset}: wanted {wanted} bytes, {remaining} left")]
    OutOfBounds {
        offset: usize,
        wanted: usize,
        remaining: usize,
    },

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}

pub type DecodeResult<T> = Result<T, DecodeError>;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database file
    // ---------------------------
    #[error("Database file not found: {0}")]
    DatabaseNotFound(String),

    #[error("Cannot decode database: {0}")]
    Decode(#[from] DecodeError),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
