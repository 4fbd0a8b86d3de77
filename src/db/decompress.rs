//! Decompression of the raw `db.PT` payload.

use crate::errors::{DecodeError, DecodeResult};
use flate2::read::MultiGzDecoder;
use flate2::{Decompress, FlushDecompress, Status};
use std::io::{self, Read};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];
const CHUNK: usize = 64 * 1024;

/// Inflate a gzip or zlib framed payload into a complete buffer.
///
/// The framing is detected from the leading bytes. A truncated or corrupt
/// stream yields `DecodeError::Decompression` and no partial buffer.
pub fn decompress(raw: &[u8]) -> DecodeResult<Vec<u8>> {
    let result = if raw.starts_with(&GZIP_MAGIC) {
        inflate_gzip(raw)
    } else {
        inflate_zlib(raw)
    };

    result.map_err(DecodeError::Decompression)
}

fn inflate_gzip(raw: &[u8]) -> io::Result<Vec<u8>> {
    let mut out = Vec::new();
    MultiGzDecoder::new(raw).read_to_end(&mut out)?;
    Ok(out)
}

// The streaming zlib reader stops silently on truncated input, so the
// stream end is checked explicitly here.
fn inflate_zlib(raw: &[u8]) -> io::Result<Vec<u8>> {
    let mut inflater = Decompress::new(true);
    let mut out = Vec::with_capacity(CHUNK);

    loop {
        if out.len() == out.capacity() {
            out.reserve(CHUNK);
        }

        let before_in = inflater.total_in();
        let before_out = inflater.total_out();
        let consumed = before_in as usize;

        let status = inflater
            .decompress_vec(&raw[consumed..], &mut out, FlushDecompress::Finish)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;

        if status == Status::StreamEnd {
            return Ok(out);
        }

        let stalled = inflater.total_in() == before_in && inflater.total_out() == before_out;
        let input_done = inflater.total_in() as usize == raw.len();

        if stalled || (input_done && out.len() < out.capacity()) {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "compressed stream ended before its end marker",
            ));
        }
    }
}
