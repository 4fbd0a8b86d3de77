//! Sequential reader over the decompressed database buffer.

use crate::errors::{DecodeError, DecodeResult};
use crate::models::PackedDate;

/// Positional little-endian reader. Every read consumes bytes; there is
/// exactly one cursor per decode, shared by `&mut` through the whole tree.
#[derive(Debug)]
pub struct ByteCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Next `n` bytes.
    pub fn read_fixed(&mut self, n: usize) -> DecodeResult<&'a [u8]> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|end| *end <= self.buf.len())
            .ok_or_else(|| self.out_of_bounds(n))?;

        let buf = self.buf;
        let bytes = &buf[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    /// Next `N` bytes as an array.
    pub fn read_array<const N: usize>(&mut self) -> DecodeResult<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_fixed(N)?);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> DecodeResult<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    pub fn read_u16_le(&mut self) -> DecodeResult<u16> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    pub fn read_u32_le(&mut self) -> DecodeResult<u32> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    /// NUL-terminated string. The terminator is consumed but not returned.
    pub fn read_cstring(&mut self) -> DecodeResult<String> {
        let buf = self.buf;
        let rest = &buf[self.pos..];
        let len = rest
            .iter()
            .position(|b| *b == 0)
            .ok_or_else(|| self.out_of_bounds(rest.len() + 1))?;

        let text = String::from_utf8_lossy(&rest[..len]).into_owned();
        self.pos += len + 1;
        Ok(text)
    }

    pub fn read_packed_date(&mut self) -> DecodeResult<PackedDate> {
        Ok(PackedDate::unpack(self.read_u16_le()?))
    }

    fn out_of_bounds(&self, wanted: usize) -> DecodeError {
        DecodeError::OutOfBounds {
            offset: self.pos,
            wanted,
            remaining: self.remaining(),
        }
    }
}
