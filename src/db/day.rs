//! Day records.

use crate::db::cursor::ByteCursor;
use crate::errors::DecodeResult;
use crate::models::Day;

/// Size of one day record on disk.
pub const DAY_RECORD_LEN: usize = 2 + 2 + 4 * 6;

/// Decode a single day record.
pub fn decode_day(cur: &mut ByteCursor<'_>) -> DecodeResult<Day> {
    Ok(Day {
        date: cur.read_packed_date()?,
        first_minute_used: cur.read_u16_le()?,
        active_seconds: cur.read_u32_le()?,
        semi_idle_seconds: cur.read_u32_le()?,
        key: cur.read_u32_le()?,
        lmb: cur.read_u32_le()?,
        rmb: cur.read_u32_le()?,
        scrollwheel: cur.read_u32_le()?,
    })
}

/// Decode a day block: a `u32` count followed by that many records.
pub fn decode_days(cur: &mut ByteCursor<'_>) -> DecodeResult<Vec<Day>> {
    let count = cur.read_u32_le()?;
    let hint = (count as usize).min(cur.remaining() / DAY_RECORD_LEN);
    let mut days = Vec::with_capacity(hint);

    for _ in 0..count {
        days.push(decode_day(cur)?);
    }

    Ok(days)
}
