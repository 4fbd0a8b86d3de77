use crate::utils::time::{format_minute_of_day, format_seconds};
use chrono::NaiveDate;
use std::fmt;

/// Calendar date as stored in a day record: 16 bits packed as
/// `yyyyyyy mmmm ddddd`, with the year counted from 2000.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackedDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl PackedDate {
    pub const YEAR_BASE: u16 = 2000;

    pub fn unpack(d: u16) -> Self {
        let year_offset = (d >> 9) & 0x7FF;
        let month = (d >> 5) & 0xF;
        let day = d & 0x1F;

        Self {
            year: year_offset + Self::YEAR_BASE,
            month: month as u8,
            day: day as u8,
        }
    }

    /// `None` when the stored fields do not form a real calendar date.
    pub fn to_naive(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year as i32, self.month as u32, self.day as u32)
    }
}

impl fmt::Display for PackedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// One day of recorded activity for a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day {
    pub date: PackedDate,
    /// Minutes since midnight.
    pub first_minute_used: u16,
    pub active_seconds: u32,
    pub semi_idle_seconds: u32,
    pub key: u32,
    pub lmb: u32,
    pub rmb: u32,
    pub scrollwheel: u32,
}

impl Day {
    /// ISO date, e.g. `2025-01-01`.
    pub fn date_str(&self) -> String {
        self.date.to_string()
    }

    /// `HH:MM:00`
    pub fn first_used_str(&self) -> String {
        format_minute_of_day(self.first_minute_used)
    }

    /// `HH:MM:SS`
    pub fn active_str(&self) -> String {
        format_seconds(self.active_seconds)
    }

    /// `HH:MM:SS`
    pub fn semi_idle_str(&self) -> String {
        format_seconds(self.semi_idle_seconds)
    }
}
