// src/export/excel_date.rs

use chrono::NaiveDate;

/// Try to read a cell value as a date (`YYYY-MM-DD`) or a clock / duration
/// value (`HH:MM:SS`, hours may exceed 23), returning the *Excel serial*
/// and the number format to display it with.
pub(crate) fn parse_to_excel_serial(s: &str) -> Option<(&'static str, f64)> {
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(("yyyy-mm-dd", date_to_excel_serial(d)?));
    }

    let secs = parse_hms(s)?;
    Some(("[hh]:mm:ss", secs as f64 / 86400.0))
}

fn parse_hms(s: &str) -> Option<u64> {
    let mut parts = s.split(':');
    let h: u64 = parts.next()?.parse().ok()?;
    let m: u64 = parts.next()?.parse().ok()?;
    let sec: u64 = parts.next()?.parse().ok()?;

    if parts.next().is_some() || m >= 60 || sec >= 60 {
        return None;
    }

    Some(h * 3600 + m * 60 + sec)
}

fn date_to_excel_serial(d: NaiveDate) -> Option<f64> {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    Some((d - excel_epoch).num_days() as f64)
}
