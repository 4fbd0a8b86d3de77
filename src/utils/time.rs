//! Time utilities: minute-of-day and duration formatting.

/// Minutes since midnight → `HH:MM:00` (e.g. 1245 → `20:45:00`).
pub fn format_minute_of_day(m: u16) -> String {
    format!("{:02}:{:02}:00", m / 60, m % 60)
}

/// Seconds → `HH:MM:SS` (e.g. 6610 → `01:50:10`).
/// Hours are not wrapped at 24.
pub fn format_seconds(s: u32) -> String {
    let hours = s / 3600;
    let minutes = (s / 60) % 60;
    let seconds = s % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Like `format_seconds`, for totals that may exceed `u32`.
pub fn format_total_seconds(s: u64) -> String {
    format!("{:02}:{:02}:{:02}", s / 3600, (s / 60) % 60, s % 60)
}
