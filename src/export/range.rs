// src/export/range.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportRow;
use chrono::{Datelike, NaiveDate};

/// Inclusive date bounds.
pub type DateBounds = (NaiveDate, NaiveDate);

/// Parse a period / range expression.
///
/// Supports:
/// - `all` (no bounds)
/// - YYYY, YYYY-MM, YYYY-MM-DD
/// - YYYY:YYYY, YYYY-MM:YYYY-MM, YYYY-MM-DD:YYYY-MM-DD
pub fn parse_range(r: &str) -> AppResult<Option<DateBounds>> {
    let r = r.trim();
    if r.eq_ignore_ascii_case("all") {
        return Ok(None);
    }

    let bounds = match r.split_once(':') {
        Some((start, end)) => {
            let (start, end) = (start.trim(), end.trim());
            if start.len() != end.len() {
                return Err(AppError::InvalidRange(
                    "start and end must have same format".into(),
                ));
            }
            (period_bounds(start)?.0, period_bounds(end)?.1)
        }
        None => period_bounds(r)?,
    };

    if bounds.0 > bounds.1 {
        return Err(AppError::InvalidRange(format!("{r}: start is after end")));
    }

    Ok(Some(bounds))
}

/// First and last day covered by a single YYYY / YYYY-MM / YYYY-MM-DD.
fn period_bounds(p: &str) -> AppResult<DateBounds> {
    let invalid = || AppError::InvalidDate(p.to_string());

    match p.len() {
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid())?;
            let first = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let last = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((first, last))
        }
        7 => {
            let first =
                NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d").map_err(|_| invalid())?;
            Ok((first, month_last_day(first).ok_or_else(invalid)?))
        }
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d").map_err(|_| invalid())?;
            Ok((d, d))
        }
        _ => Err(AppError::InvalidRange(format!("unsupported format: {p}"))),
    }
}

fn month_last_day(first: NaiveDate) -> Option<NaiveDate> {
    let (y, m) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1)?.pred_opt()
}

/// Keep rows whose date falls inside `bounds`. Placeholder rows and rows
/// with an impossible date never match.
pub fn filter_rows(rows: Vec<ExportRow>, bounds: Option<DateBounds>) -> Vec<ExportRow> {
    let Some((start, end)) = bounds else {
        return rows;
    };

    rows.into_iter()
        .filter(|row| {
            NaiveDate::parse_from_str(&row.date, "%Y-%m-%d")
                .is_ok_and(|d| d >= start && d <= end)
        })
        .collect()
}
