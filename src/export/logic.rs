// src/export/logic.rs

use crate::core::flatten::{FlattenOptions, flatten_with};
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::range::{filter_rows, parse_range};
use crate::export::xlsx::export_xlsx;
use crate::models::Database;
use crate::ui::messages::{info, warning};
use std::path::Path;

/// High level export.
pub struct ExportLogic;

impl ExportLogic {
    /// Flatten `db` and write the rows.
    ///
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or a period expression (see `parse_range`);
    ///   with a range, rows without a date are dropped
    ///
    /// Returns the number of rows written.
    pub fn export(
        db: &Database,
        format: &ExportFormat,
        file: &str,
        range: &Option<String>,
        opts: FlattenOptions,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        let bounds = match range {
            None => None,
            Some(r) => parse_range(r)?,
        };

        ensure_writable(path, force)?;

        let rows = filter_rows(flatten_with(db, opts), bounds);

        if rows.is_empty() {
            warning("No rows found for selected range.");
        }

        info(format!("Exporting {} rows as {}", rows.len(), format.as_str()));

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, path)?,
        }

        Ok(rows.len())
    }
}
