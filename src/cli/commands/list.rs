use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::flatten::{FlattenOptions, flatten_with};
use crate::db::load_db;
use crate::errors::AppResult;
use crate::export::model::get_headers;
use crate::export::range::{filter_rows, parse_range};
use crate::ui::messages::warning;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        skip_hidden,
    } = cmd
    {
        let bounds = match period {
            Some(p) => parse_range(p)?,
            None => None,
        };

        let db = load_db(&cfg.database)?;
        let opts = FlattenOptions {
            skip_hidden: *skip_hidden || cfg.skip_hidden,
        };
        let rows = filter_rows(flatten_with(&db, opts), bounds);

        if rows.is_empty() {
            warning("No rows for the selected period.");
            return Ok(());
        }

        let mut table = Table::new(get_headers());
        for row in &rows {
            table.add_row(row.to_record());
        }

        print!("{}", table.render(&cfg.separator_char));
        println!("{} rows", rows.len());
    }
    Ok(())
}
