use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::flatten::FlattenOptions;
use crate::db::load_db;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        skip_hidden,
        force,
    } = cmd
    {
        let db = load_db(&cfg.database)?;
        let format = format.clone().unwrap_or_else(|| cfg.default_format.clone());
        let opts = FlattenOptions {
            skip_hidden: *skip_hidden || cfg.skip_hidden,
        };

        ExportLogic::export(&db, &format, file, range, opts, *force)?;
    }
    Ok(())
}
