//! rptexport library root.
//! Exposes the ProcrastiTracker decoder, the flattening step, exporters,
//! the CLI parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

pub use crate::core::flatten::{FlattenOptions, flatten, flatten_with};
pub use crate::db::{decode, decode_buffer, load_db};
pub use errors::{DecodeError, ValidationError};
pub use export::ExportRow;
pub use models::{Database, Day, Node, PackedDate, Tag};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Info => cli::commands::info::handle(cfg),
        Commands::Tree { .. } => cli::commands::tree::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    ui::messages::set_quiet(cli.quiet);

    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
