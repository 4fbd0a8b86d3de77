use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::tree::tree_lines;
use crate::db::load_db;
use crate::errors::AppResult;
use crate::utils::colors::{GREY, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Tree { depth } = cmd {
        let db = load_db(&cfg.database)?;

        for line in tree_lines(&db.root, *depth) {
            let text = line.render("  ");
            if line.hidden {
                println!("{GREY}{text}{RESET}");
            } else {
                println!("{text}");
            }
        }
    }
    Ok(())
}
