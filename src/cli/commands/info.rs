use crate::config::Config;
use crate::core::stats::TreeStats;
use crate::db::load_db;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::path::expand_tilde;
use crate::utils::table::Table;
use crate::utils::time::format_total_seconds;
use std::fs;

/// Handle the `info` command
pub fn handle(cfg: &Config) -> AppResult<()> {
    let db = load_db(&cfg.database)?;
    let stats = TreeStats::collect(&db.root);

    header("ProcrastiTracker database");

    let file_size = fs::metadata(expand_tilde(&cfg.database)).map(|m| m.len()).unwrap_or(0);
    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, cfg.database, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_size as f64 / 1024.0);
    println!("{}• Version:{} {}", CYAN, RESET, db.version);
    println!("{}• Magic:{} {}", CYAN, RESET, db.magic);
    println!("{}• Minifilter:{} {}", CYAN, RESET, db.minifilter);
    println!("{}• Foldlevel:{} {}", CYAN, RESET, db.foldlevel);
    println!(
        "{}• Prefs:{} {}",
        CYAN,
        RESET,
        db.prefs
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );

    //
    // TAGS
    //
    println!("{}• Tags:{} {}", CYAN, RESET, db.numtags);
    let mut table = Table::new(vec!["#", "name", "id"]);
    for (i, tag) in db.tags.iter().enumerate() {
        table.add_row(vec![i.to_string(), tag.name(), tag.id_hex()]);
    }
    for line in table.render(&cfg.separator_char).lines() {
        println!("    {line}");
    }

    //
    // TREE TOTALS
    //
    println!(
        "{}• Nodes:{} {}{}{} ({} hidden, max depth {})",
        CYAN, RESET, GREEN, stats.nodes, RESET, stats.hidden_nodes, stats.max_depth
    );
    println!("{}• Day records:{} {}{}{}", CYAN, RESET, GREEN, stats.days, RESET);
    println!(
        "{}• Active time:{} {}",
        CYAN,
        RESET,
        format_total_seconds(stats.active_seconds)
    );
    println!(
        "{}• Semi-idle time:{} {}",
        CYAN,
        RESET,
        format_total_seconds(stats.semi_idle_seconds)
    );

    let fmt_date = |d: Option<crate::models::PackedDate>| {
        d.map(|d| d.to_string())
            .unwrap_or_else(|| format!("{GREY}--{RESET}"))
    };

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_date(stats.first_date));
    println!("    to:   {}", fmt_date(stats.last_date));

    Ok(())
}
