use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rptexport
/// CLI application to decode and export ProcrastiTracker databases
#[derive(Parser)]
#[command(
    name = "rptexport",
    version = env!("CARGO_PKG_VERSION"),
    about = "Decode a ProcrastiTracker database (db.PT) and export its activity log",
    long_about = None
)]
pub struct Cli {
    /// Override database path (defaults to the configured one)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Only print warnings and errors
    #[arg(global = true, long, short)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the database header: version, tags, preferences and totals
    Info,

    /// Print the node hierarchy
    Tree {
        #[arg(long, help = "Do not descend below this depth (root = 0)")]
        depth: Option<usize>,
    },

    /// Print the flattened rows as a table
    List {
        /// Filter by period.
        ///
        /// Supported formats:
        /// - YYYY, YYYY-MM, YYYY-MM-DD
        /// - ranges of the same shape: YYYY:YYYY, YYYY-MM:YYYY-MM, YYYY-MM-DD:YYYY-MM-DD
        /// - all
        ///
        /// With a period, nodes without recorded days are not listed.
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long = "skip-hidden", help = "Leave out hidden nodes and their children")]
        skip_hidden: bool,
    },

    /// Export the flattened rows
    Export {
        /// Export format: csv, json, xlsx (default from configuration)
        #[arg(long, value_enum, value_name = "FORMAT")]
        format: Option<ExportFormat>,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Date range to export (same syntax as `list --period`).
        /// If omitted, every row is exported.
        #[arg(long, value_name = "RANGE")]
        range: Option<String>,

        #[arg(long = "skip-hidden", help = "Leave out hidden nodes and their children")]
        skip_hidden: bool,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write a configuration file with default values")]
        init: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },
}
