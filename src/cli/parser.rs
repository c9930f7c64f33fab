use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimetracker
/// CLI application to track weekly working hours and overtime
#[derive(Parser)]
#[command(
    name = "rtimetracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track weekly working hours and the running overtime balance (41h target, 40h in holiday weeks)",
    long_about = None
)]
pub struct Cli {
    /// Override the primary SQLite store path
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the fallback key/value store path
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize configuration and storage
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

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

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record a week
    Add {
        /// Hours worked in the week (0 is allowed)
        hours: String,

        #[arg(long, help = "Calendar year (default: suggested next week)")]
        year: Option<i32>,

        #[arg(long, help = "ISO week number (default: suggested next week)")]
        week: Option<u32>,

        #[arg(long, help = "School-holiday week (40h target instead of 41h)")]
        holiday: bool,

        #[arg(long, help = "Hours deducted from the target, e.g. approved leave")]
        reduction: Option<String>,

        #[arg(
            long,
            value_name = "YYYY-MM-DD",
            help = "Reference date used for the suggestion when nothing is recorded"
        )]
        date: Option<String>,
    },

    /// Show the suggested next week
    Next {
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<String>,
    },

    /// List recorded weeks, most recent first
    List {
        #[arg(long, help = "Only weeks of this calendar year")]
        year: Option<i32>,

        #[arg(long, help = "Only this ISO week number")]
        week: Option<u32>,
    },

    /// Show the running overtime balance
    Summary,

    /// Delete every entry equal to the given one
    Del {
        /// Calendar year of the entry
        #[arg(required_unless_present = "row")]
        year: Option<i32>,

        /// ISO week of the entry
        #[arg(required_unless_present = "row")]
        week: Option<u32>,

        /// Hours worked as recorded
        #[arg(required_unless_present = "row")]
        hours: Option<f64>,

        #[arg(long, help = "The entry is a holiday week")]
        holiday: bool,

        #[arg(long, help = "Reduction as recorded (default 0)")]
        reduction: Option<f64>,

        #[arg(
            long,
            conflicts_with_all = ["year", "week", "hours", "holiday", "reduction"],
            help = "Delete the entry shown on this row of `list`"
        )]
        row: Option<usize>,
    },

    /// Export all entries
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(
            long,
            value_name = "FILE",
            help = "Output file (default: dated name in the export directory)"
        )]
        file: Option<String>,

        #[arg(long, help = "Wrap the export in a .zip archive")]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Replace all entries with a JSON backup
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}
