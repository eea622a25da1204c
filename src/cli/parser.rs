use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for cuetimer
/// Pool-hall table timer: per-table sessions, billing and history on SQLite
#[derive(Parser)]
#[command(
    name = "cuetimer",
    version = env!("CARGO_PKG_VERSION"),
    about = "A pool-hall table timer: run tables, bill sessions and keep a history using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Target of a transition: one table, or every eligible table.
#[derive(Args, Debug, Clone)]
pub struct Target {
    /// Table id or name
    #[arg(required_unless_present = "all", conflicts_with = "all")]
    pub id: Option<String>,

    /// Apply to every eligible table
    #[arg(long)]
    pub all: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create, edit, delete, reset or list tables
    Table {
        #[command(subcommand)]
        action: TableCmd,
    },

    /// Start (or resume) a table
    Start(Target),

    /// Pause a running table
    Pause(Target),

    /// Stop a table and record its session in the history
    Stop(Target),

    /// Pause everything if anything runs, otherwise start everything
    Toggle,

    /// Run a keyboard shortcut (space, n, t, l, s, p, escape)
    Key {
        key: String,
    },

    /// Show the current bill of a table without stopping it
    Bill {
        /// Table id or name
        id: String,

        #[arg(long, help = "Print the bill as JSON")]
        json: bool,
    },

    /// Show or change billing and display settings
    Settings {
        #[command(subcommand)]
        action: SettingsCmd,
    },

    /// List or clear the session history
    History {
        #[command(subcommand)]
        action: HistoryCmd,
    },

    /// Export history (csv) or the full state (json)
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(
            long,
            value_name = "FILE",
            help = "Output file (default: billiards-history-YYYY-MM-DD.<ext>)"
        )]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing file")]
        force: bool,
    },

    /// Live view of every table, refreshed until Ctrl-C
    Watch {
        #[arg(long, value_name = "MS", help = "Refresh interval in milliseconds")]
        interval: Option<u64>,

        #[arg(long, help = "Render a single frame and exit")]
        once: bool,
    },

    /// Foreground single-table timer (no history), stopped with Ctrl-C
    Solo {
        #[arg(long, help = "Hourly rate (default: default_rate from config)")]
        rate: Option<i64>,

        #[arg(long, value_name = "MS", help = "Refresh interval in milliseconds")]
        interval: Option<u64>,
    },
}

#[derive(Subcommand)]
pub enum TableCmd {
    /// Add a table
    Add {
        #[arg(long, help = "Table name (default: \"Table N\")")]
        name: Option<String>,

        #[arg(long, help = "Hourly rate (default: default_rate from config)")]
        rate: Option<i64>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Change name, rate or notes of a table
    Edit {
        /// Table id or name
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        rate: Option<i64>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete a table (a running session is billed first)
    Del {
        /// Table id or name
        id: String,
    },

    /// Zero a table without recording history
    Reset {
        /// Table id or name
        id: String,
    },

    /// List tables with live elapsed time and cost
    List {
        #[arg(long, help = "Print the tables as JSON")]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum SettingsCmd {
    /// Print the current settings
    Show,

    /// Set one setting (roundingMinutes, serviceFee, currency, theme, language)
    Set { key: String, value: String },

    /// Switch between light and dark theme
    ToggleTheme,

    /// Switch between Vietnamese and English
    ToggleLanguage,
}

#[derive(Subcommand)]
pub enum HistoryCmd {
    /// List recorded sessions
    List {
        #[arg(long, help = "Only sessions of this table (id or name)")]
        table: Option<String>,
    },

    /// Delete every recorded session
    Clear {
        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}
