//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "refcard")]
#[command(about = "Import sports schedules into referee game-card records", long_about = None)]
pub(crate) struct Cli {
    /// Path to the database file (default: from settings, else the data directory)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List the available schedule parsers
    List,

    /// Import a schedule file and print the games
    Import {
        /// Schedule file, or "-" for standard input
        file: PathBuf,

        /// Parser key (e.g., delimited, line-block, generic)
        #[arg(short, long)]
        parser: Option<String>,

        /// Save the imported games under this name
        #[arg(long)]
        save: Option<String>,

        /// Print the games as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage saved column mappings for the generic parser
    Mapping {
        #[command(subcommand)]
        action: MappingAction,
    },

    /// Manage saved schedules
    Schedule {
        #[command(subcommand)]
        action: ScheduleAction,
    },

    /// Show or change settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum MappingAction {
    /// List saved mapping profiles
    List,

    /// Show a saved mapping profile
    Show {
        /// Profile key (default: generic-default)
        key: Option<String>,
    },

    /// Save a mapping profile, one field per column
    Set {
        /// Profile key (e.g., generic-default)
        key: String,

        /// Sample file whose header row is recorded with the mapping
        #[arg(long)]
        from: Option<PathBuf>,

        /// Field per column, comma separated; leave a slot empty to ignore
        /// the column (e.g., game_number,,home_team,away_team)
        #[arg(long, value_delimiter = ',', required = true)]
        fields: Vec<String>,
    },

    /// List the field names a column can be mapped to
    Fields,
}

#[derive(Subcommand)]
pub(crate) enum ScheduleAction {
    /// List saved schedules
    List,

    /// Show the games of a saved schedule
    Show {
        /// Schedule name
        name: String,

        /// Print the saved schedule as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a saved schedule
    Delete {
        /// Schedule name
        name: String,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the current settings
    Show,

    /// Set a setting (storage.database or import.default_parser)
    Set {
        /// Setting name
        name: String,

        /// New value
        value: String,
    },

    /// Clear a setting
    Unset {
        /// Setting name
        name: String,
    },

    /// Print the settings file path
    Path,
}
