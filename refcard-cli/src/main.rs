//! refcard CLI
//!
//! Command-line interface for importing sports schedules into referee
//! game-card records.

mod cli_types;
mod commands;
mod error;

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use log::LevelFilter;

use refcard_store::SqliteStore;

use cli_types::{Cli, Commands, ConfigAction, MappingAction, ScheduleAction};
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose, wants_json(&cli.command));

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let db = cli.db;
    match cli.command {
        Commands::List => {
            let store = open_store(db)?;
            commands::list::run_list(&refcard_lib::default_registry(store));
            Ok(())
        }
        Commands::Import {
            file,
            parser,
            save,
            json,
        } => commands::import::run_import(open_store(db)?, &file, parser, save, json),
        Commands::Mapping { action } => {
            let store = open_store(db)?;
            match action {
                MappingAction::List => commands::mapping::run_mapping_list(store.as_ref()),
                MappingAction::Show { key } => {
                    commands::mapping::run_mapping_show(store.as_ref(), key.as_deref())
                }
                MappingAction::Set { key, from, fields } => {
                    commands::mapping::run_mapping_set(store, &key, from.as_deref(), fields)
                }
                MappingAction::Fields => {
                    commands::mapping::run_mapping_fields();
                    Ok(())
                }
            }
        }
        Commands::Schedule { action } => {
            let store = open_store(db)?;
            match action {
                ScheduleAction::List => commands::schedule::run_schedule_list(store.as_ref()),
                ScheduleAction::Show { name, json } => {
                    commands::schedule::run_schedule_show(store.as_ref(), &name, json)
                }
                ScheduleAction::Delete { name } => {
                    commands::schedule::run_schedule_delete(store.as_ref(), &name)
                }
            }
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                commands::config::run_config_show(db);
                Ok(())
            }
            ConfigAction::Set { name, value } => {
                commands::config::run_config_set(&name, Some(&value))
            }
            ConfigAction::Unset { name } => commands::config::run_config_set(&name, None),
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
        },
    }
}

/// Open the database named by `--db`, the settings file, or the default.
fn open_store(cli_override: Option<PathBuf>) -> Result<Arc<SqliteStore>, CliError> {
    let path = refcard_lib::settings::resolve_database_path(cli_override);
    log::debug!("Using database {}", path.display());
    let store = SqliteStore::open(&path).map_err(|e| {
        CliError::database(format!("Failed to open {}: {}", path.display(), e))
    })?;
    Ok(Arc::new(store))
}

fn wants_json(command: &Commands) -> bool {
    matches!(
        command,
        Commands::Import { json: true, .. }
            | Commands::Schedule {
                action: ScheduleAction::Show { json: true, .. }
            }
    )
}

/// Plain messages for normal runs; timestamps and levels with `--verbose`.
///
/// JSON output owns stdout, so log lines go to stderr when it is requested.
fn init_logging(quiet: bool, verbose: bool, json: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).target(if json {
        env_logger::Target::Stderr
    } else {
        env_logger::Target::Stdout
    });

    if verbose {
        builder.format_timestamp_millis();
    } else {
        builder.format(|buf, record| match record.level() {
            log::Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(
                buf,
                "{}: {}",
                level.as_str().to_ascii_lowercase(),
                record.args()
            ),
        });
    }
    builder.init();
}

/// Print an empty line through the logger so `--quiet` suppresses it too.
pub(crate) fn log_blank() {
    log::info!("");
}
