use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use refcard_store::{ScheduleStore, SqliteStore};

use crate::CliError;

pub(crate) fn run_schedule_list(store: &SqliteStore) -> Result<(), CliError> {
    let names = store
        .list_schedules()
        .map_err(|e| CliError::database(format!("Failed to list schedules: {}", e)))?;
    if names.is_empty() {
        log::info!("No schedules saved.");
        log::info!("Run 'refcard import <FILE> --save <NAME>' to save one.");
        return Ok(());
    }

    for name in names {
        match store.load_schedule_by_name(&name) {
            Ok(Some(schedule)) => log::info!(
                "  {}  {} games, {} ({})",
                name.if_supports_color(Stdout, |t| t.bold()),
                schedule.games.len(),
                schedule.parser_key.if_supports_color(Stdout, |t| t.cyan()),
                super::format_saved_at(&schedule.saved_at),
            ),
            Ok(None) => {}
            Err(e) => log::warn!("  {}: {}", name, e),
        }
    }
    Ok(())
}

pub(crate) fn run_schedule_show(store: &SqliteStore, name: &str, json: bool) -> Result<(), CliError> {
    let schedule = store
        .load_schedule_by_name(name)
        .map_err(|e| CliError::database(format!("Failed to load schedule: {}", e)))?
        .ok_or_else(|| CliError::not_found(format!("schedule '{}'", name)))?;

    if json {
        let out = serde_json::to_string_pretty(&schedule)
            .map_err(|e| CliError::other(format!("Failed to serialize schedule: {}", e)))?;
        println!("{out}");
        return Ok(());
    }

    log::info!(
        "{} ({} games, parsed with {}, saved {})",
        schedule.name.if_supports_color(Stdout, |t| t.bold()),
        schedule.games.len(),
        schedule.parser_key,
        super::format_saved_at(&schedule.saved_at),
    );
    crate::log_blank();
    super::print_games(&schedule.games);
    Ok(())
}

pub(crate) fn run_schedule_delete(store: &SqliteStore, name: &str) -> Result<(), CliError> {
    let removed = store
        .delete_schedule(name)
        .map_err(|e| CliError::database(format!("Failed to delete schedule: {}", e)))?;
    if !removed {
        return Err(CliError::not_found(format!("schedule '{}'", name)));
    }
    log::info!("Deleted schedule '{}'", name);
    Ok(())
}
