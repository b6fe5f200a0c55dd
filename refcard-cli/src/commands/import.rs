use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use refcard_lib::{ImportResult, Importer, MappingRequest, default_registry};
use refcard_mapping::MappingEngine;
use refcard_store::SqliteStore;

use crate::CliError;

pub(crate) fn run_import(
    store: Arc<SqliteStore>,
    file: &Path,
    parser: Option<String>,
    save: Option<String>,
    json: bool,
) -> Result<(), CliError> {
    let raw = read_input(file)?;
    let key = refcard_lib::settings::resolve_parser_key(parser);
    let registry = default_registry(store.clone());
    let importer = Importer::new(&registry).with_schedule_store(store.as_ref());

    let result = match save.as_deref() {
        Some(name) => importer.import_and_save(&raw, &key, name),
        None => importer.import_schedule(&raw, &key),
    };

    if json {
        let out = serde_json::to_string_pretty(&result)
            .map_err(|e| CliError::other(format!("Failed to serialize games: {}", e)))?;
        println!("{out}");
    } else {
        print_result(&result, file);
    }

    if result.games.is_empty() {
        if let Some(request) = &result.mapping_required {
            suggest_mapping(store, request, &raw, file);
        }
        return Err(CliError::import(
            "no games parsed; check the format or pick another parser with --parser",
        ));
    }
    Ok(())
}

/// Read a file, or standard input for `-`.
fn read_input(file: &Path) -> Result<String, CliError> {
    if file.as_os_str() == "-" {
        let mut raw = String::new();
        std::io::stdin().read_to_string(&mut raw)?;
        Ok(raw)
    } else {
        Ok(std::fs::read_to_string(file)?)
    }
}

fn print_result(result: &ImportResult, file: &Path) {
    for error in &result.errors {
        log::warn!("{}", error);
    }
    for warning in &result.warnings {
        log::warn!("{}", warning);
    }
    if result.games.is_empty() {
        return;
    }

    log::info!(
        "{} {} from {} ({})",
        result.games.len().if_supports_color(Stdout, |t| t.bold()),
        if result.games.len() == 1 { "game" } else { "games" },
        file.display(),
        result
            .parser_key
            .as_deref()
            .unwrap_or("?")
            .if_supports_color(Stdout, |t| t.cyan()),
    );
    crate::log_blank();
    super::print_games(&result.games);

    let unusable = result.games.iter().filter(|g| !g.is_usable()).count();
    if unusable > 0 {
        crate::log_blank();
        log::warn!("{} games are missing a home or away team", unusable);
    }
}

/// Show the detected columns and the command that defines a mapping for them.
fn suggest_mapping(store: Arc<SqliteStore>, request: &MappingRequest, raw: &str, file: &Path) {
    log::info!(
        "{}",
        "No column mapping is saved for this table yet.".if_supports_color(Stdout, |t| t.bold())
    );
    match &request.headers {
        Some(headers) => {
            for (i, header) in headers.iter().enumerate() {
                log::info!("  column {:>2}: {}", i + 1, header);
            }
        }
        None => {
            // No header to show; print the first data row instead.
            let shape = MappingEngine::new(store).inspect(raw);
            for (i, cell) in shape.sample.iter().enumerate() {
                log::info!("  column {:>2}: (first row) {}", i + 1, cell);
            }
        }
    }
    log::info!(
        "Define one with: refcard mapping set {} --from {} --fields <field per column>",
        request.profile_key,
        file.display()
    );
    log::info!("Run 'refcard mapping fields' for the field names.");
}
