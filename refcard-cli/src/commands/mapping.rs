use std::path::Path;
use std::sync::Arc;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use refcard_mapping::{DEFAULT_PROFILE_KEY, MappedField, MappingEngine};
use refcard_store::{MappingStore, SqliteStore};

use crate::CliError;

pub(crate) fn run_mapping_list(store: &SqliteStore) -> Result<(), CliError> {
    let keys = store
        .list_mappings()
        .map_err(|e| CliError::database(format!("Failed to list mappings: {}", e)))?;
    if keys.is_empty() {
        log::info!("No mappings saved.");
        log::info!(
            "Run 'refcard mapping set {} --fields ...' to create one.",
            DEFAULT_PROFILE_KEY
        );
        return Ok(());
    }
    for key in keys {
        log::info!("  {}", key.if_supports_color(Stdout, |t| t.bold()));
    }
    Ok(())
}

pub(crate) fn run_mapping_show(store: &SqliteStore, key: Option<&str>) -> Result<(), CliError> {
    let key = key.unwrap_or(DEFAULT_PROFILE_KEY);
    let profile = store
        .load_mapping(key)
        .map_err(|e| CliError::database(format!("Failed to load mapping: {}", e)))?
        .ok_or_else(|| CliError::not_found(format!("mapping '{}'", key)))?;

    log::info!(
        "{} ({} mapped columns, saved {})",
        profile.profile_key.if_supports_color(Stdout, |t| t.bold()),
        profile.mapped_columns(),
        super::format_saved_at(&profile.saved_at),
    );
    crate::log_blank();

    let columns = profile.mapping.len().max(profile.headers.len());
    for i in 0..columns {
        let header = profile.headers.get(i).map_or("", String::as_str);
        let field = profile.field_for(i);
        log::info!(
            "  {:>2}  {:<24} {}",
            i + 1,
            header,
            match field {
                Some(f) => f.if_supports_color(Stdout, |t| t.cyan()).to_string(),
                None => "(ignored)".if_supports_color(Stdout, |t| t.dimmed()).to_string(),
            },
        );
    }
    Ok(())
}

/// Save `fields` as the mapping for `key`, recording the header row of the
/// sample file when one is given.
pub(crate) fn run_mapping_set(
    store: Arc<SqliteStore>,
    key: &str,
    from: Option<&Path>,
    fields: Vec<String>,
) -> Result<(), CliError> {
    let engine = MappingEngine::new(store);

    let headers = match from {
        Some(path) => {
            let shape = engine.inspect(&std::fs::read_to_string(path)?);
            if shape.column_count != fields.len() {
                log::warn!(
                    "{} has {} columns but {} fields were given",
                    path.display(),
                    shape.column_count,
                    fields.len()
                );
            }
            shape.headers.unwrap_or_default()
        }
        None => Vec::new(),
    };

    let profile = engine
        .save_mapping(key, headers, fields)
        .map_err(|e| CliError::mapping(e.to_string()))?;
    log::info!(
        "Saved mapping '{}' ({} of {} columns mapped)",
        profile.profile_key,
        profile.mapped_columns(),
        profile.mapping.len()
    );
    if profile.profile_key != DEFAULT_PROFILE_KEY {
        log::info!(
            "Import with: refcard import <FILE> --parser {}",
            refcard_lib::saved_mapping_key(&profile.profile_key)
        );
    }
    Ok(())
}

pub(crate) fn run_mapping_fields() {
    log::info!(
        "{}",
        "Fields a column can map to:".if_supports_color(Stdout, |t| t.bold())
    );
    for field in MappedField::ALL {
        log::info!("  {}", field.as_str());
    }
}
