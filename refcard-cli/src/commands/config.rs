use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use refcard_lib::settings;

use crate::CliError;

/// Show the settings file and the values in effect.
pub(crate) fn run_config_show(db_override: Option<PathBuf>) {
    let path = settings::settings_path();

    log::info!(
        "{}",
        "refcard Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    crate::log_blank();

    let db_source = if db_override.is_some() {
        "(--db)"
    } else if settings::read_setting("storage", "database").is_some() {
        "(settings)"
    } else {
        "(default)"
    };
    log::info!(
        "  {:<16} {} {}",
        "database",
        settings::resolve_database_path(db_override).display(),
        db_source.if_supports_color(Stdout, |t| t.dimmed()),
    );

    let parser_source = if settings::load_default_parser().is_some() {
        "(settings)"
    } else {
        "(default)"
    };
    log::info!(
        "  {:<16} {} {}",
        "default parser",
        settings::resolve_parser_key(None),
        parser_source.if_supports_color(Stdout, |t| t.dimmed()),
    );

    if let Some(contents) = settings::load_settings_string() {
        crate::log_blank();
        for line in contents.lines() {
            log::info!("  {}", line.if_supports_color(Stdout, |t| t.dimmed()));
        }
    }
}

/// Set (or clear, with `None`) a setting named `section.key`.
pub(crate) fn run_config_set(name: &str, value: Option<&str>) -> Result<(), CliError> {
    let (section, key) =
        settings::parse_setting_name(name).map_err(|e| CliError::config(e.to_string()))?;
    settings::save_setting(section, key, value).map_err(|e| CliError::config(e.to_string()))?;
    match value {
        Some(v) => log::info!("Set {} = {}", name, v),
        None => log::info!("Cleared {}", name),
    }
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    println!("{}", settings::settings_path().display());
}
