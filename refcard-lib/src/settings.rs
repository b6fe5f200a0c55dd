//! Shared application settings (database path, default parser).
//!
//! The settings file is `~/.config/refcard/settings.toml`:
//!
//! ```toml
//! [storage]
//! database = "/path/to/refcard.db"
//!
//! [import]
//! default_parser = "delimited"
//! ```

use std::path::{Path, PathBuf};

use crate::error::SettingsError;
use crate::registry::DEFAULT_PARSER_KEY;

/// Settings the CLI may read and write, as `(section, key)`.
pub const KNOWN_SETTINGS: [(&str, &str); 2] =
    [("storage", "database"), ("import", "default_parser")];

/// Canonical path to the settings file: `~/.config/refcard/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("refcard").join("settings.toml")
}

/// Database location used when neither the CLI nor the settings name one.
pub fn default_database_path() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data.join("refcard").join("refcard.db")
}

/// Resolve the database path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `storage.database` in `settings.toml`
/// 3. The platform data directory
pub fn resolve_database_path(cli_override: Option<PathBuf>) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    if let Some(p) = read_setting("storage", "database") {
        return PathBuf::from(p);
    }
    default_database_path()
}

/// Saved `import.default_parser`, if set.
pub fn load_default_parser() -> Option<String> {
    read_setting("import", "default_parser")
}

/// Parser key for an import: CLI flag, then settings, then `"generic"`.
pub fn resolve_parser_key(cli_override: Option<String>) -> String {
    cli_override
        .or_else(load_default_parser)
        .unwrap_or_else(|| DEFAULT_PARSER_KEY.to_string())
}

/// Parse `"section.key"` into one of [`KNOWN_SETTINGS`].
pub fn parse_setting_name(name: &str) -> Result<(&'static str, &'static str), SettingsError> {
    let (section, key) = name
        .split_once('.')
        .ok_or_else(|| SettingsError::unknown_key(name))?;
    KNOWN_SETTINGS
        .iter()
        .find(|(s, k)| *s == section && *k == key)
        .copied()
        .ok_or_else(|| SettingsError::unknown_key(name))
}

/// Read `section.key` from the shared settings file.
pub fn read_setting(section: &str, key: &str) -> Option<String> {
    read_setting_from(&settings_path(), section, key)
}

/// Read `section.key` from the settings file at `path`. Empty values and
/// unreadable files read as unset.
pub fn read_setting_from(path: &Path, section: &str, key: &str) -> Option<String> {
    let contents = std::fs::read_to_string(path).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    let value = doc.get(section)?.get(key)?.as_str()?;
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Save (or clear, with `None`) `section.key` in the shared settings file.
pub fn save_setting(section: &str, key: &str, value: Option<&str>) -> Result<(), SettingsError> {
    write_setting_to(&settings_path(), section, key, value)
}

/// Save (or clear) `section.key` in the settings file at `path`.
///
/// Uses `toml::Value` for a surgical update so other sections and keys are
/// preserved. A settings file that does not parse is an error rather than
/// being overwritten.
pub fn write_setting_to(
    path: &Path,
    section: &str,
    key: &str,
    value: Option<&str>,
) -> Result<(), SettingsError> {
    let mut doc: toml::Value = match std::fs::read_to_string(path) {
        Ok(contents) => contents.parse()?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            toml::Value::Table(Default::default())
        }
        Err(e) => return Err(e.into()),
    };

    let table = doc
        .as_table_mut()
        .ok_or_else(|| SettingsError::not_a_table("root"))?;
    let entry = table
        .entry(section)
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let section_table = entry
        .as_table_mut()
        .ok_or_else(|| SettingsError::not_a_table(section))?;

    match value {
        Some(v) => {
            section_table.insert(key.to_string(), toml::Value::String(v.to_string()));
        }
        None => {
            section_table.remove(key);
        }
    }

    // Write atomically
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc)?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, path)?;

    Ok(())
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub fn load_settings_string() -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
