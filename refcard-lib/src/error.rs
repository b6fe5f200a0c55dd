use refcard_store::StoreError;
use thiserror::Error;

/// Errors from the parser registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Nothing to fall back to
    #[error("No parsers are registered.")]
    Empty,

    /// An alias points at a key that was never registered
    #[error("Alias '{alias}' points at unknown parser '{key}'")]
    DanglingAlias { alias: String, key: String },
}

/// Errors from saving or loading imported schedules.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The importer was built without a schedule store
    #[error("No schedule store is configured")]
    NoScheduleStore,

    /// Underlying store failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors reading or writing `settings.toml`.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Could not serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A value exists where a table was expected
    #[error("[{0}] is not a table")]
    NotATable(String),

    /// Key outside the known settings
    #[error("Unknown setting: {0}")]
    UnknownKey(String),
}

impl SettingsError {
    pub fn unknown_key(key: impl Into<String>) -> Self {
        Self::UnknownKey(key.into())
    }

    pub fn not_a_table(section: impl Into<String>) -> Self {
        Self::NotATable(section.into())
    }
}
