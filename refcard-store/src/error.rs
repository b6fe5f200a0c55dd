use thiserror::Error;

use crate::schema::SchemaError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("Invalid stored document '{key}': {source}")]
    Json {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Store lock poisoned")]
    Poisoned,
}

impl StoreError {
    pub fn json(key: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            key: key.into(),
            source,
        }
    }
}
