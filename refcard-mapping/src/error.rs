use refcard_core::ParseError;
use refcard_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MappingError {
    /// No profile is stored under the key; the caller should ask the user for one.
    ///
    /// `headers` carries the table's header row when it has one. When
    /// `first_row_is_data` is set the table has no header and the mapping
    /// must be defined by column position.
    #[error("Column mapping required for profile '{profile_key}'")]
    MappingRequired {
        profile_key: String,
        headers: Option<Vec<String>>,
        first_row_is_data: bool,
    },

    #[error("Unknown mapping field '{0}'")]
    UnknownField(String),

    #[error("Mapping for profile '{0}' does not assign any column")]
    EmptyMapping(String),

    #[error("Mapping store error: {0}")]
    Store(#[from] StoreError),
}

impl MappingError {
    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField(name.into())
    }

    pub fn is_mapping_required(&self) -> bool {
        matches!(self, Self::MappingRequired { .. })
    }
}

impl From<MappingError> for ParseError {
    fn from(err: MappingError) -> Self {
        match err {
            MappingError::MappingRequired {
                profile_key,
                headers,
                first_row_is_data,
            } => ParseError::mapping_required(profile_key, headers, first_row_is_data),
            MappingError::Store(e) => ParseError::storage(e.to_string()),
            other => ParseError::other(other.to_string()),
        }
    }
}
