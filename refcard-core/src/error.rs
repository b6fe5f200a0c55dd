use thiserror::Error;

/// Errors an extractor may report for input it cannot handle at all.
///
/// Row-level problems are never errors: extractors skip the row and, at most,
/// record a diagnostic warning.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The text is not in the layout this parser understands
    #[error("Unrecognized format: {0}")]
    UnrecognizedFormat(String),

    /// The text is structurally broken beyond row-level recovery
    #[error("Malformed input: {0}")]
    Malformed(String),

    /// A column mapping must be defined before this text can be parsed.
    /// `headers` is the table's header row, if it has one; `first_row_is_data`
    /// means columns must be mapped by position.
    #[error("Column mapping required for profile '{profile_key}'")]
    MappingRequired {
        profile_key: String,
        headers: Option<Vec<String>>,
        first_row_is_data: bool,
    },

    /// The persistence collaborator failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Generic parse error with message
    #[error("{0}")]
    Other(String),
}

impl ParseError {
    pub fn unrecognized(msg: impl Into<String>) -> Self {
        Self::UnrecognizedFormat(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }

    pub fn mapping_required(
        profile_key: impl Into<String>,
        headers: Option<Vec<String>>,
        first_row_is_data: bool,
    ) -> Self {
        Self::MappingRequired {
            profile_key: profile_key.into(),
            headers,
            first_row_is_data,
        }
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
