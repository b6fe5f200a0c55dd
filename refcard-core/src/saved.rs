//! Persisted payloads: column mapping profiles and saved schedules.

use serde::{Deserialize, Serialize};

use crate::game::Game;

/// A user-defined column-index to field-name assignment.
///
/// `mapping[i]` applies to column `i`; an empty entry ignores the column.
/// `headers` records the header row seen when the mapping was defined (empty
/// when the source had no header row).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingProfile {
    pub profile_key: String,
    #[serde(default)]
    pub headers: Vec<String>,
    #[serde(default)]
    pub mapping: Vec<String>,
    /// RFC 3339 timestamp of the last save.
    #[serde(default)]
    pub saved_at: String,
}

impl MappingProfile {
    /// Create a profile stamped with the current time.
    pub fn new(profile_key: impl Into<String>, headers: Vec<String>, mapping: Vec<String>) -> Self {
        Self {
            profile_key: profile_key.into(),
            headers,
            mapping,
            saved_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Field name mapped to column `index`, if any.
    pub fn field_for(&self, index: usize) -> Option<&str> {
        self.mapping
            .get(index)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
    }

    /// Number of columns that map to a field.
    pub fn mapped_columns(&self) -> usize {
        self.mapping.iter().filter(|m| !m.trim().is_empty()).count()
    }
}

/// A named snapshot of an import: the source text, the parser used and the
/// normalized games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSchedule {
    pub name: String,
    pub raw_text: String,
    pub parser_key: String,
    pub games: Vec<Game>,
    #[serde(default)]
    pub saved_at: String,
}

impl SavedSchedule {
    pub fn new(
        name: impl Into<String>,
        raw_text: impl Into<String>,
        parser_key: impl Into<String>,
        games: Vec<Game>,
    ) -> Self {
        Self {
            name: name.into(),
            raw_text: raw_text.into(),
            parser_key: parser_key.into(),
            games,
            saved_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
