//! The column-mapping extractor.

use std::sync::Arc;

use refcard_core::util::{header_key, split_rows};
use refcard_core::{Diagnostics, MappingProfile, ParseError, RawGame, ScheduleParser};
use refcard_store::MappingStore;

use crate::error::MappingError;
use crate::field::MappedField;
use crate::header::looks_like_header_row;

/// Profile key used by the default `generic` registry entry.
pub const DEFAULT_PROFILE_KEY: &str = "generic-default";

/// What a table looks like, for prompting the user to define a mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableShape {
    /// The header row, when the first row is a header.
    pub headers: Option<Vec<String>>,
    pub first_row_is_data: bool,
    /// Width of the widest row.
    pub column_count: usize,
    /// Number of data rows (the header row excluded).
    pub rows: usize,
    /// First data row, for previews.
    pub sample: Vec<String>,
}

/// Extracts games from arbitrary tables using stored column mappings.
///
/// Never guesses: without a stored profile for the requested key it returns
/// [`MappingError::MappingRequired`].
pub struct MappingEngine {
    store: Arc<dyn MappingStore>,
}

impl MappingEngine {
    pub fn new(store: Arc<dyn MappingStore>) -> Self {
        Self { store }
    }

    /// Describe the table in `raw` without applying any mapping.
    pub fn inspect(&self, raw: &str) -> TableShape {
        let rows = split_rows(raw);
        let column_count = rows.iter().map(Vec::len).max().unwrap_or(0);
        let Some(first) = rows.first() else {
            return TableShape {
                headers: None,
                first_row_is_data: false,
                column_count,
                rows: 0,
                sample: Vec::new(),
            };
        };

        let has_header = looks_like_header_row(first.as_slice());
        let data_start = usize::from(has_header);
        TableShape {
            headers: has_header.then(|| first.clone()),
            first_row_is_data: !has_header,
            column_count,
            rows: rows.len() - data_start,
            sample: rows.get(data_start).cloned().unwrap_or_default(),
        }
    }

    /// Stored profile for `profile_key`, if any.
    pub fn load_mapping(&self, profile_key: &str) -> Result<Option<MappingProfile>, MappingError> {
        Ok(self.store.load_mapping(profile_key)?)
    }

    /// Validate and persist a mapping. Entries may be empty (ignored column)
    /// or any [`MappedField`] name; names are stored in canonical form.
    pub fn save_mapping(
        &self,
        profile_key: &str,
        headers: Vec<String>,
        mapping: Vec<String>,
    ) -> Result<MappingProfile, MappingError> {
        let mut canonical = Vec::with_capacity(mapping.len());
        for entry in &mapping {
            if entry.trim().is_empty() {
                canonical.push(String::new());
            } else {
                canonical.push(entry.parse::<MappedField>()?.as_str().to_string());
            }
        }
        if canonical.iter().all(String::is_empty) {
            return Err(MappingError::EmptyMapping(profile_key.to_string()));
        }

        let profile = MappingProfile::new(profile_key, headers, canonical);
        self.store.save_mapping(&profile)?;
        log::info!(
            "Saved mapping '{}' ({} mapped columns)",
            profile_key,
            profile.mapped_columns()
        );
        Ok(profile)
    }

    /// Apply the mapping stored under `profile_key` to every data row.
    pub fn parse_with_mapping(
        &self,
        raw: &str,
        profile_key: &str,
    ) -> Result<Vec<RawGame>, MappingError> {
        self.parse_with_mapping_diagnostics(raw, profile_key, &mut Diagnostics::new())
    }

    /// As [`parse_with_mapping`](Self::parse_with_mapping), recording skipped
    /// rows, ignored mapping entries and header mismatches.
    pub fn parse_with_mapping_diagnostics(
        &self,
        raw: &str,
        profile_key: &str,
        diagnostics: &mut Diagnostics,
    ) -> Result<Vec<RawGame>, MappingError> {
        let rows = split_rows(raw);
        let Some(first) = rows.first() else {
            return Ok(Vec::new());
        };
        let has_header = looks_like_header_row(first.as_slice());

        let Some(profile) = self.store.load_mapping(profile_key)? else {
            return Err(MappingError::MappingRequired {
                profile_key: profile_key.to_string(),
                headers: has_header.then(|| first.clone()),
                first_row_is_data: !has_header,
            });
        };

        let columns = resolve_columns(&profile, diagnostics);
        if columns.is_empty() {
            diagnostics.warn(format!(
                "Mapping '{profile_key}' does not assign any known field"
            ));
            return Ok(Vec::new());
        }

        let data = if has_header {
            if !profile.headers.is_empty() && !same_headers(&profile.headers, first) {
                diagnostics.warn(format!(
                    "Header row differs from the saved mapping '{profile_key}'; applying columns by position"
                ));
            }
            &rows[1..]
        } else {
            &rows[..]
        };

        let mut games = Vec::new();
        let mut skipped = 0;
        for row in data {
            let mut game = RawGame::new();
            for &(index, field) in &columns {
                if let Some(cell) = row.get(index) {
                    field.apply(&mut game, cell);
                }
            }
            if game.has_teams() {
                games.push(game);
            } else {
                skipped += 1;
            }
        }
        diagnostics.skipped(skipped, "rows without home and away teams");
        log::debug!(
            "Mapping '{}' produced {} games from {} rows",
            profile_key,
            games.len(),
            data.len()
        );
        Ok(games)
    }
}

/// Column index and field for every usable mapping entry.
fn resolve_columns(profile: &MappingProfile, diagnostics: &mut Diagnostics) -> Vec<(usize, MappedField)> {
    let mut columns = Vec::new();
    for (index, entry) in profile.mapping.iter().enumerate() {
        if entry.trim().is_empty() {
            continue;
        }
        match entry.parse::<MappedField>() {
            Ok(field) => columns.push((index, field)),
            Err(_) => diagnostics.warn(format!(
                "Ignoring unknown field '{}' in column {}",
                entry.trim(),
                index + 1
            )),
        }
    }
    columns
}

fn same_headers(saved: &[String], seen: &[String]) -> bool {
    let saved: Vec<String> = saved.iter().map(|h| header_key(h)).collect();
    let seen: Vec<String> = seen.iter().map(|h| header_key(h)).collect();
    let trim = |v: &[String]| v.len() - v.iter().rev().take_while(|h| h.is_empty()).count();
    saved[..trim(&saved)] == seen[..trim(&seen)]
}

/// Registers a [`MappingEngine`] profile as a [`ScheduleParser`].
pub struct MappingParser {
    engine: Arc<MappingEngine>,
    profile_key: String,
    key: String,
    name: String,
}

impl MappingParser {
    pub fn new(engine: Arc<MappingEngine>, profile_key: impl Into<String>) -> Self {
        Self {
            engine,
            profile_key: profile_key.into(),
            key: "generic".to_string(),
            name: "Generic (column mapping)".to_string(),
        }
    }

    /// Override the registry key and display name.
    pub fn named(mut self, key: impl Into<String>, name: impl Into<String>) -> Self {
        self.key = key.into();
        self.name = name.into();
        self
    }

    pub fn profile_key(&self) -> &str {
        &self.profile_key
    }

    pub fn engine(&self) -> &Arc<MappingEngine> {
        &self.engine
    }
}

impl ScheduleParser for MappingParser {
    fn parse_with_diagnostics(
        &self,
        text: &str,
        diagnostics: &mut Diagnostics,
    ) -> Result<Vec<RawGame>, ParseError> {
        Ok(self
            .engine
            .parse_with_mapping_diagnostics(text, &self.profile_key, diagnostics)?)
    }

    fn key(&self) -> &str {
        &self.key
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        "Any table, using a saved column mapping"
    }
}
