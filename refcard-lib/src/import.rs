//! Import orchestration: raw text in, canonical games plus messages out.

use std::collections::HashSet;

use refcard_core::{Game, SavedSchedule, normalize_raw};
use refcard_store::ScheduleStore;
use serde::Serialize;

use crate::error::ImportError;
use crate::registry::{MappingRequest, ParserRegistry};

const NO_TEXT: &str = "No schedule text provided.";
const NO_GAMES: &str = "No games were found in the schedule text.";

/// Outcome of one import. Errors and warnings are human-readable; nothing in
/// the import path panics or returns `Err`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportResult {
    pub games: Vec<Game>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// Parser that produced the games, after fallback.
    pub parser_key: Option<String>,
    /// Column mapping the user must define before this text can be read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapping_required: Option<MappingRequest>,
}

impl ImportResult {
    fn failed(msg: impl Into<String>) -> Self {
        Self {
            errors: vec![msg.into()],
            ..Self::default()
        }
    }

    /// Whether the import produced games without any error.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty() && !self.games.is_empty()
    }
}

/// Runs the registry and the normalizer, and optionally saves the result.
pub struct Importer<'a> {
    registry: &'a ParserRegistry,
    schedules: Option<&'a dyn ScheduleStore>,
}

impl<'a> Importer<'a> {
    pub fn new(registry: &'a ParserRegistry) -> Self {
        Self {
            registry,
            schedules: None,
        }
    }

    pub fn with_schedule_store(mut self, store: &'a dyn ScheduleStore) -> Self {
        self.schedules = Some(store);
        self
    }

    /// Extract and normalize the games in `raw` with the parser for `key`.
    pub fn import_schedule(&self, raw: &str, key: &str) -> ImportResult {
        if raw.trim().is_empty() {
            return ImportResult::failed(NO_TEXT);
        }

        let extraction = self.registry.extract(raw, key);
        let mut result = ImportResult {
            games: Vec::with_capacity(extraction.games.len()),
            errors: extraction.errors,
            warnings: extraction.warnings,
            parser_key: extraction.parser_key,
            mapping_required: extraction.mapping_required,
        };

        let mut seen = HashSet::new();
        for raw_game in &extraction.games {
            let mut game = normalize_raw(raw_game);
            if !seen.insert(game.id.clone()) {
                let fresh = uuid::Uuid::new_v4().to_string();
                result
                    .warnings
                    .push(format!("Duplicate game id '{}' replaced with '{fresh}'", game.id));
                game.id = fresh.clone();
                seen.insert(fresh);
            }
            result.games.push(game);
        }

        if result.games.is_empty() && result.errors.is_empty() {
            result.errors.push(NO_GAMES.to_string());
        }
        log::debug!(
            "Imported {} games with '{}' ({} errors, {} warnings)",
            result.games.len(),
            result.parser_key.as_deref().unwrap_or(key),
            result.errors.len(),
            result.warnings.len(),
        );
        result
    }

    /// Import, then save the games under `name` if any were produced.
    ///
    /// Save failures are appended to the result's errors; the games are
    /// still returned.
    pub fn import_and_save(&self, raw: &str, key: &str, name: &str) -> ImportResult {
        let mut result = self.import_schedule(raw, key);
        if result.games.is_empty() {
            return result;
        }

        let Some(store) = self.schedules else {
            result.errors.push(format!(
                "Could not save '{name}': {}",
                ImportError::NoScheduleStore
            ));
            return result;
        };

        let parser_key = result.parser_key.as_deref().unwrap_or(key);
        let schedule = SavedSchedule::new(name, raw, parser_key, result.games.clone());
        match store.save_schedule(&schedule) {
            Ok(()) => log::info!("Saved {} games as '{}'", result.games.len(), name),
            Err(e) => {
                log::warn!("Saving schedule '{name}' failed: {e}");
                result.errors.push(format!("Could not save '{name}': {e}"));
            }
        }
        result
    }

    /// Load a previously saved schedule by name.
    pub fn load_schedule(&self, name: &str) -> Result<Option<SavedSchedule>, ImportError> {
        let store = self.schedules.ok_or(ImportError::NoScheduleStore)?;
        Ok(store.load_schedule_by_name(name)?)
    }
}
