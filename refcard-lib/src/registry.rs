//! Parser registry: register many extractors, resolve one by key.

use std::collections::BTreeMap;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use refcard_core::{Diagnostics, ParseError, RawGame, ScheduleParser};
use serde::Serialize;

use crate::error::RegistryError;

/// Key used when a requested parser is unknown.
pub const DEFAULT_PARSER_KEY: &str = "generic";

/// Older name for the generic mapper, kept as an alias.
pub const GENERIC_ALIAS: &str = "generic-mapper";

/// Metadata about a registered parser, for pickers and `refcard list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParserInfo {
    /// Registry key (e.g., "delimited", "generic")
    pub key: String,
    /// Display name
    pub name: String,
    /// One-line layout description
    pub description: String,
}

/// A column-mapping parser found no saved profile for the text it was given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappingRequest {
    pub profile_key: String,
    /// Header row to map, when the table has one.
    pub headers: Option<Vec<String>>,
    /// The first row is data; map columns by position.
    pub first_row_is_data: bool,
}

/// A registered parser with its metadata.
pub struct RegisteredParser {
    pub info: ParserInfo,
    pub parser: Arc<dyn ScheduleParser>,
}

impl RegisteredParser {
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        parser: Arc<dyn ScheduleParser>,
    ) -> Self {
        let info = ParserInfo {
            key: key.into(),
            name: name.into(),
            description: parser.description().to_string(),
        };
        Self { info, parser }
    }
}

/// Raw output of one extraction call.
///
/// When `errors` holds an extractor failure, `games` is empty. A fallback note
/// alone does not empty `games`.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub games: Vec<RawGame>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// Key of the parser that actually ran.
    pub parser_key: Option<String>,
    /// Set when the parser needs a column mapping first.
    pub mapping_required: Option<MappingRequest>,
}

/// Catalog of schedule parsers keyed by string.
///
/// Owned by the application root and passed by reference; there is no global
/// instance. Keys are unique and registering an existing key replaces the
/// entry in place.
pub struct ParserRegistry {
    parsers: Vec<RegisteredParser>,
    aliases: BTreeMap<String, String>,
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ParserRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            parsers: Vec::new(),
            aliases: BTreeMap::new(),
        }
    }

    /// Register a parser under its own key and display name.
    pub fn register<P: ScheduleParser + 'static>(&mut self, parser: P) -> &mut Self {
        let key = parser.key().to_string();
        let name = parser.display_name().to_string();
        self.register_as(key, name, Arc::new(parser))
    }

    /// Register a parser under an explicit key and display name.
    pub fn register_as(
        &mut self,
        key: impl Into<String>,
        name: impl Into<String>,
        parser: Arc<dyn ScheduleParser>,
    ) -> &mut Self {
        let entry = RegisteredParser::new(key, name, parser);
        match self.parsers.iter_mut().find(|p| p.info.key == entry.info.key) {
            Some(existing) => {
                log::debug!("Replacing parser '{}'", entry.info.key);
                *existing = entry;
            }
            None => self.parsers.push(entry),
        }
        self
    }

    /// Make `alias` resolve to the parser registered as `key`.
    pub fn alias(
        &mut self,
        alias: impl Into<String>,
        key: impl Into<String>,
    ) -> Result<&mut Self, RegistryError> {
        let (alias, key) = (alias.into(), key.into());
        if self.get(&key).is_none() {
            return Err(RegistryError::DanglingAlias { alias, key });
        }
        self.aliases.insert(alias, key);
        Ok(self)
    }

    /// Registered parsers in registration order.
    pub fn list(&self) -> Vec<ParserInfo> {
        self.parsers.iter().map(|p| p.info.clone()).collect()
    }

    /// All registered parsers.
    pub fn parsers(&self) -> impl Iterator<Item = &RegisteredParser> {
        self.parsers.iter()
    }

    /// Aliases and their target keys.
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(a, k)| (a.as_str(), k.as_str()))
    }

    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }

    /// Look a parser up by exact key or alias, without fallback.
    pub fn find(&self, key: &str) -> Option<&RegisteredParser> {
        self.get(key)
            .or_else(|| self.aliases.get(key).and_then(|target| self.get(target)))
    }

    /// Resolve `key` with fallback: exact key, alias, the default key, then
    /// the first registered parser.
    ///
    /// The flag is true when the result is a fallback rather than a match.
    pub fn resolve(&self, key: &str) -> Result<(&RegisteredParser, bool), RegistryError> {
        if let Some(entry) = self.find(key) {
            return Ok((entry, false));
        }
        self.get(DEFAULT_PARSER_KEY)
            .or_else(|| self.parsers.first())
            .map(|entry| (entry, true))
            .ok_or(RegistryError::Empty)
    }

    /// Run the parser resolved from `key` over `raw`.
    ///
    /// Never fails: resolution problems, extractor errors and extractor
    /// panics are reported in [`Extraction::errors`].
    pub fn extract(&self, raw: &str, key: &str) -> Extraction {
        let mut out = Extraction::default();
        let (entry, fallback) = match self.resolve(key) {
            Ok(resolved) => resolved,
            Err(e) => {
                out.errors.push(e.to_string());
                return out;
            }
        };
        let resolved_key = entry.info.key.as_str();
        out.parser_key = Some(resolved_key.to_string());

        if fallback {
            let note = format!("Unknown parser '{key}'; using '{resolved_key}' instead.");
            log::warn!("{note}");
            out.errors.push(note);
        }

        let mut diagnostics = Diagnostics::new();
        let parser = Arc::clone(&entry.parser);
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            parser.parse_with_diagnostics(raw, &mut diagnostics)
        }));
        out.warnings = diagnostics.warnings;

        match outcome {
            Ok(Ok(games)) => out.games = games,
            Ok(Err(e)) => {
                log::warn!("Parser '{resolved_key}' failed: {e}");
                out.errors.push(format!("Parser '{resolved_key}' failed: {e}"));
                if let ParseError::MappingRequired {
                    profile_key,
                    headers,
                    first_row_is_data,
                } = e
                {
                    out.mapping_required = Some(MappingRequest {
                        profile_key,
                        headers,
                        first_row_is_data,
                    });
                }
            }
            Err(payload) => {
                let msg = panic_message(payload.as_ref());
                log::warn!("Parser '{resolved_key}' panicked: {msg}");
                out.errors.push(format!("Parser '{resolved_key}' crashed: {msg}"));
            }
        }
        out
    }

    fn get(&self, key: &str) -> Option<&RegisteredParser> {
        self.parsers.iter().find(|p| p.info.key == key)
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
#[path = "tests/registry_tests.rs"]
mod tests;
