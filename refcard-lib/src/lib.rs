//! Application services shared by refcard frontends.
//!
//! The [`ParserRegistry`] resolves a parser by key, the [`Importer`] turns raw
//! schedule text into canonical games, and [`settings`] holds the shared
//! settings file.

use std::sync::Arc;

use refcard_formats::{
    AssignmentEmailParser, DelimitedParser, DetailReportParser, LineBlockParser,
};
use refcard_mapping::{DEFAULT_PROFILE_KEY, MappingEngine, MappingParser};
use refcard_store::MappingStore;

pub mod error;
pub mod import;
pub mod registry;
pub mod settings;

pub use error::{ImportError, RegistryError, SettingsError};
pub use import::{ImportResult, Importer};
pub use registry::{
    DEFAULT_PARSER_KEY, Extraction, GENERIC_ALIAS, MappingRequest, ParserInfo, ParserRegistry,
    RegisteredParser,
};

pub use refcard_core::{Game, ParseError, RawGame, SavedSchedule, ScheduleParser};

/// Registry key prefix for parsers built from saved column mappings.
pub const SAVED_MAPPING_PREFIX: &str = "mapping:";

/// Registry key of the parser for the saved mapping `profile_key`.
pub fn saved_mapping_key(profile_key: &str) -> String {
    format!("{SAVED_MAPPING_PREFIX}{profile_key}")
}

/// Build the registry with every built-in parser.
///
/// The generic column mapper is registered first under
/// [`DEFAULT_PARSER_KEY`] and reads the profile [`DEFAULT_PROFILE_KEY`] from
/// `store`. Every other mapping saved in `store` gets its own parser under
/// [`saved_mapping_key`].
pub fn default_registry(store: Arc<dyn MappingStore>) -> ParserRegistry {
    let saved = match store.list_mappings() {
        Ok(keys) => keys,
        Err(e) => {
            log::warn!("Could not list saved mappings: {e}");
            Vec::new()
        }
    };
    let engine = Arc::new(MappingEngine::new(store));
    let mut registry = ParserRegistry::new();

    registry.register(
        MappingParser::new(Arc::clone(&engine), DEFAULT_PROFILE_KEY)
            .named(DEFAULT_PARSER_KEY, "Generic (column mapping)"),
    );
    registry.register(DelimitedParser::new());
    registry.register(DetailReportParser::new());
    registry.register(LineBlockParser::new());
    registry.register(AssignmentEmailParser::new());

    for profile_key in saved.iter().filter(|k| k.as_str() != DEFAULT_PROFILE_KEY) {
        registry.register(
            MappingParser::new(Arc::clone(&engine), profile_key.as_str())
                .named(saved_mapping_key(profile_key), format!("Saved mapping '{profile_key}'")),
        );
    }

    if let Err(e) = registry.alias(GENERIC_ALIAS, DEFAULT_PARSER_KEY) {
        log::warn!("{e}");
    }
    registry
}
