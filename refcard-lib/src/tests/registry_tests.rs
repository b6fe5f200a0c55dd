use super::*;
use refcard_core::{ParseError, ParserFn};

fn fixed(
    key: &str,
    home: &'static str,
) -> ParserFn<impl Fn(&str) -> Result<Vec<RawGame>, ParseError> + Send + Sync> {
    ParserFn::new(key, format!("{key} parser"), move |_text: &str| {
        Ok(vec![RawGame::new().with("home_team", home).with("away_team", "Visitors")])
    })
}

fn home_of(extraction: &Extraction) -> Vec<&str> {
    extraction
        .games
        .iter()
        .filter_map(|g| g.get_str("home_team"))
        .collect()
}

#[test]
fn test_register_replaces_in_place() {
    let mut registry = ParserRegistry::new();
    registry.register(fixed("a", "First"));
    registry.register(fixed("b", "Second"));
    registry.register(fixed("a", "Replacement"));

    let keys: Vec<String> = registry.list().into_iter().map(|p| p.key).collect();
    assert_eq!(keys, vec!["a", "b"]);
    assert_eq!(home_of(&registry.extract("x", "a")), vec!["Replacement"]);
}

#[test]
fn test_register_as_overrides_key_and_name() {
    let mut registry = ParserRegistry::new();
    registry.register_as("custom", "Custom Layout", Arc::new(fixed("ignored", "Home")));
    let info = &registry.list()[0];
    assert_eq!(info.key, "custom");
    assert_eq!(info.name, "Custom Layout");
    assert!(registry.find("ignored").is_none());
}

#[test]
fn test_unknown_key_falls_back_to_generic() {
    let mut registry = ParserRegistry::new();
    registry.register(fixed("delimited", "Delimited"));
    registry.register(fixed(DEFAULT_PARSER_KEY, "Generic"));

    let direct = registry.extract("text", DEFAULT_PARSER_KEY);
    let fallback = registry.extract("text", "nonexistent-key");

    assert_eq!(home_of(&direct), home_of(&fallback));
    assert!(direct.errors.is_empty());
    assert_eq!(
        fallback.errors,
        vec!["Unknown parser 'nonexistent-key'; using 'generic' instead.".to_string()]
    );
    assert_eq!(fallback.parser_key.as_deref(), Some(DEFAULT_PARSER_KEY));
}

#[test]
fn test_fallback_without_generic_uses_first() {
    let mut registry = ParserRegistry::new();
    registry.register(fixed("line-block", "Blocks"));
    registry.register(fixed("delimited", "Rows"));

    let extraction = registry.extract("text", "missing");
    assert_eq!(extraction.parser_key.as_deref(), Some("line-block"));
    assert_eq!(home_of(&extraction), vec!["Blocks"]);
    assert_eq!(extraction.errors.len(), 1);
}

#[test]
fn test_alias_resolves_without_note() {
    let mut registry = ParserRegistry::new();
    registry.register(fixed(DEFAULT_PARSER_KEY, "Generic"));
    registry.alias(GENERIC_ALIAS, DEFAULT_PARSER_KEY).unwrap();

    let extraction = registry.extract("text", GENERIC_ALIAS);
    assert!(extraction.errors.is_empty());
    assert_eq!(extraction.parser_key.as_deref(), Some(DEFAULT_PARSER_KEY));
    assert!(registry.find(GENERIC_ALIAS).is_some());
}

#[test]
fn test_alias_to_unknown_key_is_rejected() {
    let mut registry = ParserRegistry::new();
    assert!(matches!(
        registry.alias("old", "new"),
        Err(RegistryError::DanglingAlias { .. })
    ));
}

#[test]
fn test_empty_registry_reports_error() {
    let registry = ParserRegistry::new();
    let extraction = registry.extract("anything", DEFAULT_PARSER_KEY);
    assert!(extraction.games.is_empty());
    assert_eq!(extraction.errors, vec!["No parsers are registered.".to_string()]);
    assert_eq!(extraction.parser_key, None);
}

#[test]
fn test_parser_error_becomes_message() {
    let mut registry = ParserRegistry::new();
    registry.register(ParserFn::new("bad", "Bad", |_text: &str| {
        Err(ParseError::malformed("boom"))
    }));

    let extraction = registry.extract("text", "bad");
    assert!(extraction.games.is_empty());
    assert_eq!(extraction.errors.len(), 1);
    assert!(extraction.errors[0].contains("boom"));
}

#[test]
fn test_parser_panic_is_caught() {
    let mut registry = ParserRegistry::new();
    registry.register(ParserFn::new("panicky", "Panicky", |_text: &str| -> Result<Vec<RawGame>, ParseError> {
        panic!("exploded")
    }));

    let extraction = registry.extract("text", "panicky");
    assert!(extraction.games.is_empty());
    assert_eq!(extraction.errors.len(), 1);
    assert!(extraction.errors[0].contains("exploded"));
}
