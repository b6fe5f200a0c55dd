use std::sync::Arc;

use refcard_core::{ParserFn, RawGame};
use refcard_lib::*;
use refcard_store::{MappingStore, MemoryStore, ScheduleStore};

const SCHEDULE: &str = "\
Game,Date & Time,Sport & Level,Site,Home,Away
1,1/2/2026 5:00 PM,U12,FieldA,Red,Blue
2,1/2/2026 6:30 PM,U14,FieldB,Gold,Black
";

fn registry() -> ParserRegistry {
    default_registry(Arc::new(MemoryStore::new()))
}

#[test]
fn default_registry_lists_builtin_parsers() {
    let registry = registry();
    let keys: Vec<String> = registry.list().into_iter().map(|p| p.key).collect();
    assert_eq!(
        keys,
        vec!["generic", "delimited", "detail-report", "line-block", "assignment-email"]
    );
    assert_eq!(
        registry.find(GENERIC_ALIAS).map(|p| p.info.key.as_str()),
        Some(DEFAULT_PARSER_KEY)
    );
}

#[test]
fn empty_text_is_reported_not_thrown() {
    let registry = registry();
    let result = Importer::new(&registry).import_schedule("", "delimited");
    assert!(result.games.is_empty());
    assert_eq!(result.errors, vec!["No schedule text provided.".to_string()]);

    let result = Importer::new(&registry).import_schedule("  \n\t ", "delimited");
    assert_eq!(result.errors, vec!["No schedule text provided.".to_string()]);
}

#[test]
fn delimited_import_normalizes_games() {
    let registry = registry();
    let result = Importer::new(&registry).import_schedule(SCHEDULE, "delimited");
    assert!(result.is_ok(), "errors: {:?}", result.errors);
    assert_eq!(result.parser_key.as_deref(), Some("delimited"));
    assert_eq!(result.games.len(), 2);

    let first = &result.games[0];
    assert_eq!(first.match_date, "1/2/2026");
    assert_eq!(first.match_time, "5:00 PM");
    assert_eq!(first.home_team, "Red");
    assert!(first.selected);
    assert!(!first.id.is_empty());
    assert_ne!(first.id, result.games[1].id);
}

#[test]
fn generic_without_mapping_reports_mapping_required() {
    let registry = registry();
    let result = Importer::new(&registry).import_schedule(SCHEDULE, "generic-mapper");
    assert!(result.games.is_empty());
    assert_eq!(result.parser_key.as_deref(), Some(DEFAULT_PARSER_KEY));
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("generic-default"), "{}", result.errors[0]);

    let request = result.mapping_required.expect("mapping request");
    assert_eq!(request.profile_key, "generic-default");
    assert_eq!(request.headers.unwrap()[4], "Home");
    assert!(!request.first_row_is_data);
}

#[test]
fn headerless_table_asks_for_positional_mapping() {
    let registry = registry();
    let result = Importer::new(&registry)
        .import_schedule("101,1/2/2026,9:00,4,Red,Blue\n102,1/2/2026,10:00,5,Gold,Black\n", "generic");
    let request = result.mapping_required.expect("mapping request");
    assert_eq!(request.headers, None);
    assert!(request.first_row_is_data);
}

#[test]
fn each_saved_mapping_is_a_parser() {
    let store = Arc::new(MemoryStore::new());
    let positions: Vec<String> = ["game_number", "date_time", "age_division", "location", "home_team", "away_team"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let swapped: Vec<String> = ["game_number", "date_time", "age_division", "location", "away_team", "home_team"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    store
        .save_mapping(&refcard_core::MappingProfile::new("generic-default", Vec::new(), positions))
        .unwrap();
    store
        .save_mapping(&refcard_core::MappingProfile::new("club-b", Vec::new(), swapped))
        .unwrap();

    let registry = default_registry(store);
    let keys: Vec<String> = registry.list().into_iter().map(|p| p.key).collect();
    assert_eq!(keys.last().map(String::as_str), Some("mapping:club-b"));
    assert!(!keys.contains(&saved_mapping_key("generic-default")));

    let importer = Importer::new(&registry);
    let generic = importer.import_schedule(SCHEDULE, "generic");
    let club = importer.import_schedule(SCHEDULE, &saved_mapping_key("club-b"));
    assert!(club.is_ok(), "errors: {:?}", club.errors);
    assert_eq!(club.parser_key.as_deref(), Some("mapping:club-b"));
    assert_eq!(club.games.len(), 2);
    assert_eq!(generic.games[0].home_team, "Red");
    assert_eq!(club.games[0].home_team, "Blue");
    assert_eq!(club.games[0].away_team, "Red");
}

#[test]
fn generic_with_saved_mapping_parses() {
    let store = Arc::new(MemoryStore::new());
    let mapping: Vec<String> = ["game_number", "date_time", "age_division", "location", "home_team", "away_team"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let profile = refcard_core::MappingProfile::new("generic-default", Vec::new(), mapping);
    store.save_mapping(&profile).unwrap();

    let registry = default_registry(store);
    let result = Importer::new(&registry).import_schedule(SCHEDULE, "generic");
    assert!(result.is_ok(), "errors: {:?}", result.errors);
    assert_eq!(result.games.len(), 2);
    assert_eq!(result.games[1].away_team, "Black");
    assert_eq!(result.games[1].match_time, "6:30 PM");
}

#[test]
fn unrecognized_text_finds_no_games() {
    let registry = registry();
    let result = Importer::new(&registry).import_schedule("nothing to see here\n", "delimited");
    assert!(result.games.is_empty());
    assert_eq!(
        result.errors,
        vec!["No games were found in the schedule text.".to_string()]
    );
}

#[test]
fn duplicate_ids_are_reissued() {
    let mut registry = ParserRegistry::new();
    registry.register(ParserFn::new("dupes", "Dupes", |_text: &str| {
        Ok(vec![
            RawGame::new().with("id", "same").with("home_team", "A").with("away_team", "B"),
            RawGame::new().with("id", "same").with("home_team", "C").with("away_team", "D"),
        ])
    }));

    let result = Importer::new(&registry).import_schedule("x", "dupes");
    assert_eq!(result.games.len(), 2);
    assert_eq!(result.games[0].id, "same");
    assert_ne!(result.games[1].id, "same");
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].contains("same"));
}

#[test]
fn import_and_save_round_trips() {
    let registry = registry();
    let store = MemoryStore::new();
    let importer = Importer::new(&registry).with_schedule_store(&store);

    let result = importer.import_and_save(SCHEDULE, "delimited", "Week 1");
    assert!(result.is_ok(), "errors: {:?}", result.errors);

    let saved = importer.load_schedule("Week 1").unwrap().unwrap();
    assert_eq!(saved.parser_key, "delimited");
    assert_eq!(saved.raw_text, SCHEDULE);
    assert_eq!(saved.games, result.games);
    assert_eq!(store.list_schedules().unwrap(), vec!["Week 1".to_string()]);
    assert!(importer.load_schedule("Week 2").unwrap().is_none());
}

#[test]
fn nothing_is_saved_without_games() {
    let registry = registry();
    let store = MemoryStore::new();
    let importer = Importer::new(&registry).with_schedule_store(&store);

    let result = importer.import_and_save("", "delimited", "Empty");
    assert_eq!(result.errors.len(), 1);
    assert!(store.list_schedules().unwrap().is_empty());
}

#[test]
fn save_without_store_keeps_games() {
    let registry = registry();
    let importer = Importer::new(&registry);

    let result = importer.import_and_save(SCHEDULE, "delimited", "Week 1");
    assert_eq!(result.games.len(), 2);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("Week 1"));
    assert!(matches!(
        importer.load_schedule("Week 1"),
        Err(ImportError::NoScheduleStore)
    ));
}

#[test]
fn import_result_serializes_for_json_output() {
    let registry = registry();
    let result = Importer::new(&registry).import_schedule(SCHEDULE, "delimited");
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["games"].as_array().unwrap().len(), 2);
    assert_eq!(json["parser_key"], "delimited");
    assert_eq!(json["games"][0]["assigner"]["name"], "");
}
