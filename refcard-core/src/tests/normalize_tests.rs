use super::*;
use serde_json::json;

fn keys_of(game: &Game) -> Vec<String> {
    let value = serde_json::to_value(game).unwrap();
    let mut keys: Vec<String> = value.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    keys
}

fn canonical_sorted() -> Vec<String> {
    let mut keys: Vec<String> = CANONICAL_KEYS.iter().map(|k| k.to_string()).collect();
    keys.sort();
    keys
}

#[test]
fn test_null_and_empty_inputs_are_complete() {
    for input in [json!(null), json!({}), json!(42), json!("text"), json!([1, 2])] {
        let game = normalize(&input);
        assert_eq!(keys_of(&game), canonical_sorted(), "input: {input}");
        assert!(!game.id.is_empty());
        assert!(game.selected);
        assert_eq!(game.assigner, Contact::default());
        assert_eq!(game.payer, Contact::default());
        assert_eq!(game.home_team, "");
    }
}

#[test]
fn test_partial_object() {
    let game = normalize(&json!({
        "game_number": 101,
        "home_team": "Red",
        "away_team": null,
        "notes": true,
    }));
    assert_eq!(game.game_number, "101");
    assert_eq!(game.home_team, "Red");
    assert_eq!(game.away_team, "");
    assert_eq!(game.notes, "true");
    assert!(!game.is_usable());
}

#[test]
fn test_contacts_are_structurally_defaulted() {
    let game = normalize(&json!({
        "assigner": {"name": "Pat", "phone": 5551234},
        "payer": "not an object",
    }));
    assert_eq!(game.assigner.name, "Pat");
    assert_eq!(game.assigner.phone, "5551234");
    assert_eq!(game.assigner.email, "");
    assert_eq!(game.payer, Contact::default());
}

#[test]
fn test_referee_aliases_in_priority_order() {
    let game = normalize(&json!({
        "ref1": "Ann",
        "jr_ref": "Bob",
        "ref3": "Cy",
    }));
    assert_eq!(game.referee1, "Ann");
    assert_eq!(game.referee2, "Bob");
    assert_eq!(game.referee3, "Cy");

    let game = normalize(&json!({"referee2": "Primary", "ref2": "Alias", "jr_ref": "Last"}));
    assert_eq!(game.referee2, "Primary");

    let game = normalize(&json!({"referee2": "", "jr_ref": "Junior"}));
    assert_eq!(game.referee2, "Junior");
}

#[test]
fn test_refs_array_overrides_aliases() {
    let game = normalize(&json!({"referee1": "A", "ref2": "B", "refs": ["X", "Y"]}));
    assert_eq!(game.referee1, "X");
    assert_eq!(game.referee2, "Y");
    assert_eq!(game.referee3, "");

    let game = normalize(&json!({"referee3": "C", "refs": ["X"]}));
    assert_eq!(game.referee1, "X");
    assert_eq!(game.referee3, "C");
}

#[test]
fn test_referees_list_fills_empty_slots_by_role() {
    let game = normalize(&json!({
        "referees": [
            {"role": "AR1", "name": "Bob", "email": "bob@example.com"},
            {"role": "Referee", "name": "Ann", "phone": "555-0100"},
            "Cy",
            null,
        ],
    }));
    assert_eq!(game.referees.len(), 3);
    assert_eq!(game.referees[0].email, "bob@example.com");
    assert_eq!(game.referees[2].name, "Cy");
    assert_eq!(game.referee1, "Ann");
    assert_eq!(game.referee2, "Bob");
    assert_eq!(game.referee3, "Cy");
}

#[test]
fn test_scalar_slots_win_over_referees_list() {
    let game = normalize(&json!({
        "referee1": "Zed",
        "referees": [{"role": "Referee", "name": "Ann"}],
    }));
    assert_eq!(game.referee1, "Zed");
    assert_eq!(game.referee2, "");
}

#[test]
fn test_existing_id_is_kept() {
    let game = normalize(&json!({"id": "game-7"}));
    assert_eq!(game.id, "game-7");
    let game = normalize(&json!({"id": 7}));
    assert_eq!(game.id, "7");
}

#[test]
fn test_generated_ids_differ() {
    let a = normalize(&json!({}));
    let b = normalize(&json!({}));
    assert_ne!(a.id, b.id);
}

#[test]
fn test_selected_coercion() {
    assert!(!normalize(&json!({"selected": false})).selected);
    assert!(!normalize(&json!({"selected": "false"})).selected);
    assert!(!normalize(&json!({"selected": 0})).selected);
    assert!(normalize(&json!({"selected": "yes"})).selected);
    assert!(normalize(&json!({"selected": null})).selected);
}

#[test]
fn test_arrays_stringify_joined() {
    let game = normalize(&json!({"notes": ["bring", "flags", 2]}));
    assert_eq!(game.notes, "bring,flags,2");
    let game = normalize(&json!({"notes": {"nested": "x"}}));
    assert_eq!(game.notes, "");
}

#[test]
fn test_idempotent() {
    let inputs = [
        json!(null),
        json!({}),
        json!({"referee1": "A", "ref2": "B", "refs": ["X", "Y"], "assigner": {"name": "Pat"}}),
        json!({
            "id": "abc",
            "home_team": "Red",
            "away_team": "Blue",
            "referees": [{"role": "AR", "name": "Bob"}, {"role": "Center", "name": "Ann"}],
            "selected": "no",
        }),
    ];
    for input in inputs {
        let once = normalize(&input);
        let twice = normalize(&serde_json::to_value(&once).unwrap());
        assert_eq!(once, twice, "input: {input}");
    }
}

#[test]
fn test_normalize_raw_matches_value_form() {
    let mut raw = RawGame::new();
    raw.set("id", "r1").set("home_team", "Red").set("away_team", "Blue");
    raw.set_contact_field("assigner", "email", "a@example.com");
    let from_raw = normalize_raw(&raw);
    let from_value = normalize(&raw.clone().into_value());
    assert_eq!(from_raw, from_value);
    assert_eq!(from_raw.assigner.email, "a@example.com");
    assert!(from_raw.is_usable());
}
