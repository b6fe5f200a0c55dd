//! The field normalizer: any JSON shape in, a complete [`Game`] out.
//!
//! This is the only place that knows the canonical schema. It never fails:
//! missing or oddly typed fields fall back to their defaults.

use serde_json::{Map, Value};

use crate::crew;
use crate::game::{Contact, Game, Official};
use crate::raw::RawGame;

/// Serialized key set of every [`Game`].
pub const CANONICAL_KEYS: [&str; 19] = [
    "id",
    "game_number",
    "match_date",
    "match_time",
    "age_division",
    "location",
    "field",
    "home_team",
    "away_team",
    "referee1",
    "referee2",
    "referee3",
    "referees",
    "assigner",
    "payer",
    "home_colors",
    "away_colors",
    "notes",
    "selected",
];

/// Legacy aliases per referee slot, highest priority first.
const REFEREE_ALIASES: [&[&str]; 3] = [
    &["referee1", "ref1"],
    &["referee2", "ref2", "jr_ref"],
    &["referee3", "ref3"],
];

/// Normalize an arbitrary JSON value into a game.
///
/// Non-object input yields a fully defaulted record with a fresh id.
pub fn normalize(raw: &Value) -> Game {
    match raw.as_object() {
        Some(obj) => normalize_map(obj),
        None => normalize_map(&Map::new()),
    }
}

/// Normalize an extractor's field bag.
pub fn normalize_raw(raw: &RawGame) -> Game {
    normalize_map(raw.as_map())
}

fn normalize_map(obj: &Map<String, Value>) -> Game {
    let text = |key: &str| stringify(obj.get(key));

    let referees = officials(obj.get("referees"));
    let mut slots = referee_slots(obj);
    if slots.iter().all(String::is_empty) && !referees.is_empty() {
        slots = crew::assign_slots(&referees);
    }
    let [referee1, referee2, referee3] = slots;

    Game {
        id: resolve_id(obj.get("id")),
        game_number: text("game_number"),
        match_date: text("match_date"),
        match_time: text("match_time"),
        age_division: text("age_division"),
        location: text("location"),
        field: text("field"),
        home_team: text("home_team"),
        away_team: text("away_team"),
        referee1,
        referee2,
        referee3,
        referees,
        assigner: contact(obj.get("assigner")),
        payer: contact(obj.get("payer")),
        home_colors: text("home_colors"),
        away_colors: text("away_colors"),
        notes: text("notes"),
        selected: resolve_selected(obj.get("selected")),
    }
}

/// Stringify-or-empty coercion for scalar fields.
///
/// Arrays are joined with commas; objects have no text form and become empty.
pub fn stringify(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) | Some(Value::Object(_)) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|v| stringify(Some(v)))
            .collect::<Vec<_>>()
            .join(","),
    }
}

/// Structural defaulting for `assigner` / `payer`.
fn contact(value: Option<&Value>) -> Contact {
    match value.and_then(Value::as_object) {
        Some(obj) => Contact {
            name: stringify(obj.get("name")),
            phone: stringify(obj.get("phone")),
            email: stringify(obj.get("email")),
        },
        None => Contact::default(),
    }
}

fn officials(value: Option<&Value>) -> Vec<Official> {
    let Some(items) = value.and_then(Value::as_array) else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| match item {
            Value::Object(obj) => Some(Official {
                role: stringify(obj.get("role")),
                name: stringify(obj.get("name")),
                email: stringify(obj.get("email")),
                phone: stringify(obj.get("phone")),
            }),
            Value::String(name) => Some(Official::named(name.as_str())),
            _ => None,
        })
        .filter(|o| !o.is_empty())
        .collect()
}

/// Resolve the three referee slots from aliases, then let a `refs` array
/// override positionally.
fn referee_slots(obj: &Map<String, Value>) -> [String; 3] {
    let mut slots: [String; 3] = Default::default();
    for (slot, aliases) in slots.iter_mut().zip(REFEREE_ALIASES) {
        *slot = aliases
            .iter()
            .map(|alias| stringify(obj.get(*alias)))
            .find(|s| !s.is_empty())
            .unwrap_or_default();
    }

    if let Some(refs) = obj.get("refs").and_then(Value::as_array) {
        for (slot, entry) in slots.iter_mut().zip(refs) {
            if !entry.is_null() {
                *slot = stringify(Some(entry));
            }
        }
    }
    slots
}

fn resolve_id(value: Option<&Value>) -> String {
    let id = stringify(value);
    if id.trim().is_empty() {
        uuid::Uuid::new_v4().to_string()
    } else {
        id
    }
}

fn resolve_selected(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64() != Some(0.0),
        Some(Value::String(s)) => !matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "false" | "0" | "no" | "off"
        ),
        _ => true,
    }
}

#[cfg(test)]
#[path = "tests/normalize_tests.rs"]
mod tests;
