//! The loosely typed record every extractor produces.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::game::{Contact, Official};

/// An extractor's view of one game: string keys to JSON values.
///
/// Extractors mostly store strings under canonical field names, but may also
/// use legacy aliases (`ref1`, `jr_ref`), a `refs` name list, a `referees`
/// list of official objects and `assigner`/`payer` contact objects. Only the
/// normalizer interprets the bag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawGame(Map<String, Value>);

impl RawGame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a trimmed string value. Empty values are not stored.
    pub fn set(&mut self, key: &str, value: impl AsRef<str>) -> &mut Self {
        let value = value.as_ref().trim();
        if !value.is_empty() {
            self.0.insert(key.to_string(), Value::String(value.to_string()));
        }
        self
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, key: &str, value: impl AsRef<str>) -> Self {
        self.set(key, value);
        self
    }

    /// Store an arbitrary JSON value.
    pub fn set_value(&mut self, key: &str, value: Value) -> &mut Self {
        self.0.insert(key.to_string(), value);
        self
    }

    /// Get a string value, if the key holds one.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Replace the whole contact object stored under `key`.
    pub fn set_contact(&mut self, key: &str, contact: &Contact) -> &mut Self {
        self.0.insert(
            key.to_string(),
            json!({
                "name": contact.name,
                "phone": contact.phone,
                "email": contact.email,
            }),
        );
        self
    }

    /// Set one field (`name`, `phone` or `email`) of the contact under `key`,
    /// creating the contact object if needed.
    pub fn set_contact_field(&mut self, key: &str, field: &str, value: impl AsRef<str>) -> &mut Self {
        let value = value.as_ref().trim();
        if value.is_empty() {
            return self;
        }
        let entry = self
            .0
            .entry(key.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        if let Some(obj) = entry.as_object_mut() {
            obj.insert(field.to_string(), Value::String(value.to_string()));
        }
        self
    }

    /// Append an official to the `referees` list.
    pub fn push_official(&mut self, official: &Official) -> &mut Self {
        let value = json!({
            "role": official.role,
            "name": official.name,
            "email": official.email,
            "phone": official.phone,
        });
        match self.0.get_mut("referees").and_then(Value::as_array_mut) {
            Some(list) => list.push(value),
            None => {
                self.0.insert("referees".to_string(), Value::Array(vec![value]));
            }
        }
        self
    }

    /// Add a crew row: assigners and payers fill their contact, everyone
    /// else joins the `referees` list.
    pub fn attach_official(&mut self, official: &Official) -> &mut Self {
        let role = official.role.trim().to_ascii_lowercase();
        let contact = match role.as_str() {
            "assigner" | "assignor" => "assigner",
            "payer" | "paid by" | "pay" => "payer",
            _ => return self.push_official(official),
        };
        self.set_contact_field(contact, "name", &official.name)
            .set_contact_field(contact, "phone", &official.phone)
            .set_contact_field(contact, "email", &official.email)
    }

    /// Number of officials in the `referees` list.
    pub fn official_count(&self) -> usize {
        self.0
            .get("referees")
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }

    /// Store a positional list of referee names under `refs`.
    pub fn set_refs<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = names.into_iter().map(|n| Value::String(n.into())).collect();
        self.0.insert("refs".to_string(), Value::Array(names));
        self
    }

    /// Both team names present and non-empty.
    pub fn has_teams(&self) -> bool {
        let present = |key| self.get_str(key).is_some_and(|s| !s.trim().is_empty());
        present("home_team") && present("away_team")
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for RawGame {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<RawGame> for Value {
    fn from(raw: RawGame) -> Self {
        raw.into_value()
    }
}
