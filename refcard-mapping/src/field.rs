//! The field names a column may be mapped to.

use std::fmt;
use std::str::FromStr;

use refcard_core::RawGame;
use refcard_core::datetime::split_date_time;
use serde::{Deserialize, Serialize};

use crate::error::MappingError;

/// A target for one mapped column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MappedField {
    GameNumber,
    MatchDate,
    MatchTime,
    /// A combined cell, split into `match_date` and `match_time`.
    DateTime,
    AgeDivision,
    Location,
    Field,
    HomeTeam,
    AwayTeam,
    Referee1,
    Referee2,
    Referee3,
    AssignerName,
    AssignerPhone,
    AssignerEmail,
    PayerName,
    PayerPhone,
    PayerEmail,
    HomeColors,
    AwayColors,
    Notes,
}

impl MappedField {
    pub const ALL: [MappedField; 21] = [
        Self::GameNumber,
        Self::MatchDate,
        Self::MatchTime,
        Self::DateTime,
        Self::AgeDivision,
        Self::Location,
        Self::Field,
        Self::HomeTeam,
        Self::AwayTeam,
        Self::Referee1,
        Self::Referee2,
        Self::Referee3,
        Self::AssignerName,
        Self::AssignerPhone,
        Self::AssignerEmail,
        Self::PayerName,
        Self::PayerPhone,
        Self::PayerEmail,
        Self::HomeColors,
        Self::AwayColors,
        Self::Notes,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::GameNumber => "game_number",
            Self::MatchDate => "match_date",
            Self::MatchTime => "match_time",
            Self::DateTime => "date_time",
            Self::AgeDivision => "age_division",
            Self::Location => "location",
            Self::Field => "field",
            Self::HomeTeam => "home_team",
            Self::AwayTeam => "away_team",
            Self::Referee1 => "referee1",
            Self::Referee2 => "referee2",
            Self::Referee3 => "referee3",
            Self::AssignerName => "assigner_name",
            Self::AssignerPhone => "assigner_phone",
            Self::AssignerEmail => "assigner_email",
            Self::PayerName => "payer_name",
            Self::PayerPhone => "payer_phone",
            Self::PayerEmail => "payer_email",
            Self::HomeColors => "home_colors",
            Self::AwayColors => "away_colors",
            Self::Notes => "notes",
        }
    }

    /// Write one cell into a raw record.
    pub fn apply(self, raw: &mut RawGame, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            return;
        }
        match self {
            Self::DateTime => {
                let (date, time) = split_date_time(value);
                raw.set("match_date", date).set("match_time", time);
            }
            Self::AssignerName => {
                raw.set_contact_field("assigner", "name", value);
            }
            Self::AssignerPhone => {
                raw.set_contact_field("assigner", "phone", value);
            }
            Self::AssignerEmail => {
                raw.set_contact_field("assigner", "email", value);
            }
            Self::PayerName => {
                raw.set_contact_field("payer", "name", value);
            }
            Self::PayerPhone => {
                raw.set_contact_field("payer", "phone", value);
            }
            Self::PayerEmail => {
                raw.set_contact_field("payer", "email", value);
            }
            other => {
                raw.set(other.as_str(), value);
            }
        }
    }
}

impl fmt::Display for MappedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MappedField {
    type Err = MappingError;

    /// Accepts the snake_case name in any case, with spaces or dashes in
    /// place of underscores (`"Home Team"` parses as `HomeTeam`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == wanted)
            .ok_or_else(|| MappingError::unknown_field(s))
    }
}
