//! The canonical game record and its nested types.
//!
//! Every record handed to the card renderer, the working list and saved
//! schedules has this exact shape. Only the normalizer builds these from
//! extractor output; see [`crate::normalize`].

use serde::{Deserialize, Serialize};

use crate::crew;

/// A name/phone/email triple used for the assigner and the payer.
///
/// Always present on a [`Game`]; callers check the fields, never the object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Contact {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.phone.is_empty() && self.email.is_empty()
    }
}

/// One member of a game's officiating crew.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Official {
    /// Role as written by the source (e.g. "Referee", "AR1", "Jr"). May be empty.
    pub role: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Official {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.role.is_empty() && self.name.is_empty() && self.email.is_empty() && self.phone.is_empty()
    }
}

/// A fully normalized game.
///
/// Descriptive fields use the empty string for "absent", never `Option`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Opaque identifier, assigned once by the normalizer.
    pub id: String,
    pub game_number: String,
    pub match_date: String,
    pub match_time: String,
    pub age_division: String,
    pub location: String,
    pub field: String,
    pub home_team: String,
    pub away_team: String,
    pub referee1: String,
    pub referee2: String,
    pub referee3: String,
    /// Full crew with roles and contact details, when the source provides it.
    pub referees: Vec<Official>,
    pub assigner: Contact,
    pub payer: Contact,
    pub home_colors: String,
    pub away_colors: String,
    pub notes: String,
    /// UI selection flag. Freshly imported games start selected.
    pub selected: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self {
            id: String::new(),
            game_number: String::new(),
            match_date: String::new(),
            match_time: String::new(),
            age_division: String::new(),
            location: String::new(),
            field: String::new(),
            home_team: String::new(),
            away_team: String::new(),
            referee1: String::new(),
            referee2: String::new(),
            referee3: String::new(),
            referees: Vec::new(),
            assigner: Contact::default(),
            payer: Contact::default(),
            home_colors: String::new(),
            away_colors: String::new(),
            notes: String::new(),
            selected: true,
        }
    }
}

impl Game {
    /// Whether bulk selection should consider this game (both teams known).
    pub fn is_usable(&self) -> bool {
        !self.home_team.trim().is_empty() && !self.away_team.trim().is_empty()
    }

    /// The crew as a list of officials.
    ///
    /// Uses `referees` when present, otherwise builds role-less officials from
    /// the non-empty referee slots.
    pub fn crew(&self) -> Vec<Official> {
        if !self.referees.is_empty() {
            return self.referees.clone();
        }
        [&self.referee1, &self.referee2, &self.referee3]
            .into_iter()
            .filter(|name| !name.trim().is_empty())
            .map(|name| Official::named(name.as_str()))
            .collect()
    }

    /// Crew members paired with their card labels, in slot order.
    pub fn labeled_crew(&self) -> Vec<(String, Official)> {
        crew::labeled_crew(&self.crew())
    }
}
