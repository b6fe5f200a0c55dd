//! Assignment notification e-mails, pasted one after another.
//!
//! Each e-mail opens with a greeting naming the referee it was sent to, then
//! lists the game as `Label: value` lines:
//!
//! ```text
//! Hi Ann Smith,
//!
//! You have been assigned to the following game:
//! Game: 1042
//! Date/Time: Saturday, January 3, 2026 at 9:00 AM
//! Division: U12 Boys
//! Location: Central Park - Field 3
//! Matchup: Blue Jays @ Red Hawks
//! Officials:
//!   AR1: Bob Jones
//!   Cy Young (AR2)
//! Assigner: Pat Lee <pat@example.com>
//! ```
//!
//! The greeting's recipient is the game's primary referee. Other listed
//! officials fill the remaining slots in the order given.

use std::sync::LazyLock;

use regex::Regex;

use refcard_core::crew::RoleKind;
use refcard_core::datetime::split_date_time;
use refcard_core::util::{extract_email, header_key, normalize_ws};
use refcard_core::{Diagnostics, Official, ParseError, RawGame, ScheduleParser};

// ---------------------------------------------------------------------------
// Patterns
// ---------------------------------------------------------------------------

static GREETING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(?:hi|hello|dear|hey|good\s+(?:morning|afternoon|evening))\b[\s,]*(?P<name>[a-z][a-z.' \-]*?)?\s*(?:[,!:;]|$)",
    )
    .expect("valid greeting regex")
});

/// A greeting alone on its line: `Hi Ann Smith,`, `Dear Mr. O'Neil:`.
static STANDALONE_GREETING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(?:hi|hello|dear|hey|good\s+(?:morning|afternoon|evening))\b[\s,]*(?P<name>[^\s,!:;]+(?:\s+[^\s,!:;]+){0,3})?\s*[,!:;]?\s*$",
    )
    .expect("valid standalone greeting regex")
});

static LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<label>[A-Za-z][A-Za-z0-9 #&/'.()\-]{0,40}?)\s*:\s*(?P<value>.*)$")
        .expect("valid label regex")
});

static NAME_ROLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<name>[^()]+?)\s*\((?P<role>[^()]+)\)$").expect("valid name (role) regex")
});

static VERSUS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\s+(?:vs\.?|v\.?|versus)\s+").expect("valid versus regex")
});

/// Greeting words that address a group rather than one referee.
const GROUP_ADDRESSES: &[&str] = &[
    "all", "everyone", "everybody", "team", "there", "folks", "refs", "referees", "officials",
    "crew", "coach", "coaches",
];

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

const GAME: &[&str] = &["game", "game number", "game no", "game id", "match number", "match no"];
const DATE_TIME: &[&str] = &["date time", "date and time", "when", "scheduled"];
const DATE: &[&str] = &["date", "game date", "match date"];
const TIME: &[&str] = &["time", "start time", "kickoff", "kick off", "game time"];
const AGE: &[&str] = &["division", "age", "age group", "age division", "level", "league", "competition"];
const LOCATION: &[&str] = &["location", "site", "venue", "facility"];
const FIELD: &[&str] = &["field", "pitch", "field number"];
const HOME: &[&str] = &["home", "home team"];
const AWAY: &[&str] = &["away", "away team", "visitor", "visitors", "visiting team"];
const MATCHUP: &[&str] = &["matchup", "match up", "teams", "match", "game matchup"];
const HOME_COLORS: &[&str] = &["home colors", "home colours", "home jersey"];
const AWAY_COLORS: &[&str] = &["away colors", "away colours", "away jersey"];
const NOTES: &[&str] = &["notes", "note", "comments", "instructions"];
const ASSIGNER: &[&str] = &["assigner", "assignor", "assigned by"];
const ASSIGNER_EMAIL: &[&str] = &["assigner email", "assignor email"];
const ASSIGNER_PHONE: &[&str] = &["assigner phone", "assignor phone"];
const PAYER: &[&str] = &["payer", "paid by"];
const PAYER_EMAIL: &[&str] = &["payer email"];
const PAYER_PHONE: &[&str] = &["payer phone"];
const CREW: &[&str] = &["officials", "crew", "referees", "referee crew", "officiating crew", "other officials"];

// ---------------------------------------------------------------------------
// Block state
// ---------------------------------------------------------------------------

/// One e-mail being read.
struct EmailBlock {
    recipient: Option<String>,
    game: RawGame,
    officials: Vec<Official>,
    in_crew_list: bool,
}

impl EmailBlock {
    fn new(recipient: Option<String>) -> Self {
        Self {
            recipient,
            game: RawGame::new(),
            officials: Vec::new(),
            in_crew_list: false,
        }
    }

    fn read_line(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            self.in_crew_list = false;
            return;
        }
        let line = line.trim_start_matches(['-', '*', '•']).trim_start();

        if let Some(caps) = LABEL_RE.captures(line) {
            let raw_label = caps["label"].trim();
            let value = caps["value"].trim();
            self.read_label(raw_label, &header_key(raw_label), value);
        } else if self.in_crew_list {
            if let Some(official) = crew_entry(line) {
                self.officials.push(official);
            }
        }
    }

    fn read_label(&mut self, raw_label: &str, label: &str, value: &str) {
        let is = |aliases: &[&str]| aliases.contains(&label);

        if is(CREW) {
            self.in_crew_list = true;
            for entry in value.split([',', ';']) {
                if let Some(official) = crew_entry(entry.trim()) {
                    self.officials.push(official);
                }
            }
            return;
        }

        if !is(GAME) && RoleKind::classify(raw_label) != RoleKind::Unknown {
            // "AR1: Bob Jones", in or out of the crew list
            if let Some(official) = crew_entry(value) {
                self.officials.push(official.with_role(raw_label));
            }
            return;
        }

        self.in_crew_list = false;
        let game = &mut self.game;
        if is(GAME) {
            game.set("game_number", value.trim_start_matches('#'));
        } else if is(DATE_TIME) {
            let (date, time) = split_date_time(value);
            game.set("match_date", date).set("match_time", time);
        } else if is(DATE) {
            let (date, time) = split_date_time(value);
            game.set("match_date", date);
            if !game.contains("match_time") {
                game.set("match_time", time);
            }
        } else if is(TIME) {
            game.set("match_time", value);
        } else if is(AGE) {
            game.set("age_division", value);
        } else if is(LOCATION) {
            game.set("location", value);
        } else if is(FIELD) {
            game.set("field", value);
        } else if is(HOME) {
            game.set("home_team", value);
        } else if is(AWAY) {
            game.set("away_team", value);
        } else if is(MATCHUP) {
            if let Some((home, away)) = split_matchup(value) {
                game.set("home_team", home).set("away_team", away);
            }
        } else if is(HOME_COLORS) {
            game.set("home_colors", value);
        } else if is(AWAY_COLORS) {
            game.set("away_colors", value);
        } else if is(NOTES) {
            game.set("notes", value);
        } else if is(ASSIGNER) {
            set_contact(game, "assigner", value);
        } else if is(ASSIGNER_EMAIL) {
            game.set_contact_field("assigner", "email", value);
        } else if is(ASSIGNER_PHONE) {
            game.set_contact_field("assigner", "phone", value);
        } else if is(PAYER) {
            set_contact(game, "payer", value);
        } else if is(PAYER_EMAIL) {
            game.set_contact_field("payer", "email", value);
        } else if is(PAYER_PHONE) {
            game.set_contact_field("payer", "phone", value);
        }
    }

    /// Close the block. `None` when it does not name both teams.
    fn finish(self) -> Option<RawGame> {
        let Self {
            recipient,
            mut game,
            officials,
            ..
        } = self;
        if !game.has_teams() {
            return None;
        }

        let Some(recipient) = recipient else {
            for official in &officials {
                game.push_official(official);
            }
            return Some(game);
        };

        let same = |o: &Official| o.name.eq_ignore_ascii_case(&recipient);
        let mut primary = Official::named(recipient.as_str()).with_role("Referee");
        if let Some(listed) = officials.iter().find(|o| same(*o)) {
            primary.email = listed.email.clone();
            primary.phone = listed.phone.clone();
        }
        let others: Vec<&Official> = officials.iter().filter(|o| !same(*o)).collect();

        game.set("referee1", &primary.name);
        for (slot, official) in ["referee2", "referee3"].iter().zip(&others) {
            game.set(slot, &official.name);
        }
        game.push_official(&primary);
        for official in others {
            game.push_official(official);
        }
        Some(game)
    }
}

// ---------------------------------------------------------------------------
// Value helpers
// ---------------------------------------------------------------------------

/// The recipient named by a greeting line, if the line is a greeting.
///
/// Outer `None`: not a greeting. Inner `None`: a greeting to nobody in
/// particular ("Hi all,"). Inside an open e-mail only a short greeting
/// standing alone on its line starts the next one, so body sentences such as
/// "Hey, quick reminder about parking." stay in the current block.
fn greeting(line: &str, block_open: bool) -> Option<Option<String>> {
    if block_open
        && !STANDALONE_GREETING_RE
            .captures(line)
            .is_some_and(|caps| caps.name("name").is_none_or(|m| addresses_someone(m.as_str())))
    {
        return None;
    }
    let caps = GREETING_RE.captures(line)?;
    let name = caps
        .name("name")
        .map(|m| normalize_ws(m.as_str().trim_end_matches('.')))
        .filter(|n| !n.is_empty() && !GROUP_ADDRESSES.contains(&n.to_lowercase().as_str()));
    Some(name)
}

/// A capitalized name or a group address ("all", "team").
fn addresses_someone(name: &str) -> bool {
    let name = name.trim_end_matches('.');
    GROUP_ADDRESSES.contains(&name.to_lowercase().as_str())
        || name
            .split_whitespace()
            .all(|word| word.chars().next().is_some_and(char::is_uppercase))
}

/// `"Away @ Home"`, `"Away at Home"` or `"Home vs Away"` as `(home, away)`.
fn split_matchup(value: &str) -> Option<(String, String)> {
    let pair = |a: &str, b: &str| {
        let (a, b) = (a.trim(), b.trim());
        (!a.is_empty() && !b.is_empty()).then(|| (a.to_string(), b.to_string()))
    };
    if let Some((away, home)) = value.split_once(" @ ").or_else(|| value.split_once(" at ")) {
        return pair(home, away);
    }
    let mut parts = VERSUS_RE.splitn(value, 2);
    let home = parts.next()?;
    let away = parts.next()?;
    pair(home, away)
}

/// Split `"Pat Lee <pat@example.com>"` into a name and an address.
fn name_and_email(value: &str) -> (String, Option<String>) {
    match extract_email(value) {
        Some(email) => {
            let name = value
                .replace(&email, "")
                .trim_matches(|c: char| c.is_whitespace() || "<>()[],;-".contains(c))
                .to_string();
            (normalize_ws(&name), Some(email))
        }
        None => (normalize_ws(value), None),
    }
}

fn set_contact(game: &mut RawGame, key: &str, value: &str) {
    let (name, email) = name_and_email(value);
    game.set_contact_field(key, "name", name);
    if let Some(email) = email {
        game.set_contact_field(key, "email", email);
    }
}

/// One crew list entry: `Role: Name`, `Name (Role)` or a bare name.
fn crew_entry(entry: &str) -> Option<Official> {
    let entry = entry.trim();
    if entry.is_empty() {
        return None;
    }
    if let Some(caps) = LABEL_RE.captures(entry) {
        let value = caps["value"].trim();
        return crew_entry(value).map(|o| o.with_role(caps["label"].trim()));
    }

    let (name, role) = match NAME_ROLE_RE.captures(entry) {
        Some(caps) => (caps["name"].to_string(), caps["role"].trim().to_string()),
        None => (entry.to_string(), String::new()),
    };
    let (name, email) = name_and_email(&name);
    if name.is_empty() || name.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    let mut official = Official::named(name).with_role(role);
    if let Some(email) = email {
        official.email = email;
    }
    Some(official)
}

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

/// Parser for pasted assignment notification e-mails.
#[derive(Debug, Default)]
pub struct AssignmentEmailParser;

impl AssignmentEmailParser {
    pub const KEY: &'static str = "assignment-email";

    pub fn new() -> Self {
        Self
    }
}

impl ScheduleParser for AssignmentEmailParser {
    fn parse_with_diagnostics(
        &self,
        text: &str,
        diagnostics: &mut Diagnostics,
    ) -> Result<Vec<RawGame>, ParseError> {
        let mut games = Vec::new();
        let mut current: Option<EmailBlock> = None;
        let mut dropped = 0;

        let mut close = |block: Option<EmailBlock>, games: &mut Vec<RawGame>| {
            if let Some(block) = block {
                match block.finish() {
                    Some(game) => games.push(game),
                    None => dropped += 1,
                }
            }
        };

        for line in text.lines() {
            if let Some(recipient) = greeting(line, current.is_some()) {
                close(current.take(), &mut games);
                current = Some(EmailBlock::new(recipient));
                continue;
            }
            if let Some(block) = current.as_mut() {
                block.read_line(line);
            }
        }
        close(current.take(), &mut games);

        diagnostics.skipped(dropped, "e-mails without home and away teams");
        Ok(games)
    }

    fn key(&self) -> &str {
        Self::KEY
    }

    fn display_name(&self) -> &str {
        "Assignment e-mails"
    }

    fn description(&self) -> &str {
        "Pasted assignment notifications, one per greeting line"
    }
}

#[cfg(test)]
#[path = "tests/assignment_email_tests.rs"]
mod tests;
