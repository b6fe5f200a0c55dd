//! Fixed-size line blocks: one value per line, twelve lines per game.
//!
//! Some exports list every game as the same sequence of lines:
//!
//! ```text
//! 1042            game number
//! 1/3/2026        date
//! 9:00 AM         time
//! U12 Boys        age / division
//! Central Park    location
//! Field 3         field
//! Red Hawks       home
//! Blue Jays       away
//! Ann Smith       referee 1
//! Bob Jones       referee 2
//! TBD             referee 3
//! -               notes
//! ```
//!
//! Blank lines are ignored, so empty values are written as placeholders such
//! as `-` or `TBD`. A block of column labels may appear anywhere (once per
//! printed page) and is skipped. Values are taken by position; the only check
//! is that a block opens with a game number and a date-like line, so stray
//! page titles are stepped over.

use refcard_core::crew::RoleKind;
use refcard_core::util::{header_key, looks_like_game_number, non_empty_lines};
use refcard_core::{Diagnostics, ParseError, RawGame, ScheduleParser};

/// Lines per game.
pub const BLOCK_SIZE: usize = 12;

/// Field written from each line of a block, in order.
pub const BLOCK_FIELDS: [&str; BLOCK_SIZE] = [
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
    "notes",
];

/// Labels that mark a line as part of a header block at least this often.
const MIN_HEADER_LABELS: usize = 8;

const GAME_LABELS: &[&str] = &["game", "game number", "game no", "game id", "game num", "match", "no"];

const FIELD_LABELS: &[&str] = &[
    "date", "game date", "time", "start time", "age", "age group", "division", "level",
    "age division", "location", "site", "venue", "field", "pitch", "sub site", "home",
    "home team", "away", "away team", "visitor", "visitors", "notes", "comments",
];

const PLACEHOLDERS: &[&str] = &["-", "--", "n/a", "na", "tbd", "tba", "none"];

fn is_label(line: &str) -> bool {
    let key = header_key(line);
    GAME_LABELS.contains(&key.as_str())
        || FIELD_LABELS.contains(&key.as_str())
        || RoleKind::classify(line) != RoleKind::Unknown
}

/// Whether `block` is a page's column labels rather than a game.
fn is_header_block(block: &[&str]) -> bool {
    block
        .first()
        .is_some_and(|first| GAME_LABELS.contains(&header_key(first).as_str()))
        && block.iter().filter(|line| is_label(line)).count() >= MIN_HEADER_LABELS
}

fn is_placeholder(value: &str) -> bool {
    PLACEHOLDERS.contains(&value.to_ascii_lowercase().as_str())
}

/// Whether `block` lines up on a game: its first line is a game number and
/// its second carries a digit (`1/3/2026`, `Sat 1/3`, `Jan 10`). Either may
/// be a placeholder.
fn starts_game(block: &[&str]) -> bool {
    let [number, date, ..] = block else {
        return false;
    };
    (is_placeholder(number) || looks_like_game_number(number))
        && (is_placeholder(date) || date.chars().any(|c| c.is_ascii_digit()))
}

fn game_from_block(block: &[&str]) -> RawGame {
    let mut game = RawGame::new();
    for (field, value) in BLOCK_FIELDS.iter().zip(block) {
        if !is_placeholder(value) {
            game.set(field, value);
        }
    }
    game
}

/// Parser for exports that write each game as twelve consecutive lines.
#[derive(Debug, Default)]
pub struct LineBlockParser;

impl LineBlockParser {
    pub const KEY: &'static str = "line-block";

    pub fn new() -> Self {
        Self
    }
}

impl ScheduleParser for LineBlockParser {
    fn parse_with_diagnostics(
        &self,
        text: &str,
        diagnostics: &mut Diagnostics,
    ) -> Result<Vec<RawGame>, ParseError> {
        let lines = non_empty_lines(text);
        let mut games = Vec::new();
        let mut resynced = 0;
        let mut headers = 0;
        let mut pos = 0;

        while pos + BLOCK_SIZE <= lines.len() {
            let block = &lines[pos..pos + BLOCK_SIZE];
            if is_header_block(block) {
                headers += 1;
                pos += BLOCK_SIZE;
                continue;
            }
            if !starts_game(block) {
                // Not aligned on a game; slide forward one line.
                resynced += 1;
                pos += 1;
                continue;
            }
            games.push(game_from_block(block));
            pos += BLOCK_SIZE;
        }

        log::debug!(
            "Line blocks: {} games, {} header blocks skipped",
            games.len(),
            headers
        );
        diagnostics.skipped(resynced, "lines that did not start a game block");
        diagnostics.skipped(lines.len() - pos, "trailing lines shorter than a full block");
        Ok(games)
    }

    fn key(&self) -> &str {
        Self::KEY
    }

    fn display_name(&self) -> &str {
        "Line blocks (12 lines per game)"
    }

    fn description(&self) -> &str {
        "One value per line: number, date, time, age, location, field, home, away, three referees, notes"
    }
}

#[cfg(test)]
#[path = "tests/line_block_tests.rs"]
mod tests;
