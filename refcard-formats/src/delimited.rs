//! Delimited schedule tables with a header row.
//!
//! Supports:
//! - CSV and TSV exports with a header naming the columns
//! - Combined "Date & Time" columns
//! - Referee-role columns (`Referee`, `AR1`, `AR2`, `4th`)
//! - Crew continuation rows under a game (`AR1,Bob Jones,bob@example.com`)
//!
//! Columns are found by header name, so exports that reorder columns still
//! parse. A row starts a new game when the cell under the game column is a game
//! number and the row reaches the away column. Tables without a game column
//! start a game on any row with both team cells filled that does not lead with
//! a crew role. Anything else under a game is a crew row.

use refcard_core::crew::RoleKind;
use refcard_core::datetime::{looks_like_time, split_date_time};
use refcard_core::util::{
    HeaderIndex, header_key, looks_like_game_number, official_from_cells, split_rows,
};
use refcard_core::{Diagnostics, Official, ParseError, RawGame, ScheduleParser};

// ---------------------------------------------------------------------------
// Header aliases
// ---------------------------------------------------------------------------

const GAME: &[&str] = &["game", "game number", "game no", "game id", "gm", "match", "match no", "no"];
const DATE_TIME: &[&str] = &["date time", "date and time", "datetime", "when", "start"];
const DATE: &[&str] = &["date", "game date", "match date", "day"];
const TIME: &[&str] = &["time", "start time", "game time", "kickoff", "ko"];
const AGE: &[&str] = &[
    "sport level", "sport and level", "age", "age group", "age division", "division", "level",
    "league", "bracket",
];
const LOCATION: &[&str] = &["site", "location", "venue", "facility", "complex", "park"];
const FIELD: &[&str] = &["field", "pitch", "court", "sub site", "subsite"];
const HOME: &[&str] = &["home", "home team", "host"];
const AWAY: &[&str] = &["away", "away team", "visitor", "visitors", "visiting team", "guest"];
const HOME_COLORS: &[&str] = &["home colors", "home color", "home jersey", "home uniform"];
const AWAY_COLORS: &[&str] = &["away colors", "away color", "away jersey", "away uniform"];
const NOTES: &[&str] = &["notes", "note", "comments", "remarks"];
const CREW_LIST: &[&str] = &["officials", "referees", "crew"];
const CONTACT_LABELS: &[&str] = &["assigner", "assignor", "payer", "paid by", "pay"];

// ---------------------------------------------------------------------------
// Column layout
// ---------------------------------------------------------------------------

/// Column positions resolved from one header row.
struct Columns {
    index: HeaderIndex,
    game: Option<usize>,
    home: usize,
    away: usize,
    /// Columns whose header names a crew role, with that header as the role.
    roles: Vec<(usize, String)>,
    crew_list: Option<usize>,
}

impl Columns {
    /// Resolve a header row. `None` unless it has both team columns.
    fn from_header(row: &[String]) -> Option<Self> {
        let index = HeaderIndex::new(row);
        let home = index.find(HOME)?;
        let away = index.find(AWAY)?;

        let claimed: Vec<usize> = [
            GAME, DATE_TIME, DATE, TIME, AGE, LOCATION, FIELD, HOME, AWAY, HOME_COLORS,
            AWAY_COLORS, NOTES, CREW_LIST,
        ]
        .iter()
        .filter_map(|aliases| index.find(aliases))
        .collect();

        let roles = row
            .iter()
            .enumerate()
            .filter(|(i, h)| {
                !claimed.contains(i) && RoleKind::classify(h) != RoleKind::Unknown
            })
            .map(|(i, h)| (i, h.trim().to_string()))
            .collect();

        Some(Self {
            crew_list: index.find(CREW_LIST),
            game: index.find(GAME),
            index,
            home,
            away,
            roles,
        })
    }

    fn game_from_row(&self, row: &[String]) -> RawGame {
        let get = |aliases: &[&str]| self.index.get(row, aliases);
        let mut game = RawGame::new();
        game.set("game_number", get(GAME).trim_start_matches('#'));

        let (mut date, mut time) = split_date_time(get(DATE_TIME));
        let date_cell = get(DATE);
        if !date_cell.is_empty() {
            let (d, t) = split_date_time(date_cell);
            date = d;
            if !t.is_empty() {
                time = t;
            }
        }
        let time_cell = get(TIME);
        if !time_cell.is_empty() && (time.is_empty() || looks_like_time(time_cell)) {
            time = time_cell.to_string();
        }
        game.set("match_date", date).set("match_time", time);

        game.set("age_division", get(AGE))
            .set("location", get(LOCATION))
            .set("field", get(FIELD))
            .set("home_team", get(HOME))
            .set("away_team", get(AWAY))
            .set("home_colors", get(HOME_COLORS))
            .set("away_colors", get(AWAY_COLORS))
            .set("notes", get(NOTES));

        for (i, role) in &self.roles {
            let name = row.get(*i).map_or("", |c| c.trim());
            if !name.is_empty() {
                game.attach_official(&Official::named(name).with_role(role.as_str()));
            }
        }
        if let Some(cell) = self.crew_list.and_then(|i| row.get(i)) {
            for name in cell.split([';', '|', '\n']).map(str::trim).filter(|n| !n.is_empty()) {
                game.push_official(&Official::named(name));
            }
        }
        game
    }

    fn is_game_row(&self, row: &[String]) -> bool {
        if row.len() <= self.away {
            return false;
        }
        let cell = |i: usize| row.get(i).map_or("", |c| c.trim());
        match self.game {
            Some(game) => looks_like_game_number(cell(game)),
            None => {
                !cell(self.home).is_empty()
                    && !cell(self.away).is_empty()
                    && !leads_with_crew_label(row)
            }
        }
    }
}

/// Whether the first filled cell names a crew role or a contact.
fn leads_with_crew_label(row: &[String]) -> bool {
    row.iter()
        .map(|c| c.trim())
        .find(|c| !c.is_empty())
        .is_some_and(|c| {
            RoleKind::classify(c) != RoleKind::Unknown
                || CONTACT_LABELS.contains(&header_key(c).as_str())
        })
}

fn is_header_row(row: &[String]) -> bool {
    let index = HeaderIndex::new(row);
    index.find(HOME).is_some() && index.find(AWAY).is_some()
}

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

/// Parser for header-led CSV/TSV schedule exports.
#[derive(Debug, Default)]
pub struct DelimitedParser;

impl DelimitedParser {
    pub const KEY: &'static str = "delimited";

    pub fn new() -> Self {
        Self
    }
}

impl ScheduleParser for DelimitedParser {
    fn parse_with_diagnostics(
        &self,
        text: &str,
        diagnostics: &mut Diagnostics,
    ) -> Result<Vec<RawGame>, ParseError> {
        let rows = split_rows(text);
        let Some(header_at) = rows.iter().position(|r| is_header_row(r)) else {
            if !rows.is_empty() {
                diagnostics.warn("No header row with home and away columns");
            }
            return Ok(Vec::new());
        };
        let Some(mut columns) = Columns::from_header(&rows[header_at]) else {
            return Ok(Vec::new());
        };
        log::debug!(
            "Header at row {}: {:?}",
            header_at + 1,
            columns.index.keys()
        );

        let mut games = Vec::new();
        let mut current: Option<RawGame> = None;
        let mut without_teams = 0;
        let mut unrecognized = 0;

        let mut finish = |game: Option<RawGame>, games: &mut Vec<RawGame>| {
            if let Some(game) = game {
                if game.has_teams() {
                    games.push(game);
                } else {
                    without_teams += 1;
                }
            }
        };

        for row in &rows[header_at + 1..] {
            if is_header_row(row) {
                // Paged exports repeat the header; it may also reorder columns.
                finish(current.take(), &mut games);
                if let Some(next) = Columns::from_header(row) {
                    columns = next;
                }
                continue;
            }
            if columns.is_game_row(row) {
                finish(current.take(), &mut games);
                current = Some(columns.game_from_row(row));
                continue;
            }
            match (current.as_mut(), official_from_cells(row)) {
                (Some(game), Some(official)) => {
                    game.attach_official(&official);
                }
                _ => unrecognized += 1,
            }
        }
        finish(current.take(), &mut games);

        diagnostics.skipped(without_teams, "rows without home and away teams");
        diagnostics.skipped(unrecognized, "unrecognized rows");
        Ok(games)
    }

    fn key(&self) -> &str {
        Self::KEY
    }

    fn display_name(&self) -> &str {
        "Delimited table (CSV/TSV with header)"
    }

    fn description(&self) -> &str {
        "Comma or tab separated export with a header row naming Home and Away columns"
    }
}

#[cfg(test)]
#[path = "tests/delimited_tests.rs"]
mod tests;
