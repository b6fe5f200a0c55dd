//! Per-game detail reports.
//!
//! Each game is a block: a header line naming the columns, the game row, then
//! one line per official until the next header, the next game row, or the
//! end of the text:
//!
//! ```text
//! Game,Date,Time,Level,Site,Home,Away
//! 1042,Sat 1/3/2026,9:00 AM,U12 Boys,Central Park,Red Hawks,Blue Jays
//! Referee,Ann Smith,ann@example.com,C: 555-010-2000
//! AR1,Bob Jones,,H: 555-010-3000
//! Assigner,Pat Lee,pat@example.com
//! ```
//!
//! Official e-mail and phone columns move around between exports, so they are
//! recognized by shape, not position.

use refcard_core::datetime::split_date_time;
use refcard_core::util::{HeaderIndex, looks_like_game_number, official_from_cells, split_rows};
use refcard_core::{Diagnostics, ParseError, RawGame, ScheduleParser};

const GAME: &[&str] = &["game", "game number", "game no", "game id", "game num"];
const DATE: &[&str] = &["date", "game date"];
const TIME: &[&str] = &["time", "start time", "game time"];
const DATE_TIME: &[&str] = &["date time", "date and time"];
const LEVEL: &[&str] = &["level", "sport level", "sport and level", "age", "division", "age group"];
const SITE: &[&str] = &["site", "location", "venue", "facility"];
const SUBSITE: &[&str] = &["sub site", "subsite", "field", "pitch"];
const HOME: &[&str] = &["home", "home team"];
const AWAY: &[&str] = &["away", "away team", "visitor", "visitors"];
const NOTES: &[&str] = &["notes", "comments", "game notes"];

fn is_report_header(row: &[String]) -> bool {
    let index = HeaderIndex::new(row);
    [GAME, HOME, AWAY].iter().all(|aliases| index.find(aliases).is_some())
}

fn is_game_row(row: &[String]) -> bool {
    row.first().is_some_and(|c| looks_like_game_number(c))
}

fn game_from_row(index: &HeaderIndex, row: &[String]) -> RawGame {
    let get = |aliases: &[&str]| index.get(row, aliases);
    let mut game = RawGame::new();
    game.set("game_number", get(GAME));

    let (date, time) = match get(DATE_TIME) {
        "" => split_date_time(get(DATE)),
        combined => split_date_time(combined),
    };
    let time = match get(TIME) {
        "" => time,
        cell => cell.to_string(),
    };
    game.set("match_date", date)
        .set("match_time", time)
        .set("age_division", get(LEVEL))
        .set("location", get(SITE))
        .set("field", get(SUBSITE))
        .set("home_team", get(HOME))
        .set("away_team", get(AWAY))
        .set("notes", get(NOTES));
    game
}

/// Parser for game detail reports with repeated header lines.
#[derive(Debug, Default)]
pub struct DetailReportParser;

impl DetailReportParser {
    pub const KEY: &'static str = "detail-report";

    pub fn new() -> Self {
        Self
    }
}

impl ScheduleParser for DetailReportParser {
    fn parse_with_diagnostics(
        &self,
        text: &str,
        diagnostics: &mut Diagnostics,
    ) -> Result<Vec<RawGame>, ParseError> {
        let rows = split_rows(text);
        let mut games: Vec<RawGame> = Vec::new();
        let mut header: Option<HeaderIndex> = None;
        let mut in_game = false;
        let mut without_teams = 0;
        let mut stray = 0;

        for row in &rows {
            if is_report_header(row) {
                header = Some(HeaderIndex::new(row));
                in_game = false;
                continue;
            }
            let Some(index) = header.as_ref() else {
                stray += 1;
                continue;
            };

            if is_game_row(row) {
                let game = game_from_row(index, row);
                in_game = game.has_teams();
                if in_game {
                    games.push(game);
                } else {
                    without_teams += 1;
                }
                continue;
            }

            if !in_game {
                stray += 1;
                continue;
            }
            match (games.last_mut(), official_from_cells(row)) {
                (Some(game), Some(official)) => {
                    game.attach_official(&official);
                }
                _ => stray += 1,
            }
        }

        diagnostics.skipped(without_teams, "game rows without home and away teams");
        diagnostics.skipped(stray, "lines outside a game block");
        log::debug!("Detail report: {} games", games.len());
        Ok(games)
    }

    fn key(&self) -> &str {
        Self::KEY
    }

    fn display_name(&self) -> &str {
        "Game detail report"
    }

    fn description(&self) -> &str {
        "Header line, game line and crew lines repeated per game"
    }
}

#[cfg(test)]
#[path = "tests/detail_report_tests.rs"]
mod tests;
