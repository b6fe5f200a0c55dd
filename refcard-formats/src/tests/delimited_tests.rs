use super::*;
use refcard_core::normalize_raw;

fn parse(text: &str) -> Vec<RawGame> {
    DelimitedParser::new().parse(text).unwrap()
}

#[test]
fn test_header_table_with_combined_date_time() {
    let games = parse("Game,Date & Time,Sport & Level,Site,Home,Away\n1,1/2/2026 5:00 PM,U12,FieldA,Red,Blue");
    assert_eq!(games.len(), 1);
    let game = normalize_raw(&games[0]);
    assert_eq!(game.game_number, "1");
    assert_eq!(game.match_date, "1/2/2026");
    assert_eq!(game.match_time, "5:00 PM");
    assert_eq!(game.age_division, "U12");
    assert_eq!(game.location, "FieldA");
    assert_eq!(game.home_team, "Red");
    assert_eq!(game.away_team, "Blue");
}

#[test]
fn test_columns_found_by_name_not_position() {
    let games = parse("Away,Home,Game #,Time,Date\nBlue,Red,#12,9:00 AM,1/3/2026\n");
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].get_str("game_number"), Some("12"));
    assert_eq!(games[0].get_str("home_team"), Some("Red"));
    assert_eq!(games[0].get_str("away_team"), Some("Blue"));
    assert_eq!(games[0].get_str("match_date"), Some("1/3/2026"));
    assert_eq!(games[0].get_str("match_time"), Some("9:00 AM"));
}

#[test]
fn test_game_column_after_date() {
    let games = parse("Date,Game,Home,Away\n1/2/2026,1,Red,Blue\n1/2/2026,2,Gold,Black\n");
    assert_eq!(games.len(), 2);
    assert_eq!(games[0].get_str("game_number"), Some("1"));
    assert_eq!(games[1].get_str("home_team"), Some("Gold"));
}

#[test]
fn test_table_without_game_column() {
    let text = "\
Date,Time,Home,Away
1/2/2026,5:00 PM,Red,Blue
AR1,Bob Jones,bob@example.com,C: 555-010-2000
Assigner,Pat Lee,pat@example.com,North office
1/3/2026,9:00 AM,Gold,Black
";
    let games = parse(text);
    assert_eq!(games.len(), 2);
    let first = normalize_raw(&games[0]);
    assert_eq!(first.game_number, "");
    assert_eq!(first.match_time, "5:00 PM");
    assert_eq!(first.home_team, "Red");
    assert_eq!(first.referee1, "Bob Jones");
    assert_eq!(first.referees[0].phone, "555-010-2000");
    assert_eq!(first.assigner.name, "Pat Lee");
    assert_eq!(first.assigner.email, "pat@example.com");
    assert_eq!(games[1].get_str("away_team"), Some("Black"));
}

#[test]
fn test_tab_separated() {
    let games = parse("Game\tDate\tHome\tAway\n7\t1/2/2026\tRed\tBlue\n8\t1/2/2026\tGold\tBlack\n");
    assert_eq!(games.len(), 2);
    assert_eq!(games[1].get_str("away_team"), Some("Black"));
}

#[test]
fn test_role_columns_become_officials() {
    let games = parse(
        "Game,Date,Home,Away,Referee,AR1,AR2\n\
         5,1/2/2026,Red,Blue,Ann,Bob,\n",
    );
    let game = normalize_raw(&games[0]);
    assert_eq!(game.referees.len(), 2);
    assert_eq!(game.referees[0].role, "Referee");
    assert_eq!(game.referees[1].name, "Bob");
    assert_eq!(game.referee1, "Ann");
    assert_eq!(game.referee2, "Bob");
}

#[test]
fn test_continuation_rows_attach_crew() {
    let text = "\
Game,Date,Time,Site,Home,Away
101,1/2/2026,9:00 AM,North,Red,Blue
,AR1,Bob Jones,bob@example.com
,Referee,Ann Smith,,C: 555-010-2000
,Assigner,Pat Lee,pat@example.com
102,1/2/2026,10:30 AM,North,Gold,Black
";
    let games = parse(text);
    assert_eq!(games.len(), 2);
    let first = normalize_raw(&games[0]);
    assert_eq!(first.referees.len(), 2);
    assert_eq!(first.referees[0].email, "bob@example.com");
    assert_eq!(first.referees[1].phone, "555-010-2000");
    // center first in the slots regardless of listing order
    assert_eq!(first.referee1, "Ann Smith");
    assert_eq!(first.referee2, "Bob Jones");
    assert_eq!(first.assigner.name, "Pat Lee");
    assert_eq!(first.assigner.email, "pat@example.com");

    let second = normalize_raw(&games[1]);
    assert!(second.referees.is_empty());
}

#[test]
fn test_rows_without_teams_are_skipped_with_warning() {
    let mut diagnostics = Diagnostics::new();
    let games = DelimitedParser::new()
        .parse_with_diagnostics(
            "Game,Home,Away\n1,Red,Blue\n2,Red,\n3,,\n",
            &mut diagnostics,
        )
        .unwrap();
    assert_eq!(games.len(), 1);
    assert!(
        diagnostics
            .warnings
            .iter()
            .any(|w| w == "Skipped 2 rows without home and away teams")
    );
}

#[test]
fn test_short_rows_are_not_games() {
    let games = parse("Game,Date,Home,Away\n1,1/2/2026,Red\n");
    assert!(games.is_empty());
}

#[test]
fn test_repeated_header_is_skipped() {
    let text = "Game,Home,Away\n1,Red,Blue\nGame,Home,Away\n2,Gold,Black\n";
    assert_eq!(parse(text).len(), 2);
}

#[test]
fn test_preamble_before_header() {
    let text = "Spring League Schedule\nPrinted 1/1/2026\n\nGame,Home,Away\n1,Red,Blue\n";
    assert_eq!(parse(text).len(), 1);
}

#[test]
fn test_garbage_is_empty() {
    let mut diagnostics = Diagnostics::new();
    let games = DelimitedParser::new()
        .parse_with_diagnostics(
            "Lorem ipsum dolor sit amet,\nconsectetur adipiscing elit\nsed do eiusmod tempor",
            &mut diagnostics,
        )
        .unwrap();
    assert!(games.is_empty());
    assert_eq!(diagnostics.warnings.len(), 1);
    assert!(parse("").is_empty());
}
