pub(crate) mod config;
pub(crate) mod import;
pub(crate) mod list;
pub(crate) mod mapping;
pub(crate) mod schedule;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use refcard_core::Game;

/// Print a one-block summary per game: matchup line, venue line, crew.
pub(crate) fn print_games(games: &[Game]) {
    for game in games {
        let number = if game.game_number.is_empty() {
            String::new()
        } else {
            format!("#{} ", game.game_number)
        };
        log::info!(
            "  {}{} {} {}",
            number.if_supports_color(Stdout, |t| t.bold()),
            game.match_date,
            game.match_time,
            game.age_division.if_supports_color(Stdout, |t| t.dimmed()),
        );
        log::info!(
            "    {} vs {}",
            game.home_team.if_supports_color(Stdout, |t| t.cyan()),
            game.away_team.if_supports_color(Stdout, |t| t.cyan()),
        );
        let venue = join_non_empty(&[game.location.as_str(), game.field.as_str()], ", ");
        if !venue.is_empty() {
            log::info!("    at {}", venue);
        }
        for (label, official) in game.labeled_crew() {
            log::info!(
                "    {:<15} {}",
                format!("{label}:").if_supports_color(Stdout, |t| t.dimmed()),
                official.name,
            );
        }
        if !game.assigner.name.is_empty() {
            log::info!("    Assigner:       {}", game.assigner.name);
        }
    }
}

/// Join the non-empty parts with `sep`.
pub(crate) fn join_non_empty(parts: &[&str], sep: &str) -> String {
    parts
        .iter()
        .filter(|p| !p.trim().is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(sep)
}

/// Short local rendering of an RFC 3339 stamp; unparseable stamps pass through.
pub(crate) fn format_saved_at(stamp: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(stamp)
        .map(|t| {
            t.with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M")
                .to_string()
        })
        .unwrap_or_else(|_| stamp.to_string())
}
