//! Text helpers shared by the extractors.

use crate::crew::RoleKind;
use crate::game::Official;

/// Collapse runs of whitespace to single spaces and trim.
pub fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize a header or label for alias lookup.
///
/// Lowercases and replaces every non-alphanumeric run with one space, so
/// `"Date & Time"`, `"date/time"` and `"DATE_TIME"` all become `"date time"`.
pub fn header_key(s: &str) -> String {
    s.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether a cell starts with an ASCII digit (after trimming).
pub fn starts_with_digit(s: &str) -> bool {
    s.trim().chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// Whether a cell reads as a game number: optional `#`, a leading digit, then
/// only letters, digits or dashes (e.g. `12`, `#104`, `2041-B`).
pub fn looks_like_game_number(s: &str) -> bool {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s).trim_start();
    starts_with_digit(s) && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Trimmed, non-empty lines of a text.
pub fn non_empty_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}

/// Pick the field delimiter: tab if the first non-empty line has one, else comma.
pub fn sniff_delimiter(text: &str) -> u8 {
    match text.lines().find(|l| !l.trim().is_empty()) {
        Some(line) if line.contains('\t') => b'\t',
        _ => b',',
    }
}

/// Split delimited text into trimmed rows of cells.
///
/// Quotes are honoured, ragged rows are allowed, blank rows are dropped and
/// rows the reader cannot decode are skipped.
pub fn split_rows(text: &str) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .delimiter(sniff_delimiter(text))
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                log::debug!("Skipping undecodable row: {e}");
                continue;
            }
        };
        let row: Vec<String> = record.iter().map(str::to_string).collect();
        if row.iter().any(|c| !c.is_empty()) {
            rows.push(row);
        }
    }
    rows
}

/// Header name to column index lookup, matched through alias lists.
#[derive(Debug, Clone, Default)]
pub struct HeaderIndex {
    keys: Vec<String>,
}

impl HeaderIndex {
    pub fn new(headers: &[String]) -> Self {
        Self {
            keys: headers.iter().map(|h| header_key(h)).collect(),
        }
    }

    /// Index of the first column whose header equals one of `aliases`
    /// (compared in [`header_key`] form).
    pub fn find(&self, aliases: &[&str]) -> Option<usize> {
        aliases.iter().find_map(|alias| {
            let alias = header_key(alias);
            self.keys.iter().position(|k| *k == alias)
        })
    }

    /// Cell under the first matching header, or `""`.
    pub fn get<'a>(&self, row: &'a [String], aliases: &[&str]) -> &'a str {
        self.find(aliases)
            .and_then(|i| row.get(i))
            .map_or("", String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Normalized header keys, in column order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }
}

/// Pull an e-mail address out of a cell, if it contains one.
pub fn extract_email(cell: &str) -> Option<String> {
    cell.split(|c: char| c.is_whitespace() || matches!(c, '<' | '>' | ',' | ';' | '(' | ')'))
        .find(|token| {
            let token = token.trim_matches(|c: char| c == '.' || c == '"' || c == '\'');
            token
                .split_once('@')
                .is_some_and(|(user, host)| !user.is_empty() && host.contains('.'))
        })
        .map(|token| {
            token
                .trim_matches(|c: char| c == '.' || c == '"' || c == '\'')
                .to_string()
        })
}

/// Pull a phone number out of a cell that starts with a `C:`, `H:` or `W:`
/// (cell/home/work) label. The label is stripped.
pub fn extract_labeled_phone(cell: &str) -> Option<String> {
    let cell = cell.trim();
    let mut chars = cell.chars();
    let label = chars.next()?.to_ascii_uppercase();
    if !matches!(label, 'C' | 'H' | 'W') || chars.next()? != ':' {
        return None;
    }
    let number = chars.as_str().trim();
    if number.chars().filter(char::is_ascii_digit).count() >= 7 {
        Some(number.to_string())
    } else {
        None
    }
}

/// Read an official from the non-empty cells of a crew row.
///
/// The leading cell is the role unless it is the only cell; the next cell is
/// the name. E-mail and phone are picked out of the remaining cells by shape
/// (`@`, or a `C:`/`H:`/`W:` label) rather than position. Rows whose name
/// reads as a game number or an address are not officials.
pub fn official_from_cells<S: AsRef<str>>(cells: &[S]) -> Option<Official> {
    let cells: Vec<&str> = cells
        .iter()
        .map(|c| c.as_ref().trim())
        .filter(|c| !c.is_empty())
        .collect();
    let (role, name, extras) = match cells.as_slice() {
        [] => return None,
        [only] => ("", *only, &[][..]),
        [role, name, extras @ ..] => (*role, *name, extras),
    };
    if starts_with_digit(role) || looks_like_game_number(name) || name.contains('@') {
        return None;
    }
    if role.is_empty() && RoleKind::classify(name) != RoleKind::Unknown {
        // A lone role with nobody assigned.
        return None;
    }

    let mut official = Official::named(normalize_ws(name)).with_role(role);
    for cell in extras {
        if let Some(email) = extract_email(cell) {
            official.email = email;
        } else if let Some(phone) = extract_labeled_phone(cell) {
            official.phone = phone;
        }
    }
    Some(official)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_key() {
        assert_eq!(header_key("Date & Time"), "date time");
        assert_eq!(header_key("  HOME_TEAM "), "home team");
        assert_eq!(header_key("Game #"), "game");
        assert_eq!(header_key(""), "");
    }

    #[test]
    fn test_looks_like_game_number() {
        assert!(looks_like_game_number("12"));
        assert!(looks_like_game_number("#104"));
        assert!(looks_like_game_number("2041-B"));
        assert!(!looks_like_game_number("Referee"));
        assert!(!looks_like_game_number("1/2/2026"));
        assert!(!looks_like_game_number(""));
    }

    #[test]
    fn test_split_rows_csv_and_tsv() {
        let rows = split_rows("a, b ,\"c,d\"\n\n1,2\n");
        assert_eq!(rows, vec![vec!["a", "b", "c,d"], vec!["1", "2"]]);

        let rows = split_rows("x\ty\n1\t2");
        assert_eq!(rows, vec![vec!["x", "y"], vec!["1", "2"]]);
    }

    #[test]
    fn test_header_index() {
        let headers: Vec<String> = ["Game", "Home Team", "Away"].iter().map(|s| s.to_string()).collect();
        let index = HeaderIndex::new(&headers);
        assert_eq!(index.find(&["home", "home team"]), Some(1));
        assert_eq!(index.find(&["visitor"]), None);
        let row: Vec<String> = ["7", "Red", "Blue"].iter().map(|s| s.to_string()).collect();
        assert_eq!(index.get(&row, &["away"]), "Blue");
        assert_eq!(index.get(&row, &["field"]), "");
    }

    #[test]
    fn test_extract_email() {
        assert_eq!(
            extract_email("Ann <ann@example.com>"),
            Some("ann@example.com".to_string())
        );
        assert_eq!(extract_email("no address here"), None);
        assert_eq!(extract_email("@handle"), None);
    }

    #[test]
    fn test_extract_labeled_phone() {
        assert_eq!(
            extract_labeled_phone("C: (555) 010-2000"),
            Some("(555) 010-2000".to_string())
        );
        assert_eq!(extract_labeled_phone("h:555-0100-22"), Some("555-0100-22".to_string()));
        assert_eq!(extract_labeled_phone("555-010-2000"), None);
        assert_eq!(extract_labeled_phone("C: call me"), None);
    }

    #[test]
    fn test_official_from_cells() {
        let o = official_from_cells(&["AR1", "Bob Jones", "", "bob@example.com", "C: 555-010-2000"]).unwrap();
        assert_eq!(o.role, "AR1");
        assert_eq!(o.name, "Bob Jones");
        assert_eq!(o.email, "bob@example.com");
        assert_eq!(o.phone, "555-010-2000");

        let o = official_from_cells(&["", "Cy Young"]).unwrap();
        assert_eq!(o.role, "");
        assert_eq!(o.name, "Cy Young");

        assert!(official_from_cells(&["1042", "Red"]).is_none());
        assert!(official_from_cells(&["AR2"]).is_none());
        assert!(official_from_cells::<&str>(&[]).is_none());
    }

    #[test]
    fn test_normalize_ws() {
        assert_eq!(normalize_ws("  a \t b\n c "), "a b c");
    }
}
