//! Date and time recognition for schedule cells.
//!
//! Exports write dates and times in many shapes. Values are kept as written;
//! chrono is only used to recognize them.

use chrono::{NaiveDate, NaiveTime};

const DATE_FORMATS: &[&str] = &[
    "%m/%d/%Y", "%m/%d/%y", "%Y-%m-%d", "%m-%d-%Y", "%m-%d-%y", "%d.%m.%Y", "%b %d %Y", "%B %d %Y",
    "%b %d, %Y", "%B %d, %Y", "%d %b %Y", "%d %B %Y",
];

const TIME_FORMATS: &[&str] = &["%I:%M %p", "%I:%M%p", "%I:%M:%S %p", "%H:%M", "%H:%M:%S"];

const WEEKDAYS: &[&str] = &[
    "mon", "monday", "tue", "tues", "tuesday", "wed", "wednesday", "thu", "thur", "thurs",
    "thursday", "fri", "friday", "sat", "saturday", "sun", "sunday",
];

/// Drop a leading weekday name (`"Sat, 1/2/2026"` -> `"1/2/2026"`).
pub fn strip_weekday(s: &str) -> &str {
    let s = s.trim();
    let Some((first, rest)) = s.split_once(|c: char| c.is_whitespace() || c == ',') else {
        return s;
    };
    let word = first.trim_end_matches([',', '.']).to_ascii_lowercase();
    if WEEKDAYS.contains(&word.as_str()) {
        rest.trim_start_matches([',', ' ']).trim()
    } else {
        s
    }
}

/// Whether a cell reads as a calendar date.
pub fn looks_like_date(s: &str) -> bool {
    let s = strip_weekday(s);
    if s.is_empty() || !s.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }
    DATE_FORMATS
        .iter()
        .any(|fmt| NaiveDate::parse_from_str(s, fmt).is_ok())
}

/// Whether a cell reads as a time of day.
pub fn looks_like_time(s: &str) -> bool {
    let mut s = s.trim().to_ascii_uppercase().replace('.', "");
    if s.is_empty() {
        return false;
    }
    // "9 AM" has no minutes; chrono needs them.
    if !s.contains(':') && (s.ends_with("AM") || s.ends_with("PM")) {
        let hour_end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        if hour_end > 0 {
            s.insert_str(hour_end, ":00");
        }
    }
    TIME_FORMATS
        .iter()
        .any(|fmt| NaiveTime::parse_from_str(&s, fmt).is_ok())
}

/// Split a combined "date time" cell into its date and time parts.
///
/// The time is the longest trailing run of words that reads as a time; the
/// rest is the date. `"1/2/2026 5:00 PM"` gives `("1/2/2026", "5:00 PM")`.
/// Text with no recognizable time is returned whole as the date.
pub fn split_date_time(s: &str) -> (String, String) {
    let s = s.trim();
    if let Some((date, time)) = s.split_once(" at ") {
        if looks_like_time(time) {
            return (trim_date(date), time.trim().to_string());
        }
    }

    let words: Vec<&str> = s.split_whitespace().collect();
    for start in 0..words.len() {
        let tail = words[start..].join(" ");
        if looks_like_time(&tail) {
            return (trim_date(&words[..start].join(" ")), tail);
        }
    }
    (s.to_string(), String::new())
}

fn trim_date(s: &str) -> String {
    s.trim().trim_end_matches([',', '@', '-']).trim().to_string()
}
