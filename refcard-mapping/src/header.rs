//! Header-row versus data-row detection.

use refcard_core::util::starts_with_digit;

/// Fraction of digit-led cells at or above which a row is data, not a header.
pub const HEADER_NUMERIC_THRESHOLD: f64 = 0.60;

/// Fraction of the non-empty cells in `cells` that start with a digit.
///
/// Returns `None` when every cell is empty.
pub fn numeric_fraction<S: AsRef<str>>(cells: &[S]) -> Option<f64> {
    let mut filled = 0usize;
    let mut numeric = 0usize;
    for cell in cells {
        let cell = cell.as_ref().trim();
        if cell.is_empty() {
            continue;
        }
        filled += 1;
        if starts_with_digit(cell) {
            numeric += 1;
        }
    }
    (filled > 0).then(|| numeric as f64 / filled as f64)
}

/// Whether the first row of a table is a header row.
///
/// A row where at least [`HEADER_NUMERIC_THRESHOLD`] of the non-empty cells
/// start with a digit is data. A row with no content is not a header.
pub fn looks_like_header_row<S: AsRef<str>>(cells: &[S]) -> bool {
    numeric_fraction(cells).is_some_and(|f| f < HEADER_NUMERIC_THRESHOLD)
}
