//! Founding year recognition.

use super::first_match;
use super::patterns::ESTABLISHED_YEAR_RULES;

/// Earliest accepted founding year.
pub const MIN_ESTABLISHED_YEAR: i32 = 1900;

/// Recognize the founding year, accepting only `1900..=reference_year`.
///
/// Out-of-range years are skipped silently so unrelated four-digit numbers
/// don't leak into the record.
pub fn recognize_established_year(text: &str, reference_year: i32) -> Option<String> {
    first_match(&ESTABLISHED_YEAR_RULES, text, |raw| {
        raw.parse::<i32>()
            .ok()
            .filter(|year| validate_year(*year, reference_year))
            .map(|year| year.to_string())
    })
}

/// Check that a year lies within `1900..=reference_year`.
pub fn validate_year(year: i32, reference_year: i32) -> bool {
    (MIN_ESTABLISHED_YEAR..=reference_year).contains(&year)
}
