//! CEO / representative name recognition.

use super::patterns::CEO_RULES;
use super::{first_match, non_empty_trimmed};

/// Recognize the representative's name after a `대표이사`, `대표자`, `CEO` or
/// `대표:` label, trying the labels in that order.
pub fn recognize_ceo(text: &str) -> Option<String> {
    first_match(&CEO_RULES, text, non_empty_trimmed)
}
