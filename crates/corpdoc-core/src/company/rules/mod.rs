//! Rule-based field recognizers for company profile documents.
//!
//! Every recognizer is a pure function over the extracted text. A miss is
//! `None`, never an error.

pub mod patterns;
pub mod company_name;
pub mod business_number;
pub mod industry;
pub mod employees;
pub mod address;
pub mod website;
pub mod established;
pub mod ceo;

pub use company_name::recognize_company_name;
pub use business_number::{normalize_business_number, recognize_business_number};
pub use industry::{INDUSTRY_KEYWORDS, classify_industry};
pub use employees::{EmployeeCount, recognize_employee_count};
pub use address::recognize_address;
pub use website::{normalize_website, recognize_website};
pub use established::{recognize_established_year, validate_year};
pub use ceo::recognize_ceo;

use regex::Regex;

/// Walk an ordered rule table and return the first capture accepted by
/// `accept`. Matches of one rule are visited in text order before moving on
/// to the next rule.
pub fn first_match<T>(
    rules: &[Regex],
    text: &str,
    mut accept: impl FnMut(&str) -> Option<T>,
) -> Option<T> {
    rules.iter().find_map(|rule| {
        rule.captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .find_map(|m| accept(m.as_str()))
    })
}

/// Trim a captured value, rejecting empty results.
pub(crate) fn non_empty_trimmed(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
