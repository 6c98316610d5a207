//! Korean business registration number (사업자등록번호) recognition.

use super::first_match;
use super::patterns::BUSINESS_NUMBER_RULES;

/// Recognize a business registration number, normalized to `DDD-DD-DDDDD`.
pub fn recognize_business_number(text: &str) -> Option<String> {
    first_match(&BUSINESS_NUMBER_RULES, text, normalize_business_number)
}

/// Normalize a raw number to `DDD-DD-DDDDD`.
///
/// Non-digits are stripped; anything other than exactly 10 remaining digits
/// is rejected.
pub fn normalize_business_number(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() != 10 {
        return None;
    }

    Some(format!("{}-{}-{}", &digits[0..3], &digits[3..5], &digits[5..10]))
}
