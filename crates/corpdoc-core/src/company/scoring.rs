//! Confidence scoring over the required fields.

use crate::models::company::CompanyField;

/// Confidence as the rounded percentage of required fields present.
///
/// Only `companyName`, `businessNumber`, `industry` and `employeeCount`
/// count, so the result is always one of 0, 25, 50, 75 or 100.
pub fn score(extracted_fields: &[CompanyField]) -> u8 {
    let required = CompanyField::REQUIRED;
    let found = required
        .into_iter()
        .filter(|field| extracted_fields.contains(field))
        .count();

    ((100 * found) as f64 / required.len() as f64).round() as u8
}
