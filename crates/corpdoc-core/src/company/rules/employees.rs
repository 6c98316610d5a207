//! Employee headcount recognition.

use tracing::trace;

use crate::models::company::EmployeeRange;

use super::patterns::{EMPLOYEE_EXACT, EMPLOYEE_RANGE_RULES};

/// Recognized headcount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeCount {
    /// An explicitly stated number of employees.
    Exact(u32),
    /// A headcount bracket.
    Range(EmployeeRange),
}

/// Recognize the headcount.
///
/// An exact count (`직원 수: 120명`) always takes precedence over range
/// phrasing (`50명 이하`, `51~200명`), which is only consulted when no exact
/// count is present.
pub fn recognize_employee_count(text: &str) -> Option<EmployeeCount> {
    recognize_exact(text)
        .map(EmployeeCount::Exact)
        .or_else(|| recognize_range(text).map(EmployeeCount::Range))
}

fn recognize_exact(text: &str) -> Option<u32> {
    EMPLOYEE_EXACT
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .find_map(|m| {
            // "직원 51~200명" is a bracket, not a count.
            let rest = text[m.end()..].trim_start_matches([' ', '\t']);
            if rest.starts_with(['~', '～', '-']) {
                trace!("Skipping range notation after headcount label: {}", m.as_str());
                return None;
            }
            m.as_str().replace(',', "").parse().ok()
        })
}

fn recognize_range(text: &str) -> Option<EmployeeRange> {
    EMPLOYEE_RANGE_RULES
        .iter()
        .find(|(pattern, _)| pattern.is_match(text))
        .map(|(_, range)| *range)
}
