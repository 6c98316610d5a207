//! Company name recognition.

use super::patterns::COMPANY_NAME_RULES;
use super::{first_match, non_empty_trimmed};

/// Recognize the company name.
///
/// Labeled fields (`회사명:`, `상호:`, `기업명:`, `Company Name:`) win over a
/// line starting with a name that carries a legal-entity marker.
pub fn recognize_company_name(text: &str) -> Option<String> {
    first_match(&COMPANY_NAME_RULES, text, non_empty_trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_labeled_name() {
        assert_eq!(
            recognize_company_name("회사명: 테크노바 주식회사\n대표: 김철수"),
            Some("테크노바 주식회사".to_string())
        );
        assert_eq!(
            recognize_company_name("상호 : ㈜한빛소프트  \n"),
            Some("㈜한빛소프트".to_string())
        );
        assert_eq!(
            recognize_company_name("Company Name: Acme Robotics"),
            Some("Acme Robotics".to_string())
        );
    }

    #[test]
    fn test_label_beats_structural_match() {
        let text = "Blue Ocean Inc.\n기업명: 블루오션";
        assert_eq!(recognize_company_name(text), Some("블루오션".to_string()));
    }

    #[test]
    fn test_legal_suffix_at_line_start() {
        assert_eq!(
            recognize_company_name("회사 소개\n테크노바 주식회사\n서울 소재"),
            Some("테크노바 주식회사".to_string())
        );
        assert_eq!(
            recognize_company_name("Acme Widgets Co., Ltd. was founded in 2001"),
            Some("Acme Widgets Co., Ltd.".to_string())
        );
        assert_eq!(
            recognize_company_name("  Globex Corp. annual profile"),
            Some("Globex Corp.".to_string())
        );
    }

    #[test]
    fn test_legal_prefix_at_line_start() {
        assert_eq!(
            recognize_company_name("주식회사 테크노바\n"),
            Some("주식회사 테크노바".to_string())
        );
    }

    #[test]
    fn test_no_name() {
        assert_eq!(recognize_company_name("직원 수: 12명"), None);
        assert_eq!(recognize_company_name("회사명:   \n"), None);
        assert_eq!(recognize_company_name(""), None);
    }
}
