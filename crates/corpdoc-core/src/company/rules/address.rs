//! Address recognition.

use super::patterns::ADDRESS_RULES;
use super::{first_match, non_empty_trimmed};

/// Recognize the company address: a labeled line, or a line shaped like
/// "province · district/city · street".
pub fn recognize_address(text: &str) -> Option<String> {
    first_match(&ADDRESS_RULES, text, non_empty_trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_labeled_address() {
        assert_eq!(
            recognize_address("주소: 서울특별시 강남구 테헤란로 123, 4층 \n"),
            Some("서울특별시 강남구 테헤란로 123, 4층".to_string())
        );
        assert_eq!(
            recognize_address("Address: 55 Market St, San Francisco"),
            Some("55 Market St, San Francisco".to_string())
        );
        assert_eq!(
            recognize_address("본사 주소 : 판교역로 235"),
            Some("판교역로 235".to_string())
        );
    }

    #[test]
    fn test_structural_address() {
        assert_eq!(
            recognize_address("본사는\n경기도 성남시 분당구 판교역로 235\n에 있습니다"),
            Some("경기도 성남시 분당구 판교역로 235".to_string())
        );
        assert_eq!(
            recognize_address("부산광역시 해운대구 센텀중앙로 97"),
            Some("부산광역시 해운대구 센텀중앙로 97".to_string())
        );
    }

    #[test]
    fn test_no_address() {
        assert_eq!(recognize_address("서울대학교 출신 연구진"), None);
        assert_eq!(recognize_address("회사명: 테크노바"), None);
    }
}
