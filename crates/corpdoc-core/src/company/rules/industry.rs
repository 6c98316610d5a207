//! Keyword-based industry classification.

use crate::models::company::Industry;

/// Category → keyword table, in priority order. Keywords are lowercase.
pub const INDUSTRY_KEYWORDS: &[(Industry, &[&str])] = &[
    (
        Industry::Software,
        &[
            "소프트웨어", "software", "saas", "클라우드", "cloud", "it 서비스", "it서비스",
            "it 솔루션", "it솔루션", "정보기술", "information technology", "인공지능",
            "machine learning", "앱 개발", "웹 개발",
        ],
    ),
    (
        Industry::Ecommerce,
        &[
            "이커머스", "전자상거래", "e-commerce", "ecommerce", "온라인 쇼핑", "쇼핑몰",
            "online store", "리테일", "retail", "유통",
        ],
    ),
    (
        Industry::Finance,
        &[
            "핀테크", "fintech", "금융", "financial", "은행", "banking", "보험사", "생명보험",
            "손해보험", "insurance", "증권", "자산운용",
        ],
    ),
    (
        Industry::Healthcare,
        &[
            "헬스케어", "healthcare", "health care", "의료", "medical", "병원", "hospitals",
            "hospital group", "바이오", "biotech", "제약", "pharma",
        ],
    ),
    (
        Industry::Manufacturing,
        &["제조", "manufacturing", "공장", "factory", "반도체", "semiconductor", "부품"],
    ),
    (
        Industry::Education,
        &["에듀테크", "edtech", "교육", "education", "학원", "이러닝", "e-learning"],
    ),
    (
        Industry::Gaming,
        &["게임", "gaming", "game studio", "e스포츠", "esports"],
    ),
    (
        Industry::Media,
        &[
            "미디어", "digital media", "엔터테인먼트", "entertainment", "콘텐츠", "방송", "broadcast",
            "영상", "음악", "music", "출판", "publishing",
        ],
    ),
    (
        Industry::Marketing,
        &["마케팅", "marketing", "광고", "advertising", "브랜딩", "branding", "에이전시"],
    ),
    (
        Industry::Logistics,
        &[
            "물류", "logistics", "배송", "delivery service", "운송", "transportation", "택배",
            "freight", "풀필먼트", "fulfillment",
        ],
    ),
    (
        Industry::Construction,
        &["건설", "construction", "부동산", "real estate", "건축", "인테리어", "interior", "시공"],
    ),
    (
        Industry::Food,
        &[
            "식품", "food", "외식", "restaurant", "레스토랑", "음료", "beverage", "카페",
            "베이커리", "bakery", "f&b",
        ],
    ),
    (
        Industry::Consulting,
        &["컨설팅", "consulting", "자문", "advisory", "회계", "accounting", "법률", "법무", "세무"],
    ),
    (
        Industry::Energy,
        &[
            "에너지", "energy", "신재생", "renewable", "태양광", "solar", "친환경", "배터리",
            "battery",
        ],
    ),
    (
        Industry::Telecom,
        &["이동통신", "통신", "telecom", "무선", "wireless"],
    ),
    (
        Industry::Automotive,
        &[
            "자동차", "automotive", "모빌리티", "mobility", "전기차", "electric vehicle",
            "자율주행", "autonomous driving", "차량",
        ],
    ),
    (
        Industry::Travel,
        &["여행", "travel", "관광", "tourism", "호텔", "hotel", "숙박", "hospitality", "항공", "airline"],
    ),
];

/// Classify the industry from keywords in the text.
///
/// Categories are checked in table order and the first category with any
/// keyword occurring in the lowercased text wins. There is no scoring across
/// categories.
pub fn classify_industry(text: &str) -> Option<Industry> {
    let lower = text.to_lowercase();

    INDUSTRY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(industry, _)| *industry)
}
