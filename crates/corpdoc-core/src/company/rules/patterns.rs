//! Ordered pattern tables for company document fields.
//!
//! Each table is tried front to back; earlier entries are the more specific
//! labeled forms, later ones are structural fallbacks. Capture group 1 holds
//! the raw value.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::company::EmployeeRange;

lazy_static! {
    // Company name
    pub static ref COMPANY_NAME_RULES: Vec<Regex> = vec![
        Regex::new(
            r"(?im)(?:회사명|상호명?|기업명|법인명|company\s*name)[ \t]*[:：][ \t]*([^\n]+)"
        ).unwrap(),
        Regex::new(
            r"(?m)^[ \t]*([가-힣A-Za-z0-9][가-힣A-Za-z0-9&.,' \-]*?[ \t]*(?:주식회사|㈜|\(주\)|Inc\.|Corp\.|Co\.,?[ \t]*Ltd\.|Co\.|Ltd\.))"
        ).unwrap(),
        Regex::new(
            r"(?m)^[ \t]*((?:주식회사|㈜|\(주\))[ \t]*[가-힣A-Za-z0-9][가-힣A-Za-z0-9& ]*)"
        ).unwrap(),
    ];

    // Business registration number (DDD-DD-DDDDD)
    pub static ref BUSINESS_NUMBER_RULES: Vec<Regex> = vec![
        Regex::new(
            r"(?i)(?:사업자[ \t]*등록[ \t]*번호|사업자[ \t]*번호|business[ \t]*(?:registration[ \t]*)?(?:no\.?|number))[ \t]*[:：]?[ \t]*(\d[\d\- ]*\d)"
        ).unwrap(),
        Regex::new(r"(?:^|[^0-9])(\d{3}-\d{2}-\d{5})(?:[^0-9]|$)").unwrap(),
        Regex::new(r"(?:^|[^0-9])(\d{10})(?:[^0-9]|$)").unwrap(),
    ];

    // Exact headcount: "직원 수: 120명", "임직원 1,200명", "인원 35"
    pub static ref EMPLOYEE_EXACT: Regex = Regex::new(
        r"(?:임직원|직원|인원)[ \t]*수?[ \t]*[:：]?[ \t]*(\d{1,3}(?:,\d{3})+|\d+)"
    ).unwrap();

    // Headcount ranges in Korean numeral-range phrasing
    pub static ref EMPLOYEE_RANGE_RULES: Vec<(Regex, EmployeeRange)> = vec![
        (
            Regex::new(r"(?:^|[^0-9])(?:1[ \t]*[~～\-][ \t]*10[ \t]*명|10[ \t]*명[ \t]*(?:이하|미만))").unwrap(),
            EmployeeRange::UpTo10,
        ),
        (
            Regex::new(r"(?:^|[^0-9])(?:11[ \t]*[~～\-][ \t]*50[ \t]*명|50[ \t]*명[ \t]*(?:이하|미만))").unwrap(),
            EmployeeRange::UpTo50,
        ),
        (
            Regex::new(r"(?:^|[^0-9])(?:51[ \t]*[~～\-][ \t]*200[ \t]*명|200[ \t]*명[ \t]*(?:이하|미만))").unwrap(),
            EmployeeRange::UpTo200,
        ),
        (
            Regex::new(r"(?:^|[^0-9])(?:201[ \t]*[~～\-][ \t]*500[ \t]*명|500[ \t]*명[ \t]*(?:이하|미만))").unwrap(),
            EmployeeRange::UpTo500,
        ),
        (
            Regex::new(r"(?:^|[^0-9])(?:500[ \t]*명[ \t]*(?:이상|초과)|500[ \t]*\+)").unwrap(),
            EmployeeRange::Over500,
        ),
    ];

    // Address
    pub static ref ADDRESS_RULES: Vec<Regex> = vec![
        Regex::new(
            r"(?im)(?:본사[ \t]*주소|사업장[ \t]*주소|주소|소재지|address)[ \t]*[:：][ \t]*([^\n]+)"
        ).unwrap(),
        Regex::new(
            r"((?:서울|부산|대구|인천|광주|대전|울산|세종|경기|강원|충청북|충청남|충북|충남|전라북|전라남|전북|전남|경상북|경상남|경북|경남|제주)[가-힣]*[ \t]+[가-힣0-9]+(?:시|군|구)[ \t]+[^\n]+)"
        ).unwrap(),
    ];

    // Website
    pub static ref WEBSITE_RULES: Vec<Regex> = vec![
        Regex::new(
            r"(?i)(?:웹[ \t]*사이트|홈페이지|website|homepage|url)[ \t]*[:：]?[ \t]*((?:https?://)?[a-z0-9](?:[a-z0-9\-]*[a-z0-9])?(?:\.[a-z0-9\-]+)+(?:/[^\s]*)?)"
        ).unwrap(),
        Regex::new(
            r"(?i)(?:^|[^a-z0-9@.\-/])((?:https?://)?(?:www\.)?[a-z0-9][a-z0-9\-]*(?:\.[a-z0-9\-]+)*\.(?:com|net|org|io|ai|co|kr|biz|dev|app|me)(?:\.kr)?)(?:[^a-z0-9\-]|$)"
        ).unwrap(),
    ];

    // Founding year: "설립연도: 2018년" and "2018년 설립"
    pub static ref ESTABLISHED_YEAR_RULES: Vec<Regex> = vec![
        Regex::new(
            r"(?i)(?:설립[ \t]*(?:연도|년도|일자|일)?|창립[ \t]*(?:연도|년도|일)?|founded(?:[ \t]+in)?|established(?:[ \t]+in)?)[ \t]*[:：]?[ \t]*(\d{4})(?:[^0-9]|$)"
        ).unwrap(),
        Regex::new(
            r"(?:^|[^0-9])(\d{4})[ \t]*년(?:[ \t]*\d{1,2}[ \t]*월)?(?:[ \t]*\d{1,2}[ \t]*일)?[ \t]*(?:에[ \t]*)?(?:설립|창립)"
        ).unwrap(),
    ];

    // CEO / representative. Bare 대표 also heads lines like "대표 전화", so it
    // needs a colon and comes last.
    pub static ref CEO_RULES: Vec<Regex> = vec![
        Regex::new(
            r"대표[ \t]*이사(?:[ \t]*[:：][ \t]*|[ \t]+)([가-힣A-Za-z]+(?:[ \t]+[가-힣A-Za-z]+)*)"
        ).unwrap(),
        Regex::new(
            r"대표자(?:[ \t]*명)?(?:[ \t]*[:：][ \t]*|[ \t]+)([가-힣A-Za-z]+(?:[ \t]+[가-힣A-Za-z]+)*)"
        ).unwrap(),
        Regex::new(
            r"(?i)\bceo(?:[ \t]*[:：][ \t]*|[ \t]+)([가-힣A-Za-z]+(?:[ \t]+[가-힣A-Za-z]+)*)"
        ).unwrap(),
        Regex::new(
            r"대표[ \t]*[:：][ \t]*([가-힣A-Za-z]+(?:[ \t]+[가-힣A-Za-z]+)*)"
        ).unwrap(),
    ];
}
