//! End-to-end tests for the document parsing pipeline.

use std::cell::Cell;

use corpdoc_core::{
    CompanyDocumentParser, CompanyField, CorpdocError, DocumentError, DocumentFormat,
    DocumentSource, LocalFile, PdfMode, UploadedFile, parse_company_document, parse_company_info,
};
use pretty_assertions::assert_eq;
use regex::Regex;

const FULL_PROFILE: &str = "회사명: 테크노바 주식회사\n사업자등록번호: 123-45-67890\nIT 소프트웨어 전문기업\n직원 수: 120명\n설립연도: 2018년\n대표이사: 김철수\n웹사이트: technova.io";

const FIXTURES: &[&str] = &[
    "",
    FULL_PROFILE,
    "상호: 한빛물류\n종합 물류 서비스\n50명 이하",
    "Acme Widgets Co., Ltd.\nBusiness Registration No. 220-81-62517\nFounded in 1999",
    "주소: 서울특별시 강남구 테헤란로 123\nCEO: Jane Doe",
    "사업자등록번호: 12345678901\n설립연도: 1850년",
    "[DOCX document: profile.docx (2048 bytes)]",
];

fn parser() -> CompanyDocumentParser {
    CompanyDocumentParser::new().with_reference_year(2025)
}

#[tokio::test]
async fn test_text_upload_full_extraction() {
    let file = UploadedFile::from_text("profile.txt", FULL_PROFILE);
    let report = parser().parse_document_with_report(&file).await.unwrap();

    assert_eq!(report.format, DocumentFormat::Text);
    assert_eq!(report.info.confidence, 100);
    assert_eq!(report.info.website.as_deref(), Some("https://technova.io"));
    assert!(report.warnings.is_empty());
    assert_eq!(report.char_count, FULL_PROFILE.chars().count());
}

#[tokio::test]
async fn test_extension_fallback_without_mime_type() {
    let file = UploadedFile::new("PROFILE.TXT", FULL_PROFILE.as_bytes());
    let info = parse_company_document(&file).await.unwrap();
    assert_eq!(info.company_name.as_deref(), Some("테크노바 주식회사"));
}

#[tokio::test]
async fn test_unsupported_format_fails() {
    let file = UploadedFile::new("logo.png", vec![0x89, 0x50, 0x4e, 0x47]).with_mime_type("image/png");
    let err = parse_company_document(&file).await.unwrap_err();

    assert!(matches!(
        err,
        CorpdocError::Document(DocumentError::UnsupportedFormat { .. })
    ));
}

#[tokio::test]
async fn test_invalid_utf8_fails_with_decode_error() {
    let file = UploadedFile::new("profile.txt", vec![0xc3, 0x28, 0xa0, 0xa1]);
    let err = parse_company_document(&file).await.unwrap_err();

    assert!(matches!(err, CorpdocError::Document(DocumentError::Decode(_))));
}

#[tokio::test]
async fn test_empty_upload_yields_empty_record() {
    for name in ["empty.txt", "empty.pdf", "empty.docx"] {
        let file = UploadedFile::new(name, Vec::new());
        let info = parse_company_document(&file).await.unwrap();
        assert_eq!(info.confidence, 0, "{}", name);
        assert!(info.extracted_fields.is_empty(), "{}", name);
    }
}

#[tokio::test]
async fn test_docx_stub_recognizes_nothing() {
    let file = UploadedFile::new("profile.docx", vec![0x50, 0x4b, 0x03, 0x04, 0x14, 0x00]);
    let report = parser().parse_document_with_report(&file).await.unwrap();

    assert_eq!(report.format, DocumentFormat::Docx);
    assert_eq!(report.info.confidence, 0);
    assert_eq!(report.warnings.len(), 4);
}

#[tokio::test]
async fn test_pdf_stub_mode() {
    let file = UploadedFile::new("profile.pdf", b"%PDF-1.7".to_vec());
    let report = parser()
        .with_pdf_mode(PdfMode::Stub)
        .parse_document_with_report(&file)
        .await
        .unwrap();

    assert_eq!(report.format, DocumentFormat::Pdf);
    assert_eq!(report.char_count, "[PDF document: profile.pdf (8 bytes)]".chars().count());
}

#[tokio::test]
async fn test_malformed_pdf_fails_in_text_layer_mode() {
    let file = UploadedFile::new("broken.pdf", b"definitely not a pdf".to_vec());
    let err = parser().parse_document(&file).await.unwrap_err();

    assert!(matches!(err, CorpdocError::Document(DocumentError::Pdf(_))));
}

#[tokio::test]
async fn test_local_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("회사소개.txt");
    std::fs::write(&path, FULL_PROFILE).unwrap();

    let file = LocalFile::open(&path).await.unwrap();
    let info = parser().parse_document(&file).await.unwrap();

    assert_eq!(info.confidence, 100);
    assert_eq!(info.ceo.as_deref(), Some("김철수"));
}

#[tokio::test]
async fn test_size_limit() {
    let file = UploadedFile::from_text("profile.txt", FULL_PROFILE);
    let err = parser()
        .with_max_file_size(16)
        .parse_document(&file)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        CorpdocError::Document(DocumentError::FileTooLarge { limit: 16, .. })
    ));
}

#[test]
fn test_confidence_is_quantized() {
    for fixture in FIXTURES {
        let info = parser().parse(fixture);
        assert!([0, 25, 50, 75, 100].contains(&info.confidence), "{}", fixture);
    }
}

#[test]
fn test_extracted_fields_match_populated_fields() {
    for fixture in FIXTURES {
        let info = parser().parse(fixture);
        for field in CompanyField::ALL {
            assert_eq!(info.has(field), info.extracted_fields.contains(&field), "{}", field);
        }
        assert!(info.employee_count.is_none() || info.employee_count_exact.is_none());
    }
}

#[test]
fn test_business_numbers_are_normalized() {
    let shape = Regex::new(r"^\d{3}-\d{2}-\d{5}$").unwrap();
    for fixture in FIXTURES {
        if let Some(number) = parser().parse(fixture).business_number {
            assert!(shape.is_match(&number), "{}", number);
        }
    }
}

#[test]
fn test_adding_labeled_fields_is_monotonic() {
    let additions = [
        "회사명: 블루오션",
        "사업자등록번호: 220-81-62517",
        "핀테크 스타트업",
        "직원 수: 12명",
        "주소: 부산광역시 해운대구 센텀중앙로 97",
        "웹사이트: blueocean.kr",
        "설립연도: 2020년",
        "대표: 이영희",
    ];

    for fixture in FIXTURES {
        let before = parser().parse(fixture);
        for addition in additions {
            let after = parser().parse(&format!("{}\n{}", fixture, addition));
            assert!(after.confidence >= before.confidence, "{} + {}", fixture, addition);
            for field in &before.extracted_fields {
                assert!(after.extracted_fields.contains(field), "{} + {}", fixture, addition);
            }
        }
    }
}

#[test]
fn test_free_function_matches_default_parser() {
    assert_eq!(
        parse_company_info(FULL_PROFILE),
        CompanyDocumentParser::new().parse(FULL_PROFILE)
    );
}

/// Source that records how often its content was read.
struct CountingSource {
    name: &'static str,
    mime_type: Option<&'static str>,
    size: u64,
    reads: Cell<usize>,
}

impl CountingSource {
    fn new(name: &'static str, mime_type: Option<&'static str>, size: u64) -> Self {
        Self {
            name,
            mime_type,
            size,
            reads: Cell::new(0),
        }
    }
}

impl DocumentSource for CountingSource {
    fn name(&self) -> &str {
        self.name
    }

    fn mime_type(&self) -> Option<&str> {
        self.mime_type
    }

    fn size(&self) -> u64 {
        self.size
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, DocumentError> {
        self.reads.set(self.reads.get() + 1);
        Ok("회사명: 테크노바".as_bytes().to_vec())
    }
}

#[tokio::test]
async fn test_unsupported_format_fails_without_reading() {
    let source = CountingSource::new("logo.png", Some("image/png"), 512);
    let err = parser().parse_document(&source).await.unwrap_err();

    assert!(matches!(
        err,
        CorpdocError::Document(DocumentError::UnsupportedFormat { .. })
    ));
    assert_eq!(source.reads.get(), 0);
}

#[tokio::test]
async fn test_oversized_file_fails_without_reading() {
    let source = CountingSource::new("profile.txt", Some("text/plain"), 4096);
    let err = parser()
        .with_max_file_size(1024)
        .parse_document(&source)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        CorpdocError::Document(DocumentError::FileTooLarge { size: 4096, limit: 1024 })
    ));
    assert_eq!(source.reads.get(), 0);
}

#[tokio::test]
async fn test_supported_file_is_read_once() {
    let source = CountingSource::new("profile.txt", None, 22);
    let info = parser().parse_document(&source).await.unwrap();

    assert_eq!(info.company_name.as_deref(), Some("테크노바"));
    assert_eq!(source.reads.get(), 1);
}
