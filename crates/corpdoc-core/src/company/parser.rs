//! Orchestrates text extraction, field recognition and scoring.

use std::time::Instant;

use chrono::{Datelike, Local};
use serde::Serialize;
use tracing::{debug, info, trace};

use crate::document::{DocumentFormat, DocumentSource, TextExtractor};
use crate::error::Result;
use crate::models::company::{CompanyField, ParsedCompanyInfo};
use crate::models::config::{CorpdocConfig, PdfMode};

use super::rules::{
    EmployeeCount, classify_industry, recognize_address, recognize_business_number,
    recognize_ceo, recognize_company_name, recognize_employee_count,
    recognize_established_year, recognize_website,
};
use super::scoring::score;

/// Parse result with processing details.
#[derive(Debug, Clone, Serialize)]
pub struct ParseReport {
    /// Recognized company fields.
    pub info: ParsedCompanyInfo,
    /// Format the document was dispatched to.
    pub format: DocumentFormat,
    /// Number of characters handed to the recognizers.
    pub char_count: usize,
    /// Review hints for missing required fields.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Company document parser.
#[derive(Debug, Clone, Default)]
pub struct CompanyDocumentParser {
    /// Upper bound for founding years; `None` reads the local clock.
    reference_year: Option<i32>,
    extractor: TextExtractor,
}

impl CompanyDocumentParser {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser from configuration.
    pub fn from_config(config: &CorpdocConfig) -> Self {
        Self {
            reference_year: config.extraction.reference_year,
            extractor: TextExtractor::from_config(&config.documents),
        }
    }

    /// Pin the upper bound for founding years.
    pub fn with_reference_year(mut self, year: i32) -> Self {
        self.reference_year = Some(year);
        self
    }

    /// Set the PDF extraction mode.
    pub fn with_pdf_mode(mut self, mode: PdfMode) -> Self {
        self.extractor = self.extractor.with_pdf_mode(mode);
        self
    }

    /// Set the maximum accepted file size (0 = unlimited).
    pub fn with_max_file_size(mut self, limit: u64) -> Self {
        self.extractor = self.extractor.with_max_file_size(limit);
        self
    }

    /// Year used as the upper bound for founding years.
    pub fn reference_year(&self) -> i32 {
        self.reference_year.unwrap_or_else(|| Local::now().year())
    }

    /// Run every recognizer over `text` and score the result.
    pub fn parse(&self, text: &str) -> ParsedCompanyInfo {
        let mut info = ParsedCompanyInfo::default();

        info.company_name = recognize_company_name(text);
        info.business_number = recognize_business_number(text);
        info.industry = classify_industry(text);
        match recognize_employee_count(text) {
            Some(EmployeeCount::Exact(count)) => {
                info.employee_count_exact = Some(count.to_string())
            }
            Some(EmployeeCount::Range(range)) => info.employee_count = Some(range),
            None => {}
        }
        info.address = recognize_address(text);
        info.website = recognize_website(text);
        info.established_year = recognize_established_year(text, self.reference_year());
        info.ceo = recognize_ceo(text);

        for field in CompanyField::ALL {
            if info.has(field) {
                info.extracted_fields.push(field);
            } else {
                trace!("No match for {}", field);
            }
        }
        info.confidence = score(&info.extracted_fields);

        debug!(
            "Recognized {} fields with confidence {}",
            info.extracted_fields.len(),
            info.confidence
        );

        info
    }

    /// Extract text from a document and parse it.
    ///
    /// Fails only when the document cannot be turned into text; missing
    /// fields never fail the call.
    pub async fn parse_document<S>(&self, source: &S) -> Result<ParsedCompanyInfo>
    where
        S: DocumentSource + ?Sized,
    {
        self.parse_document_with_report(source)
            .await
            .map(|report| report.info)
    }

    /// Extract text from a document and parse it, keeping processing details.
    pub async fn parse_document_with_report<S>(&self, source: &S) -> Result<ParseReport>
    where
        S: DocumentSource + ?Sized,
    {
        let start = Instant::now();

        info!("Parsing company document {}", source.name());

        let extracted = self.extractor.extract(source).await?;
        let info = self.parse(&extracted.text);

        let warnings = info
            .missing_required()
            .into_iter()
            .map(|field| format!("Could not recognize {}", field))
            .collect();

        Ok(ParseReport {
            info,
            format: extracted.format,
            char_count: extracted.text.chars().count(),
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }
}

/// Parse already-extracted text with the default parser.
pub fn parse_company_info(text: &str) -> ParsedCompanyInfo {
    CompanyDocumentParser::new().parse(text)
}

/// Parse a document with the default parser.
pub async fn parse_company_document<S>(source: &S) -> Result<ParsedCompanyInfo>
where
    S: DocumentSource + ?Sized,
{
    CompanyDocumentParser::new().parse_document(source).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::company::{EmployeeRange, Industry};
    use pretty_assertions::assert_eq;

    const FULL_PROFILE: &str = "회사명: 테크노바 주식회사\n사업자등록번호: 123-45-67890\nIT 소프트웨어 전문기업\n직원 수: 120명\n설립연도: 2018년\n대표이사: 김철수\n웹사이트: technova.io";

    fn parser() -> CompanyDocumentParser {
        CompanyDocumentParser::new().with_reference_year(2025)
    }

    #[test]
    fn test_full_extraction() {
        let info = parser().parse(FULL_PROFILE);

        assert_eq!(info.company_name.as_deref(), Some("테크노바 주식회사"));
        assert_eq!(info.business_number.as_deref(), Some("123-45-67890"));
        assert_eq!(info.industry, Some(Industry::Software));
        assert_eq!(info.industry.map(|i| i.key()), Some("IT/SaaS/Software"));
        assert_eq!(info.employee_count_exact.as_deref(), Some("120"));
        assert_eq!(info.employee_count, None);
        assert_eq!(info.established_year.as_deref(), Some("2018"));
        assert_eq!(info.ceo.as_deref(), Some("김철수"));
        assert_eq!(info.website.as_deref(), Some("https://technova.io"));
        assert_eq!(info.address, None);
        assert_eq!(info.confidence, 100);
        assert_eq!(
            info.extracted_fields,
            vec![
                CompanyField::CompanyName,
                CompanyField::BusinessNumber,
                CompanyField::Industry,
                CompanyField::EmployeeCount,
                CompanyField::Website,
                CompanyField::EstablishedYear,
                CompanyField::Ceo,
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        let info = parser().parse("");
        assert_eq!(info, ParsedCompanyInfo::default());
        assert_eq!(info.confidence, 0);
        assert!(info.extracted_fields.is_empty());
    }

    #[test]
    fn test_parse_is_deterministic() {
        let parser = parser();
        assert_eq!(parser.parse(FULL_PROFILE), parser.parse(FULL_PROFILE));
    }

    #[test]
    fn test_exact_count_precedence() {
        let info = parser().parse("직원 수: 85명\n51~200명 규모");
        assert_eq!(info.employee_count_exact.as_deref(), Some("85"));
        assert_eq!(info.employee_count, None);
        assert_eq!(info.extracted_fields, vec![CompanyField::EmployeeCount]);
        assert_eq!(info.confidence, 25);
    }

    #[test]
    fn test_range_count_recorded() {
        let info = parser().parse("51~200명 규모의 팀");
        assert_eq!(info.employee_count, Some(EmployeeRange::UpTo200));
        assert_eq!(info.employee_count_exact, None);
        assert_eq!(info.extracted_fields, vec![CompanyField::EmployeeCount]);
    }

    #[test]
    fn test_optional_fields_do_not_affect_confidence() {
        let info = parser().parse("대표이사: 김철수\n웹사이트: technova.io\n설립연도: 2018년");
        assert_eq!(info.extracted_fields.len(), 3);
        assert_eq!(info.confidence, 0);
    }

    #[test]
    fn test_established_year_bounds() {
        assert_eq!(parser().parse("설립연도: 1850년").established_year, None);
        assert_eq!(
            parser().parse("설립연도: 2022년").established_year.as_deref(),
            Some("2022")
        );
    }

    #[test]
    fn test_business_number_validation() {
        let info = parser().parse("사업자등록번호: 12345678901");
        assert_eq!(info.business_number, None);
        assert!(!info.extracted_fields.contains(&CompanyField::BusinessNumber));
    }

    #[test]
    fn test_from_config_uses_reference_year() {
        let mut config = CorpdocConfig::default();
        config.extraction.reference_year = Some(2015);
        let parser = CompanyDocumentParser::from_config(&config);

        assert_eq!(parser.reference_year(), 2015);
        assert_eq!(parser.parse("설립연도: 2018년").established_year, None);
    }

    #[test]
    fn test_default_reference_year_is_current() {
        let year = Local::now().year();
        assert_eq!(CompanyDocumentParser::new().reference_year(), year);
    }
}
