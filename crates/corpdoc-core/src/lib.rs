//! Core library for company profile document parsing.
//!
//! This crate provides:
//! - Format dispatch and text extraction (plain text, PDF text layer, DOCX stub)
//! - Field recognizers for Korean/English company profiles (name, business
//!   registration number, industry, headcount, address, website, founding
//!   year, CEO)
//! - Confidence scoring over the required fields
//! - The orchestrating parser tying the stages together

pub mod error;
pub mod models;
pub mod document;
pub mod company;

pub use error::{CorpdocError, DocumentError, Result};
pub use models::company::{CompanyField, EmployeeRange, Industry, ParsedCompanyInfo};
pub use models::config::{CorpdocConfig, PdfMode};
pub use document::{DocumentFormat, DocumentSource, UploadedFile, extract_text};
#[cfg(feature = "native")]
pub use document::LocalFile;
pub use company::{
    CompanyDocumentParser, ParseReport, parse_company_document, parse_company_info,
};
