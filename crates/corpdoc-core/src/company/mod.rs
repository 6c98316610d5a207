//! Company field recognition and scoring.

mod parser;
pub mod rules;
pub mod scoring;

pub use parser::{CompanyDocumentParser, ParseReport, parse_company_document, parse_company_info};
pub use scoring::score;
