//! WASM bindings for company profile document parsing.
//!
//! Lets the browser upload widget hand a `File` straight to the parser.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use corpdoc_core::company::rules::{INDUSTRY_KEYWORDS, normalize_business_number};
use corpdoc_core::{CompanyDocumentParser, ParsedCompanyInfo, UploadedFile};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// The system clock is unavailable on wasm32-unknown-unknown, so the
// reference year comes from the JS Date.
fn parser() -> CompanyDocumentParser {
    let year = js_sys::Date::new_0().get_full_year() as i32;
    CompanyDocumentParser::new().with_reference_year(year)
}

fn to_js(info: &ParsedCompanyInfo) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(info).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Extract company fields from already-extracted text.
#[wasm_bindgen(js_name = parseCompanyInfo)]
pub fn parse_company_info(text: &str) -> Result<JsValue, JsValue> {
    to_js(&parser().parse(text))
}

/// Extract company fields from a browser `File` (PDF, DOCX or TXT).
///
/// Rejects with the error message when the format is unsupported or the
/// file cannot be decoded.
#[wasm_bindgen(js_name = parseCompanyDocument)]
pub async fn parse_company_document(file: web_sys::File) -> Result<JsValue, JsValue> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

    let upload = UploadedFile::new(file.name(), bytes).with_mime_type(file.type_());

    let info = parser()
        .parse_document(&upload)
        .await
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    to_js(&info)
}

/// Normalize a business registration number to `DDD-DD-DDDDD`.
#[wasm_bindgen(js_name = normalizeBusinessNumber)]
pub fn normalize_business_number_js(value: &str) -> Option<String> {
    normalize_business_number(value)
}

/// Category keys of every industry, in classification order.
#[wasm_bindgen(js_name = industryCategories)]
pub fn industry_categories() -> Vec<String> {
    INDUSTRY_KEYWORDS
        .iter()
        .map(|(industry, _)| industry.key().to_string())
        .collect()
}
