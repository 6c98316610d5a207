//! Company profile data extracted from uploaded documents.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Structured fields recognized in a company profile document.
///
/// The record is advisory: callers pre-fill editable form fields from it and
/// must not assume any field is populated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedCompanyInfo {
    /// Legal company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    /// Business registration number in `DDD-DD-DDDDD` form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_number: Option<String>,

    /// Industry category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<Industry>,

    /// Headcount range, set only when no exact count was found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_count: Option<EmployeeRange>,

    /// Exact headcount as a decimal integer string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_count_exact: Option<String>,

    /// Street address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Website URL, always carrying a scheme.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    /// Four-digit founding year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub established_year: Option<String>,

    /// CEO / representative name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ceo: Option<String>,

    /// Share of required fields recognized (0, 25, 50, 75 or 100).
    pub confidence: u8,

    /// Fields that were populated, in recognition order.
    pub extracted_fields: Vec<CompanyField>,
}

impl ParsedCompanyInfo {
    /// Check whether a field carries a value.
    ///
    /// `EmployeeCount` is satisfied by either headcount field.
    pub fn has(&self, field: CompanyField) -> bool {
        match field {
            CompanyField::CompanyName => self.company_name.is_some(),
            CompanyField::BusinessNumber => self.business_number.is_some(),
            CompanyField::Industry => self.industry.is_some(),
            CompanyField::EmployeeCount => {
                self.employee_count.is_some() || self.employee_count_exact.is_some()
            }
            CompanyField::Address => self.address.is_some(),
            CompanyField::Website => self.website.is_some(),
            CompanyField::EstablishedYear => self.established_year.is_some(),
            CompanyField::Ceo => self.ceo.is_some(),
        }
    }

    /// Required fields the parser could not recognize.
    pub fn missing_required(&self) -> Vec<CompanyField> {
        CompanyField::REQUIRED
            .into_iter()
            .filter(|field| !self.has(*field))
            .collect()
    }

    /// Headcount for display: the exact count if known, otherwise the range label.
    pub fn employee_count_display(&self) -> Option<&str> {
        self.employee_count_exact
            .as_deref()
            .or_else(|| self.employee_count.map(|range| range.label()))
    }

    /// True when nothing was recognized.
    pub fn is_empty(&self) -> bool {
        self.extracted_fields.is_empty()
    }
}

/// Names of the recognizable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CompanyField {
    CompanyName,
    BusinessNumber,
    Industry,
    EmployeeCount,
    Address,
    Website,
    EstablishedYear,
    Ceo,
}

impl CompanyField {
    /// All fields in recognition order.
    pub const ALL: [CompanyField; 8] = [
        CompanyField::CompanyName,
        CompanyField::BusinessNumber,
        CompanyField::Industry,
        CompanyField::EmployeeCount,
        CompanyField::Address,
        CompanyField::Website,
        CompanyField::EstablishedYear,
        CompanyField::Ceo,
    ];

    /// Fields the confidence score is computed over.
    pub const REQUIRED: [CompanyField; 4] = [
        CompanyField::CompanyName,
        CompanyField::BusinessNumber,
        CompanyField::Industry,
        CompanyField::EmployeeCount,
    ];

    /// Field name as reported in `extractedFields`.
    pub fn name(&self) -> &'static str {
        match self {
            CompanyField::CompanyName => "companyName",
            CompanyField::BusinessNumber => "businessNumber",
            CompanyField::Industry => "industry",
            CompanyField::EmployeeCount => "employeeCount",
            CompanyField::Address => "address",
            CompanyField::Website => "website",
            CompanyField::EstablishedYear => "establishedYear",
            CompanyField::Ceo => "ceo",
        }
    }

    /// Whether the field counts towards the confidence score.
    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }
}

impl fmt::Display for CompanyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Closed set of industry categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Industry {
    #[serde(rename = "IT/SaaS/Software")]
    Software,
    #[serde(rename = "E-commerce/Retail")]
    Ecommerce,
    #[serde(rename = "Finance/Fintech")]
    Finance,
    #[serde(rename = "Healthcare/Bio")]
    Healthcare,
    #[serde(rename = "Manufacturing")]
    Manufacturing,
    #[serde(rename = "Education/EdTech")]
    Education,
    #[serde(rename = "Gaming")]
    Gaming,
    #[serde(rename = "Media/Entertainment")]
    Media,
    #[serde(rename = "Marketing/Advertising")]
    Marketing,
    #[serde(rename = "Logistics/Transportation")]
    Logistics,
    #[serde(rename = "Construction/Real Estate")]
    Construction,
    #[serde(rename = "Food/Beverage")]
    Food,
    #[serde(rename = "Consulting/Professional Services")]
    Consulting,
    #[serde(rename = "Energy/Environment")]
    Energy,
    #[serde(rename = "Telecommunications")]
    Telecom,
    #[serde(rename = "Automotive/Mobility")]
    Automotive,
    #[serde(rename = "Travel/Hospitality")]
    Travel,
}

impl Industry {
    /// Category key as exposed to consumers.
    pub fn key(&self) -> &'static str {
        match self {
            Industry::Software => "IT/SaaS/Software",
            Industry::Ecommerce => "E-commerce/Retail",
            Industry::Finance => "Finance/Fintech",
            Industry::Healthcare => "Healthcare/Bio",
            Industry::Manufacturing => "Manufacturing",
            Industry::Education => "Education/EdTech",
            Industry::Gaming => "Gaming",
            Industry::Media => "Media/Entertainment",
            Industry::Marketing => "Marketing/Advertising",
            Industry::Logistics => "Logistics/Transportation",
            Industry::Construction => "Construction/Real Estate",
            Industry::Food => "Food/Beverage",
            Industry::Consulting => "Consulting/Professional Services",
            Industry::Energy => "Energy/Environment",
            Industry::Telecom => "Telecommunications",
            Industry::Automotive => "Automotive/Mobility",
            Industry::Travel => "Travel/Hospitality",
        }
    }

    /// Look up a category by its key.
    pub fn from_key(key: &str) -> Option<Self> {
        crate::company::rules::industry::INDUSTRY_KEYWORDS
            .iter()
            .map(|(industry, _)| *industry)
            .find(|industry| industry.key() == key)
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Headcount ranges used when no exact count is stated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployeeRange {
    #[serde(rename = "1-10")]
    UpTo10,
    #[serde(rename = "11-50")]
    UpTo50,
    #[serde(rename = "51-200")]
    UpTo200,
    #[serde(rename = "201-500")]
    UpTo500,
    #[serde(rename = "500+")]
    Over500,
}

impl EmployeeRange {
    /// Range label, e.g. `"51-200"`.
    pub fn label(&self) -> &'static str {
        match self {
            EmployeeRange::UpTo10 => "1-10",
            EmployeeRange::UpTo50 => "11-50",
            EmployeeRange::UpTo200 => "51-200",
            EmployeeRange::UpTo500 => "201-500",
            EmployeeRange::Over500 => "500+",
        }
    }
}

impl fmt::Display for EmployeeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
