//! Output formatting shared by the parse and batch commands.

use corpdoc_core::ParsedCompanyInfo;

/// Output format for parsed records.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    /// File extension for written outputs.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

/// CSV columns, in order.
pub const CSV_HEADER: [&str; 10] = [
    "file",
    "company_name",
    "business_number",
    "industry",
    "employee_count",
    "address",
    "website",
    "established_year",
    "ceo",
    "confidence",
];

/// Render a record in the requested format.
pub fn format_info(
    file: &str,
    info: &ParsedCompanyInfo,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(info)?),
        OutputFormat::Csv => format_csv(&[(file.to_string(), info.clone())]),
        OutputFormat::Text => Ok(format_text(file, info)),
    }
}

/// One CSV row per record, with a header line.
pub fn format_csv(records: &[(String, ParsedCompanyInfo)]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(CSV_HEADER)?;

    for (file, info) in records {
        wtr.write_record(csv_row(file, info))?;
    }

    Ok(String::from_utf8(wtr.into_inner()?)?)
}

fn csv_row(file: &str, info: &ParsedCompanyInfo) -> [String; 10] {
    [
        file.to_string(),
        info.company_name.clone().unwrap_or_default(),
        info.business_number.clone().unwrap_or_default(),
        info.industry.map(|i| i.key().to_string()).unwrap_or_default(),
        info.employee_count_display().unwrap_or_default().to_string(),
        info.address.clone().unwrap_or_default(),
        info.website.clone().unwrap_or_default(),
        info.established_year.clone().unwrap_or_default(),
        info.ceo.clone().unwrap_or_default(),
        info.confidence.to_string(),
    ]
}

/// Human-readable summary.
pub fn format_text(file: &str, info: &ParsedCompanyInfo) -> String {
    let mut output = String::new();

    output.push_str(&format!("Document: {}\n", file));
    output.push_str(&format!("Confidence: {}%\n", info.confidence));
    output.push('\n');

    let rows = [
        ("Company name", info.company_name.as_deref()),
        ("Business number", info.business_number.as_deref()),
        ("Industry", info.industry.map(|i| i.key())),
        ("Employees", info.employee_count_display()),
        ("Address", info.address.as_deref()),
        ("Website", info.website.as_deref()),
        ("Established", info.established_year.as_deref()),
        ("CEO", info.ceo.as_deref()),
    ];

    for (label, value) in rows {
        output.push_str(&format!("  {:<16} {}\n", label, value.unwrap_or("-")));
    }

    output
}
