//! Parse command - extract company fields from a single document.

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use corpdoc_core::{CompanyDocumentParser, LocalFile, ParseReport};

use super::config::load_config;
use super::output::{OutputFormat, format_info};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input file (PDF, DOCX or TXT)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Declared MIME type (default: detect from extension)
    #[arg(long)]
    mime: Option<String>,

    /// Upper bound for founding years (default: current year)
    #[arg(long)]
    reference_year: Option<i32>,

    /// Show processing details
    #[arg(long)]
    show_report: bool,
}

pub async fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    if let Some(year) = args.reference_year {
        config.extraction.reference_year = Some(year);
    }

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message("Reading document...");

    let mut file = LocalFile::open(&args.input).await?;
    if let Some(mime) = &args.mime {
        file = file.with_mime_type(mime.clone());
    }

    pb.set_message("Extracting company fields...");

    let parser = CompanyDocumentParser::from_config(&config);
    let report = parser.parse_document_with_report(&file).await?;

    pb.finish_and_clear();

    let file_name = args.input.display().to_string();
    let output = format_info(&file_name, &report.info, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if report.info.confidence < config.extraction.review_threshold {
        warn_low_confidence(&report);
    }

    if args.show_report {
        print_report(&report);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn warn_low_confidence(report: &ParseReport) {
    eprintln!(
        "{} Low confidence ({}%), please review the extracted fields:",
        style("!").yellow(),
        report.info.confidence
    );
    for warning in &report.warnings {
        eprintln!("  - {}", warning);
    }
}

fn print_report(report: &ParseReport) {
    eprintln!();
    eprintln!(
        "{} Format: {:?}, {} characters",
        style("ℹ").blue(),
        report.format,
        report.char_count
    );
    eprintln!(
        "{} Extracted fields: {}",
        style("ℹ").blue(),
        report
            .info
            .extracted_fields
            .iter()
            .map(|f| f.name())
            .collect::<Vec<_>>()
            .join(", ")
    );
    eprintln!(
        "{} Processing time: {}ms",
        style("ℹ").blue(),
        report.processing_time_ms
    );
}
