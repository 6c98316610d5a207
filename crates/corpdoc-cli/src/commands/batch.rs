//! Batch processing command for multiple company documents.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use corpdoc_core::{CompanyDocumentParser, LocalFile, ParsedCompanyInfo};

use super::config::load_config;
use super::output::{OutputFormat, format_csv, format_info};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Upper bound for founding years (default: current year)
    #[arg(long)]
    reference_year: Option<i32>,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    info: Option<ParsedCompanyInfo>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    if let Some(year) = args.reference_year {
        config.extraction.reference_year = Some(year);
    }

    let mut files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| is_supported(p))
        .collect();
    files.sort();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let parser = CompanyDocumentParser::from_config(&config);
    let mut results = Vec::with_capacity(files.len());

    for path in files {
        let file_start = Instant::now();
        let result = process_single_file(&path, &parser).await;
        let processing_time_ms = file_start.elapsed().as_millis() as u64;

        match result {
            Ok(info) => {
                debug!(
                    "{}: confidence {}% in {}ms",
                    path.display(),
                    info.confidence,
                    processing_time_ms
                );
                results.push(ProcessResult {
                    path,
                    info: Some(info),
                    error: None,
                    processing_time_ms,
                });
            }
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to process {}: {}", path.display(), error_msg);
                    results.push(ProcessResult {
                        path,
                        info: None,
                        error: Some(error_msg),
                        processing_time_ms,
                    });
                } else {
                    pb.abandon();
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    anyhow::bail!("Processing failed for {}: {}", path.display(), error_msg);
                }
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    let successful: Vec<_> = results.iter().filter(|r| r.info.is_some()).collect();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    if let Some(output_dir) = &args.output_dir {
        for result in &successful {
            if let Some(info) = &result.info {
                let output_path = output_dir.join(output_name(&result.path, args.format));
                let content = format_info(&file_label(&result.path), info, args.format)?;

                fs::write(&output_path, content)?;
                debug!("Wrote output to {}", output_path.display());
            }
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let needs_review = successful
        .iter()
        .filter(|r| {
            r.info
                .as_ref()
                .is_some_and(|i| i.confidence < config.extraction.review_threshold)
        })
        .count();
    let total_ms: u64 = results.iter().map(|r| r.processing_time_ms).sum();

    println!();
    println!(
        "{} Processed {} files in {:?} ({}ms parsing)",
        style("✓").green(),
        results.len(),
        start.elapsed(),
        total_ms
    );
    println!(
        "   {} successful, {} failed, {} below review threshold",
        style(successful.len()).green(),
        style(failed.len()).red(),
        style(needs_review).yellow()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn is_supported(path: &Path) -> bool {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    matches!(ext.to_lowercase().as_str(), "pdf" | "docx" | "txt")
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string())
}

// Keeps the source extension so acme.pdf and acme.txt do not collide.
fn output_name(path: &Path, format: OutputFormat) -> String {
    format!("{}.{}", file_label(path), format.extension())
}

async fn process_single_file(
    path: &Path,
    parser: &CompanyDocumentParser,
) -> anyhow::Result<ParsedCompanyInfo> {
    let file = LocalFile::open(path).await?;
    Ok(parser.parse_document(&file).await?)
}

fn write_summary(path: &Path, results: &[ProcessResult]) -> anyhow::Result<()> {
    let records: Vec<(String, ParsedCompanyInfo)> = results
        .iter()
        .filter_map(|r| r.info.clone().map(|info| (file_label(&r.path), info)))
        .collect();

    fs::write(path, format_csv(&records)?)?;
    Ok(())
}
