//! # keysift-cli
//!
//! Extract identifier-like keys from spreadsheet workbooks and write them
//! as `<base>-keys.json` documents.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use keysift_extract::{export_file_name, extract_keys, ExtractionReport, KeyExport};
use keysift_sheet::Workbook;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// keysift - extract identifier-like keys from spreadsheets
#[derive(Parser)]
#[command(name = "keysift")]
#[command(author, version, about = "Extract identifier-like keys from spreadsheet workbooks", long_about = None)]
struct Cli {
    /// Workbook files to scan (xlsx, xlsb, xls, ods)
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,

    /// Directory for the exported key lists (defaults to each input's directory)
    #[arg(short = 'o', long = "output", value_name = "DIR")]
    output: Option<PathBuf>,

    /// Pretty-print the exported JSON
    #[arg(long)]
    pretty: bool,

    /// Print the key list to stdout instead of writing files
    #[arg(long)]
    stdout: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .init();
    }

    if let Some(dir) = &cli.output {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
    }

    for file in &cli.files {
        process_file(&cli, file)?;
    }

    Ok(())
}

fn process_file(cli: &Cli, file: &Path) -> Result<()> {
    let workbook = Workbook::open(file)
        .with_context(|| format!("Failed to read workbook: {}", file.display()))?;

    let extraction = extract_keys(&workbook);
    let source_name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string());
    let report = ExtractionReport::new(&source_name, &extraction);
    debug!(?report.extracted_at, source = %report.source_file, "extraction finished");

    let export = KeyExport::new(&extraction);
    let json = if cli.pretty {
        serde_json::to_string_pretty(&export)
    } else {
        serde_json::to_string(&export)
    }
    .context("Failed to serialize key export")?;

    if cli.stdout {
        println!("{json}");
        return Ok(());
    }

    let out_name = export_file_name(file);
    let out_path = match &cli.output {
        Some(dir) => dir.join(&out_name),
        None => file.with_file_name(&out_name),
    };
    std::fs::write(&out_path, json)
        .with_context(|| format!("Failed to write {}", out_path.display()))?;

    print_summary(&report, &extraction.keys, &out_path);
    Ok(())
}

fn print_summary(report: &ExtractionReport, keys: &[String], out_path: &Path) {
    if keys.is_empty() {
        println!(
            "{} {} — no keys found ({} sheets scanned)",
            "empty".yellow().bold(),
            report.source_file,
            report.sheet_count
        );
        return;
    }
    println!(
        "{} {} — {} keys from {} sheets -> {}",
        "ok".green().bold(),
        report.source_file,
        report.total_keys,
        report.sheet_count,
        out_path.display()
    );
}
