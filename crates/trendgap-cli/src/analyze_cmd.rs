use std::fs;
use std::process::ExitCode;

use serde::Serialize;
use tracing::debug;
use trendgap_core::{Category, Report};

use crate::cli::AnalyzeArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, NOT_A_CSV_MESSAGE, OutputFormat};
use crate::shared::{analyze_upload, is_csv_file_name};

pub fn run_analyze(args: AnalyzeArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    // Checked before reading so a non-CSV path is never opened.
    if !is_csv_file_name(&args.input) {
        return Err(CliError::input(NOT_A_CSV_MESSAGE));
    }

    let contents = fs::read(&args.input).map_err(|e| {
        CliError::runtime(format!("Failed to open file '{}': {}", args.input, e))
    })?;
    debug!("Read {} bytes from {}", contents.len(), args.input);

    let report = analyze_upload(Some(&args.input), &contents)?;

    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&AnalyzeOutput::from(&report))
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            for entry in &report.categories {
                println!("{}", entry.message());
            }
        }
    }

    Ok(ExitCode::from(EXIT_SUCCESS))
}

#[derive(Debug, Serialize)]
struct AnalyzeOutput {
    results: Vec<CategoryOutput>,
    rows_read: usize,
    rows_dropped: usize,
}

#[derive(Debug, Serialize)]
struct CategoryOutput {
    category: Category,
    points: usize,
    max_gap_minutes: Option<f64>,
    message: String,
}

impl From<&Report> for AnalyzeOutput {
    fn from(report: &Report) -> Self {
        Self {
            results: report
                .categories
                .iter()
                .map(|entry| CategoryOutput {
                    category: entry.category,
                    points: entry.points,
                    max_gap_minutes: entry.gap.minutes(),
                    message: entry.message(),
                })
                .collect(),
            rows_read: report.rows_read,
            rows_dropped: report.rows_dropped,
        }
    }
}
