use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::core::{discover_sources, load_config, split, ConfigOverrides};
use crate::error::{CsvSplitError, SplitStage};
use crate::models::SplitReport;

/// Split command options
#[derive(Debug, Clone, Default)]
pub struct SplitCommandOptions {
    /// Output directory (defaults to `<input>/<output_subdir>`)
    pub output_dir: Option<PathBuf>,
    /// Explicit config file
    pub config_file: Option<PathBuf>,
    /// Overrides applied on top of the config file
    pub overrides: ConfigOverrides,
    /// Print the summary as JSON instead of text
    pub json: bool,
}

/// A source file that failed to split
#[derive(Debug, Clone, Serialize)]
pub struct FileFailure {
    pub source: PathBuf,
    pub stage: SplitStage,
    pub error: String,
}

/// Summary of splitting every discovered file
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub output_dir: PathBuf,
    pub processed: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub files_written: usize,
    pub reports: Vec<SplitReport>,
    pub failures: Vec<FileFailure>,
}

/// Split every matching file in `input_dir`.
///
/// Files are processed one at a time. A failing file is recorded and the
/// remaining files are still attempted.
pub async fn run_split(
    input_dir: &Path,
    options: SplitCommandOptions,
) -> Result<RunSummary, CsvSplitError> {
    if !input_dir.is_dir() {
        return Err(CsvSplitError::InputDirNotFound(input_dir.to_path_buf()));
    }

    let cwd = std::env::current_dir()?;
    let config = load_config(&cwd, options.config_file.as_deref(), options.overrides)?;
    let split_options = config.split_options();

    let output_dir = options
        .output_dir
        .unwrap_or_else(|| input_dir.join(&config.discovery.output_subdir));
    if !output_dir.exists() {
        tokio::fs::create_dir_all(&output_dir).await?;
        info!("Created output directory: {}", output_dir.display());
    }

    let sources = discover_sources(input_dir, &config.discovery.extension)?;

    let mut summary = RunSummary {
        output_dir: output_dir.clone(),
        ..RunSummary::default()
    };

    for source in sources {
        info!("Splitting file: {}", source.display());
        summary.processed += 1;

        match split(&source, &output_dir, &split_options).await {
            Ok(report) => {
                summary.succeeded += 1;
                summary.files_written += report.files_written;
                summary.reports.push(report);
            }
            Err(e) => {
                warn!("Failed to split {}: {}", source.display(), e);
                summary.failed += 1;
                summary.failures.push(FileFailure {
                    source,
                    stage: e.stage(),
                    error: e.to_string(),
                });
            }
        }
    }

    if options.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{}", json),
            Err(e) => warn!("Failed to serialize run summary: {}", e),
        }
    } else {
        print_summary(&summary);
    }

    if summary.failed > 0 {
        return Err(CsvSplitError::FilesFailed {
            failed: summary.failed,
            total: summary.processed,
        });
    }

    Ok(summary)
}

fn print_summary(summary: &RunSummary) {
    if summary.processed == 0 {
        println!("No source files found.");
        return;
    }

    println!("\n=== Split Summary ===");
    println!("Processed: {}", summary.processed);
    println!("Succeeded: {}", summary.succeeded);
    println!("Failed:    {}", summary.failed);
    println!("Written:   {} file(s) in {}", summary.files_written, summary.output_dir.display());

    println!("\nResults:");
    for report in &summary.reports {
        let skipped = if report.preamble_lines_skipped > 0 {
            format!(", {} preamble line(s) skipped", report.preamble_lines_skipped)
        } else {
            String::new()
        };
        println!(
            "  {} [OK]: {} file(s), {} row(s){}",
            display_name(&report.source),
            report.files_written,
            report.data_lines,
            skipped
        );
    }
    for failure in &summary.failures {
        println!("  {} [FAIL]: {}", display_name(&failure.source), failure.error);
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
