//! s3compat-report - S3 Compatibility Report Generator
//!
//! Converts the console output of the Ceph s3-tests suite into a
//! compatibility report for an S3-compatible server.
//!
//! ## Features
//!
//! - Extracts per-test outcomes and the pytest summary line
//! - Classifies tests into S3 feature categories
//! - Per-category pass rates with compatibility tiers
//! - Multiple output formats (Markdown, Text, JSON)
//!
//! ## Usage
//!
//! ```bash
//! # Markdown report to compatibility_report.md
//! s3compat-report compatibility_results.txt
//!
//! # Explicit output path
//! s3compat-report compatibility_results.txt report.md
//!
//! # JSON report with custom static content
//! s3compat-report results.txt --format json --config report.yaml
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

mod cli;
mod config;
mod error;
mod models;
mod parser;
mod results;
mod utils;

use cli::Args;
use config::ReportConfig;
use models::Summary;
use results::ReportGenerator;
use utils::StageTimer;

fn main() -> Result<()> {
    let args = Args::parse();
    utils::init_logger(args.effective_log_level());

    let summary = run(&args)?;

    println!("\nReport Summary:");
    println!("  Total Tests: {}", summary.total());
    println!("  Passed: {}", summary.passed);
    println!("  Failed: {}", summary.failed);
    println!("  Skipped: {}", summary.skipped);
    println!("  Errors: {}", summary.errors);
    println!("\nReport generated successfully!");

    Ok(())
}

/// Parse the input log, render the report and write it out
fn run(args: &Args) -> Result<Summary> {
    let mut timer = StageTimer::start();
    let output = args.output_path();

    let config = match &args.config {
        Some(path) => ReportConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ReportConfig::default(),
    };

    println!("Parsing test results from: {}", args.input.display());
    let raw = parser::read_input(&args.input)?;
    timer.finish_stage("read");

    let extracted = parser::extract(&raw);
    let stats = results::aggregate(&extracted.outcomes);
    timer.finish_stage("extract");
    info!(
        "Found {} test outcomes in {} categories ({:?} summary)",
        extracted.outcomes.len(),
        stats.len(),
        extracted.summary_source
    );

    println!("Generating report to: {}", output.display());
    let report = ReportGenerator::new(config)
        .render(&extracted.outcomes, &extracted.summary, &stats, args.format)
        .context("Failed to render report")?;
    results::write_report(&output, &report)?;
    timer.finish_stage("render");

    info!(
        "Wrote {:?} report to {} ({:.1}% compatible)",
        args.format,
        output.display(),
        extracted.summary.compatibility()
    );
    tracing::debug!("Stage timings:\n{}", timer.format());

    Ok(extracted.summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_run_writes_markdown_report() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("results.txt");
        let output = dir.path().join("report.md");
        std::fs::write(
            &input,
            "s3tests/functional/test_s3.py::test_object_write PASSED\n\
             s3tests/functional/test_s3.py::test_cors_origin FAILED\n",
        )
        .unwrap();

        let args = Args::parse_from([
            "s3compat-report",
            input.to_str().unwrap(),
            output.to_str().unwrap(),
        ]);
        let summary = run(&args).unwrap();

        assert_eq!(summary.passed, 1);
        assert_eq!(summary.failed, 1);
        let report = std::fs::read_to_string(&output).unwrap();
        assert!(report.contains("### 🎯 Overall Compatibility Score: **50.0%**"));
    }

    #[test]
    fn test_run_with_config_and_json() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("results.txt");
        let config = dir.path().join("report.yaml");
        let output = dir.path().join("report.json");
        std::fs::write(&input, "=== 5 passed, 1 skipped in 2.50s ===\n").unwrap();
        std::fs::write(&config, "server_name: rucket\n").unwrap();

        let args = Args::parse_from([
            "s3compat-report",
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            "--format",
            "json",
            "--config",
            config.to_str().unwrap(),
        ]);
        let summary = run(&args).unwrap();
        assert_eq!(summary.total(), 6);

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(value["server"], "rucket");
        assert_eq!(value["duration_secs"], 2.5);
    }

    #[test]
    fn test_run_missing_input_fails() {
        let dir = tempdir().unwrap();
        let args = Args::parse_from([
            "s3compat-report",
            dir.path().join("missing.txt").to_str().unwrap(),
            dir.path().join("report.md").to_str().unwrap(),
        ]);

        let err = run(&args).unwrap_err();
        assert!(err.to_string().contains("Failed to read test output"));
        assert!(!dir.path().join("report.md").exists());
    }

    #[test]
    fn test_run_unwritable_output_fails() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("results.txt");
        std::fs::write(&input, "").unwrap();

        let args = Args::parse_from([
            "s3compat-report",
            input.to_str().unwrap(),
            dir.path().join("no/such/dir/report.md").to_str().unwrap(),
        ]);
        let err = run(&args).unwrap_err();
        assert!(err.to_string().contains("Failed to write report"));
    }
}
