//! CLI argument parsing
//!
//! Defines command-line interface using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::results::ReportFormat;
use crate::utils::LogLevel;

/// S3 Compatibility Report Generator
#[derive(Parser, Debug)]
#[command(name = "s3compat-report")]
#[command(version)]
#[command(about = "Generate an S3 compatibility report from Ceph s3-tests output")]
#[command(after_help = "Example:\n  s3compat-report compatibility_results.txt compatibility_report.md")]
#[command(arg_required_else_help = true)]
pub struct Args {
    /// Path to the pytest output file
    pub input: PathBuf,

    /// Path for the generated report (default: compatibility_report.<ext>)
    pub output: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value = "markdown")]
    pub format: ReportFormat,

    /// Report content config file (YAML or JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Output path, defaulting by format
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.format.default_output()))
    }

    pub fn effective_log_level(&self) -> LogLevel {
        if self.verbose {
            LogLevel::Debug
        } else {
            self.log_level
        }
    }
}
