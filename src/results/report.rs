//! Report generation for compatibility results
//!
//! Renders extracted outcomes and aggregated category stats as Markdown,
//! plain text or JSON.

use std::fmt::{self, Write};
use std::path::Path;

use chrono::NaiveDateTime;
use clap::ValueEnum;
use serde::Serialize;
use tracing::debug;

use crate::config::ReportConfig;
use crate::error::{ReportError, Result};
use crate::models::{percentage, Summary, TestOutcome, TestStatus};
use crate::results::aggregate::{
    count_status, group_names_by_category, sorted_names, CategoryStats, CategoryTable, Tier,
};
use crate::utils::{Clock, SystemClock};

/// Report generator
pub struct ReportGenerator {
    config: ReportConfig,
    clock: Box<dyn Clock>,
}

impl ReportGenerator {
    /// Create a new report generator using the local clock
    pub fn new(config: ReportConfig) -> Self {
        Self {
            config,
            clock: Box::new(SystemClock),
        }
    }

    /// Replace the clock used for the "generated" timestamp
    #[cfg(test)]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Render a report. The clock is read once per call.
    pub fn render(
        &self,
        outcomes: &[TestOutcome],
        summary: &Summary,
        stats: &CategoryTable,
        format: ReportFormat,
    ) -> Result<String> {
        let input = ReportInput {
            generated_at: self.clock.now(),
            outcomes,
            summary,
            stats,
        };

        let mut output = String::new();
        match format {
            ReportFormat::Markdown => self.format_markdown_report(&mut output, &input)?,
            ReportFormat::Text => self.format_text_report(&mut output, &input)?,
            ReportFormat::Json => output = self.format_json_report(&input)?,
        }

        debug!("Rendered {:?} report ({} bytes)", format, output.len());
        Ok(output)
    }

    fn format_markdown_report(&self, out: &mut String, input: &ReportInput<'_>) -> fmt::Result {
        let config = &self.config;
        let summary = input.summary;
        let total = summary.total();

        // Header
        writeln!(out, "# {}\n", config.title)?;
        writeln!(out, "**Generated:** {}\n", format_datetime(&input.generated_at))?;
        writeln!(out, "**Test Suite:** {}\n", config.suite_name)?;
        writeln!(out, "**Duration:** {:.2}s\n", summary.duration_secs)?;

        // Summary table
        writeln!(out, "## Executive Summary\n")?;
        writeln!(out, "| Metric | Count | Percentage |")?;
        writeln!(out, "|--------|-------|------------|")?;
        writeln!(out, "| **Total Tests** | {total} | 100% |")?;
        for (label, count) in [
            ("✅ Passed", summary.passed),
            ("❌ Failed", summary.failed),
            ("⊘ Skipped", summary.skipped),
            ("⚠️  Errors", summary.errors),
        ] {
            writeln!(
                out,
                "| {} | {} | {:.1}% |",
                label,
                count,
                percentage(count, total)
            )?;
        }
        writeln!(out)?;

        writeln!(
            out,
            "### 🎯 Overall Compatibility Score: **{:.1}%**\n",
            summary.compatibility()
        )?;

        // Feature breakdown
        writeln!(out, "## Feature Compatibility Breakdown\n")?;
        writeln!(
            out,
            "| Feature Category | Passed | Failed | Skipped | Errors | Compatibility |"
        )?;
        writeln!(
            out,
            "|-----------------|--------|--------|---------|--------|---------------|"
        )?;
        for (category, stats) in input.stats {
            writeln!(
                out,
                "| {} {} | {} | {} | {} | {} | {:.1}% |",
                stats.tier().icon(),
                category,
                stats.passed,
                stats.failed,
                stats.skipped,
                stats.errors,
                stats.compatibility()
            )?;
        }
        writeln!(out)?;

        // Per-test listings. Error outcomes only appear in the counts above.
        let passed = count_status(input.outcomes, TestStatus::Passed);
        if passed > 0 {
            writeln!(out, "## ✅ Supported Features (Passing Tests)\n")?;
            writeln!(out, "The following {passed} tests passed successfully:\n")?;
            write_grouped_markdown(out, input.outcomes, TestStatus::Passed)?;
        }

        let failed = count_status(input.outcomes, TestStatus::Failed);
        if failed > 0 {
            writeln!(out, "## ❌ Unsupported/Failing Features\n")?;
            writeln!(out, "The following {failed} tests failed:\n")?;
            write_grouped_markdown(out, input.outcomes, TestStatus::Failed)?;
        }

        let skipped = sorted_names(input.outcomes, TestStatus::Skipped);
        if !skipped.is_empty() {
            writeln!(out, "## ⊘ Skipped Tests\n")?;
            writeln!(out, "The following {} tests were skipped:\n", skipped.len())?;
            for name in &skipped {
                writeln!(out, "- `{name}`")?;
            }
            writeln!(out)?;
        }

        // Static sections
        writeln!(out, "## Known Limitations\n")?;
        writeln!(
            out,
            "Based on the {} documentation, the following S3 features are **not yet implemented**:\n",
            config.server_name
        )?;
        for item in &config.known_limitations {
            writeln!(out, "- ❌ {item}")?;
        }
        writeln!(out)?;

        writeln!(out, "## Currently Supported Features\n")?;
        writeln!(
            out,
            "The {} server currently supports the following S3 features:\n",
            config.server_name
        )?;
        for item in &config.supported_features {
            writeln!(out, "- ✅ {item}")?;
        }
        writeln!(out)?;

        writeln!(out, "## References\n")?;
        for reference in &config.references {
            writeln!(out, "- [{}]({})", reference.title, reference.url)?;
        }
        writeln!(out)?;

        // Footer
        writeln!(out, "---\n")?;
        writeln!(out, "*{}*", config.footer())
    }

    fn format_text_report(&self, out: &mut String, input: &ReportInput<'_>) -> fmt::Result {
        let config = &self.config;
        let summary = input.summary;
        let total = summary.total();

        writeln!(out, "{:=^70}", format!(" {} ", config.title))?;
        writeln!(out)?;
        writeln!(out, "Generated: {}", format_datetime(&input.generated_at))?;
        writeln!(out, "Test Suite: {}", config.suite_name)?;
        writeln!(out, "Duration: {:.2}s", summary.duration_secs)?;
        writeln!(out)?;

        writeln!(out, "{:-^70}", " Executive Summary ")?;
        writeln!(out, "{:<15} {:>8} {:>10}", "Metric", "Count", "Percent")?;
        writeln!(out, "{:<15} {:>8} {:>10}", "Total Tests", total, "100%")?;
        for (label, count) in [
            ("Passed", summary.passed),
            ("Failed", summary.failed),
            ("Skipped", summary.skipped),
            ("Errors", summary.errors),
        ] {
            writeln!(
                out,
                "{:<15} {:>8} {:>9.1}%",
                label,
                count,
                percentage(count, total)
            )?;
        }
        writeln!(out)?;
        writeln!(
            out,
            "Overall Compatibility Score: {:.1}%",
            summary.compatibility()
        )?;
        writeln!(out)?;

        writeln!(out, "{:-^70}", " Feature Compatibility Breakdown ")?;
        writeln!(
            out,
            "{:<24} {:>7} {:>7} {:>7} {:>7} {:>9}",
            "Category", "Passed", "Failed", "Skipped", "Errors", "Compat"
        )?;
        for (category, stats) in input.stats {
            writeln!(
                out,
                "{:<24} {:>7} {:>7} {:>7} {:>7} {:>8.1}%",
                category.name(),
                stats.passed,
                stats.failed,
                stats.skipped,
                stats.errors,
                stats.compatibility()
            )?;
        }

        for (status, heading) in [
            (TestStatus::Passed, " Supported Features (Passing Tests) "),
            (TestStatus::Failed, " Unsupported/Failing Features "),
        ] {
            let groups = group_names_by_category(input.outcomes, status);
            if groups.is_empty() {
                continue;
            }
            writeln!(out, "\n{:-^70}", heading)?;
            for (category, names) in &groups {
                writeln!(out, "\n{category}:")?;
                for name in names {
                    writeln!(out, "  {} {}", status.symbol(), name)?;
                }
            }
        }

        let skipped = sorted_names(input.outcomes, TestStatus::Skipped);
        if !skipped.is_empty() {
            writeln!(out, "\n{:-^70}", " Skipped Tests ")?;
            for name in &skipped {
                writeln!(out, "  {name}")?;
            }
        }

        writeln!(out, "\n{:-^70}", " Known Limitations ")?;
        for item in &config.known_limitations {
            writeln!(out, "  - {item}")?;
        }

        writeln!(out, "\n{:-^70}", " Currently Supported Features ")?;
        for item in &config.supported_features {
            writeln!(out, "  - {item}")?;
        }

        writeln!(out, "\n{:-^70}", " References ")?;
        for reference in &config.references {
            writeln!(out, "  {}: {}", reference.title, reference.url)?;
        }

        writeln!(out, "\n{:=^70}", "")?;
        writeln!(out, "{}", config.footer())
    }

    fn format_json_report(&self, input: &ReportInput<'_>) -> Result<String> {
        let grouped = |status: TestStatus| -> Vec<(&'static str, Vec<String>)> {
            group_names_by_category(input.outcomes, status)
                .into_iter()
                .map(|(category, names)| (category.name(), names))
                .collect()
        };

        let document = ReportDocument {
            title: &self.config.title,
            generated_at: format_datetime(&input.generated_at),
            suite: &self.config.suite_name,
            server: &self.config.server_name,
            duration_secs: input.summary.duration_secs,
            total: input.summary.total(),
            summary: input.summary,
            compatibility: input.summary.compatibility(),
            categories: input
                .stats
                .iter()
                .map(|(category, stats)| CategoryRow {
                    category: category.name(),
                    stats,
                    compatibility: stats.compatibility(),
                    tier: stats.tier(),
                })
                .collect(),
            passed: grouped(TestStatus::Passed),
            failed: grouped(TestStatus::Failed),
            skipped: sorted_names(input.outcomes, TestStatus::Skipped),
        };

        Ok(serde_json::to_string_pretty(&document)?)
    }
}

/// Write a rendered report to disk
pub fn write_report(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|source| ReportError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}

/// Everything one render reads
struct ReportInput<'a> {
    generated_at: NaiveDateTime,
    outcomes: &'a [TestOutcome],
    summary: &'a Summary,
    stats: &'a CategoryTable,
}

/// JSON report layout
#[derive(Serialize)]
struct ReportDocument<'a> {
    title: &'a str,
    generated_at: String,
    suite: &'a str,
    server: &'a str,
    duration_secs: f64,
    total: u64,
    summary: &'a Summary,
    compatibility: f64,
    categories: Vec<CategoryRow<'a>>,
    passed: Vec<(&'static str, Vec<String>)>,
    failed: Vec<(&'static str, Vec<String>)>,
    skipped: Vec<String>,
}

#[derive(Serialize)]
struct CategoryRow<'a> {
    category: &'static str,
    #[serde(flatten)]
    stats: &'a CategoryStats,
    compatibility: f64,
    tier: Tier,
}

/// Report output format
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Markdown,
    Text,
    Json,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Markdown => "md",
            ReportFormat::Text => "txt",
            ReportFormat::Json => "json",
        }
    }

    /// `compatibility_report.<ext>`
    pub fn default_output(&self) -> String {
        format!("compatibility_report.{}", self.extension())
    }
}

fn write_grouped_markdown(
    out: &mut String,
    outcomes: &[TestOutcome],
    status: TestStatus,
) -> fmt::Result {
    for (category, names) in group_names_by_category(outcomes, status) {
        writeln!(out, "### {category}\n")?;
        for name in names {
            writeln!(out, "- {} `{}`", status.symbol(), name)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}
