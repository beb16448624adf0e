//! Test outcome models for s3-tests output
//!
//! Defines individual test outcomes, status types and run summaries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Test execution status as reported by pytest
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    Passed,
    Failed,
    Skipped,
    Error,
}

impl TestStatus {
    /// Map a pytest status keyword (`PASSED`, `FAILED`, ...) to a status
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "PASSED" => Some(TestStatus::Passed),
            "FAILED" => Some(TestStatus::Failed),
            "SKIPPED" => Some(TestStatus::Skipped),
            "ERROR" => Some(TestStatus::Error),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            TestStatus::Passed => "✓",
            TestStatus::Failed => "✗",
            TestStatus::Skipped => "⊘",
            TestStatus::Error => "!",
        }
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestStatus::Passed => write!(f, "PASSED"),
            TestStatus::Failed => write!(f, "FAILED"),
            TestStatus::Skipped => write!(f, "SKIPPED"),
            TestStatus::Error => write!(f, "ERROR"),
        }
    }
}

/// Result of a single test case extracted from runner output
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestOutcome {
    pub file: String,
    pub name: String,
    pub status: TestStatus,
}

impl TestOutcome {
    pub fn new(file: impl Into<String>, name: impl Into<String>, status: TestStatus) -> Self {
        Self {
            file: file.into(),
            name: name.into(),
            status,
        }
    }

    /// Fully qualified pytest node id (`file::name`)
    pub fn full_name(&self) -> String {
        format!("{}::{}", self.file, self.name)
    }
}

impl fmt::Display for TestOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.status.symbol(), self.full_name(), self.status)
    }
}

/// Where a run summary came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummarySource {
    /// Read from the aggregate `N passed, ... in D.DDs` line
    Parsed,
    /// Counted from the extracted outcomes
    Derived,
}

/// Aggregate counts for a whole test run
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub passed: u64,
    pub failed: u64,
    pub skipped: u64,
    pub errors: u64,
    pub duration_secs: f64,
}

impl Summary {
    /// Count outcomes by status. Duration is unknown and left at zero.
    pub fn derive(outcomes: &[TestOutcome]) -> Self {
        let count = |status: TestStatus| {
            outcomes.iter().filter(|o| o.status == status).count() as u64
        };

        Self {
            passed: count(TestStatus::Passed),
            failed: count(TestStatus::Failed),
            skipped: count(TestStatus::Skipped),
            errors: count(TestStatus::Error),
            duration_secs: 0.0,
        }
    }

    pub fn total(&self) -> u64 {
        self.passed + self.failed + self.skipped + self.errors
    }

    /// Share of passed tests, 0 when nothing ran
    pub fn compatibility(&self) -> f64 {
        percentage(self.passed, self.total())
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total: {} | Passed: {} | Failed: {} | Skipped: {} | Errors: {}",
            self.total(),
            self.passed,
            self.failed,
            self.skipped,
            self.errors
        )
    }
}

/// `part * 100 / total`, guarded to 0 for an empty total
pub fn percentage(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 * 100.0 / total as f64
    }
}
