//! pytest console output parsing
//!
//! Extracts per-test result lines and the final summary line from
//! `pytest -v` output of the Ceph s3-tests suite.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::{debug, trace};

use crate::models::{Summary, SummarySource, TestOutcome, TestStatus};

/// `s3tests/functional/<file>::test_<name> <STATUS>`
static OUTCOME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(s3tests/functional/[^\s]+)::(test_[^\s]+)\s+(PASSED|FAILED|SKIPPED|ERROR)")
        .expect("Invalid outcome regex")
});

/// `=== N passed, M failed, K skipped, J error ... in D.DDs ===`
static SUMMARY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"=+ ([0-9]+) passed(?:, ([0-9]+) failed)?(?:, ([0-9]+) skipped)?(?:, ([0-9]+) error)?.*in ([0-9.]+)s",
    )
    .expect("Invalid summary regex")
});

/// Everything extracted from one runner log
#[derive(Clone, Debug)]
pub struct ExtractedRun {
    /// Outcomes in order of appearance
    pub outcomes: Vec<TestOutcome>,
    pub summary: Summary,
    pub summary_source: SummarySource,
}

/// Extract test outcomes and the run summary from raw runner output.
///
/// Never fails: text that does not match simply contributes nothing. When no
/// summary line is present the summary is counted from the outcomes.
pub fn extract(raw: &str) -> ExtractedRun {
    let outcomes = extract_outcomes(raw);
    for outcome in &outcomes {
        trace!("{outcome}");
    }

    let (summary, summary_source) = match parse_summary_line(raw) {
        Some(summary) => (summary, SummarySource::Parsed),
        None => (Summary::derive(&outcomes), SummarySource::Derived),
    };

    debug!(
        "Extracted {} outcomes, summary {:?}: {}",
        outcomes.len(),
        summary_source,
        summary
    );

    ExtractedRun {
        outcomes,
        summary,
        summary_source,
    }
}

/// All non-overlapping test result matches, left to right
pub fn extract_outcomes(raw: &str) -> Vec<TestOutcome> {
    OUTCOME_REGEX
        .captures_iter(raw)
        .filter_map(|caps| {
            let status = TestStatus::from_keyword(&caps[3])?;
            Some(TestOutcome::new(&caps[1], &caps[2], status))
        })
        .collect()
}

/// Parse the first aggregate summary line, if any.
///
/// Counts are ASCII digits only. A line whose numbers cannot be represented
/// (a count or the total overflowing, a bare `.` as duration) is treated as
/// absent.
pub fn parse_summary_line(raw: &str) -> Option<Summary> {
    let caps = SUMMARY_REGEX.captures(raw)?;

    let summary = Summary {
        passed: parse_count(&caps, 1)?,
        failed: parse_count(&caps, 2)?,
        skipped: parse_count(&caps, 3)?,
        errors: parse_count(&caps, 4)?,
        duration_secs: caps[5].parse().ok()?,
    };

    summary
        .passed
        .checked_add(summary.failed)?
        .checked_add(summary.skipped)?
        .checked_add(summary.errors)?;
    Some(summary)
}

fn parse_count(caps: &Captures<'_>, group: usize) -> Option<u64> {
    match caps.get(group) {
        Some(m) => m.as_str().parse().ok(),
        None => Some(0),
    }
}
