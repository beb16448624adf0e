//! Per-category aggregation of test outcomes
//!
//! Groups outcomes by feature category and computes counts and rates.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{percentage, Category, TestOutcome, TestStatus};

/// Outcome counts for one feature category
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CategoryStats {
    pub passed: u64,
    pub failed: u64,
    pub skipped: u64,
    pub errors: u64,
}

impl CategoryStats {
    pub fn record(&mut self, status: TestStatus) {
        match status {
            TestStatus::Passed => self.passed += 1,
            TestStatus::Failed => self.failed += 1,
            TestStatus::Skipped => self.skipped += 1,
            TestStatus::Error => self.errors += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.passed + self.failed + self.skipped + self.errors
    }

    pub fn compatibility(&self) -> f64 {
        percentage(self.passed, self.total())
    }

    pub fn tier(&self) -> Tier {
        Tier::from_compatibility(self.compatibility())
    }
}

/// Compatibility band of a category
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// 90% and above
    Good,
    /// 50% up to 90%
    Partial,
    /// Below 50%
    Poor,
}

impl Tier {
    pub fn from_compatibility(compatibility: f64) -> Self {
        if compatibility >= 90.0 {
            Tier::Good
        } else if compatibility >= 50.0 {
            Tier::Partial
        } else {
            Tier::Poor
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tier::Good => "✅",
            Tier::Partial => "⚠️",
            Tier::Poor => "❌",
        }
    }
}

/// Stats keyed by category, iterated in category-name order.
/// Only categories with at least one outcome are present.
pub type CategoryTable = BTreeMap<Category, CategoryStats>;

/// Fold all outcomes into per-category counts
pub fn aggregate(outcomes: &[TestOutcome]) -> CategoryTable {
    outcomes.iter().fold(CategoryTable::new(), |mut table, outcome| {
        table
            .entry(Category::classify(&outcome.name))
            .or_default()
            .record(outcome.status);
        table
    })
}

/// Names of tests with `status`, grouped by category. Names are sorted within
/// each category; duplicates from different files are kept.
pub fn group_names_by_category(
    outcomes: &[TestOutcome],
    status: TestStatus,
) -> BTreeMap<Category, Vec<String>> {
    let mut groups: BTreeMap<Category, Vec<String>> = BTreeMap::new();
    for outcome in outcomes.iter().filter(|o| o.status == status) {
        groups
            .entry(Category::classify(&outcome.name))
            .or_default()
            .push(outcome.name.clone());
    }

    for names in groups.values_mut() {
        names.sort();
    }
    groups
}

/// Sorted names of tests with `status`, ungrouped
pub fn sorted_names(outcomes: &[TestOutcome], status: TestStatus) -> Vec<String> {
    let mut names: Vec<String> = outcomes
        .iter()
        .filter(|o| o.status == status)
        .map(|o| o.name.clone())
        .collect();
    names.sort();
    names
}

/// Number of outcomes with `status`
pub fn count_status(outcomes: &[TestOutcome], status: TestStatus) -> usize {
    outcomes.iter().filter(|o| o.status == status).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(name: &str, status: TestStatus) -> TestOutcome {
        TestOutcome::new("s3tests/functional/test_s3.py", name, status)
    }

    fn sample() -> Vec<TestOutcome> {
        vec![
            outcome("test_object_write", TestStatus::Passed),
            outcome("test_object_read_not_exist", TestStatus::Failed),
            outcome("test_bucket_create_naming", TestStatus::Passed),
            outcome("test_bucket_acl_grant_read", TestStatus::Failed),
            outcome("test_get_object_range", TestStatus::Skipped),
            outcome("test_multipart_upload", TestStatus::Error),
            outcome("test_bucket_policy", TestStatus::Passed),
        ]
    }

    #[test]
    fn test_aggregate_counts() {
        let table = aggregate(&sample());

        assert_eq!(table.len(), 5);
        assert_eq!(
            table[&Category::ObjectOperations],
            CategoryStats {
                passed: 1,
                failed: 1,
                skipped: 1,
                errors: 0,
            }
        );
        assert_eq!(table[&Category::Acl].failed, 1);
        assert_eq!(table[&Category::MultipartUpload].errors, 1);
        assert_eq!(table[&Category::Other].passed, 1);
        assert!(!table.contains_key(&Category::Cors));

        let total: u64 = table.values().map(CategoryStats::total).sum();
        assert_eq!(total, sample().len() as u64);
    }

    #[test]
    fn test_aggregate_order_independent() {
        let mut reversed = sample();
        reversed.reverse();
        assert_eq!(aggregate(&sample()), aggregate(&reversed));
    }

    #[test]
    fn test_aggregate_iterates_by_name() {
        let names: Vec<&str> = aggregate(&sample()).keys().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec![
                "ACL",
                "Bucket Operations",
                "Multipart Upload",
                "Object Operations",
                "Other",
            ]
        );
    }

    #[test]
    fn test_aggregate_empty() {
        assert!(aggregate(&[]).is_empty());
    }

    #[test]
    fn test_category_compatibility_and_tier() {
        let stats = CategoryStats {
            passed: 9,
            failed: 1,
            ..CategoryStats::default()
        };
        assert_eq!(stats.compatibility(), 90.0);
        assert_eq!(stats.tier(), Tier::Good);

        assert_eq!(CategoryStats::default().compatibility(), 0.0);
        assert_eq!(CategoryStats::default().tier(), Tier::Poor);

        assert_eq!(Tier::from_compatibility(89.9), Tier::Partial);
        assert_eq!(Tier::from_compatibility(50.0), Tier::Partial);
        assert_eq!(Tier::from_compatibility(49.9), Tier::Poor);
    }

    #[test]
    fn test_group_names_sorted() {
        let outcomes = vec![
            outcome("test_object_write_b", TestStatus::Passed),
            outcome("test_object_write_a", TestStatus::Passed),
            outcome("test_cors_origin", TestStatus::Passed),
            outcome("test_object_write_c", TestStatus::Failed),
            TestOutcome::new(
                "s3tests/functional/test_other.py",
                "test_object_write_a",
                TestStatus::Passed,
            ),
        ];

        let groups = group_names_by_category(&outcomes, TestStatus::Passed);
        assert_eq!(groups.len(), 2);
        assert_eq!(
            groups[&Category::ObjectOperations],
            vec![
                "test_object_write_a",
                "test_object_write_a",
                "test_object_write_b"
            ]
        );
        assert_eq!(groups[&Category::Cors], vec!["test_cors_origin"]);

        let failed = group_names_by_category(&outcomes, TestStatus::Failed);
        assert_eq!(failed[&Category::ObjectOperations], vec!["test_object_write_c"]);
    }

    #[test]
    fn test_sorted_names() {
        let names = sorted_names(&sample(), TestStatus::Passed);
        assert_eq!(
            names,
            vec![
                "test_bucket_create_naming",
                "test_bucket_policy",
                "test_object_write"
            ]
        );
        assert_eq!(count_status(&sample(), TestStatus::Failed), 2);
    }
}
