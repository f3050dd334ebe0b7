//! Built-in quality checks.
//!
//! Every column gets these two checks whether or not a contract mentions it:
//! - Null Check: the column holds no nulls
//! - Uniqueness Check: at least 99% of rows hold distinct values

use crate::Column;
use crate::stats::percent;
use dq_core::{CheckKind, CheckResult, Severity, Status};

/// Null ratio above which a null finding is rated medium instead of low.
pub const NULL_SEVERITY_THRESHOLD: f64 = 0.05;

/// Unique ratio at or above which the uniqueness check passes.
pub const UNIQUENESS_PASS_THRESHOLD: f64 = 0.99;

/// Unique ratio at or above which a uniqueness result is rated low.
pub const UNIQUENESS_LOW_SEVERITY_THRESHOLD: f64 = 0.95;

/// Runs the built-in checks on a column.
#[derive(Debug, Default, Clone, Copy)]
pub struct QualityValidator;

impl QualityValidator {
    /// Creates a new quality validator.
    pub fn new() -> Self {
        Self
    }

    /// Returns the Null Check and Uniqueness Check results, in that order.
    pub fn validate(&self, column: &Column) -> Vec<CheckResult> {
        vec![self.null_check(column), self.uniqueness_check(column)]
    }

    /// FAIL whenever any value is null.
    ///
    /// Severity tracks the null ratio, not the outcome: a clean column is
    /// reported as PASS/low, a column above 5% nulls as FAIL/medium.
    pub fn null_check(&self, column: &Column) -> CheckResult {
        let null_ratio = column.null_ratio();

        let message = if null_ratio > 0.0 {
            format!("{} of values are null", percent(null_ratio))
        } else {
            "No nulls found".to_string()
        };
        let severity = if null_ratio > NULL_SEVERITY_THRESHOLD {
            Severity::Medium
        } else {
            Severity::Low
        };

        CheckResult::new(
            column.name(),
            CheckKind::Null,
            Status::from_passed(null_ratio == 0.0),
            message,
            severity,
        )
    }

    /// PASS when the unique ratio reaches 99%.
    pub fn uniqueness_check(&self, column: &Column) -> CheckResult {
        let unique_ratio = column.unique_ratio();

        let severity = if unique_ratio >= UNIQUENESS_LOW_SEVERITY_THRESHOLD {
            Severity::Low
        } else {
            Severity::Medium
        };

        CheckResult::new(
            column.name(),
            CheckKind::Uniqueness,
            Status::from_passed(unique_ratio >= UNIQUENESS_PASS_THRESHOLD),
            format!("{} unique values", percent(unique_ratio)),
            severity,
        )
    }
}
