//! Contract rule validation.
//!
//! This module evaluates the column rules a contract declares:
//! - not_null: reported only when violated
//! - unique: reported only when violated
//! - regex: full match of every non-null value's string form
//! - min / max: inclusive numeric bounds, numeric columns only

use crate::stats::percent;
use crate::Column;
use dq_core::{CheckKind, CheckResult, ColumnRules, Severity};
use regex::Regex;

/// Validates contract rules against a column.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConstraintValidator;

impl ConstraintValidator {
    /// Creates a new constraint validator.
    pub fn new() -> Self {
        Self
    }

    /// Evaluates every applicable rule, in the fixed order
    /// not_null, unique, regex, min, max.
    pub fn validate(&self, column: &Column, rules: &ColumnRules) -> Vec<CheckResult> {
        let mut results = Vec::new();

        if rules.not_null {
            results.extend(self.validate_not_null(column));
        }
        if rules.unique {
            results.extend(self.validate_unique(column));
        }
        if let Some(pattern) = rules.pattern() {
            results.push(self.validate_pattern(column, pattern));
        }
        if column.is_numeric() {
            if let Some(min) = rules.min {
                results.push(self.validate_min(column, min));
            }
            if let Some(max) = rules.max {
                results.push(self.validate_max(column, max));
            }
        }

        results
    }

    fn validate_not_null(&self, column: &Column) -> Option<CheckResult> {
        let null_ratio = column.null_ratio();
        (null_ratio > 0.0).then(|| {
            CheckResult::fail(
                column.name(),
                CheckKind::ContractNotNull,
                format!("Contract failed: {} nulls found", percent(null_ratio)),
                Severity::High,
            )
        })
    }

    fn validate_unique(&self, column: &Column) -> Option<CheckResult> {
        let unique_ratio = column.unique_ratio();
        (unique_ratio < 1.0).then(|| {
            CheckResult::fail(
                column.name(),
                CheckKind::ContractUnique,
                format!(
                    "Contract failed: Only {} unique values",
                    percent(unique_ratio)
                ),
                Severity::High,
            )
        })
    }

    /// Checks that every non-null value fully matches `pattern`.
    ///
    /// A pattern that does not compile yields a FAIL/high result instead of an error.
    pub fn validate_pattern(&self, column: &Column, pattern: &str) -> CheckResult {
        let regex = match compile_full_match(pattern) {
            Ok(regex) => regex,
            Err(e) => {
                return CheckResult::fail(
                    column.name(),
                    CheckKind::ContractRegex,
                    format!("Invalid regex pattern: {}", e),
                    Severity::High,
                );
            }
        };

        let (total, mismatched) = column.non_null().fold((0usize, 0usize), |(total, bad), v| {
            let matched = regex.is_match(&v.to_string());
            (total + 1, bad + usize::from(!matched))
        });

        if mismatched == 0 {
            CheckResult::pass(
                column.name(),
                CheckKind::ContractRegex,
                "All values match the expected pattern",
                Severity::Low,
            )
        } else {
            let ratio = mismatched as f64 / total as f64;
            CheckResult::fail(
                column.name(),
                CheckKind::ContractRegex,
                format!(
                    "{} values do not match pattern `{}`",
                    percent(ratio),
                    pattern
                ),
                Severity::Medium,
            )
        }
    }

    fn validate_min(&self, column: &Column, min: f64) -> CheckResult {
        let below = column.numeric_values().iter().filter(|v| **v < min).count();

        if below > 0 {
            CheckResult::fail(
                column.name(),
                CheckKind::ContractMin,
                format!("{} values below minimum ({})", below, min),
                Severity::Medium,
            )
        } else {
            CheckResult::pass(
                column.name(),
                CheckKind::ContractMin,
                format!("All values above minimum ({})", min),
                Severity::Low,
            )
        }
    }

    fn validate_max(&self, column: &Column, max: f64) -> CheckResult {
        let above = column.numeric_values().iter().filter(|v| **v > max).count();

        if above > 0 {
            CheckResult::fail(
                column.name(),
                CheckKind::ContractMax,
                format!("{} values above maximum ({})", above, max),
                Severity::Medium,
            )
        } else {
            CheckResult::pass(
                column.name(),
                CheckKind::ContractMax,
                format!("All values below maximum ({})", max),
                Severity::Low,
            )
        }
    }
}

/// Compiles `pattern` so that it only matches an entire value.
fn compile_full_match(pattern: &str) -> Result<Regex, regex::Error> {
    // Compile the raw pattern first so errors quote what the user wrote.
    Regex::new(pattern)?;
    Regex::new(&format!("^(?:{})$", pattern))
}
