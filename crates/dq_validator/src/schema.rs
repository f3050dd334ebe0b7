//! Dataset-level validation.
//!
//! Checks that look at the dataset as a whole rather than at one column:
//! the minimum row count and the match between declared and actual columns.

use crate::DataSet;
use dq_core::{CheckKind, CheckResult, Contract, DATASET_COLUMN, Severity, Status};
use std::collections::BTreeSet;

/// Validates the shape of a dataset against a contract.
#[derive(Debug, Default, Clone, Copy)]
pub struct SchemaValidator;

impl SchemaValidator {
    /// Creates a new schema validator.
    pub fn new() -> Self {
        Self
    }

    /// Runs the configured dataset checks: row count first, then schema match.
    pub fn validate(&self, contract: &Contract, dataset: &DataSet) -> Vec<CheckResult> {
        let checks = &contract.dataset_checks;
        let mut results = Vec::new();

        if let Some(min) = checks.row_count_min {
            results.push(self.validate_row_count(dataset, min));
        }
        if checks.schema_match {
            results.push(self.validate_schema_match(contract, dataset));
        }

        results
    }

    fn validate_row_count(&self, dataset: &DataSet, min: u64) -> CheckResult {
        let rows = dataset.len();
        let passed = rows as u64 >= min;

        dataset_result(
            CheckKind::RowCountMin,
            passed,
            format!("{} rows found. Minimum expected: {}.", rows, min),
        )
    }

    /// Compares the contract's declared columns with the dataset's columns.
    pub fn validate_schema_match(&self, contract: &Contract, dataset: &DataSet) -> CheckResult {
        let expected: BTreeSet<&str> = contract.declared_columns().collect();
        let actual: BTreeSet<&str> = dataset.column_names().into_iter().collect();

        let missing: Vec<&str> = expected.difference(&actual).copied().collect();
        let extra: Vec<&str> = actual.difference(&expected).copied().collect();

        if missing.is_empty() && extra.is_empty() {
            dataset_result(
                CheckKind::SchemaMatch,
                true,
                "Schema matches expected columns.".to_string(),
            )
        } else {
            dataset_result(
                CheckKind::SchemaMatch,
                false,
                format!("Missing: {:?} | Extra: {:?}", missing, extra),
            )
        }
    }
}

fn dataset_result(check: CheckKind, passed: bool, message: String) -> CheckResult {
    let severity = if passed { Severity::Low } else { Severity::High };
    CheckResult::new(
        DATASET_COLUMN,
        check,
        Status::from_passed(passed),
        message,
        severity,
    )
}
