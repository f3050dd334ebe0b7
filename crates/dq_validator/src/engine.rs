//! Main validation engine.
//!
//! This module provides the `DataValidator` that runs the built-in quality
//! checks, the contract's column rules and its dataset-level checks, and
//! collects every outcome as a [`CheckResult`].

use crate::{Column, ConstraintValidator, DataSet, QualityValidator, SchemaValidator};
use dq_core::{CheckResult, ColumnRules, Contract, ValidationReport, ValidationSummary};
use std::time::Instant;
use tracing::debug;

/// Rule evaluator for datasets.
///
/// Evaluation is pure: the same dataset and contract always yield the same
/// result sequence. Results are ordered column by column (dataset order),
/// each column's built-in checks before its contract rules, followed by the
/// dataset-level checks.
///
/// # Example
///
/// ```rust
/// use dq_core::{ColumnRulesBuilder, ContractBuilder};
/// use dq_validator::{Column, DataSet, DataValidator};
///
/// let contract = ContractBuilder::new()
///     .column("id", ColumnRulesBuilder::new().not_null().unique().build())
///     .build();
/// let dataset = DataSet::new(vec![Column::numeric("id", [1, 2, 3])]).unwrap();
///
/// let results = DataValidator::new().validate(&dataset, &contract);
///
/// assert_eq!(results.len(), 2);
/// assert!(results.iter().all(|r| !r.is_failure()));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct DataValidator {
    schema_validator: SchemaValidator,
    constraint_validator: ConstraintValidator,
    quality_validator: QualityValidator,
}

impl DataValidator {
    /// Creates a new data validator.
    pub fn new() -> Self {
        Self {
            schema_validator: SchemaValidator::new(),
            constraint_validator: ConstraintValidator::new(),
            quality_validator: QualityValidator::new(),
        }
    }

    /// Evaluates a dataset against a contract.
    ///
    /// A dataset with no rows yields no results at all, dataset-level
    /// checks included.
    pub fn validate(&self, dataset: &DataSet, contract: &Contract) -> Vec<CheckResult> {
        if dataset.is_empty() {
            debug!("Dataset has no rows, nothing to evaluate");
            return Vec::new();
        }

        let mut results = Vec::new();
        for column in dataset.columns() {
            results.extend(self.validate_column(column, contract.rules_for(column.name())));
        }

        results.extend(self.schema_validator.validate(contract, dataset));

        debug!(
            columns = dataset.column_count(),
            rows = dataset.len(),
            results = results.len(),
            "Evaluation finished"
        );
        results
    }

    /// Evaluates one column: built-in checks, then the rules declared for it.
    pub fn validate_column(&self, column: &Column, rules: Option<&ColumnRules>) -> Vec<CheckResult> {
        let mut results = self.quality_validator.validate(column);

        if let Some(rules) = rules {
            results.extend(self.constraint_validator.validate(column, rules));
        }

        results
    }

    /// Evaluates a dataset and wraps the results in a report with counts and timing.
    pub fn validate_with_report(&self, dataset: &DataSet, contract: &Contract) -> ValidationReport {
        let start = Instant::now();
        let results = self.validate(dataset, contract);

        ValidationReport {
            summary: ValidationSummary::from_results(&results),
            results,
            rows_evaluated: dataset.len(),
            duration_ms: start.elapsed().as_millis() as u64,
        }
    }
}
