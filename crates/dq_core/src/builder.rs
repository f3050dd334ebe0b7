//! Builder pattern for creating data contracts.
//!
//! This module provides ergonomic builders for constructing contracts
//! and their column rules with a fluent API.

use crate::{ColumnRules, Contract, DatasetChecks};
use std::collections::BTreeMap;

/// Builder for creating a `Contract`.
///
/// # Example
///
/// ```rust
/// use dq_core::{ColumnRulesBuilder, ContractBuilder};
///
/// let contract = ContractBuilder::new()
///     .row_count_min(1000)
///     .column("age", ColumnRulesBuilder::new().range(0.0, 120.0).build())
///     .build();
///
/// assert_eq!(contract.dataset_checks.row_count_min, Some(1000));
/// ```
#[derive(Debug, Default)]
pub struct ContractBuilder {
    dataset_checks: DatasetChecks,
    column_checks: BTreeMap<String, ColumnRules>,
}

impl ContractBuilder {
    /// Creates a new, empty contract builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum row count.
    pub fn row_count_min(mut self, min: u64) -> Self {
        self.dataset_checks.row_count_min = Some(min);
        self
    }

    /// Enables or disables the schema match check.
    pub fn schema_match(mut self, enabled: bool) -> Self {
        self.dataset_checks.schema_match = enabled;
        self
    }

    /// Sets the rules for a column, replacing any previous rules for it.
    pub fn column(mut self, name: impl Into<String>, rules: ColumnRules) -> Self {
        self.column_checks.insert(name.into(), rules);
        self
    }

    /// Sets rules for several columns.
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = (S, ColumnRules)>,
        S: Into<String>,
    {
        self.column_checks
            .extend(columns.into_iter().map(|(name, rules)| (name.into(), rules)));
        self
    }

    /// Builds the contract.
    pub fn build(self) -> Contract {
        Contract {
            dataset_checks: self.dataset_checks,
            column_checks: self.column_checks,
        }
    }
}

/// Builder for creating `ColumnRules`.
///
/// # Example
///
/// ```rust
/// use dq_core::ColumnRulesBuilder;
///
/// let rules = ColumnRulesBuilder::new()
///     .not_null()
///     .regex(r"^[A-Z]{2}\d{4}$")
///     .build();
///
/// assert!(rules.not_null);
/// assert!(!rules.unique);
/// ```
#[derive(Debug, Default)]
pub struct ColumnRulesBuilder {
    rules: ColumnRules,
}

impl ColumnRulesBuilder {
    /// Creates a builder with no rules set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires the column to contain no nulls.
    pub fn not_null(mut self) -> Self {
        self.rules.not_null = true;
        self
    }

    /// Requires every row to hold a distinct value.
    pub fn unique(mut self) -> Self {
        self.rules.unique = true;
        self
    }

    /// Sets the full-match regex pattern.
    pub fn regex(mut self, pattern: impl Into<String>) -> Self {
        self.rules.regex = Some(pattern.into());
        self
    }

    /// Sets the inclusive lower bound.
    pub fn min(mut self, min: f64) -> Self {
        self.rules.min = Some(min);
        self
    }

    /// Sets the inclusive upper bound.
    pub fn max(mut self, max: f64) -> Self {
        self.rules.max = Some(max);
        self
    }

    /// Sets both bounds.
    pub fn range(self, min: f64, max: f64) -> Self {
        self.min(min).max(max)
    }

    /// Builds the column rules.
    pub fn build(self) -> ColumnRules {
        self.rules
    }
}
