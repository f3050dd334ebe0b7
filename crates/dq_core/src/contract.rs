//! Data contract types.
//!
//! A contract is a declarative set of dataset-level and column-level rules.
//! Contracts are authored externally (by hand, by the profile-based suggester or
//! by an AI-assistance collaborator) and are read-only input to an evaluation pass.
//!
//! Deserialization is lenient: unknown keys are ignored and missing sections
//! default to empty, so a contract produced by a generator that only knows a
//! subset of the rules still loads.

use crate::ContractError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A data contract: dataset-level checks plus per-column rules.
///
/// # Example
///
/// ```rust
/// use dq_core::Contract;
///
/// let json = r#"{
///     "dataset_checks": { "row_count_min": 100 },
///     "column_checks": { "id": { "not_null": true, "unique": true } }
/// }"#;
///
/// let contract: Contract = serde_json::from_str(json).unwrap();
/// assert_eq!(contract.dataset_checks.row_count_min, Some(100));
/// assert!(contract.rules_for("id").is_some_and(|r| r.unique));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    /// Checks evaluated once against the whole dataset
    #[serde(default)]
    pub dataset_checks: DatasetChecks,

    /// Rules keyed by column name
    #[serde(default)]
    pub column_checks: BTreeMap<String, ColumnRules>,
}

/// Dataset-level checks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetChecks {
    /// Minimum number of rows the dataset must contain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_count_min: Option<u64>,

    /// Whether the dataset columns must match the columns named in `column_checks`
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub schema_match: bool,
}

/// Rules applied to a single column.
///
/// Rules are evaluated in a fixed order: not-null, unique, regex, min, max.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnRules {
    /// Column must not contain nulls
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub not_null: bool,

    /// Every row must hold a distinct value
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub unique: bool,

    /// Full-match regular expression applied to the string form of each value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,

    /// Inclusive lower bound for numeric columns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    /// Inclusive upper bound for numeric columns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl Contract {
    /// Creates an empty contract.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if the contract defines no checks at all.
    pub fn is_empty(&self) -> bool {
        self.dataset_checks.is_empty() && self.column_checks.is_empty()
    }

    /// Returns the rules declared for a column, if any.
    pub fn rules_for(&self, column: &str) -> Option<&ColumnRules> {
        self.column_checks.get(column)
    }

    /// Names of the columns the contract declares rules for.
    pub fn declared_columns(&self) -> impl Iterator<Item = &str> {
        self.column_checks.keys().map(String::as_str)
    }

    /// Checks the contract definition itself, without looking at any data.
    ///
    /// The evaluator tolerates every problem reported here (a malformed regex,
    /// for instance, becomes a failed check result). This pass exists for
    /// callers that want to reject a bad contract before running it.
    pub fn validate_definition(&self) -> Vec<ContractError> {
        let mut errors = Vec::new();

        for (column, rules) in &self.column_checks {
            for (rule, bound) in [("min", rules.min), ("max", rules.max)] {
                if let Some(value) = bound {
                    if !value.is_finite() {
                        errors.push(ContractError::NonFiniteBound {
                            column: column.clone(),
                            rule: rule.to_string(),
                        });
                    }
                }
            }

            if let (Some(min), Some(max)) = (rules.min, rules.max) {
                if min > max {
                    errors.push(ContractError::InvalidBounds {
                        column: column.clone(),
                        min,
                        max,
                    });
                }
            }

            match rules.regex.as_deref() {
                Some("") => errors.push(ContractError::EmptyPattern(column.clone())),
                Some(pattern) => {
                    if let Err(e) = Regex::new(pattern) {
                        errors.push(ContractError::InvalidPattern {
                            column: column.clone(),
                            error: e.to_string(),
                        });
                    }
                }
                None => {}
            }
        }

        errors
    }
}

impl DatasetChecks {
    /// Returns true if no dataset-level check is configured.
    pub fn is_empty(&self) -> bool {
        self.row_count_min.is_none() && !self.schema_match
    }
}

impl ColumnRules {
    /// Returns true if no rule is set.
    pub fn is_empty(&self) -> bool {
        !self.not_null
            && !self.unique
            && self.regex.is_none()
            && self.min.is_none()
            && self.max.is_none()
    }

    /// The regex pattern, treating an empty string as absent.
    pub fn pattern(&self) -> Option<&str> {
        self.regex.as_deref().filter(|p| !p.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unknown_keys_are_ignored() {
        let json = r#"{
            "dataset_checks": { "row_count_min": 10, "freshness": "1h" },
            "column_checks": {
                "email": { "regex": "^.+@.+$", "type": "string", "max_length": 40 }
            },
            "owner": "analytics"
        }"#;

        let contract: Contract = serde_json::from_str(json).unwrap();
        assert_eq!(contract.dataset_checks.row_count_min, Some(10));
        assert_eq!(
            contract.rules_for("email").and_then(|r| r.pattern()),
            Some("^.+@.+$")
        );
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let contract: Contract = serde_json::from_str("{}").unwrap();
        assert!(contract.is_empty());
        assert_eq!(contract, Contract::empty());

        let contract: Contract =
            serde_json::from_str(r#"{"column_checks": {"id": {"unique": true}}}"#).unwrap();
        assert!(contract.dataset_checks.is_empty());
        assert!(!contract.is_empty());
    }

    #[test]
    fn test_false_rules_are_not_serialized() {
        let mut contract = Contract::empty();
        contract.column_checks.insert(
            "age".to_string(),
            ColumnRules {
                min: Some(0.0),
                ..Default::default()
            },
        );

        let json = serde_json::to_value(&contract).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "dataset_checks": {},
                "column_checks": { "age": { "min": 0.0 } }
            })
        );
    }

    #[test]
    fn test_empty_regex_is_treated_as_absent() {
        let rules = ColumnRules {
            regex: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(rules.pattern(), None);
    }

    #[test]
    fn test_validate_definition_reports_problems() {
        let mut contract = Contract::empty();
        contract.column_checks.insert(
            "score".to_string(),
            ColumnRules {
                min: Some(10.0),
                max: Some(1.0),
                ..Default::default()
            },
        );
        contract.column_checks.insert(
            "code".to_string(),
            ColumnRules {
                regex: Some("[unclosed".to_string()),
                ..Default::default()
            },
        );
        contract.column_checks.insert(
            "ratio".to_string(),
            ColumnRules {
                max: Some(f64::INFINITY),
                ..Default::default()
            },
        );

        let errors = contract.validate_definition();
        assert_eq!(errors.len(), 3);
        assert!(errors
            .iter()
            .any(|e| matches!(e, ContractError::InvalidBounds { column, .. } if column == "score")));
        assert!(errors
            .iter()
            .any(|e| matches!(e, ContractError::InvalidPattern { column, .. } if column == "code")));
        assert!(errors
            .iter()
            .any(|e| matches!(e, ContractError::NonFiniteBound { rule, .. } if rule == "max")));
    }

    #[test]
    fn test_validate_definition_accepts_well_formed_contract() {
        let json = r#"{
            "dataset_checks": { "row_count_min": 1, "schema_match": true },
            "column_checks": { "code": { "regex": "^[A-Z]{2}\\d{2}$", "min": 0, "max": 10 } }
        }"#;
        let contract: Contract = serde_json::from_str(json).unwrap();
        assert!(contract.validate_definition().is_empty());
    }
}
