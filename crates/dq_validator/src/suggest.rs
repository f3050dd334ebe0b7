//! Contract suggestions derived from a dataset profile.
//!
//! The suggested contract describes the profiled data as it is, so
//! evaluating the same data against it passes every contract rule.

use dq_core::{
    ColumnProfile, ColumnRules, Contract, ContractBuilder, ContractGenerator, DatasetProfile,
    Result,
};
use tracing::debug;

/// Profile statistics are rounded to 2 places; bounds are widened by this
/// much before being snapped outward to whole numbers.
const ROUNDING_SLACK: f64 = 0.005;

/// Deterministic [`ContractGenerator`] driven by profile statistics.
///
/// - `not_null` for columns without nulls
/// - `unique` for columns whose rows are all distinct
/// - `min` / `max` from numeric stats, rounded outward
/// - `row_count_min` equal to the observed row count, and `schema_match`
///
/// # Example
///
/// ```rust
/// use dq_core::ContractGenerator;
/// use dq_validator::{Column, DataSet, ProfileSuggester, Profiler};
///
/// let dataset = DataSet::new(vec![Column::numeric("id", [1, 2, 3])]).unwrap();
/// let profile = Profiler::new().profile(&dataset);
///
/// let contract = ProfileSuggester::new().generate(&profile).unwrap();
/// let id = contract.rules_for("id").unwrap();
///
/// assert!(id.not_null && id.unique);
/// assert_eq!(contract.dataset_checks.row_count_min, Some(3));
/// ```
#[derive(Debug, Clone)]
pub struct ProfileSuggester {
    bounds: bool,
    row_count: bool,
}

impl Default for ProfileSuggester {
    fn default() -> Self {
        Self {
            bounds: true,
            row_count: true,
        }
    }
}

impl ProfileSuggester {
    /// Creates a suggester with every rule family enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables `min`/`max` suggestions.
    pub fn with_bounds(mut self, enabled: bool) -> Self {
        self.bounds = enabled;
        self
    }

    /// Enables or disables the `row_count_min` suggestion.
    pub fn with_row_count(mut self, enabled: bool) -> Self {
        self.row_count = enabled;
        self
    }

    /// Suggests rules for one column.
    pub fn suggest_column(&self, profile: &ColumnProfile) -> ColumnRules {
        let mut rules = ColumnRules {
            not_null: profile.has_no_nulls(),
            unique: profile.all_distinct(),
            ..ColumnRules::default()
        };

        if self.bounds {
            if let Some(stats) = &profile.numeric_stats {
                rules.min = Some((stats.min - ROUNDING_SLACK).floor());
                rules.max = Some((stats.max + ROUNDING_SLACK).ceil());
            }
        }

        rules
    }
}

impl ContractGenerator for ProfileSuggester {
    fn generate(&self, profile: &DatasetProfile) -> Result<Contract> {
        let mut builder = ContractBuilder::new()
            .schema_match(true)
            .columns(
                profile
                    .columns
                    .iter()
                    .map(|(name, column)| (name.as_str(), self.suggest_column(column))),
            );

        if self.row_count && profile.row_count > 0 {
            builder = builder.row_count_min(profile.row_count as u64);
        }

        let contract = builder.build();
        debug!(
            generator = self.name(),
            columns = contract.column_checks.len(),
            "Suggested contract"
        );
        Ok(contract)
    }

    fn name(&self) -> &str {
        "profile-suggester"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Column, DataSet, DataValidator, Profiler};
    use dq_core::{CheckKind, ColumnType, NumericStats};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_suggest_column_rules() {
        let profile = ColumnProfile {
            dtype: ColumnType::Numeric,
            null_ratio: 0.0,
            unique_ratio: 0.5,
            numeric_stats: Some(NumericStats {
                min: 0.01,
                max: 99.99,
                mean: 50.0,
                std_dev: Some(10.0),
            }),
            sample_values: None,
            counts: None,
        };

        let rules = ProfileSuggester::new().suggest_column(&profile);
        assert_eq!(
            rules,
            ColumnRules {
                not_null: true,
                unique: false,
                regex: None,
                min: Some(0.0),
                max: Some(100.0),
            }
        );

        let rules = ProfileSuggester::new().with_bounds(false).suggest_column(&profile);
        assert_eq!(rules.min, None);
    }

    #[test]
    fn test_suggested_contract_accepts_profiled_data() {
        let dataset = DataSet::new(vec![
            Column::numeric("id", [1, 2, 3, 4]),
            Column::numeric("price", [Some(0.004), Some(10.5), None, Some(100.004)]),
            Column::string("code", ["a", "b", "a", "c"]),
        ])
        .unwrap();

        let profile = Profiler::new().with_seed(3).profile(&dataset);
        let contract = ProfileSuggester::new().generate(&profile).unwrap();

        assert_eq!(contract.dataset_checks.row_count_min, Some(4));
        assert!(contract.dataset_checks.schema_match);
        assert!(!contract.rules_for("price").unwrap().not_null);
        assert!(!contract.rules_for("code").unwrap().unique);

        let results = DataValidator::new().validate(&dataset, &contract);
        let contract_failures: Vec<_> = results
            .iter()
            .filter(|r| r.is_failure() && !matches!(r.check, CheckKind::Null | CheckKind::Uniqueness))
            .collect();
        assert!(contract_failures.is_empty(), "{:?}", contract_failures);
    }

    #[test]
    fn test_single_null_or_duplicate_in_large_column_is_respected() {
        let ids = (0..20_000i64).map(Some).chain([None]);
        let codes = (0..20_000i64).map(|i| format!("c{}", i)).chain(["c0".to_string()]);
        let dataset = DataSet::new(vec![
            Column::numeric("id", ids.collect::<Vec<_>>()),
            Column::string("code", codes.collect::<Vec<_>>()),
        ])
        .unwrap();

        let profile = Profiler::new().with_seed(1).profile(&dataset);
        assert_eq!(profile.column("id").unwrap().null_ratio, 0.0);
        assert_eq!(profile.column("code").unwrap().unique_ratio, 1.0);

        let contract = ProfileSuggester::new().generate(&profile).unwrap();
        let id = contract.rules_for("id").unwrap();
        let code = contract.rules_for("code").unwrap();
        assert!(!id.not_null);
        assert!(!id.unique);
        assert!(code.not_null);
        assert!(!code.unique);

        let results = DataValidator::new().validate(&dataset, &contract);
        let contract_failures: Vec<_> = results
            .iter()
            .filter(|r| r.is_failure() && !matches!(r.check, CheckKind::Null | CheckKind::Uniqueness))
            .collect();
        assert!(contract_failures.is_empty(), "{:?}", contract_failures);
    }

    #[test]
    fn test_empty_profile_suggests_schema_only() {
        let contract = ProfileSuggester::new()
            .generate(&DatasetProfile::default())
            .unwrap();

        assert!(contract.column_checks.is_empty());
        assert_eq!(contract.dataset_checks.row_count_min, None);
        assert!(contract.dataset_checks.schema_match);
    }
}
