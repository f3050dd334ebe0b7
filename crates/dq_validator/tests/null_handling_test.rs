//! Tests to verify correct handling of null values across all components.
//!
//! Null values are handled consistently:
//! - The built-in Null Check and the `not_null` rule count them
//! - Regex and bound rules skip them
//! - Nulls count against uniqueness (the denominator is the row count)
//! - The profiler and the anomaly scanner ignore them in statistics

use dq_core::{CheckKind, ColumnRulesBuilder, ColumnType, ContractBuilder, Status};
use dq_validator::{AnomalyScanner, Column, DataSet, DataValidator, DataValue, Profiler};

#[test]
fn test_null_fails_not_null_rule() {
    let contract = ContractBuilder::new()
        .column("id", ColumnRulesBuilder::new().not_null().build())
        .build();
    let dataset = DataSet::new(vec![Column::string("id", [Some("a"), None])]).unwrap();

    let results = DataValidator::new().validate(&dataset, &contract);

    let not_null = results
        .iter()
        .find(|r| r.check == CheckKind::ContractNotNull)
        .expect("not_null rule should report the null");
    assert_eq!(not_null.status, Status::Fail);
    assert!(
        not_null.message.contains("nulls found"),
        "Message should mention nulls: {}",
        not_null.message
    );
}

#[test]
fn test_null_without_rule_only_fails_builtin_check() {
    let dataset = DataSet::new(vec![Column::string("id", [Some("a"), None])]).unwrap();

    let results = DataValidator::new().validate(&dataset, &ContractBuilder::new().build());

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].check, CheckKind::Null);
    assert_eq!(results[0].status, Status::Fail);
}

#[test]
fn test_null_skips_regex_and_bounds() {
    let contract = ContractBuilder::new()
        .column("code", ColumnRulesBuilder::new().regex(r"[A-Z]+").build())
        .column("score", ColumnRulesBuilder::new().range(0.0, 10.0).build())
        .build();
    let dataset = DataSet::new(vec![
        Column::string("code", [Some("AB"), None, Some("CD")]),
        Column::numeric("score", [Some(1.0), None, Some(9.5)]),
    ])
    .unwrap();

    let results = DataValidator::new().validate(&dataset, &contract);

    let rule_results: Vec<_> = results
        .iter()
        .filter(|r| {
            matches!(
                r.check,
                CheckKind::ContractRegex | CheckKind::ContractMin | CheckKind::ContractMax
            )
        })
        .collect();
    assert_eq!(rule_results.len(), 3);
    assert!(
        rule_results.iter().all(|r| r.status == Status::Pass),
        "Nulls should not fail value rules: {:?}",
        rule_results
    );
}

#[test]
fn test_nulls_count_against_unique_rule() {
    let contract = ContractBuilder::new()
        .column("email", ColumnRulesBuilder::new().unique().build())
        .build();
    let dataset = DataSet::new(vec![Column::string("email", [Some("a@x.io"), Some("b@x.io"), None])])
        .unwrap();

    let results = DataValidator::new().validate(&dataset, &contract);

    let unique = results
        .iter()
        .find(|r| r.check == CheckKind::ContractUnique)
        .expect("distinct values below row count should fail");
    assert_eq!(unique.message, "Contract failed: Only 66.67% unique values");
}

#[test]
fn test_all_null_column() {
    let dataset = DataSet::new(vec![Column::infer(
        "notes",
        vec![DataValue::Null, DataValue::Null, DataValue::Null],
    )])
    .unwrap();

    let profile = Profiler::new().profile(&dataset);
    let notes = profile.column("notes").unwrap();
    assert_eq!(notes.dtype, ColumnType::Other);
    assert_eq!(notes.null_ratio, 1.0);
    assert_eq!(notes.unique_ratio, 0.0);
    assert_eq!(notes.sample_values, Some(Vec::new()));

    let results = DataValidator::new().validate(&dataset, &ContractBuilder::new().build());
    assert_eq!(results[0].message, "100.00% of values are null");
    assert_eq!(results[1].message, "0.00% unique values");

    assert!(AnomalyScanner::default().scan(&dataset).is_empty());
}

#[test]
fn test_nulls_ignored_by_numeric_stats() {
    let dataset = DataSet::new(vec![Column::numeric(
        "amount",
        [Some(1.0), None, Some(3.0), None],
    )])
    .unwrap();

    let profile = Profiler::new().profile(&dataset);
    let stats = profile
        .column("amount")
        .and_then(|c| c.numeric_stats.clone())
        .unwrap();

    assert_eq!(stats.mean, 2.0);
    assert_eq!(stats.min, 1.0);
    assert_eq!(stats.max, 3.0);
    assert_eq!(stats.std_dev, Some(1.41));
}
