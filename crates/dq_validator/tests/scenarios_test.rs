//! Integration tests for the evaluation pipeline.
//!
//! End-to-end scenarios running the profiler, the rule evaluator and the
//! anomaly scanner over small but realistic datasets.

use dq_core::{
    CheckKind, ColumnRulesBuilder, Contract, ContractBuilder, DATASET_COLUMN, Severity, Status,
    ValidationContext,
};
use dq_validator::{
    AnomalyScanner, Column, DataSet, DataValidator, DataValue, IncidentKind, IncidentLog,
    Profiler, extract_failed_columns,
};
use pretty_assertions::assert_eq;

fn orders_dataset(rows: usize) -> DataSet {
    let ids: Vec<i64> = (1..=rows as i64).collect();
    let codes: Vec<String> = (0..rows).map(|i| format!("OR{:02}", i % 100)).collect();
    let amounts: Vec<Option<f64>> = (0..rows)
        .map(|i| if i % 10 == 9 { None } else { Some(10.0 + i as f64) })
        .collect();

    DataSet::new(vec![
        Column::numeric("order_id", ids),
        Column::string("code", codes),
        Column::numeric("amount", amounts),
    ])
    .unwrap()
}

fn orders_contract() -> Contract {
    ContractBuilder::new()
        .row_count_min(100)
        .schema_match(true)
        .column("order_id", ColumnRulesBuilder::new().not_null().unique().build())
        .column("code", ColumnRulesBuilder::new().regex(r"^[A-Z]{2}\d{2}$").build())
        .column("amount", ColumnRulesBuilder::new().not_null().range(0.0, 1000.0).build())
        .build()
}

#[test]
fn test_duplicate_ids_fail_unique_rule() {
    let dataset = DataSet::new(vec![Column::numeric("id", [1, 2, 3, 3])]).unwrap();
    let contract = ContractBuilder::new()
        .column("id", ColumnRulesBuilder::new().unique().build())
        .build();

    let results = DataValidator::new().validate(&dataset, &contract);

    let unique = results
        .iter()
        .find(|r| r.check == CheckKind::ContractUnique)
        .unwrap();
    assert_eq!(unique.column, "id");
    assert_eq!(unique.status, Status::Fail);
    assert_eq!(unique.message, "Contract failed: Only 75.00% unique values");
}

#[test]
fn test_one_code_out_of_three_mismatches_pattern() {
    let dataset = DataSet::new(vec![Column::string("code", ["AB12", "AB13", "xx99"])]).unwrap();
    let contract = ContractBuilder::new()
        .column("code", ColumnRulesBuilder::new().regex(r"^[A-Z]{2}\d{2}$").build())
        .build();

    let results = DataValidator::new().validate(&dataset, &contract);

    let regex = results
        .iter()
        .find(|r| r.check == CheckKind::ContractRegex)
        .unwrap();
    assert_eq!(regex.status, Status::Fail);
    assert_eq!(regex.severity, Severity::Medium);
    assert_eq!(
        regex.message,
        r"33.33% values do not match pattern `^[A-Z]{2}\d{2}$`"
    );
}

#[test]
fn test_row_count_below_minimum() {
    let dataset = orders_dataset(50);
    let results = DataValidator::new().validate(&dataset, &orders_contract());

    let row_count: Vec<_> = results
        .iter()
        .filter(|r| r.column == DATASET_COLUMN && r.check == CheckKind::RowCountMin)
        .collect();
    assert_eq!(row_count.len(), 1);
    assert_eq!(row_count[0].status, Status::Fail);
    assert_eq!(row_count[0].message, "50 rows found. Minimum expected: 100.");
}

#[test]
fn test_empty_dataset_early_exit() {
    let validator = DataValidator::new();

    assert!(validator.validate(&DataSet::empty(), &Contract::empty()).is_empty());

    let profile = Profiler::new().profile(&DataSet::empty());
    assert_eq!(profile.row_count, 0);
    assert!(profile.columns.is_empty());

    let no_rows = DataSet::new(vec![
        Column::numeric("amount", Vec::<f64>::new()),
        Column::string("code", Vec::<String>::new()),
    ])
    .unwrap();
    assert!(validator.validate(&no_rows, &Contract::empty()).is_empty());

    let profile = Profiler::new().profile(&no_rows);
    assert_eq!(profile.columns.len(), 2);
    for column in profile.columns.values() {
        assert_eq!(column.null_ratio, 0.0);
        assert_eq!(column.unique_ratio, 0.0);
    }
}

#[test]
fn test_extreme_age_is_flagged_with_relaxed_threshold() {
    let dataset = DataSet::new(vec![Column::numeric("age", [20, 21, 19, 22, 1000])]).unwrap();
    let context = ValidationContext::new().with_z_threshold(1.5);

    let findings = AnomalyScanner::from_context(&context).unwrap().scan(&dataset);

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].column, "age");
    assert_eq!(findings[0].outlier_count, 1);
    assert_eq!(findings[0].total_count, 5);
    assert_eq!(findings[0].severity, Severity::High);
}

#[test]
fn test_full_contract_run() {
    let dataset = orders_dataset(120);
    let results = DataValidator::new().validate(&dataset, &orders_contract());

    let failing: Vec<(&str, CheckKind)> = results
        .iter()
        .filter(|r| r.is_failure())
        .map(|r| (r.column.as_str(), r.check))
        .collect();
    assert_eq!(
        failing,
        vec![
            ("code", CheckKind::Uniqueness),
            ("amount", CheckKind::Null),
            ("amount", CheckKind::Uniqueness),
            ("amount", CheckKind::ContractNotNull),
        ]
    );

    assert_eq!(extract_failed_columns(&results), vec!["amount", "code"]);

    let last = results.last().unwrap();
    assert_eq!(last.check, CheckKind::SchemaMatch);
    assert_eq!(last.status, Status::Pass);
}

#[test]
fn test_evaluation_is_idempotent() {
    let dataset = orders_dataset(40);
    let contract = orders_contract();
    let validator = DataValidator::new();

    assert_eq!(
        validator.validate(&dataset, &contract),
        validator.validate(&dataset, &contract)
    );
    assert_eq!(
        AnomalyScanner::default().scan(&dataset),
        AnomalyScanner::default().scan(&dataset)
    );
}

#[test]
fn test_every_column_gets_builtin_checks_first() {
    let dataset = orders_dataset(30);
    let results = DataValidator::new().validate(&dataset, &orders_contract());

    for name in dataset.column_names() {
        let checks: Vec<CheckKind> = results
            .iter()
            .filter(|r| r.column == name)
            .map(|r| r.check)
            .collect();
        assert_eq!(&checks[..2], &[CheckKind::Null, CheckKind::Uniqueness]);
    }
}

#[test]
fn test_profile_invariants() {
    let dataset = orders_dataset(57);
    let profile = Profiler::new().with_seed(11).profile(&dataset);

    assert_eq!(profile.row_count, 57);
    assert_eq!(profile.column_count, 3);
    for column in profile.columns.values() {
        assert!((0.0..=1.0).contains(&column.null_ratio));
        assert!((0.0..=1.0).contains(&column.unique_ratio));
        assert!(column.null_ratio + column.unique_ratio <= 1.0 + 1e-4);
        if let Some(stats) = &column.numeric_stats {
            assert!(stats.min <= stats.mean && stats.mean <= stats.max);
        }
    }

    let code = profile.column("code").unwrap();
    assert_eq!(code.sample_values.as_ref().unwrap().len(), 5);
}

#[test]
fn test_highlight_failures_after_run() {
    let dataset = orders_dataset(20);
    let results = DataValidator::new().validate(&dataset, &orders_contract());

    let failed = extract_failed_columns(&results);
    let highlighted = dataset.highlight_failures(&failed);

    let amount = highlighted.column("amount").unwrap();
    assert_eq!(amount.values()[9], DataValue::String("null ❗".to_string()));
    assert_eq!(highlighted.column("order_id"), dataset.column("order_id"));
}

#[test]
fn test_incidents_from_a_failed_run() {
    let dataset = orders_dataset(50);
    let results = DataValidator::new().validate(&dataset, &orders_contract());

    let mut log = IncidentLog::new();
    log.record_results(&results);

    let kinds: Vec<(IncidentKind, &str)> = log
        .entries_newest_first()
        .map(|i| (i.kind, i.column.as_str()))
        .collect();
    assert_eq!(
        kinds,
        vec![
            (IncidentKind::DatasetCheck, "row_count"),
            (IncidentKind::ColumnCheck, "amount"),
        ]
    );
}
