//! Result and profile types produced by an evaluation pass.
//!
//! Every type here is a plain value object. Field and variant names are part
//! of the wire format consumed by report and UI layers, so they are pinned
//! with serde attributes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Column name used for dataset-level check results.
pub const DATASET_COLUMN: &str = "_dataset";

/// Outcome of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    /// The check passed
    Pass,
    /// The check failed
    Fail,
}

impl Status {
    /// Maps a boolean outcome to a status.
    pub fn from_passed(passed: bool) -> Self {
        if passed { Status::Pass } else { Status::Fail }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Pass => write!(f, "PASS"),
            Status::Fail => write!(f, "FAIL"),
        }
    }
}

/// Qualitative impact ranking attached to results and findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Low impact
    Low,
    /// Medium impact
    Medium,
    /// High impact
    High,
}

impl Severity {
    /// Sort rank, most severe first (high = 0, medium = 1, low = 2).
    pub fn rank(self) -> u8 {
        match self {
            Severity::High => 0,
            Severity::Medium => 1,
            Severity::Low => 2,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
        }
    }
}

/// The closed set of checks the rule evaluator emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckKind {
    /// Built-in null ratio check
    #[serde(rename = "Null Check")]
    Null,
    /// Built-in uniqueness ratio check
    #[serde(rename = "Uniqueness Check")]
    Uniqueness,
    /// Contract `not_null` rule
    #[serde(rename = "Contract - Not Null")]
    ContractNotNull,
    /// Contract `unique` rule
    #[serde(rename = "Contract - Unique")]
    ContractUnique,
    /// Contract `regex` rule
    #[serde(rename = "Contract - Regex")]
    ContractRegex,
    /// Contract `min` rule
    #[serde(rename = "Contract - Min Value")]
    ContractMin,
    /// Contract `max` rule
    #[serde(rename = "Contract - Max Value")]
    ContractMax,
    /// Dataset `row_count_min` check
    #[serde(rename = "Dataset: Row Count Minimum")]
    RowCountMin,
    /// Dataset `schema_match` check
    #[serde(rename = "Dataset: Schema Match")]
    SchemaMatch,
}

impl CheckKind {
    /// Human-readable check name.
    pub fn name(self) -> &'static str {
        match self {
            CheckKind::Null => "Null Check",
            CheckKind::Uniqueness => "Uniqueness Check",
            CheckKind::ContractNotNull => "Contract - Not Null",
            CheckKind::ContractUnique => "Contract - Unique",
            CheckKind::ContractRegex => "Contract - Regex",
            CheckKind::ContractMin => "Contract - Min Value",
            CheckKind::ContractMax => "Contract - Max Value",
            CheckKind::RowCountMin => "Dataset: Row Count Minimum",
            CheckKind::SchemaMatch => "Dataset: Schema Match",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of evaluating one rule against one column or the whole dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Column name, or [`DATASET_COLUMN`] for dataset-level checks
    pub column: String,
    /// Which check produced this result
    pub check: CheckKind,
    /// PASS or FAIL
    pub status: Status,
    /// Human-readable explanation
    pub message: String,
    /// Impact ranking
    pub severity: Severity,
}

impl CheckResult {
    /// Creates a new check result.
    pub fn new(
        column: impl Into<String>,
        check: CheckKind,
        status: Status,
        message: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            column: column.into(),
            check,
            status,
            message: message.into(),
            severity,
        }
    }

    /// Creates a passing result.
    pub fn pass(
        column: impl Into<String>,
        check: CheckKind,
        message: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self::new(column, check, Status::Pass, message, severity)
    }

    /// Creates a failing result.
    pub fn fail(
        column: impl Into<String>,
        check: CheckKind,
        message: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self::new(column, check, Status::Fail, message, severity)
    }

    /// Returns true if the check failed.
    pub fn is_failure(&self) -> bool {
        self.status == Status::Fail
    }
}

/// One-line rendering used by text reports.
impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let icon = match self.status {
            Status::Pass => "✅",
            Status::Fail => "❌",
        };
        write!(f, "{} **{}**: {}", icon, self.check, self.message)
    }
}

/// Pass/fail counts over a result sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    /// Number of results
    pub total: usize,
    /// Number of PASS results
    pub passed: usize,
    /// Number of FAIL results
    pub failed: usize,
}

impl ValidationSummary {
    /// Counts the results.
    pub fn from_results(results: &[CheckResult]) -> Self {
        let failed = results.iter().filter(|r| r.is_failure()).count();
        Self {
            total: results.len(),
            passed: results.len() - failed,
            failed,
        }
    }

    /// Returns true if nothing failed.
    pub fn passed(&self) -> bool {
        self.failed == 0
    }
}

/// Results of one evaluation pass together with their counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Check results in evaluation order
    pub results: Vec<CheckResult>,
    /// Pass/fail counts
    pub summary: ValidationSummary,
    /// Number of rows evaluated
    pub rows_evaluated: usize,
    /// Wall-clock duration of the pass
    pub duration_ms: u64,
}

impl ValidationReport {
    /// Returns true if no check failed.
    pub fn passed(&self) -> bool {
        self.summary.passed()
    }

    /// Iterates over the failed results.
    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(|r| r.is_failure())
    }

    /// Distinct failed column names, sorted.
    pub fn failed_columns(&self) -> Vec<String> {
        extract_failed_columns(&self.results)
    }
}

/// Returns the distinct column names of all FAIL results, sorted ascending.
///
/// Dataset-level failures contribute [`DATASET_COLUMN`].
pub fn extract_failed_columns(results: &[CheckResult]) -> Vec<String> {
    results
        .iter()
        .filter(|r| r.is_failure())
        .map(|r| r.column.clone())
        .collect::<std::collections::BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// A statistically detected outlier condition in one numeric column.
///
/// Invariants: `outlier_count <= total_count` and
/// `bounds.0 <= mean <= bounds.1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyFinding {
    /// Column name
    pub column: String,
    /// Human-readable description
    pub issue: String,
    /// Number of values outside the bounds
    pub outlier_count: usize,
    /// Number of non-null values inspected
    pub total_count: usize,
    /// Impact ranking derived from the outlier ratio
    pub severity: Severity,
    /// Mean of the non-null values
    pub mean: f64,
    /// Sample standard deviation of the non-null values
    pub std_dev: f64,
    /// `(lower, upper)` bounds; values strictly outside are outliers
    pub bounds: (f64, f64),
}

impl AnomalyFinding {
    /// Proportion of inspected values that are outliers.
    pub fn outlier_ratio(&self) -> f64 {
        if self.total_count == 0 {
            0.0
        } else {
            self.outlier_count as f64 / self.total_count as f64
        }
    }
}

/// Type tag of a dataset column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Integers and floats
    Numeric,
    /// Text
    String,
    /// Anything else (booleans, mixed content, all-null)
    Other,
}

impl ColumnType {
    /// Returns true for numeric columns.
    pub fn is_numeric(self) -> bool {
        self == ColumnType::Numeric
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Numeric => write!(f, "numeric"),
            ColumnType::String => write!(f, "string"),
            ColumnType::Other => write!(f, "other"),
        }
    }
}

/// Descriptive statistics of a numeric column, rounded to 2 decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericStats {
    /// Smallest non-null value
    pub min: f64,
    /// Largest non-null value
    pub max: f64,
    /// Mean of the non-null values
    pub mean: f64,
    /// Sample standard deviation; absent with fewer than 2 non-null values
    pub std_dev: Option<f64>,
}

/// Exact counts behind a column profile's ratios.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValueCounts {
    /// Number of rows
    pub rows: usize,
    /// Number of null values
    pub nulls: usize,
    /// Number of distinct non-null values
    pub distinct: usize,
}

/// Profile of a single column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnProfile {
    /// Declared or inferred column type
    pub dtype: ColumnType,
    /// Share of null values, rounded to 4 places
    pub null_ratio: f64,
    /// Distinct non-null values over row count, rounded to 4 places
    pub unique_ratio: f64,
    /// Present for numeric columns with at least one non-null value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numeric_stats: Option<NumericStats>,
    /// Present for string columns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_values: Option<Vec<String>>,
    /// Exact counts; not part of the wire format, so absent after deserialization
    #[serde(skip)]
    pub counts: Option<ValueCounts>,
}

impl ColumnProfile {
    /// Returns true if the column holds no null value.
    ///
    /// Falls back to the rounded `null_ratio` when exact counts are absent.
    pub fn has_no_nulls(&self) -> bool {
        match self.counts {
            Some(counts) => counts.nulls == 0,
            None => self.null_ratio == 0.0,
        }
    }

    /// Returns true if every row holds a distinct non-null value.
    ///
    /// Falls back to the rounded `unique_ratio` when exact counts are absent.
    pub fn all_distinct(&self) -> bool {
        match self.counts {
            Some(counts) => counts.rows > 0 && counts.distinct == counts.rows,
            None => self.unique_ratio >= 1.0,
        }
    }
}

/// Profile of a whole dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetProfile {
    /// Number of rows
    pub row_count: usize,
    /// Number of columns
    pub column_count: usize,
    /// Column profiles keyed by column name
    pub columns: BTreeMap<String, ColumnProfile>,
}

impl DatasetProfile {
    /// Returns the profile of a column, if present.
    pub fn column(&self, name: &str) -> Option<&ColumnProfile> {
        self.columns.get(name)
    }
}
