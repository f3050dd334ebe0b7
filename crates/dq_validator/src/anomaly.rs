//! Anomaly detection for numeric columns.
//!
//! Flags columns whose share of z-score outliers exceeds a configured limit.
//! Outliers are values strictly outside `mean ± z_threshold · std_dev`, using
//! the sample standard deviation of the non-null values.

use crate::stats::{mean, percent, round_to, sample_std_dev};
use crate::{Column, DataSet, ValidationError};
use dq_core::{
    AnomalyFinding, DEFAULT_OUTLIER_PCT_LIMIT, DEFAULT_Z_THRESHOLD, Severity, ValidationContext,
    check_outlier_limit, check_z_threshold,
};
use tracing::debug;

/// Outlier ratio above which a finding is rated high.
pub const HIGH_SEVERITY_RATIO: f64 = 0.10;

/// Outlier ratio above which a finding is rated medium.
pub const MEDIUM_SEVERITY_RATIO: f64 = 0.03;

/// Scans numeric columns for outliers.
///
/// # Example
///
/// ```rust
/// use dq_validator::{AnomalyScanner, Column, DataSet};
///
/// let mut values = vec![20.0; 20];
/// values.push(1000.0);
/// let dataset = DataSet::new(vec![Column::numeric("age", values)]).unwrap();
///
/// let findings = AnomalyScanner::default().scan(&dataset);
///
/// assert_eq!(findings.len(), 1);
/// assert_eq!(findings[0].outlier_count, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnomalyScanner {
    z_threshold: f64,
    outlier_pct_limit: f64,
}

impl Default for AnomalyScanner {
    fn default() -> Self {
        Self {
            z_threshold: DEFAULT_Z_THRESHOLD,
            outlier_pct_limit: DEFAULT_OUTLIER_PCT_LIMIT,
        }
    }
}

impl AnomalyScanner {
    /// Creates a scanner, rejecting a negative or non-finite z-threshold and
    /// an outlier limit outside `[0, 1]`.
    pub fn new(z_threshold: f64, outlier_pct_limit: f64) -> Result<Self, ValidationError> {
        check_z_threshold(z_threshold)?;
        check_outlier_limit(outlier_pct_limit)?;
        Ok(Self {
            z_threshold,
            outlier_pct_limit,
        })
    }

    /// Creates a scanner from a validation context.
    pub fn from_context(context: &ValidationContext) -> Result<Self, ValidationError> {
        Self::new(context.z_threshold, context.outlier_pct_limit)
    }

    /// The z-score threshold.
    pub fn z_threshold(&self) -> f64 {
        self.z_threshold
    }

    /// The minimum outlier proportion for a column to be flagged.
    pub fn outlier_pct_limit(&self) -> f64 {
        self.outlier_pct_limit
    }

    /// Scans every numeric column.
    ///
    /// Findings are sorted by severity (high first), then by outlier count
    /// descending. Ties keep dataset column order.
    pub fn scan(&self, dataset: &DataSet) -> Vec<AnomalyFinding> {
        let mut findings: Vec<AnomalyFinding> = dataset
            .columns()
            .filter(|c| c.is_numeric())
            .filter_map(|c| self.scan_column(c))
            .collect();

        findings.sort_by(|a, b| {
            a.severity
                .rank()
                .cmp(&b.severity.rank())
                .then_with(|| b.outlier_count.cmp(&a.outlier_count))
        });

        debug!(findings = findings.len(), "Anomaly scan finished");
        findings
    }

    /// Scans a single column; `None` when it is not flagged.
    ///
    /// Columns without non-null values, with fewer than two values, or with
    /// zero spread are skipped.
    pub fn scan_column(&self, column: &Column) -> Option<AnomalyFinding> {
        let values = column.numeric_values();
        let mean = mean(&values)?;
        let std_dev = sample_std_dev(&values)?;

        if std_dev == 0.0 || !std_dev.is_finite() {
            debug!(column = column.name(), "Skipping column without spread");
            return None;
        }

        let lower = mean - self.z_threshold * std_dev;
        let upper = mean + self.z_threshold * std_dev;
        let outlier_count = values.iter().filter(|v| **v < lower || **v > upper).count();
        let ratio = outlier_count as f64 / values.len() as f64;

        if ratio <= self.outlier_pct_limit {
            return None;
        }

        Some(AnomalyFinding {
            column: column.name().to_string(),
            issue: format!(
                "{} of values are outliers (±{:?}σ)",
                percent(ratio),
                self.z_threshold
            ),
            outlier_count,
            total_count: values.len(),
            severity: severity_for(ratio),
            mean: round_to(mean, 2),
            std_dev: round_to(std_dev, 2),
            bounds: (round_to(lower, 2), round_to(upper, 2)),
        })
    }
}

/// Maps an outlier ratio to a severity.
pub fn severity_for(ratio: f64) -> Severity {
    if ratio > HIGH_SEVERITY_RATIO {
        Severity::High
    } else if ratio > MEDIUM_SEVERITY_RATIO {
        Severity::Medium
    } else {
        Severity::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn around_twenty_with(outlier: f64) -> Vec<f64> {
        let mut values: Vec<f64> = [18.0, 19.0, 20.0, 21.0, 22.0]
            .iter()
            .cycle()
            .take(20)
            .copied()
            .collect();
        values.push(outlier);
        values
    }

    #[test]
    fn test_flags_single_extreme_value() {
        let dataset = DataSet::new(vec![Column::numeric("age", around_twenty_with(1000.0))]).unwrap();

        let findings = AnomalyScanner::default().scan(&dataset);

        assert_eq!(findings.len(), 1);
        let finding = &findings[0];
        assert_eq!(finding.column, "age");
        assert_eq!(finding.outlier_count, 1);
        assert_eq!(finding.total_count, 21);
        assert_eq!(finding.severity, Severity::Medium);
        assert_eq!(finding.issue, "4.76% of values are outliers (±3.0σ)");
        assert!(finding.bounds.0 <= finding.mean && finding.mean <= finding.bounds.1);
    }

    #[test]
    fn test_small_sample_needs_lower_threshold() {
        let dataset = DataSet::new(vec![Column::numeric("age", [20, 21, 19, 22, 1000])]).unwrap();

        // With five values no point can lie 3 sample deviations from the mean.
        assert!(AnomalyScanner::default().scan(&dataset).is_empty());

        let findings = AnomalyScanner::new(1.5, 0.01).unwrap().scan(&dataset);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::High);
        assert_eq!(findings[0].mean, 216.4);
        assert_eq!(findings[0].std_dev, 438.05);
        assert!(findings[0].bounds.1 > 873.0 && findings[0].bounds.1 < 874.0);
        assert_eq!(findings[0].issue, "20.00% of values are outliers (±1.5σ)");
    }

    #[test]
    fn test_skips_constant_and_non_numeric_columns() {
        let dataset = DataSet::new(vec![
            Column::numeric("constant", [7, 7, 7, 7]),
            Column::string("name", ["a", "b", "c", "d"]),
            Column::numeric("single", [Some(1.0), None, None, None]),
            Column::numeric("empty", [None::<f64>, None, None, None]),
        ])
        .unwrap();

        assert!(AnomalyScanner::new(0.0, 0.0).unwrap().scan(&dataset).is_empty());
    }

    #[test]
    fn test_ratio_at_limit_is_not_flagged() {
        let dataset = DataSet::new(vec![Column::numeric("age", around_twenty_with(1000.0))]).unwrap();
        let limit = 1.0 / 21.0;

        assert!(AnomalyScanner::new(3.0, limit).unwrap().scan(&dataset).is_empty());
    }

    #[test]
    fn test_sorted_by_severity_then_count() {
        let mut two_spikes = vec![1.0; 19];
        two_spikes.extend([50.0, 60.0]);

        let mut short: Vec<Option<f64>> = [20.0, 21.0, 19.0, 22.0, 1000.0].map(Some).to_vec();
        short.resize(21, None);

        let dataset = DataSet::new(vec![
            Column::numeric("medium_one", around_twenty_with(1000.0)),
            Column::numeric("medium_two", two_spikes),
            Column::numeric("high_one", short),
        ])
        .unwrap();

        let findings = AnomalyScanner::new(1.5, 0.01).unwrap().scan(&dataset);
        let order: Vec<(&str, usize, Severity)> = findings
            .iter()
            .map(|f| (f.column.as_str(), f.outlier_count, f.severity))
            .collect();

        assert_eq!(
            order,
            vec![
                ("high_one", 1, Severity::High),
                ("medium_two", 2, Severity::Medium),
                ("medium_one", 1, Severity::Medium),
            ]
        );
    }

    #[test]
    fn test_rejects_invalid_settings() {
        assert!(AnomalyScanner::new(-1.0, 0.01).is_err());
        assert!(AnomalyScanner::new(f64::INFINITY, 0.01).is_err());
        assert!(AnomalyScanner::new(3.0, 2.0).is_err());

        let context = ValidationContext::new().with_z_threshold(2.0);
        let scanner = AnomalyScanner::from_context(&context).unwrap();
        assert_eq!(scanner.z_threshold(), 2.0);
        assert_eq!(scanner.outlier_pct_limit(), 0.01);
    }

    #[test]
    fn test_severity_for() {
        assert_eq!(severity_for(0.2), Severity::High);
        assert_eq!(severity_for(0.10), Severity::Medium);
        assert_eq!(severity_for(0.05), Severity::Medium);
        assert_eq!(severity_for(0.03), Severity::Low);
        assert_eq!(severity_for(0.02), Severity::Low);
    }
}
