//! Dataset profiling.
//!
//! Computes descriptive statistics per column, independent of any contract.

use crate::stats::{mean, round_to, sample_std_dev};
use crate::{Column, DataSet, ValidationError};
use dq_core::{
    ColumnProfile, DatasetProfile, NumericStats, ValidationContext, ValueCounts, DEFAULT_SAMPLE_SIZE,
};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Computes [`DatasetProfile`]s.
///
/// Profiling never fails; absent statistics are represented by `None`.
/// Sample values are drawn without replacement, so they differ between runs
/// unless a seed is set.
///
/// # Example
///
/// ```rust
/// use dq_validator::{Column, DataSet, Profiler};
///
/// let dataset = DataSet::new(vec![
///     Column::numeric("age", [Some(20), Some(40), None]),
/// ])
/// .unwrap();
///
/// let profile = Profiler::new().profile(&dataset);
/// let age = profile.column("age").unwrap();
///
/// assert_eq!(age.null_ratio, 0.3333);
/// assert_eq!(age.numeric_stats.as_ref().unwrap().mean, 30.0);
/// ```
#[derive(Debug, Clone)]
pub struct Profiler {
    sample_size: usize,
    seed: Option<u64>,
}

impl Default for Profiler {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            seed: None,
        }
    }
}

impl Profiler {
    /// Creates a profiler with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a profiler from a validation context.
    pub fn from_context(context: &ValidationContext) -> Result<Self, ValidationError> {
        context.validate()?;
        Ok(Self {
            sample_size: context.sample_size,
            seed: context.seed,
        })
    }

    /// Sets the maximum number of sample values per string column.
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    /// Makes sampling deterministic.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Profiles every column of the dataset.
    pub fn profile(&self, dataset: &DataSet) -> DatasetProfile {
        match self.seed {
            Some(seed) => self.profile_with_rng(dataset, &mut StdRng::seed_from_u64(seed)),
            None => self.profile_with_rng(dataset, &mut rand::rng()),
        }
    }

    /// Profiles every column, drawing samples from the given generator.
    pub fn profile_with_rng<R: Rng + ?Sized>(&self, dataset: &DataSet, rng: &mut R) -> DatasetProfile {
        let columns = dataset
            .columns()
            .map(|column| (column.name().to_string(), self.profile_column(column, rng)))
            .collect();

        debug!(
            rows = dataset.len(),
            columns = dataset.column_count(),
            "Profiled dataset"
        );

        DatasetProfile {
            row_count: dataset.len(),
            column_count: dataset.column_count(),
            columns,
        }
    }

    /// Profiles a single column.
    pub fn profile_column<R: Rng + ?Sized>(&self, column: &Column, rng: &mut R) -> ColumnProfile {
        let (numeric_stats, sample_values) = if column.is_numeric() {
            (numeric_stats(column), None)
        } else {
            (None, Some(self.sample(column, rng)))
        };

        ColumnProfile {
            dtype: column.dtype(),
            null_ratio: round_to(column.null_ratio(), 4),
            unique_ratio: round_to(column.unique_ratio(), 4),
            numeric_stats,
            sample_values,
            counts: Some(ValueCounts {
                rows: column.len(),
                nulls: column.null_count(),
                distinct: column.distinct_count(),
            }),
        }
    }

    fn sample<R: Rng + ?Sized>(&self, column: &Column, rng: &mut R) -> Vec<String> {
        let values: Vec<String> = column.non_null().map(ToString::to_string).collect();
        values
            .choose_multiple(rng, self.sample_size)
            .cloned()
            .collect()
    }
}

fn numeric_stats(column: &Column) -> Option<NumericStats> {
    let values = column.numeric_values();
    let mean = mean(&values)?;

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Some(NumericStats {
        min: round_to(min, 2),
        max: round_to(max, 2),
        mean: round_to(mean, 2),
        std_dev: sample_std_dev(&values).map(|s| round_to(s, 2)),
    })
}
