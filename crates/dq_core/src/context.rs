//! Settings shared by the profiler and the anomaly scanner.

use crate::{ContractError, Result};

/// Default number of sample values drawn per string column.
pub const DEFAULT_SAMPLE_SIZE: usize = 5;

/// Default z-score beyond which a value is an outlier.
pub const DEFAULT_Z_THRESHOLD: f64 = 3.0;

/// Default minimum outlier proportion required to flag a column.
pub const DEFAULT_OUTLIER_PCT_LIMIT: f64 = 0.01;

/// Context for evaluation runs.
///
/// Every component receives its settings explicitly; nothing is read from
/// ambient state.
///
/// # Example
///
/// ```rust
/// use dq_core::ValidationContext;
///
/// let context = ValidationContext::new()
///     .with_seed(42)
///     .with_z_threshold(2.5);
///
/// assert!(context.validate().is_ok());
/// assert_eq!(context.seed, Some(42));
/// ```
#[derive(Debug, Clone)]
pub struct ValidationContext {
    /// Maximum number of sample values drawn per string column
    pub sample_size: usize,

    /// Seed for the profiler's sampling; `None` uses a thread-local RNG
    pub seed: Option<u64>,

    /// Z-score threshold for the anomaly scan
    pub z_threshold: f64,

    /// Minimum outlier proportion for a column to be flagged
    pub outlier_pct_limit: f64,
}

impl Default for ValidationContext {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            seed: None,
            z_threshold: DEFAULT_Z_THRESHOLD,
            outlier_pct_limit: DEFAULT_OUTLIER_PCT_LIMIT,
        }
    }
}

impl ValidationContext {
    /// Creates a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of sample values per string column.
    pub fn with_sample_size(mut self, size: usize) -> Self {
        self.sample_size = size;
        self
    }

    /// Makes profiler sampling deterministic.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the anomaly z-score threshold.
    pub fn with_z_threshold(mut self, z_threshold: f64) -> Self {
        self.z_threshold = z_threshold;
        self
    }

    /// Sets the minimum outlier proportion.
    pub fn with_outlier_pct_limit(mut self, limit: f64) -> Self {
        self.outlier_pct_limit = limit;
        self
    }

    /// Rejects settings the scanner cannot work with.
    ///
    /// The z-threshold must be finite and non-negative, the outlier limit
    /// must lie in `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        check_z_threshold(self.z_threshold)?;
        check_outlier_limit(self.outlier_pct_limit)
    }
}

/// Validates a z-score threshold.
pub fn check_z_threshold(value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ContractError::invalid_setting("z_threshold", value))
    }
}

/// Validates an outlier proportion limit.
pub fn check_outlier_limit(value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ContractError::invalid_setting("outlier_pct_limit", value))
    }
}
