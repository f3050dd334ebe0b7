//! Error types for validation operations.

use dq_core::ContractError;
use thiserror::Error;

/// Errors that can occur while building datasets or configuring components.
///
/// Rule failures are never errors; they are reported as FAIL check results.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A column's length differs from the others
    #[error("Column '{column}' has {actual} values, expected {expected}")]
    RaggedColumn {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// Two columns share a name
    #[error("Duplicate column '{0}'")]
    DuplicateColumn(String),

    /// Rejected scanner or profiler setting
    #[error(transparent)]
    Settings(#[from] ContractError),
}

impl ValidationError {
    /// Creates a new ragged column error.
    pub fn ragged_column(column: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::RaggedColumn {
            column: column.into(),
            expected,
            actual,
        }
    }

    /// Creates a new duplicate column error.
    pub fn duplicate_column(column: impl Into<String>) -> Self {
        Self::DuplicateColumn(column.into())
    }
}

/// Result type for validation operations.
pub type Result<T> = std::result::Result<T, ValidationError>;
