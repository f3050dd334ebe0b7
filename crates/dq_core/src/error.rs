//! Error types for data contracts.
//!
//! This module defines the errors raised while checking a contract definition,
//! or configuring an evaluation run.

use thiserror::Error;

/// Result type for data contract operations.
pub type Result<T> = std::result::Result<T, ContractError>;

/// Main error type for data contract operations.
#[derive(Error, Debug)]
pub enum ContractError {
    /// Lower bound greater than upper bound
    #[error("Invalid bounds for column '{column}': min {min} is greater than max {max}")]
    InvalidBounds {
        /// Column the rules belong to
        column: String,
        /// Declared minimum
        min: f64,
        /// Declared maximum
        max: f64,
    },

    /// Bound is NaN or infinite
    #[error("Non-finite '{rule}' bound for column '{column}'")]
    NonFiniteBound {
        /// Column the rules belong to
        column: String,
        /// Rule name (`min` or `max`)
        rule: String,
    },

    /// Regex rule present but empty
    #[error("Empty regex pattern for column '{0}'")]
    EmptyPattern(String),

    /// Regex rule does not compile
    #[error("Invalid regex pattern for column '{column}': {error}")]
    InvalidPattern {
        /// Column the rules belong to
        column: String,
        /// Compiler message
        error: String,
    },

    /// Evaluation setting out of range
    #[error("Invalid value for '{name}': {value}")]
    InvalidSetting {
        /// Setting name
        name: String,
        /// Rejected value
        value: f64,
    },
}

impl ContractError {
    /// Creates a new invalid setting error.
    pub fn invalid_setting(name: impl Into<String>, value: f64) -> Self {
        Self::InvalidSetting {
            name: name.into(),
            value,
        }
    }
}
