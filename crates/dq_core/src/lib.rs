//! # Data Quality Core
//!
//! Core data structures and types for the data quality engine.
//!
//! This crate provides the building blocks shared by the profiler, the rule
//! evaluator, the anomaly scanner and the contract store.
//!
//! ## Key Concepts
//!
//! - **Contract**: Declarative dataset-level and column-level rules
//! - **Check Result**: Outcome of one rule against one column or the whole dataset
//! - **Anomaly Finding**: Statistically detected outlier condition in a numeric column
//! - **Profile**: Descriptive statistics computed from data, independent of any contract
//!
//! ## Example
//!
//! ```rust
//! use dq_core::{ColumnRulesBuilder, ContractBuilder};
//!
//! let contract = ContractBuilder::new()
//!     .row_count_min(100)
//!     .schema_match(true)
//!     .column("id", ColumnRulesBuilder::new().not_null().unique().build())
//!     .column("code", ColumnRulesBuilder::new().regex(r"^[A-Z]{2}\d{2}$").build())
//!     .build();
//!
//! assert_eq!(contract.column_checks.len(), 2);
//! ```

pub mod builder;
pub mod context;
pub mod contract;
pub mod error;
pub mod generator;
pub mod report;

pub use builder::*;
pub use context::*;
pub use contract::*;
pub use error::*;
pub use generator::*;
pub use report::*;
