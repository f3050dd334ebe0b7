//! # Data Quality Validator
//!
//! Evaluation engine for tabular datasets. This crate provides:
//!
//! - Profiling (null/unique ratios, numeric statistics, sample values)
//! - Rule evaluation (built-in quality checks, contract rules, dataset checks)
//! - Anomaly scanning (z-score outliers in numeric columns)
//! - Presentation helpers and an incident log
//! - A profile-driven contract suggester
//!
//! ## Example
//!
//! ```rust
//! use dq_core::{ColumnRulesBuilder, ContractBuilder};
//! use dq_validator::{AnomalyScanner, Column, DataSet, DataValidator, Profiler};
//!
//! let dataset = DataSet::new(vec![
//!     Column::numeric("id", [1, 2, 3, 3]),
//!     Column::string("code", ["AB12", "CD34", "xx99", "EF56"]),
//! ])
//! .unwrap();
//!
//! let contract = ContractBuilder::new()
//!     .row_count_min(2)
//!     .column("id", ColumnRulesBuilder::new().unique().build())
//!     .column("code", ColumnRulesBuilder::new().regex(r"[A-Z]{2}\d{2}").build())
//!     .build();
//!
//! let profile = Profiler::new().profile(&dataset);
//! let results = DataValidator::new().validate(&dataset, &contract);
//! let findings = AnomalyScanner::default().scan(&dataset);
//!
//! assert_eq!(profile.row_count, 4);
//! assert!(results.iter().any(|r| r.is_failure()));
//! assert!(findings.is_empty());
//! ```

mod anomaly;
mod constraints;
mod dataset;
mod engine;
mod error;
mod incident;
mod profiler;
mod quality;
mod schema;
pub mod stats;
mod suggest;

pub use anomaly::*;
pub use constraints::*;
pub use dataset::*;
pub use engine::*;
pub use error::*;
pub use incident::*;
pub use profiler::*;
pub use quality::*;
pub use schema::*;
pub use suggest::*;

pub use dq_core::extract_failed_columns;
