//! Incident log.
//!
//! Collects noteworthy failures across evaluation runs so they can be
//! reviewed later. The log is a plain value owned by the caller.

use chrono::{DateTime, Utc};
use dq_core::{AnomalyFinding, CheckKind, CheckResult, Severity};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Column label used for row count incidents.
pub const ROW_COUNT_INCIDENT_COLUMN: &str = "row_count";

/// Column label used for schema incidents.
pub const SCHEMA_INCIDENT_COLUMN: &str = "schema";

/// What produced an incident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncidentKind {
    /// Failed row count check
    #[serde(rename = "Dataset Check")]
    DatasetCheck,
    /// Failed schema match
    #[serde(rename = "Schema Check")]
    SchemaCheck,
    /// High-severity column failure
    #[serde(rename = "Column Check")]
    ColumnCheck,
    /// Flagged anomaly
    #[serde(rename = "Anomaly")]
    Anomaly,
}

impl fmt::Display for IncidentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            IncidentKind::DatasetCheck => "Dataset Check",
            IncidentKind::SchemaCheck => "Schema Check",
            IncidentKind::ColumnCheck => "Column Check",
            IncidentKind::Anomaly => "Anomaly",
        };
        f.write_str(label)
    }
}

/// A logged incident.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    /// What produced the incident
    pub kind: IncidentKind,
    /// Affected column, or `row_count` / `schema` for dataset checks
    pub column: String,
    /// Message of the failed check or anomaly issue
    pub message: String,
    /// When the incident was recorded
    pub logged_at: DateTime<Utc>,
}

impl Incident {
    /// Creates an incident stamped with the current time.
    pub fn new(kind: IncidentKind, column: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            column: column.into(),
            message: message.into(),
            logged_at: Utc::now(),
        }
    }

    /// Maps a check result to an incident, if it warrants one.
    ///
    /// Failed dataset checks always do; failed column checks only at high severity.
    pub fn from_result(result: &CheckResult) -> Option<Self> {
        if !result.is_failure() {
            return None;
        }

        let (kind, column) = match result.check {
            CheckKind::RowCountMin => (IncidentKind::DatasetCheck, ROW_COUNT_INCIDENT_COLUMN),
            CheckKind::SchemaMatch => (IncidentKind::SchemaCheck, SCHEMA_INCIDENT_COLUMN),
            _ if result.severity == Severity::High => {
                (IncidentKind::ColumnCheck, result.column.as_str())
            }
            _ => return None,
        };

        Some(Self::new(kind, column, result.message.clone()))
    }
}

/// Append-only list of incidents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncidentLog {
    entries: Vec<Incident>,
}

impl IncidentLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one incident.
    pub fn record(&mut self, incident: Incident) {
        self.entries.push(incident);
    }

    /// Records every result that warrants an incident; returns how many were added.
    pub fn record_results(&mut self, results: &[CheckResult]) -> usize {
        let before = self.entries.len();
        self.entries
            .extend(results.iter().filter_map(Incident::from_result));
        self.entries.len() - before
    }

    /// Records one incident per finding; returns how many were added.
    pub fn record_anomalies(&mut self, findings: &[AnomalyFinding]) -> usize {
        self.entries.extend(
            findings
                .iter()
                .map(|f| Incident::new(IncidentKind::Anomaly, f.column.as_str(), f.issue.as_str())),
        );
        findings.len()
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[Incident] {
        &self.entries
    }

    /// Entries with the most recent first.
    pub fn entries_newest_first(&self) -> impl Iterator<Item = &Incident> {
        self.entries.iter().rev()
    }

    /// Number of logged incidents.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been logged.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
