use anyhow::{Context, Result};
use dq_validator::{DataSet, IncidentLog};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Reads a columnar JSON dataset.
pub fn load_dataset(path: &Path) -> Result<DataSet> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read dataset file: {}", path.display()))?;

    let dataset: DataSet = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse dataset file: {}", path.display()))?;

    debug!(
        rows = dataset.len(),
        columns = dataset.column_count(),
        "Loaded dataset"
    );
    Ok(dataset)
}

/// Writes a value as pretty-printed JSON.
pub fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    fs::write(path, content)
        .with_context(|| format!("Failed to write file: {}", path.display()))
}

/// Loads `path` (or starts a new log), lets `record` append to it and saves it back.
///
/// Returns the number of incidents added.
pub fn append_incidents<F>(path: &Path, record: F) -> Result<usize>
where
    F: FnOnce(&mut IncidentLog) -> usize,
{
    let mut log = if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read incident log: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse incident log: {}", path.display()))?
    } else {
        IncidentLog::new()
    };

    let added = record(&mut log);
    write_json(&log, path)?;
    Ok(added)
}
