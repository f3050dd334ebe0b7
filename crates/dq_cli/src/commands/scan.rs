use anyhow::{Context, Result};
use dq_core::ValidationContext;
use dq_validator::AnomalyScanner;
use std::path::Path;
use tracing::info;

use crate::{files, output};

pub fn execute(
    dataset_path: &Path,
    z_threshold: f64,
    outlier_limit: f64,
    incidents: Option<&Path>,
    format: &str,
) -> Result<()> {
    info!("Scanning dataset for anomalies: {}", dataset_path.display());

    let context = ValidationContext::new()
        .with_z_threshold(z_threshold)
        .with_outlier_pct_limit(outlier_limit);
    let scanner = AnomalyScanner::from_context(&context).context("Invalid scanner settings")?;

    let dataset = files::load_dataset(dataset_path)?;
    let findings = scanner.scan(&dataset);

    if let Some(path) = incidents {
        let added = files::append_incidents(path, |log| log.record_anomalies(&findings))?;
        info!("Logged {} incident(s) to {}", added, path.display());
    }

    output::print_findings(&findings, scanner.z_threshold(), format)
}
