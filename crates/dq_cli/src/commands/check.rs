use anyhow::{Context, Result};
use dq_core::Contract;
use dq_store::{StoreError, try_load_contract};
use dq_validator::DataValidator;
use std::path::Path;
use tracing::{info, warn};

use crate::{files, output};

pub fn execute(
    dataset_path: &Path,
    contract_path: &Path,
    strict: bool,
    highlight: Option<&Path>,
    incidents: Option<&Path>,
    format: &str,
) -> Result<()> {
    info!("Checking dataset: {}", dataset_path.display());
    info!("Strict mode: {}", strict);

    let contract = load_contract(contract_path)?;
    for problem in contract.validate_definition() {
        warn!("Contract definition: {}", problem);
    }

    let dataset = files::load_dataset(dataset_path)?;
    let report = DataValidator::new().validate_with_report(&dataset, &contract);

    if let Some(path) = highlight {
        let highlighted = dataset.highlight_failures(&report.failed_columns());
        files::write_json(&highlighted, path)?;
        info!("Wrote highlighted dataset to {}", path.display());
    }

    if let Some(path) = incidents {
        let added = files::append_incidents(path, |log| log.record_results(&report.results))?;
        info!("Logged {} incident(s) to {}", added, path.display());
    }

    output::print_validation_report(&report, format)?;

    if strict && !report.passed() {
        std::process::exit(1);
    }

    Ok(())
}

/// Loads the contract; a missing file means no contract rules.
fn load_contract(path: &Path) -> Result<Contract> {
    match try_load_contract(path) {
        Ok(contract) => Ok(contract),
        Err(StoreError::NotFound(_)) => {
            output::print_warning(&format!(
                "No contract at {}, running built-in checks only",
                path.display()
            ));
            Ok(Contract::empty())
        }
        Err(e) => Err(e)
            .with_context(|| format!("Failed to load contract file: {}", path.display())),
    }
}
