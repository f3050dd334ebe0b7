use anyhow::{Context, Result};
use dq_core::ContractGenerator;
use dq_store::try_save_contract;
use dq_validator::{ProfileSuggester, Profiler};
use std::path::Path;
use tracing::info;

use crate::{files, output};

pub fn execute(dataset_path: &Path, output_path: &Path, no_bounds: bool) -> Result<()> {
    info!("Initializing contract from dataset: {}", dataset_path.display());

    let dataset = files::load_dataset(dataset_path)?;
    let profile = Profiler::new().profile(&dataset);

    let suggester = ProfileSuggester::new().with_bounds(!no_bounds);
    let contract = suggester
        .generate(&profile)
        .with_context(|| format!("{} failed to suggest a contract", suggester.name()))?;

    output::print_info(&format!(
        "Suggested rules for {} column(s)",
        contract.column_checks.len()
    ));

    try_save_contract(&contract, output_path)
        .with_context(|| format!("Failed to save contract: {}", output_path.display()))?;

    output::print_success(&format!("Contract written to {}", output_path.display()));
    Ok(())
}
