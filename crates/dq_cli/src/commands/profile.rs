use anyhow::{Context, Result};
use dq_core::ValidationContext;
use dq_validator::Profiler;
use std::path::Path;
use tracing::info;

use crate::{files, output};

pub fn execute(dataset_path: &Path, sample_size: usize, seed: Option<u64>, format: &str) -> Result<()> {
    info!("Profiling dataset: {}", dataset_path.display());

    let dataset = files::load_dataset(dataset_path)?;

    let mut context = ValidationContext::new().with_sample_size(sample_size);
    if let Some(seed) = seed {
        context = context.with_seed(seed);
    }
    let profiler = Profiler::from_context(&context).context("Invalid profiler settings")?;

    let profile = profiler.profile(&dataset);
    output::print_profile(&profile, format)
}
