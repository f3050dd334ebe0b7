mod commands;
mod files;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dq_core::{DEFAULT_OUTLIER_PCT_LIMIT, DEFAULT_SAMPLE_SIZE, DEFAULT_Z_THRESHOLD};
use dq_store::DEFAULT_CONTRACT_PATH;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "dq")]
#[command(version, about = "Data quality engine CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Profile a dataset: null/unique ratios, numeric stats, sample values
    Profile {
        /// Path to the dataset (columnar JSON)
        dataset: PathBuf,

        /// Number of sample values per string column
        #[arg(long, default_value_t = DEFAULT_SAMPLE_SIZE)]
        sample_size: usize,

        /// Seed for reproducible sampling
        #[arg(long)]
        seed: Option<u64>,

        /// Output format: text, json
        #[arg(short, long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Evaluate a dataset against a contract
    Check {
        /// Path to the dataset (columnar JSON)
        dataset: PathBuf,

        /// Path to the contract file (JSON, YAML or TOML)
        #[arg(short, long, default_value = DEFAULT_CONTRACT_PATH)]
        contract: PathBuf,

        /// Exit with status 1 if any check fails
        #[arg(short, long)]
        strict: bool,

        /// Write a copy of the dataset with failed columns marked
        #[arg(long)]
        highlight: Option<PathBuf>,

        /// Append incidents to this log file
        #[arg(long)]
        incidents: Option<PathBuf>,

        /// Output format: text, json
        #[arg(short, long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Scan numeric columns for statistical outliers
    Scan {
        /// Path to the dataset (columnar JSON)
        dataset: PathBuf,

        /// Z-score beyond which a value is an outlier
        #[arg(long, default_value_t = DEFAULT_Z_THRESHOLD)]
        z_threshold: f64,

        /// Minimum share of outliers for a column to be flagged
        #[arg(long, default_value_t = DEFAULT_OUTLIER_PCT_LIMIT)]
        outlier_limit: f64,

        /// Append incidents to this log file
        #[arg(long)]
        incidents: Option<PathBuf>,

        /// Output format: text, json
        #[arg(short, long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Suggest a contract from a dataset profile and save it
    Init {
        /// Path to the dataset (columnar JSON)
        dataset: PathBuf,

        /// Output file path (format from extension)
        #[arg(short, long, default_value = DEFAULT_CONTRACT_PATH)]
        output: PathBuf,

        /// Do not suggest min/max bounds
        #[arg(long)]
        no_bounds: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    match cli.command {
        Commands::Profile {
            dataset,
            sample_size,
            seed,
            format,
        } => commands::profile::execute(&dataset, sample_size, seed, &format),

        Commands::Check {
            dataset,
            contract,
            strict,
            highlight,
            incidents,
            format,
        } => commands::check::execute(
            &dataset,
            &contract,
            strict,
            highlight.as_deref(),
            incidents.as_deref(),
            &format,
        ),

        Commands::Scan {
            dataset,
            z_threshold,
            outlier_limit,
            incidents,
            format,
        } => commands::scan::execute(
            &dataset,
            z_threshold,
            outlier_limit,
            incidents.as_deref(),
            &format,
        ),

        Commands::Init {
            dataset,
            output,
            no_bounds,
        } => commands::init::execute(&dataset, &output, no_bounds),
    }
}
