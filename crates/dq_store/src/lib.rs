//! Contract Store: persistence of data contracts.
//!
//! Contracts are stored as JSON (the default, pretty-printed with 2-space
//! indentation), YAML or TOML documents. The format is chosen from the file
//! extension.
//!
//! Two flavours of every operation exist:
//! - `try_save_contract` / `try_load_contract` return a typed [`StoreError`]
//! - `save_contract` / `load_contract` never fail: errors are logged and
//!   masked (nothing written, empty contract returned)
//!
//! # Example
//!
//! ```rust
//! use dq_core::{ColumnRulesBuilder, ContractBuilder};
//! use dq_store::{try_load_contract, try_save_contract};
//!
//! let dir = std::env::temp_dir().join("dq_store_doc_example");
//! let path = dir.join("orders.json");
//!
//! let contract = ContractBuilder::new()
//!     .row_count_min(10)
//!     .column("id", ColumnRulesBuilder::new().not_null().build())
//!     .build();
//!
//! try_save_contract(&contract, &path).expect("Failed to save contract");
//! let loaded = try_load_contract(&path).expect("Failed to load contract");
//! assert_eq!(loaded, contract);
//! # std::fs::remove_dir_all(&dir).ok();
//! ```

use dq_core::Contract;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, error, warn};

/// File the store reads and writes when no path is given.
pub const DEFAULT_CONTRACT_PATH: &str = "saved_contract.json";

/// Errors that can occur while reading or writing contracts.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The contract file does not exist
    #[error("Contract file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// File I/O error
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization failed
    #[error("Invalid JSON contract: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing or serialization failed
    #[error("Invalid YAML contract: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// TOML parsing or serialization failed
    #[error("Invalid TOML contract: {0}")]
    Toml(String),

    /// Unsupported file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Supported contract file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractFormat {
    /// JSON format (.json)
    Json,
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
}

/// Parse a contract from a JSON string.
///
/// Unknown keys are ignored and missing sections default to empty.
///
/// ```rust
/// use dq_store::parse_json;
///
/// let contract = parse_json(r#"{"column_checks": {"id": {"unique": true}}}"#).unwrap();
/// assert!(contract.rules_for("id").unwrap().unique);
/// assert!(contract.dataset_checks.is_empty());
/// ```
pub fn parse_json(content: &str) -> Result<Contract> {
    Ok(serde_json::from_str(content)?)
}

/// Parse a contract from a YAML string.
pub fn parse_yaml(content: &str) -> Result<Contract> {
    Ok(serde_yaml_ng::from_str(content)?)
}

/// Parse a contract from a TOML string.
pub fn parse_toml(content: &str) -> Result<Contract> {
    toml::from_str(content).map_err(|e| StoreError::Toml(e.to_string()))
}

/// Parse a contract in the given format.
pub fn parse(content: &str, format: ContractFormat) -> Result<Contract> {
    match format {
        ContractFormat::Json => parse_json(content),
        ContractFormat::Yaml => parse_yaml(content),
        ContractFormat::Toml => parse_toml(content),
    }
}

/// Render a contract in the given format.
pub fn render(contract: &Contract, format: ContractFormat) -> Result<String> {
    match format {
        ContractFormat::Json => Ok(serde_json::to_string_pretty(contract)?),
        ContractFormat::Yaml => Ok(serde_yaml_ng::to_string(contract)?),
        ContractFormat::Toml => {
            toml::to_string_pretty(contract).map_err(|e| StoreError::Toml(e.to_string()))
        }
    }
}

/// Detect the contract format from a file path based on its extension.
///
/// # Supported Extensions
///
/// * `.json` → `ContractFormat::Json`
/// * `.yaml`, `.yml` → `ContractFormat::Yaml`
/// * `.toml` → `ContractFormat::Toml`
///
/// # Errors
///
/// Returns `StoreError::InvalidExtension` if the file has no extension.
/// Returns `StoreError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<ContractFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(StoreError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "json" => Ok(ContractFormat::Json),
        "yaml" | "yml" => Ok(ContractFormat::Yaml),
        "toml" => Ok(ContractFormat::Toml),
        other => Err(StoreError::UnsupportedFormat(other.to_string())),
    }
}

/// Write a contract to `path`, replacing any existing file.
///
/// Missing parent directories are created.
pub fn try_save_contract(contract: &Contract, path: &Path) -> Result<()> {
    let format = detect_format(path)?;
    let content = render(contract, format)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;

    debug!(path = %path.display(), ?format, "Saved contract");
    Ok(())
}

/// Read a contract from `path`.
pub fn try_load_contract(path: &Path) -> Result<Contract> {
    if !path.exists() {
        return Err(StoreError::NotFound(path.to_path_buf()));
    }

    let format = detect_format(path)?;
    let content = fs::read_to_string(path)?;
    let contract = parse(&content, format)?;

    debug!(
        path = %path.display(),
        columns = contract.column_checks.len(),
        "Loaded contract"
    );
    Ok(contract)
}

/// Best-effort save: failures are logged and otherwise ignored.
pub fn save_contract(contract: &Contract, path: &Path) {
    if let Err(e) = try_save_contract(contract, path) {
        error!(path = %path.display(), error = %e, "Failed to save contract");
    }
}

/// Best-effort load: a missing or unreadable contract yields an empty one.
pub fn load_contract(path: &Path) -> Contract {
    match try_load_contract(path) {
        Ok(contract) => contract,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Using empty contract");
            Contract::empty()
        }
    }
}
