pub mod builtin;
pub mod schema;

use crate::error::ShortlistError;
use schema::CriteriaFile;
use std::path::Path;

pub use schema::{CriteriaValues, EligibilityCriteria};

/// Load a criteria configuration from a JSON file.
pub fn load_criteria(path: &Path) -> Result<CriteriaFile, ShortlistError> {
    let content = std::fs::read_to_string(path).map_err(|e| ShortlistError::CriteriaLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_criteria(&content, path)
}

/// Parse a criteria configuration from a JSON string.
pub fn parse_criteria(json: &str, source: &Path) -> Result<CriteriaFile, ShortlistError> {
    let file: CriteriaFile = serde_json::from_str(json).map_err(|e| ShortlistError::CriteriaLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_criteria_file(&file)?;
    Ok(file)
}

/// Parse a criteria configuration from a JSON string (no file path context).
pub fn parse_criteria_str(json: &str) -> Result<CriteriaFile, ShortlistError> {
    let file: CriteriaFile = serde_json::from_str(json)?;
    validate_criteria_file(&file)?;
    Ok(file)
}

/// Checks beyond the numeric ranges, which `EligibilityCriteria` enforces itself.
pub fn validate_criteria_file(file: &CriteriaFile) -> Result<(), ShortlistError> {
    if file.name.trim().is_empty() {
        return Err(ShortlistError::Configuration(
            "criteria name must not be empty".into(),
        ));
    }
    Ok(())
}
