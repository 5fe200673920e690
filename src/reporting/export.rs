//! JSON export of aggregated results

use std::fs;
use std::path::Path;

use crate::core::error::Result;
use crate::core::types::AggregatedResult;
use crate::reporting::logging;

/// Serialize the result as pretty JSON (two-space indent)
pub fn to_json_string(result: &AggregatedResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Write the result to `path`, creating missing parent directories
pub fn export_json(result: &AggregatedResult, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, to_json_string(result)?)?;
    logging::log_artifact_written("JSON export", path);
    Ok(())
}

pub fn from_json_str(json: &str) -> Result<AggregatedResult> {
    Ok(serde_json::from_str(json)?)
}

/// Read a previously exported result
pub fn read_json(path: &Path) -> Result<AggregatedResult> {
    let content = fs::read_to_string(path)?;
    from_json_str(&content)
}
