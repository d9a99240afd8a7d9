use std::fs;
use std::path::Path;

use tracing::info;

use crate::{Log, ReportError};

/// Writes the logs as pretty printed JSON to `path`.
pub fn write_report(path: &Path, logs: &[Log]) -> Result<(), ReportError> {
    let json = serde_json::to_string_pretty(logs)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, json)?;
    info!(path = %path.display(), runs = logs.len(), "report written");
    Ok(())
}

/// Reads back a report written by [`write_report`].
pub fn read_report(path: &Path) -> Result<Vec<Log>, ReportError> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}
