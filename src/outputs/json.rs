//! JSON report output.
//!
//! Reports are grouped by run date and named after the categories they cover:
//! ```text
//! json_output_dir/
//! └── 2025-05-06/
//!     ├── politics-business-tech.json
//!     └── tech.json
//! ```
//! A later run on the same day with the same categories replaces the file.

use crate::models::Report;
use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, instrument};

/// Write `report` under `{json_output_dir}/{local_date}/{slug}.json`.
///
/// # Returns
///
/// The path written.
#[instrument(level = "info", skip_all, fields(json_output_dir = %json_output_dir.display()))]
pub async fn write_report(
    report: &Report,
    json_output_dir: &Path,
) -> Result<PathBuf, Box<dyn Error>> {
    let json = serde_json::to_string_pretty(report)?;

    let full_json_dir = json_output_dir.join(&report.local_date);
    info!(dir = %full_json_dir.display(), "Ensuring JSON directory exists");
    if let Err(e) = fs::create_dir_all(&full_json_dir).await {
        error!(dir = %full_json_dir.display(), error = %e, "Failed to create JSON dir");
        return Err(e.into());
    }

    let path = full_json_dir.join(format!("{}.json", report.slug()));
    fs::write(&path, json).await?;
    info!(path = %path.display(), records = report.records.len(), "Wrote JSON report");
    Ok(path)
}
