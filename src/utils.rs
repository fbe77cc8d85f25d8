//! Small helpers for text previews, log truncation, and output paths.

use std::error::Error;
use std::fs as stdfs;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// The first `max` characters of `s` (char-boundary safe).
pub fn preview(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to `max` characters with `"…(+N bytes)"` appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}…(+{} bytes)", &s[..cut], s.len() - cut),
    }
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if needed, then creates and removes a probe file.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or written to.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn ensure_writable_dir(path: &Path) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(path).await?;
    let probe_path = path.join("..__probe_write__");
    stdfs::File::create(&probe_path)?;
    let _ = stdfs::remove_file(&probe_path);
    info!("Output directory is writable");
    Ok(())
}

/// Ensure the parent directory of an output file exists and is writable.
pub async fn ensure_parent_dir(file: &Path) -> Result<(), Box<dyn Error>> {
    match file.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => ensure_writable_dir(parent).await,
        None => Ok(()),
    }
}
