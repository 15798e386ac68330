//! Saving downloaded files.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Write `bytes` to `dir/filename`, creating `dir` when needed.
///
/// Only the final component of `filename` is used, so a server-provided
/// name cannot escape the download directory.
pub async fn save_download(dir: &Path, filename: &str, bytes: &[u8]) -> Result<PathBuf> {
    let name = Path::new(filename)
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("Invalid file name: '{}'", filename))?;

    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let path = dir.join(name);
    tokio::fs::write(&path, bytes)
        .await
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    log::info!("Saved {} bytes to {}", bytes.len(), path.display());
    Ok(path)
}
