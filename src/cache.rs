//! Download cache for runtime archives
//!
//! Runtime archives are multi-gigabyte, so downloads land in a per-user
//! cache directory and are reused on the next run (the downloader is
//! idempotent by presence-check).
//!
//! ## Cache structure
//!
//! ```text
//! ~/.cache/spmsetup/
//! └── downloads/
//!     └── MATLAB_Runtime_R2019a_Update_9_glnxa64.zip
//! ```

use std::fs;
use std::path::PathBuf;

use walkdir::WalkDir;

use crate::error::{Result, SetupError};

/// Cache directory name under the user's cache directory
const CACHE_DIR: &str = "spmsetup";

/// Downloads subdirectory within the cache
const DOWNLOADS_DIR: &str = "downloads";

/// Get the cache directory path
///
/// Returns `~/.cache/spmsetup` on Linux or the platform equivalent.
/// Can be overridden with the `SPMSETUP_CACHE_DIR` environment variable.
pub fn cache_dir() -> Result<PathBuf> {
    if let Ok(cache_dir) = std::env::var("SPMSETUP_CACHE_DIR") {
        return Ok(PathBuf::from(cache_dir));
    }

    let base = dirs::cache_dir().ok_or_else(|| SetupError::CacheOperationFailed {
        message: "Could not determine cache directory".to_string(),
    })?;

    Ok(base.join(CACHE_DIR))
}

/// Get the downloads directory path, creating it if needed
pub fn downloads_dir() -> Result<PathBuf> {
    let dir = cache_dir()?.join(DOWNLOADS_DIR);
    fs::create_dir_all(&dir).map_err(|e| SetupError::CacheOperationFailed {
        message: format!("Failed to create {}: {}", dir.display(), e),
    })?;
    Ok(dir)
}

/// Download cache statistics
#[derive(Debug, Default)]
pub struct CacheStats {
    /// Number of cached archive files
    pub archives: usize,
    /// Total size in bytes
    pub total_size: u64,
}

impl CacheStats {
    /// Format total size as a human-readable string
    pub fn formatted_size(&self) -> String {
        format_size(self.total_size)
    }
}

/// Format a byte count as a human-readable string
pub fn format_size(size: u64) -> String {
    let s = size as f64;
    if s < 1024.0 {
        format!("{} B", size)
    } else if s < 1024.0 * 1024.0 {
        format!("{:.1} KB", s / 1024.0)
    } else if s < 1024.0 * 1024.0 * 1024.0 {
        format!("{:.1} MB", s / (1024.0 * 1024.0))
    } else {
        format!("{:.1} GB", s / (1024.0 * 1024.0 * 1024.0))
    }
}

/// Collect statistics over the download cache
pub fn cache_stats() -> Result<CacheStats> {
    let dir = cache_dir()?.join(DOWNLOADS_DIR);
    let mut stats = CacheStats::default();

    if !dir.exists() {
        return Ok(stats);
    }

    for entry in WalkDir::new(&dir).into_iter().filter_map(|e| e.ok()) {
        if entry.file_type().is_file() {
            stats.archives += 1;
            stats.total_size += entry.metadata().map(|m| m.len()).unwrap_or(0);
        }
    }

    Ok(stats)
}

/// Remove every cached download
pub fn clear_downloads() -> Result<()> {
    let dir = cache_dir()?.join(DOWNLOADS_DIR);
    if dir.exists() {
        fs::remove_dir_all(&dir).map_err(|e| SetupError::CacheOperationFailed {
            message: format!("Failed to remove {}: {}", dir.display(), e),
        })?;
    }
    Ok(())
}
