//! Runtime archive downloader
//!
//! Downloads go through the external transfer tool and are idempotent by
//! presence-check: an archive that already exists at the destination is
//! never re-fetched, and no checksum is taken. A failed transfer is fatal;
//! there is no retry or backoff.

use std::path::Path;

use crate::error::{Result, SetupError};
use crate::process;

/// External transfer tool used for downloads
const TRANSFER_TOOL: &str = "curl";

/// Outcome of a fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fetched {
    /// The file was transferred
    Downloaded,
    /// The destination already existed; nothing was transferred
    AlreadyPresent,
}

/// Downloader backed by an external transfer tool
#[derive(Debug, Clone)]
pub struct Downloader {
    tool: String,
}

impl Default for Downloader {
    fn default() -> Self {
        Self::new()
    }
}

impl Downloader {
    /// Downloader using the default transfer tool
    pub fn new() -> Self {
        Self {
            tool: TRANSFER_TOOL.to_string(),
        }
    }

    /// Downloader using a specific transfer tool (used by tests)
    pub fn with_tool(tool: impl Into<String>) -> Self {
        Self { tool: tool.into() }
    }

    /// Fetch `url` into `dest` unless `dest` already exists.
    ///
    /// The transfer runs quietly and follows redirects. A transfer that
    /// exits zero without producing the destination file is still a
    /// download failure.
    pub fn fetch(&self, url: &str, dest: &Path) -> Result<Fetched> {
        if dest.exists() {
            return Ok(Fetched::AlreadyPresent);
        }

        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let dest_arg = dest.display().to_string();
        process::run(&self.tool, ["-s", "-L", "-o", dest_arg.as_str(), url]).map_err(|e| {
            SetupError::DownloadFailed {
                url: url.to_string(),
                reason: e.to_string(),
            }
        })?;

        if !dest.exists() {
            return Err(SetupError::DownloadFailed {
                url: url.to_string(),
                reason: "transfer tool reported success but wrote no file".to_string(),
            });
        }

        Ok(Fetched::Downloaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_existing_file_skips_transfer() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("archive.zip");
        std::fs::write(&dest, "cached").unwrap();

        // A transfer tool that always fails proves it is never invoked.
        let downloader = Downloader::with_tool("false");
        let fetched = downloader
            .fetch("https://example.invalid/archive.zip", &dest)
            .unwrap();

        assert_eq!(fetched, Fetched::AlreadyPresent);
        assert_eq!(std::fs::read_to_string(&dest).unwrap(), "cached");
    }

    #[test]
    fn test_failed_transfer_is_fatal() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("archive.zip");

        let downloader = Downloader::with_tool("false");
        let err = downloader
            .fetch("https://example.invalid/archive.zip", &dest)
            .unwrap_err();

        assert!(matches!(err, SetupError::DownloadFailed { .. }));
    }

    #[test]
    fn test_transfer_without_output_is_fatal() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("archive.zip");

        // Exits zero but writes nothing.
        let downloader = Downloader::with_tool("true");
        let err = downloader
            .fetch("https://example.invalid/archive.zip", &dest)
            .unwrap_err();

        match err {
            SetupError::DownloadFailed { reason, .. } => {
                assert!(reason.contains("wrote no file"));
            }
            other => panic!("Expected DownloadFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("nested/dir/archive.zip");

        // The parent directory is created before the transfer starts, even
        // when the transfer itself fails.
        let downloader = Downloader::with_tool("false");
        let _ = downloader.fetch("https://example.invalid/a.zip", &dest);
        assert!(dest.parent().unwrap().exists());
    }
}
