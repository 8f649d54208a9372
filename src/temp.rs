//! Staging directories for archive unpacking.
//!
//! Staging always happens under an absolute base so a relative TMPDIR
//! (e.g. TMPDIR=tmp) never lands a multi-gigabyte runtime image inside the
//! working directory.

use std::env;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::error::Result;

/// Returns an absolute base directory for temporary staging.
pub fn temp_dir_base() -> PathBuf {
    let t = env::temp_dir();
    if t.is_absolute() { t } else { PathBuf::from("/tmp") }
}

/// Create a labeled staging directory, removed on drop.
pub fn staging_dir(label: &str) -> Result<TempDir> {
    let dir = tempfile::Builder::new()
        .prefix(&format!("spmsetup-{}-", label))
        .tempdir_in(temp_dir_base())?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_dir_base_is_absolute() {
        assert!(temp_dir_base().is_absolute());
    }

    #[test]
    fn test_staging_dir_carries_label() {
        let dir = staging_dir("dmg").unwrap();
        let name = dir
            .path()
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        assert!(name.starts_with("spmsetup-dmg-"));
        assert!(dir.path().is_absolute());
    }
}
