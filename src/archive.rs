//! ZIP extraction for runtime archives
//!
//! ZIP does not portably carry Unix permission bits, so after unpacking,
//! the executable bit is restored on the files the vendor installer needs
//! to run: shell scripts, `install` entry points, and everything under a
//! `bin` directory.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use walkdir::WalkDir;
use zip::ZipArchive;

use crate::error::Result;

/// Unpack a ZIP archive into `dest`, creating it if needed
pub fn extract_zip(zip_path: &Path, dest: &Path) -> Result<()> {
    let file = File::open(zip_path)?;
    let mut archive = ZipArchive::new(file)?;

    fs::create_dir_all(dest)?;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        let Some(rel) = entry.enclosed_name() else {
            continue;
        };
        let outpath = dest.join(rel);

        if entry.is_dir() {
            fs::create_dir_all(&outpath)?;
        } else {
            if let Some(parent) = outpath.parent() {
                if !parent.exists() {
                    fs::create_dir_all(parent)?;
                }
            }
            let mut outfile = File::create(&outpath)?;
            io::copy(&mut entry, &mut outfile)?;
        }
    }

    restore_executable_bits(dest)?;

    Ok(())
}

/// Whether a file at `rel` (relative to the extraction root) must be
/// executable: `*.sh`, files named `install`, and files under `bin/`.
fn needs_executable_bit(rel: &Path) -> bool {
    let name = rel.file_name().and_then(|n| n.to_str()).unwrap_or("");
    if name.ends_with(".sh") || name == "install" {
        return true;
    }
    rel.parent()
        .map(|p| p.components().any(|c| c.as_os_str() == "bin"))
        .unwrap_or(false)
}

/// Mark extracted scripts and binaries executable again
fn restore_executable_bits(root: &Path) -> Result<()> {
    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = entry.path().strip_prefix(root).unwrap_or(entry.path());
        if needs_executable_bit(rel) {
            set_executable(entry.path())?;
        }
    }
    Ok(())
}

#[cfg(unix)]
fn set_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)?;
    Ok(())
}

#[cfg(not(unix))]
fn set_executable(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;
    use zip::write::SimpleFileOptions;

    fn build_archive(dir: &Path, entries: &[&str]) -> std::path::PathBuf {
        let zip_path = dir.join("runtime.zip");
        let mut writer = zip::ZipWriter::new(File::create(&zip_path).unwrap());
        let options = SimpleFileOptions::default();

        for entry in entries {
            writer.start_file(*entry, options).unwrap();
            writer.write_all(b"#!/bin/sh\n").unwrap();
        }
        writer.finish().unwrap();
        zip_path
    }

    #[cfg(unix)]
    fn is_executable(path: &Path) -> bool {
        use std::os::unix::fs::PermissionsExt;
        fs::metadata(path).unwrap().permissions().mode() & 0o111 != 0
    }

    #[test]
    fn test_needs_executable_bit() {
        assert!(needs_executable_bit(Path::new("setup.sh")));
        assert!(needs_executable_bit(Path::new("scripts/env.sh")));
        assert!(needs_executable_bit(Path::new("install")));
        assert!(needs_executable_bit(Path::new("bin/glnxa64/tool")));
        assert!(needs_executable_bit(Path::new("sys/bin/helper")));

        assert!(!needs_executable_bit(Path::new("readme.txt")));
        assert!(!needs_executable_bit(Path::new("install.txt")));
        assert!(!needs_executable_bit(Path::new("cabinet/data.bin")));
        assert!(!needs_executable_bit(Path::new("archives/installer.log")));
    }

    #[test]
    fn test_extract_creates_files() {
        let temp = TempDir::new().unwrap();
        let zip_path = build_archive(temp.path(), &["install", "data/readme.txt"]);
        let dest = temp.path().join("out");

        extract_zip(&zip_path, &dest).unwrap();

        assert!(dest.join("install").is_file());
        assert!(dest.join("data/readme.txt").is_file());
    }

    #[cfg(unix)]
    #[test]
    fn test_extract_restores_executable_bits() {
        let temp = TempDir::new().unwrap();
        let zip_path = build_archive(
            temp.path(),
            &[
                "install",
                "setup.sh",
                "bin/glnxa64/matlab",
                "data/readme.txt",
            ],
        );
        let dest = temp.path().join("out");

        extract_zip(&zip_path, &dest).unwrap();

        assert!(is_executable(&dest.join("install")));
        assert!(is_executable(&dest.join("setup.sh")));
        assert!(is_executable(&dest.join("bin/glnxa64/matlab")));
        assert!(!is_executable(&dest.join("data/readme.txt")));
    }

    #[test]
    fn test_extract_missing_archive_is_an_error() {
        let temp = TempDir::new().unwrap();
        let result = extract_zip(&temp.path().join("absent.zip"), &temp.path().join("out"));
        assert!(result.is_err());
    }
}
