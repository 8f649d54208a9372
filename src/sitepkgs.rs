//! Installed-package lookup in a Conda environment
//!
//! The toolkit and the installed runtime both land in the environment's
//! `site-packages`. The lookup mirrors the interpreter's search-path
//! layout: `<prefix>/lib/pythonX.Y/site-packages` per interpreter version,
//! with `<prefix>/lib/site-packages` as a fallback.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SetupError};

/// Candidate site-packages directories under an environment prefix
pub fn site_packages_dirs(prefix: &Path) -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    let lib = prefix.join("lib");

    if let Ok(entries) = fs::read_dir(&lib) {
        let mut python_dirs: Vec<PathBuf> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| {
                p.is_dir()
                    && p.file_name()
                        .and_then(|n| n.to_str())
                        .is_some_and(|n| n.starts_with("python"))
            })
            .map(|p| p.join("site-packages"))
            .filter(|p| p.is_dir())
            .collect();
        python_dirs.sort();
        dirs.extend(python_dirs);
    }

    let flat = lib.join("site-packages");
    if flat.is_dir() {
        dirs.push(flat);
    }

    dirs
}

/// Locate an installed package directory by name
///
/// Missing packages are fatal; the diagnostic lists every searched path.
pub fn find_installed_package(prefix: &Path, name: &str) -> Result<PathBuf> {
    let searched = site_packages_dirs(prefix);

    for dir in &searched {
        let candidate = dir.join(name);
        if candidate.is_dir() {
            return Ok(candidate);
        }
    }

    Err(SetupError::PackageNotFound {
        name: name.to_string(),
        searched: searched
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", "),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fake_prefix(python: &str) -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let site = temp.path().join("lib").join(python).join("site-packages");
        fs::create_dir_all(&site).unwrap();
        let path = temp.path().to_path_buf();
        (temp, path)
    }

    #[test]
    fn test_finds_package_in_site_packages() {
        let (temp, prefix) = fake_prefix("python3.10");
        let pkg = temp
            .path()
            .join("lib/python3.10/site-packages/spm_standalone");
        fs::create_dir_all(&pkg).unwrap();

        let found = find_installed_package(&prefix, "spm_standalone").unwrap();
        assert_eq!(found, pkg);
    }

    #[test]
    fn test_missing_package_lists_searched_paths() {
        let (_temp, prefix) = fake_prefix("python3.11");

        let err = find_installed_package(&prefix, "MATLAB_Runtime").unwrap_err();
        match err {
            SetupError::PackageNotFound { name, searched } => {
                assert_eq!(name, "MATLAB_Runtime");
                assert!(searched.contains("python3.11"));
            }
            other => panic!("Expected PackageNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_file_with_package_name_is_not_a_package() {
        let (temp, prefix) = fake_prefix("python3.10");
        fs::write(
            temp.path()
                .join("lib/python3.10/site-packages/spm_standalone"),
            "",
        )
        .unwrap();

        assert!(find_installed_package(&prefix, "spm_standalone").is_err());
    }

    #[test]
    fn test_flat_site_packages_fallback() {
        let temp = TempDir::new().unwrap();
        let site = temp.path().join("lib/site-packages");
        fs::create_dir_all(site.join("MATLAB_Runtime")).unwrap();

        let found = find_installed_package(temp.path(), "MATLAB_Runtime").unwrap();
        assert_eq!(found, site.join("MATLAB_Runtime"));
    }

    #[test]
    fn test_no_site_packages_at_all() {
        let temp = TempDir::new().unwrap();
        let err = find_installed_package(temp.path(), "anything").unwrap_err();
        assert!(matches!(err, SetupError::PackageNotFound { .. }));
    }
}
