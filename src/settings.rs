//! Tool configuration loaded from an optional `spmsetup.yaml`
//!
//! Every field has a built-in default, so the file only needs to name what
//! it overrides. CLI flags win over file values.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, SetupError};
use crate::platform::RuntimeSpec;

/// Default configuration file name, looked up in the working directory
pub const SETTINGS_FILE: &str = "spmsetup.yaml";

/// Default toolkit build directory relative to the working directory
pub const DEFAULT_SPM_DIR: &str = "build/lib/spm";

/// Name of the installed toolkit package in site-packages
pub const TOOLKIT_PACKAGE: &str = "spm_standalone";

/// Name of the installed runtime directory in site-packages (Linux)
pub const RUNTIME_PACKAGE: &str = "MATLAB_Runtime";

/// Toolkit-related overrides
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ToolkitSettings {
    /// Package directory name to look for in site-packages
    pub package: String,
    /// Toolkit build directory to assemble and install from
    pub spm_dir: PathBuf,
}

impl Default for ToolkitSettings {
    fn default() -> Self {
        Self {
            package: TOOLKIT_PACKAGE.to_string(),
            spm_dir: PathBuf::from(DEFAULT_SPM_DIR),
        }
    }
}

/// Loaded tool configuration
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub runtime: RuntimeSpec,
    pub toolkit: ToolkitSettings,
}

impl Settings {
    /// Load settings from `spmsetup.yaml` in the given directory, falling
    /// back to defaults when the file does not exist.
    pub fn load_from(dir: &Path) -> Result<Self> {
        let path = dir.join(SETTINGS_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| SetupError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| SetupError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Load settings from the current working directory
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| SetupError::IoError {
            message: format!("Failed to get current directory: {}", e),
        })?;
        Self::load_from(&cwd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::HostOs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_file() {
        let temp = TempDir::new().unwrap();
        let settings = Settings::load_from(temp.path()).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.toolkit.package, "spm_standalone");
        assert_eq!(settings.toolkit.spm_dir, PathBuf::from("build/lib/spm"));
    }

    #[test]
    fn test_partial_override() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(SETTINGS_FILE),
            "runtime:\n  release: R2023b\n  update: 2\n",
        )
        .unwrap();

        let settings = Settings::load_from(temp.path()).unwrap();
        assert_eq!(settings.runtime.release, "R2023b");
        assert_eq!(settings.runtime.update, 2);
        // Untouched fields keep their defaults
        assert_eq!(settings.runtime.version_dir, "v96");
        assert_eq!(settings.toolkit.package, "spm_standalone");
    }

    #[test]
    fn test_toolkit_override() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(SETTINGS_FILE),
            "toolkit:\n  spm_dir: out/spm\n",
        )
        .unwrap();

        let settings = Settings::load_from(temp.path()).unwrap();
        assert_eq!(settings.toolkit.spm_dir, PathBuf::from("out/spm"));
        assert_eq!(
            settings.runtime.archive_name(HostOs::Linux),
            "MATLAB_Runtime_R2019a_Update_9_glnxa64.zip"
        );
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(SETTINGS_FILE), "runtime: [unclosed").unwrap();

        let err = Settings::load_from(temp.path()).unwrap_err();
        assert!(matches!(err, SetupError::ConfigParseFailed { .. }));
    }
}
