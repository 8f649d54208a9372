//! Error types and handling for spmsetup
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//! Every failure during installation is fatal: there is no retry and no
//! rollback of steps that already ran.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for spmsetup operations
#[derive(Error, Diagnostic, Debug)]
pub enum SetupError {
    // Platform errors
    #[error("Unsupported operating system: {os}")]
    #[diagnostic(
        code(spmsetup::platform::unsupported),
        help("The MATLAB Runtime installer is only available for Linux and macOS")
    )]
    UnsupportedPlatform { os: String },

    // External process errors
    #[error("Failed to start '{program}': {reason}")]
    #[diagnostic(
        code(spmsetup::process::spawn_failed),
        help("Check that '{program}' is installed and on PATH")
    )]
    CommandSpawnFailed { program: String, reason: String },

    #[error("'{program}' exited with {status}")]
    #[diagnostic(code(spmsetup::process::failed))]
    CommandFailed {
        program: String,
        status: String,
        stderr: String,
    },

    // Toolkit errors
    #[error("Toolkit build directory not found: {path}")]
    #[diagnostic(
        code(spmsetup::toolkit::dir_missing),
        help("Pass --spm-dir to point at the SPM build directory, or --skip-toolkit")
    )]
    ToolkitDirMissing { path: String },

    // Download errors
    #[error("Failed to download {url}")]
    #[diagnostic(code(spmsetup::download::failed))]
    DownloadFailed { url: String, reason: String },

    // Archive errors
    #[error("Failed to extract archive: {message}")]
    #[diagnostic(code(spmsetup::archive::extract_failed))]
    ExtractionFailed { message: String },

    // Runtime installer errors
    #[error("The install script was not found in {path}")]
    #[diagnostic(
        code(spmsetup::runtime::install_script_missing),
        help("The runtime archive did not contain the expected installer; remove the cached download and retry")
    )]
    InstallScriptMissing { path: String },

    #[error("The installer binary was not found at {path}")]
    #[diagnostic(code(spmsetup::runtime::installer_app_missing))]
    InstallerAppMissing { path: String },

    #[error("Failed to mount the disk image at {mountpoint}")]
    #[diagnostic(code(spmsetup::runtime::mount_failed))]
    MountFailed { mountpoint: String },

    // Environment errors
    #[error("Package {name} not found in site-packages directories: {searched}")]
    #[diagnostic(
        code(spmsetup::env::package_not_found),
        help("Run 'spmsetup install' first so the toolkit and runtime are present")
    )]
    PackageNotFound { name: String, searched: String },

    #[error("No Conda environment prefix")]
    #[diagnostic(
        code(spmsetup::env::prefix_missing),
        help("Activate the target Conda environment or pass --prefix")
    )]
    CondaPrefixMissing,

    #[error("Failed to write hook script: {path}")]
    #[diagnostic(code(spmsetup::env::hook_write_failed))]
    HookWriteFailed { path: String, reason: String },

    // Configuration errors
    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(spmsetup::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    // Cache errors
    #[error("Cache operation failed: {message}")]
    #[diagnostic(code(spmsetup::cache::operation_failed))]
    CacheOperationFailed { message: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(spmsetup::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for SetupError {
    fn from(err: std::io::Error) -> Self {
        SetupError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for SetupError {
    fn from(err: serde_yaml::Error) -> Self {
        SetupError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for SetupError {
    fn from(err: inquire::InquireError) -> Self {
        SetupError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<zip::result::ZipError> for SetupError {
    fn from(err: zip::result::ZipError) -> Self {
        SetupError::ExtractionFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SetupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SetupError::UnsupportedPlatform {
            os: "freebsd".to_string(),
        };
        assert_eq!(err.to_string(), "Unsupported operating system: freebsd");
    }

    #[test]
    fn test_error_code() {
        let err = SetupError::UnsupportedPlatform {
            os: "freebsd".to_string(),
        };
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("spmsetup::platform::unsupported".to_string())
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let setup_err: SetupError = io_err.into();
        assert!(matches!(setup_err, SetupError::IoError { .. }));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_str = "invalid: yaml: content: [unclosed";
        let parse_result: std::result::Result<serde_yaml::Value, _> =
            serde_yaml::from_str(yaml_str);
        let yaml_err = parse_result.unwrap_err();
        let setup_err: SetupError = yaml_err.into();
        assert!(matches!(setup_err, SetupError::ConfigParseFailed { .. }));
    }

    #[test]
    fn test_command_failed_error() {
        let err = SetupError::CommandFailed {
            program: "curl".to_string(),
            status: "exit status: 6".to_string(),
            stderr: "could not resolve host".to_string(),
        };
        assert!(err.to_string().contains("curl"));
        assert!(err.to_string().contains("exit status: 6"));
    }

    #[test]
    fn test_install_script_missing_error() {
        let err = SetupError::InstallScriptMissing {
            path: "/tmp/matlab_runtime".to_string(),
        };
        assert!(
            err.to_string()
                .contains("The install script was not found in /tmp/matlab_runtime")
        );
    }

    #[test]
    fn test_package_not_found_error() {
        let err = SetupError::PackageNotFound {
            name: "spm_standalone".to_string(),
            searched: "/opt/conda/lib/python3.10/site-packages".to_string(),
        };
        assert!(err.to_string().contains("spm_standalone"));
        assert!(err.to_string().contains("site-packages"));
    }

    #[test]
    fn test_conda_prefix_missing_error() {
        let err = SetupError::CondaPrefixMissing;
        assert!(err.to_string().contains("No Conda environment prefix"));
    }
}
