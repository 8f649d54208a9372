//! Host platform detection and MATLAB Runtime release selection
//!
//! The install mechanism differs entirely between the two supported
//! systems: Linux runs the archive's `install` script directly, macOS
//! mounts a disk image and drives the bundled installer app. Everything
//! else is a fatal error.

use std::fmt;
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{Result, SetupError};

/// Default MATLAB release the standalone toolkit was compiled against
pub const DEFAULT_RELEASE: &str = "R2019a";

/// Default update level within the release
pub const DEFAULT_UPDATE: u32 = 9;

/// Default versioned directory name inside the installed runtime
pub const DEFAULT_VERSION_DIR: &str = "v96";

/// Default MathWorks download endpoint for deployment installers
pub const DEFAULT_BASE_URL: &str = "https://ssd.mathworks.com/supportfiles/downloads";

/// Default install destination on macOS (fixed by the vendor installer)
pub const DEFAULT_MACOS_DESTINATION: &str = "/Applications/MATLAB/MATLAB_Runtime";

/// Supported host operating systems
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOs {
    Linux,
    MacOs,
}

impl HostOs {
    /// Detect the operating system this process is running on
    pub fn detect() -> Result<Self> {
        Self::from_name(std::env::consts::OS)
    }

    /// Map an OS name (as reported by `std::env::consts::OS`) to a supported host
    pub fn from_name(os: &str) -> Result<Self> {
        match os {
            "linux" => Ok(HostOs::Linux),
            "macos" => Ok(HostOs::MacOs),
            other => Err(SetupError::UnsupportedPlatform {
                os: other.to_string(),
            }),
        }
    }

    /// Vendor architecture tag used in archive names and library paths
    pub fn arch_tag(self) -> &'static str {
        match self {
            HostOs::Linux => "glnxa64",
            HostOs::MacOs => "maci64",
        }
    }
}

impl fmt::Display for HostOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostOs::Linux => write!(f, "Linux"),
            HostOs::MacOs => write!(f, "macOS"),
        }
    }
}

/// Identifies one MATLAB Runtime release and where to fetch and install it
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RuntimeSpec {
    /// Release name, e.g. "R2019a"
    pub release: String,
    /// Update level within the release
    pub update: u32,
    /// Versioned directory inside the installed runtime, e.g. "v96"
    pub version_dir: String,
    /// Download endpoint base URL
    pub base_url: String,
    /// Install destination on macOS
    pub macos_destination: PathBuf,
}

impl Default for RuntimeSpec {
    fn default() -> Self {
        Self {
            release: DEFAULT_RELEASE.to_string(),
            update: DEFAULT_UPDATE,
            version_dir: DEFAULT_VERSION_DIR.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            macos_destination: PathBuf::from(DEFAULT_MACOS_DESTINATION),
        }
    }
}

impl RuntimeSpec {
    /// Archive file name for the given host.
    ///
    /// The macOS archive is a zipped disk image, so it carries a double
    /// extension.
    pub fn archive_name(&self, os: HostOs) -> String {
        let suffix = match os {
            HostOs::Linux => "zip",
            HostOs::MacOs => "dmg.zip",
        };
        format!(
            "MATLAB_Runtime_{}_Update_{}_{}.{}",
            self.release,
            self.update,
            os.arch_tag(),
            suffix
        )
    }

    /// Full download URL for the given host
    pub fn download_url(&self, os: HostOs) -> String {
        format!(
            "{}/{}/Release/{}/deployment_files/installer/complete/{}/{}",
            self.base_url,
            self.release,
            self.update,
            os.arch_tag(),
            self.archive_name(os)
        )
    }

    /// Disk image file name inside the macOS archive
    pub fn dmg_name(&self) -> String {
        format!(
            "MATLAB_Runtime_{}_Update_{}_maci64.dmg",
            self.release, self.update
        )
    }

    /// Versioned macOS destination, e.g. `/Applications/MATLAB/MATLAB_Runtime/v96`
    pub fn macos_versioned_destination(&self) -> PathBuf {
        self.macos_destination.join(&self.version_dir)
    }
}
